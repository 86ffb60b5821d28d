//! Admin management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{delete, get, patch},
    Router,
};

use crate::{
    middleware::auth::{auth_middleware, require_admin},
    state::AppState,
};

/// Admin routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        // User management
        .route("/users", get(handler::list_all_users))
        .route("/users/{id}/role", patch(handler::update_user_role))
        .route("/users/{id}/status", patch(handler::toggle_user_status))
        // Moderation
        .route("/blogs", get(handler::list_all_blogs))
        .route("/blogs/{id}", delete(handler::delete_blog))
        .route("/blogs/{id}/disable", patch(handler::disable_blog))
        .route("/blogs/{id}/enable", patch(handler::enable_blog))
        // Statistics
        .route("/stats", get(handler::get_system_stats))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
