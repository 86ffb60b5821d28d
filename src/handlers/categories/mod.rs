//! Category handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::{
    middleware::auth::{auth_middleware, require_admin},
    state::AppState,
};

/// Category routes; writes are admin-only
pub fn routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/create", post(handler::create_category))
        .route(
            "/{id}",
            patch(handler::update_category).delete(handler::delete_category),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(handler::list_categories))
        .merge(admin)
}
