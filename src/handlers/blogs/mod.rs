//! Blog handlers

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

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Blog routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/create", post(handler::create_blog))
        .route(
            "/{id}",
            patch(handler::update_blog).delete(handler::delete_blog),
        )
        .route("/trash/{id}", patch(handler::trash_blog))
        .route("/restore/{id}", patch(handler::restore_blog))
        .route("/{id}/like", post(handler::like_blog))
        .route("/{id}/unlike", post(handler::unlike_blog))
        .route("/{id}/comment", post(handler::comment_on_blog))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(handler::list_blogs))
        .route("/{id}", get(handler::get_blog))
        .route("/{id}/view", post(handler::record_view))
        .merge(protected)
}
