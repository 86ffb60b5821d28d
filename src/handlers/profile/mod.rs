//! Profile handlers for the signed-in user

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{middleware, routing::get, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Profile routes; all require a session
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::get_profile).patch(handler::update_profile),
        )
        .route("/blogs", get(handler::get_own_blogs))
        .route("/trash", get(handler::get_trash))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
