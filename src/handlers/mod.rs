//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.
//! Each domain builds its own router and layers `auth_middleware` (and
//! `require_admin` where needed) onto the routes that need a session.

pub mod admin;
pub mod auth;
pub mod blogs;
pub mod categories;
pub mod extract;
pub mod health;
pub mod profile;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes(state.clone()))
        .nest("/profile", profile::routes(state.clone()))
        .nest("/blogs", blogs::routes(state.clone()))
        .nest("/user", users::routes())
        .nest("/categories", categories::routes(state.clone()))
        .nest("/admin", admin::routes(state))
}
