//! Authentication middleware
//!
//! `auth_middleware` validates the session token once per request and stores
//! the resulting [`AuthenticatedUser`] in the request extensions. Everything
//! downstream, including `require_admin`, reads that value instead of the token.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookies;
use tracing::debug;
use uuid::Uuid;

use crate::{
    constants::AUTH_COOKIE_NAME,
    error::AppError,
    models::Role,
    services::Claims,
    state::AppState,
};

/// Authenticated user extracted from the session token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            email: claims.email,
            first_name: claims.first_name,
            last_name: claims.last_name,
            role: claims.role,
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Bearer header first, then the session cookie
fn extract_token(request: &Request<Body>) -> Option<String> {
    let bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    request
        .extensions()
        .get::<Cookies>()
        .and_then(|cookies| cookies.get(AUTH_COOKIE_NAME))
        .map(|cookie| cookie.value().to_string())
        .filter(|t| !t.is_empty())
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(token) = extract_token(&request) else {
        debug!(path = %path, "Auth failed: no session token");
        return Err(AppError::Unauthorized);
    };

    let claims = state.tokens().verify(&token).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: token verification failed");
        e
    })?;

    let user = AuthenticatedUser::from(claims);
    debug!(path = %path, user_id = %user.id, role = %user.role, "User authenticated");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Admin-only gate. Must be layered inside `auth_middleware`.
pub async fn require_admin(request: Request<Body>, next: Next) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or(AppError::Unauthorized)?;

    if !user.is_admin() {
        debug!(user_id = %user.id, path = %request.uri().path(), "Admin access denied");
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    Ok(next.run(request).await)
}
