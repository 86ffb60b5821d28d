//! Authentication handler implementations

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tower_cookies::{
    cookie::{time::Duration, SameSite},
    Cookie, Cookies,
};
use uuid::Uuid;
use validator::Validate;

use crate::handlers::extract::{AppJson, AppPath};
use crate::{
    constants::AUTH_COOKIE_NAME,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{AccountUpdate, AuthService, Registration, UserService},
    state::AppState,
};

use super::{
    request::{ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateAccountRequest},
    response::{AuthResponse, MessageResponse, UserMessageResponse},
};

/// HttpOnly session cookie; `Secure` only in production
fn session_cookie(token: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserMessageResponse>)> {
    payload.validate()?;

    let user = AuthService::register(
        state.db(),
        Registration {
            first_name: payload.first_name.trim(),
            last_name: payload.last_name.trim(),
            username: payload.username.trim(),
            email: payload.email.trim(),
            password: &payload.password,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserMessageResponse::new("User registered successfully", user)),
    ))
}

/// Login with username/email and password
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, issued) = AuthService::login(
        state.db(),
        state.tokens(),
        payload.identifier.trim(),
        &payload.password,
    )
    .await?;

    cookies.add(session_cookie(
        issued.token.clone(),
        issued.expires_in,
        state.config().server.is_production(),
    ));

    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token: issued.token,
        token_type: "Bearer",
        expires_in: issued.expires_in,
        user: user.into(),
    }))
}

/// Clear the session cookie
pub async fn logout(cookies: Cookies) -> Json<MessageResponse> {
    cookies.remove(Cookie::build((AUTH_COOKIE_NAME, "")).path("/").build());

    Json(MessageResponse::new("Logged out successfully"))
}

/// Update the caller's names, username and optionally password
pub async fn update_account(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppPath(user_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateAccountRequest>,
) -> AppResult<Json<UserMessageResponse>> {
    payload.validate()?;

    let user = UserService::update_account(
        state.db(),
        &auth_user.id,
        &user_id,
        AccountUpdate {
            first_name: payload.first_name.as_deref().map(str::trim),
            last_name: payload.last_name.as_deref().map(str::trim),
            username: payload.username.as_deref().map(str::trim),
            current_password: payload.current_password.as_deref(),
            new_password: payload.new_password.as_deref(),
        },
    )
    .await?;

    Ok(Json(UserMessageResponse::new(
        "Profile updated successfully",
        user,
    )))
}

/// Change the caller's password
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppJson(payload): AppJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    payload.validate()?;

    AuthService::change_password(
        state.db(),
        &auth_user.id,
        &payload.previous_password,
        &payload.new_password,
    )
    .await?;

    Ok(Json(MessageResponse::new("Password updated successfully")))
}
