//! Profile handler implementations

use axum::{extract::State, Json};
use validator::Validate;

use crate::handlers::extract::AppJson;
use crate::{
    error::AppResult,
    handlers::{auth::UserMessageResponse, blogs::BlogListResponse},
    middleware::auth::AuthenticatedUser,
    services::{ProfileUpdate, UserService},
    state::AppState,
};

use super::request::UpdateProfileRequest;

/// Get the caller's profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<UserMessageResponse>> {
    let user = UserService::get_user_by_id(state.db(), &auth_user.id).await?;

    Ok(Json(UserMessageResponse::new(
        "User fetched successfully",
        user,
    )))
}

/// Update the caller's profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppJson(payload): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<UserMessageResponse>> {
    payload.validate()?;

    let user = UserService::update_profile(
        state.db(),
        &auth_user.id,
        ProfileUpdate {
            first_name: payload.first_name.as_deref().map(str::trim),
            last_name: payload.last_name.as_deref().map(str::trim),
            username: payload.username.as_deref().map(str::trim),
            email: payload.email.as_deref().map(str::trim),
        },
    )
    .await?;

    Ok(Json(UserMessageResponse::new(
        "Profile updated successfully",
        user,
    )))
}

/// List the caller's blogs that are not in trash
pub async fn get_own_blogs(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<BlogListResponse>> {
    let blogs = UserService::own_blogs(state.db(), &auth_user.id).await?;

    Ok(Json(BlogListResponse::new(
        "User blogs retrieved successfully",
        blogs,
    )))
}

/// List the caller's trashed blogs
pub async fn get_trash(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<BlogListResponse>> {
    let blogs = UserService::trashed_blogs(state.db(), &auth_user.id).await?;

    Ok(Json(BlogListResponse::new(
        "Trashed blogs retrieved successfully",
        blogs,
    )))
}
