//! Admin handler implementations
//!
//! Every route here sits behind `require_admin`, so handlers only need the
//! caller's identity for self-targeting checks.

use axum::{
    extract::{Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::handlers::extract::{AppJson, AppPath};
use crate::{
    error::{AppError, AppResult},
    handlers::{
        auth::{MessageResponse, UserMessageResponse},
        blogs::{BlogListResponse, BlogMessageResponse},
    },
    middleware::auth::AuthenticatedUser,
    models::{BlogStatus, Role},
    services::{Actor, AdminService, BlogService},
    state::AppState,
};

use super::{
    request::{AdminBlogsQuery, DisableBlogRequest, UpdateUserRoleRequest},
    response::{AdminUsersListResponse, SystemStatsResponse},
};

/// List all users with their post counts
pub async fn list_all_users(
    State(state): State<AppState>,
) -> AppResult<Json<AdminUsersListResponse>> {
    let users: Vec<_> = AdminService::list_users(state.db())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(AdminUsersListResponse {
        success: true,
        message: "Users fetched successfully".to_string(),
        count: users.len(),
        users,
    }))
}

/// Change a user's role
pub async fn update_user_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppPath(user_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateUserRoleRequest>,
) -> AppResult<Json<UserMessageResponse>> {
    payload.validate()?;

    let role: Role = payload.role.trim().parse().map_err(AppError::Validation)?;

    let user = AdminService::update_user_role(state.db(), &auth_user.id, &user_id, role).await?;

    Ok(Json(UserMessageResponse::new(
        "User role updated successfully",
        user,
    )))
}

/// Suspend or reinstate a user
pub async fn toggle_user_status(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppPath(user_id): AppPath<Uuid>,
) -> AppResult<Json<UserMessageResponse>> {
    let user = AdminService::toggle_user_suspension(state.db(), &auth_user.id, &user_id).await?;

    let message = if user.is_suspended {
        "User suspended successfully"
    } else {
        "User reinstated successfully"
    };

    Ok(Json(UserMessageResponse::new(message, user)))
}

/// List blogs in any state, optionally filtered by status
pub async fn list_all_blogs(
    State(state): State<AppState>,
    Query(query): Query<AdminBlogsQuery>,
) -> AppResult<Json<BlogListResponse>> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<BlogStatus>)
        .transpose()
        .map_err(AppError::Validation)?;

    let blogs = BlogService::list_for_moderation(state.db(), status).await?;

    Ok(Json(BlogListResponse::new("Blogs fetched successfully", blogs)))
}

/// Disable a blog, optionally recording a reason
pub async fn disable_blog(
    State(state): State<AppState>,
    AppPath(blog_id): AppPath<Uuid>,
    payload: Option<AppJson<DisableBlogRequest>>,
) -> AppResult<Json<BlogMessageResponse>> {
    let payload = payload.map(|AppJson(payload)| payload).unwrap_or_default();
    payload.validate()?;

    let blog = BlogService::disable(state.db(), &blog_id, payload.reason()).await?;

    Ok(Json(BlogMessageResponse::new("Blog disabled successfully", blog)))
}

/// Re-enable a disabled blog
pub async fn enable_blog(
    State(state): State<AppState>,
    AppPath(blog_id): AppPath<Uuid>,
) -> AppResult<Json<BlogMessageResponse>> {
    let blog = BlogService::enable(state.db(), &blog_id).await?;

    Ok(Json(BlogMessageResponse::new("Blog enabled successfully", blog)))
}

/// Permanently delete any blog
pub async fn delete_blog(
    State(state): State<AppState>,
    AppPath(blog_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    BlogService::delete(state.db(), &blog_id, Actor::Moderator).await?;

    Ok(Json(MessageResponse::new("Blog deleted permanently")))
}

/// Platform statistics
pub async fn get_system_stats(
    State(state): State<AppState>,
) -> AppResult<Json<SystemStatsResponse>> {
    let stats = AdminService::get_platform_stats(state.db()).await?;
    Ok(Json(stats.into()))
}
