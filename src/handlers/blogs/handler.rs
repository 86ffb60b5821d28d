//! Blog handler implementations

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::handlers::extract::{AppJson, AppPath};
use crate::{
    db::repositories::{BlogChanges, NewBlog},
    error::AppResult,
    handlers::auth::MessageResponse,
    middleware::auth::AuthenticatedUser,
    services::{Actor, BlogService, EngagementService},
    state::AppState,
};

use super::{
    request::{CommentRequest, CreateBlogRequest, UpdateBlogRequest},
    response::{
        BlogDetailsEnvelope, BlogListResponse, BlogMessageResponse, EngagementResponse,
    },
};

/// List public blogs
pub async fn list_blogs(State(state): State<AppState>) -> AppResult<Json<BlogListResponse>> {
    let hide_disabled = state.config().moderation.hide_disabled_from_public;
    let blogs = BlogService::list_public(state.db(), hide_disabled).await?;

    let message = if blogs.is_empty() {
        "No blogs found"
    } else {
        "Blogs fetched successfully"
    };

    Ok(Json(BlogListResponse::new(message, blogs)))
}

/// Get a public blog by ID
pub async fn get_blog(
    State(state): State<AppState>,
    AppPath(blog_id): AppPath<Uuid>,
) -> AppResult<Json<BlogDetailsEnvelope>> {
    let hide_disabled = state.config().moderation.hide_disabled_from_public;
    let blog = BlogService::get_public(state.db(), &blog_id, hide_disabled).await?;

    Ok(Json(BlogDetailsEnvelope {
        success: true,
        message: "Blog fetched successfully".to_string(),
        blog: blog.into(),
    }))
}

/// Create a new blog
pub async fn create_blog(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppJson(payload): AppJson<CreateBlogRequest>,
) -> AppResult<(StatusCode, Json<BlogMessageResponse>)> {
    payload.validate()?;

    let blog = BlogService::create(
        state.db(),
        &auth_user.id,
        NewBlog {
            title: payload.title.trim(),
            synopsis: payload.synopsis.trim(),
            content: &payload.content,
            featured_image_url: payload.featured_image_url.as_deref(),
            category_id: payload.category_id,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(BlogMessageResponse::new("Blog created successfully", blog)),
    ))
}

/// Edit one of the caller's active blogs
pub async fn update_blog(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppPath(blog_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateBlogRequest>,
) -> AppResult<Json<BlogMessageResponse>> {
    payload.validate()?;

    let blog = BlogService::update(
        state.db(),
        &blog_id,
        &auth_user.id,
        BlogChanges {
            title: payload.title.as_deref().map(str::trim),
            synopsis: payload.synopsis.as_deref().map(str::trim),
            content: payload.content.as_deref(),
            featured_image_url: payload.featured_image_url.as_deref(),
            category_id: payload.category_id,
        },
    )
    .await?;

    Ok(Json(BlogMessageResponse::new("Blog updated successfully", blog)))
}

/// Move one of the caller's blogs to trash
pub async fn trash_blog(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppPath(blog_id): AppPath<Uuid>,
) -> AppResult<Json<BlogMessageResponse>> {
    let blog = BlogService::trash(state.db(), &blog_id, &auth_user.id).await?;

    Ok(Json(BlogMessageResponse::new("Blog moved to trash", blog)))
}

/// Restore one of the caller's blogs from trash
pub async fn restore_blog(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppPath(blog_id): AppPath<Uuid>,
) -> AppResult<Json<BlogMessageResponse>> {
    let blog = BlogService::restore(state.db(), &blog_id, &auth_user.id).await?;

    Ok(Json(BlogMessageResponse::new("Blog restored successfully", blog)))
}

/// Permanently delete one of the caller's blogs
pub async fn delete_blog(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppPath(blog_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    BlogService::delete(state.db(), &blog_id, Actor::Owner(&auth_user.id)).await?;

    Ok(Json(MessageResponse::new("Blog deleted permanently")))
}

/// Count a view (no session required)
pub async fn record_view(
    State(state): State<AppState>,
    AppPath(blog_id): AppPath<Uuid>,
) -> AppResult<Json<EngagementResponse>> {
    let view_count = EngagementService::record_view(state.db(), &blog_id).await?;

    Ok(Json(EngagementResponse::views(view_count)))
}

/// Like a blog
pub async fn like_blog(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    AppPath(blog_id): AppPath<Uuid>,
) -> AppResult<Json<EngagementResponse>> {
    let likes = EngagementService::like(state.db(), &blog_id).await?;

    Ok(Json(EngagementResponse::likes("Blog liked", likes)))
}

/// Remove a like
pub async fn unlike_blog(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    AppPath(blog_id): AppPath<Uuid>,
) -> AppResult<Json<EngagementResponse>> {
    let likes = EngagementService::unlike(state.db(), &blog_id).await?;

    Ok(Json(EngagementResponse::likes("Blog unliked", likes)))
}

/// Comment on a blog
pub async fn comment_on_blog(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    AppPath(blog_id): AppPath<Uuid>,
    AppJson(payload): AppJson<CommentRequest>,
) -> AppResult<(StatusCode, Json<EngagementResponse>)> {
    payload.validate()?;

    let comments = EngagementService::comment(state.db(), &blog_id, &payload.content).await?;

    Ok((StatusCode::CREATED, Json(EngagementResponse::comments(comments))))
}
