//! Category handler implementations

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::handlers::extract::{AppJson, AppPath};
use crate::{
    error::AppResult,
    handlers::auth::MessageResponse,
    services::CategoryService,
    state::AppState,
};

use super::{
    request::CategoryRequest,
    response::{CategoryListResponse, CategoryMessageResponse, CategoryResponse},
};

/// List all categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<CategoryListResponse>> {
    let categories: Vec<CategoryResponse> = CategoryService::list(state.db())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(CategoryListResponse {
        success: true,
        message: "Categories fetched successfully".to_string(),
        count: categories.len(),
        categories,
    }))
}

/// Create a category (admin only)
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryMessageResponse>)> {
    payload.validate()?;

    let category = CategoryService::create(state.db(), payload.name.trim()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CategoryMessageResponse::new(
            "Category created successfully",
            category,
        )),
    ))
}

/// Rename a category (admin only)
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<CategoryRequest>,
) -> AppResult<Json<CategoryMessageResponse>> {
    payload.validate()?;

    let category = CategoryService::rename(state.db(), &id, payload.name.trim()).await?;

    Ok(Json(CategoryMessageResponse::new(
        "Category updated successfully",
        category,
    )))
}

/// Delete an unused category (admin only)
pub async fn delete_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    CategoryService::delete(state.db(), &id).await?;

    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
