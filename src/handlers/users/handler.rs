//! User handler implementations

use axum::{
    extract::State,
    Json,
};
use uuid::Uuid;

use crate::handlers::extract::AppPath;
use crate::{error::AppResult, services::UserService, state::AppState};

use super::response::UserStatsResponse;

/// Get engagement statistics for a user
pub async fn get_user_stats(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<UserStatsResponse>> {
    let stats = UserService::engagement(state.db(), &id).await?;
    Ok(Json(UserStatsResponse::new(id, stats)))
}
