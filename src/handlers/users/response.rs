//! User response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::UserEngagement;

/// Engagement totals across a user's posts
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsResponse {
    pub success: bool,
    pub user_id: Uuid,
    pub total_likes: i64,
    pub total_views: i64,
    pub post_count: i64,
}

impl UserStatsResponse {
    pub fn new(user_id: Uuid, stats: UserEngagement) -> Self {
        Self {
            success: true,
            user_id,
            total_likes: stats.total_likes,
            total_views: stats.total_views,
            post_count: stats.post_count,
        }
    }
}
