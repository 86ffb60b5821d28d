//! Engagement counters
//!
//! Counters are plain columns bumped by single statements. Trashed and
//! missing posts both answer `NotFound`.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::BlogRepository,
    error::{AppError, AppResult},
    utils::validation::validate_required,
};

pub struct EngagementService;

impl EngagementService {
    /// Count a view; returns the new view count
    pub async fn record_view(pool: &PgPool, blog_id: &Uuid) -> AppResult<i64> {
        BlogRepository::increment_views(pool, blog_id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog"))
    }

    /// Add a like; returns the new like count
    pub async fn like(pool: &PgPool, blog_id: &Uuid) -> AppResult<i64> {
        BlogRepository::increment_likes(pool, blog_id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog"))
    }

    /// Remove a like without going below zero; returns the new like count
    pub async fn unlike(pool: &PgPool, blog_id: &Uuid) -> AppResult<i64> {
        BlogRepository::decrement_likes(pool, blog_id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog"))
    }

    /// Accept a comment and bump the comment count. The body is not stored.
    pub async fn comment(pool: &PgPool, blog_id: &Uuid, content: &str) -> AppResult<i64> {
        validate_required(content)
            .map_err(|_| AppError::Validation("Comment cannot be empty".to_string()))?;

        BlogRepository::increment_comments(pool, blog_id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog"))
    }
}
