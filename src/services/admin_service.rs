//! Admin service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{BlogRepository, CategoryRepository, UserRepository},
    error::{AppError, AppResult},
    models::{BlogCounts, Role, User, UserWithBlogCount},
};

/// Platform-wide totals for the admin dashboard
#[derive(Debug, Clone, Copy)]
pub struct PlatformStats {
    pub total_users: i64,
    pub blogs: BlogCounts,
    pub total_categories: i64,
}

/// Admin service for user management and statistics
pub struct AdminService;

impl AdminService {
    /// List all users with their non-trashed post count
    pub async fn list_users(pool: &PgPool) -> AppResult<Vec<UserWithBlogCount>> {
        UserRepository::list_with_blog_counts(pool).await
    }

    /// Change another user's role
    pub async fn update_user_role(
        pool: &PgPool,
        admin_id: &Uuid,
        user_id: &Uuid,
        role: Role,
    ) -> AppResult<User> {
        if admin_id == user_id {
            return Err(AppError::Forbidden(
                "You cannot change your own role".to_string(),
            ));
        }

        let user = UserRepository::update_role(pool, user_id, role)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        tracing::info!(admin_id = %admin_id, user_id = %user_id, role = %role, "User role updated");

        Ok(user)
    }

    /// Suspend or reinstate another user
    pub async fn toggle_user_suspension(
        pool: &PgPool,
        admin_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<User> {
        if admin_id == user_id {
            return Err(AppError::Forbidden(
                "You cannot suspend your own account".to_string(),
            ));
        }

        let user = UserRepository::toggle_suspension(pool, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        tracing::info!(
            admin_id = %admin_id,
            user_id = %user_id,
            suspended = user.is_suspended,
            "User suspension toggled"
        );

        Ok(user)
    }

    /// Get platform statistics
    pub async fn get_platform_stats(pool: &PgPool) -> AppResult<PlatformStats> {
        let total_users = UserRepository::count(pool).await?;
        let blogs = BlogRepository::count_by_status(pool).await?;
        let total_categories = CategoryRepository::count(pool).await?;

        Ok(PlatformStats {
            total_users,
            blogs,
            total_categories,
        })
    }
}
