//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::{Role, UserWithBlogCount},
    services::PlatformStats,
};

/// Admin view of a user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub is_suspended: bool,
    pub blog_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserWithBlogCount> for AdminUserResponse {
    fn from(user: UserWithBlogCount) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            email: user.email,
            role: user.role,
            is_suspended: user.is_suspended,
            blog_count: user.blog_count,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Admin users list response
#[derive(Debug, Serialize)]
pub struct AdminUsersListResponse {
    pub success: bool,
    pub message: String,
    pub users: Vec<AdminUserResponse>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct UserTotals {
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct BlogTotals {
    pub total: i64,
    pub active: i64,
    pub disabled: i64,
    pub trashed: i64,
}

#[derive(Debug, Serialize)]
pub struct ContentTotals {
    pub categories: i64,
}

#[derive(Debug, Serialize)]
pub struct SystemStats {
    pub users: UserTotals,
    pub blogs: BlogTotals,
    pub content: ContentTotals,
}

/// System statistics response
#[derive(Debug, Serialize)]
pub struct SystemStatsResponse {
    pub success: bool,
    pub message: String,
    pub stats: SystemStats,
}

impl From<PlatformStats> for SystemStatsResponse {
    fn from(stats: PlatformStats) -> Self {
        Self {
            success: true,
            message: "System stats fetched successfully".to_string(),
            stats: SystemStats {
                users: UserTotals {
                    total: stats.total_users,
                },
                blogs: BlogTotals {
                    total: stats.blogs.total,
                    active: stats.blogs.active,
                    disabled: stats.blogs.disabled,
                    trashed: stats.blogs.trashed,
                },
                content: ContentTotals {
                    categories: stats.total_categories,
                },
            },
        }
    }
}
