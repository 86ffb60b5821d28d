//! Blog post model and its lifecycle state machine

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle state of a post. Purged posts no longer have a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "blog_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    Active,
    Disabled,
    Trashed,
}

/// Operations that move a post between lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Update,
    Trash,
    Restore,
    Disable,
    Enable,
}

/// Why a lifecycle action was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// The post is already where the action would put it
    #[error("{0}")]
    AlreadyInState(&'static str),

    /// The action is not allowed from the current state
    #[error("{0}")]
    Rejected(&'static str),
}

impl BlogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogStatus::Active => "active",
            BlogStatus::Disabled => "disabled",
            BlogStatus::Trashed => "trashed",
        }
    }

    /// Transition table for post lifecycle actions.
    pub fn apply(self, action: LifecycleAction) -> Result<BlogStatus, TransitionError> {
        use BlogStatus::*;
        use LifecycleAction::*;

        match (self, action) {
            (Active, Update) => Ok(Active),
            (Disabled, Update) => Err(TransitionError::Rejected(
                "Cannot edit a blog that has been disabled by a moderator",
            )),
            (Trashed, Update) => Err(TransitionError::Rejected(
                "Cannot edit a blog that is in trash",
            )),

            (Active | Disabled, Trash) => Ok(Trashed),
            (Trashed, Trash) => Err(TransitionError::AlreadyInState("Blog is already in trash")),

            (Trashed, Restore) => Ok(Active),
            (Active | Disabled, Restore) => Err(TransitionError::AlreadyInState(
                "Blog already restored or not in trash",
            )),

            (Active, Disable) => Ok(Disabled),
            (Disabled, Disable) => Err(TransitionError::AlreadyInState("Blog is already disabled")),
            (Trashed, Disable) => Err(TransitionError::Rejected(
                "Cannot disable a blog that is already in trash",
            )),

            (Disabled, Enable) => Ok(Active),
            (Active, Enable) => Err(TransitionError::AlreadyInState("Blog is not disabled")),
            (Trashed, Enable) => Err(TransitionError::Rejected(
                "Cannot enable a blog that is in trash",
            )),
        }
    }
}

impl fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlogStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(BlogStatus::Active),
            "disabled" => Ok(BlogStatus::Disabled),
            "trashed" => Ok(BlogStatus::Trashed),
            other => Err(format!(
                "Invalid status: {other}. Valid statuses: active, disabled, trashed"
            )),
        }
    }
}

/// Blog database model
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Blog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub synopsis: String,
    pub content: String,
    pub featured_image_url: Option<String>,
    pub status: BlogStatus,
    pub disabled_reason: Option<String>,
    pub disabled_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub likes_count: i64,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Blog joined with its author and category, as served by list/detail endpoints
#[derive(Debug, Clone, FromRow)]
pub struct BlogDetails {
    #[sqlx(flatten)]
    pub blog: Blog,
    pub author_first_name: String,
    pub author_last_name: String,
    pub author_username: String,
    pub author_email: String,
    pub category_name: Option<String>,
}

/// Blog counts per lifecycle state
#[derive(Debug, Clone, Copy, Default, FromRow)]
pub struct BlogCounts {
    pub total: i64,
    pub active: i64,
    pub disabled: i64,
    pub trashed: i64,
}
