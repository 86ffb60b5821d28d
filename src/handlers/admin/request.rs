//! Admin request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_DISABLE_REASON_LENGTH;

/// Update user role request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRoleRequest {
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Disable blog request; the whole body may be omitted
#[derive(Debug, Default, Deserialize, Validate)]
pub struct DisableBlogRequest {
    #[serde(default)]
    #[validate(length(max = MAX_DISABLE_REASON_LENGTH))]
    pub reason: Option<String>,
}

impl DisableBlogRequest {
    /// Trimmed reason, `None` when absent or blank
    pub fn reason(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
    }
}

/// Query parameters for the moderation listing
#[derive(Debug, Default, Deserialize)]
pub struct AdminBlogsQuery {
    /// `active`, `disabled` or `trashed`; all posts when absent
    pub status: Option<String>,
}
