//! Category response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Category;

/// Category view
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            created_at: category.created_at,
        }
    }
}

/// All categories
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub message: String,
    pub categories: Vec<CategoryResponse>,
    pub count: usize,
}

/// Single category
#[derive(Debug, Serialize)]
pub struct CategoryMessageResponse {
    pub success: bool,
    pub message: String,
    pub category: CategoryResponse,
}

impl CategoryMessageResponse {
    pub fn new(message: impl Into<String>, category: Category) -> Self {
        Self {
            success: true,
            message: message.into(),
            category: category.into(),
        }
    }
}
