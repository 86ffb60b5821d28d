//! Category request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_CATEGORY_NAME_LENGTH;

/// Create or rename a category
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(
        length(max = MAX_CATEGORY_NAME_LENGTH),
        custom(function = "crate::utils::validation::required_rule", message = "Category name is required")
    )]
    pub name: String,
}
