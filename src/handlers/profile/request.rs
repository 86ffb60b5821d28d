//! Profile request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_NAME_LENGTH;

/// Update own profile request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(
        length(max = MAX_NAME_LENGTH),
        custom(function = "crate::utils::validation::required_rule", message = "First name cannot be blank")
    )]
    pub first_name: Option<String>,

    #[validate(
        length(max = MAX_NAME_LENGTH),
        custom(function = "crate::utils::validation::required_rule", message = "Last name cannot be blank")
    )]
    pub last_name: Option<String>,

    #[validate(custom(function = "crate::utils::validation::username_rule"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}
