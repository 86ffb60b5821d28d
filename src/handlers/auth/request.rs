//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH};

/// User registration request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(
        length(max = MAX_NAME_LENGTH),
        custom(function = "crate::utils::validation::required_rule", message = "First name is required")
    )]
    pub first_name: String,

    #[validate(
        length(max = MAX_NAME_LENGTH),
        custom(function = "crate::utils::validation::required_rule", message = "Last name is required")
    )]
    pub last_name: String,

    #[validate(custom(function = "crate::utils::validation::username_rule"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "crate::utils::validation::password_rule"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Can be either username or email
    #[validate(length(min = 1, message = "Username or email is required"))]
    pub identifier: String,

    #[validate(length(min = 1, max = MAX_PASSWORD_LENGTH, message = "Password is required"))]
    pub password: String,
}

/// Account update for `PATCH /auth/updateProfile/{id}`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
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

    pub current_password: Option<String>,

    pub new_password: Option<String>,
}

/// Password change request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Previous password is required"))]
    pub previous_password: String,

    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}
