//! Input validation utilities
//!
//! The `validator` derives on request types cover lengths and email syntax.
//! The rules here are the ones a derive attribute can't express; they are
//! used through `#[validate(custom(function = ...))]` and directly by services.

use std::borrow::Cow;

use validator::ValidationError;

use crate::constants::{
    MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    let len = username.chars().count() as u64;
    if len < MIN_USERNAME_LENGTH {
        return Err("Username must be at least 3 characters");
    }
    if len > MAX_USERNAME_LENGTH {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    if !username.chars().next().is_some_and(|c| c.is_alphabetic()) {
        return Err("Username must start with a letter");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    let len = password.chars().count() as u64;
    if len < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters");
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Reject strings that are empty once trimmed
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Field cannot be blank");
    }
    Ok(())
}

fn to_validation_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// `validator` adapter for [`validate_username`]
pub fn username_rule(username: &str) -> Result<(), ValidationError> {
    validate_username(username).map_err(|m| to_validation_error("username", m))
}

/// `validator` adapter for [`validate_password`]
pub fn password_rule(password: &str) -> Result<(), ValidationError> {
    validate_password(password).map_err(|m| to_validation_error("password", m))
}

/// `validator` adapter for [`validate_required`]
pub fn required_rule(value: &str) -> Result<(), ValidationError> {
    validate_required(value).map_err(|m| to_validation_error("required", m))
}
