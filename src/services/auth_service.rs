//! Authentication service

use std::sync::LazyLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{NewUser, ProfileChanges, UserRepository},
    error::{AppError, AppResult},
    models::User,
    services::token_service::{IssuedToken, TokenService},
    utils::validate_password,
};

/// Hash verified against when the login identifier matches no account, so
/// unknown users and wrong passwords take the same time to reject.
static DUMMY_PASSWORD_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| AuthService::hash_password("dummy-password-Never-used-1").ok());

/// Account creation input, already validated for shape
#[derive(Debug, Clone, Copy)]
pub struct Registration<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn register(pool: &PgPool, registration: Registration<'_>) -> AppResult<User> {
        // Check if username exists
        if UserRepository::find_by_username(pool, registration.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists("Username already taken".to_string()));
        }

        // Check if email exists
        if UserRepository::find_by_email(pool, registration.email)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists("Email already registered".to_string()));
        }

        let password_hash = Self::hash_password(registration.password)?;

        let user = UserRepository::create(
            pool,
            NewUser {
                first_name: registration.first_name,
                last_name: registration.last_name,
                username: registration.username,
                email: registration.email,
                password_hash: &password_hash,
            },
        )
        .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Login with username/email and password
    pub async fn login(
        pool: &PgPool,
        tokens: &TokenService,
        identifier: &str,
        password: &str,
    ) -> AppResult<(User, IssuedToken)> {
        let Some(user) = UserRepository::find_by_identifier(pool, identifier).await? else {
            if let Some(hash) = DUMMY_PASSWORD_HASH.as_deref() {
                let _ = Self::verify_password(password, hash);
            }
            tracing::debug!("Login rejected: unknown identifier");
            return Err(AppError::InvalidCredentials);
        };

        if !Self::verify_password(password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        if user.is_suspended {
            tracing::info!(user_id = %user.id, "Login rejected: account suspended");
            return Err(AppError::Forbidden("Account suspended".to_string()));
        }

        let issued = tokens.issue(&user)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok((user, issued))
    }

    /// Replace the caller's password after checking the previous one
    pub async fn change_password(
        pool: &PgPool,
        user_id: &Uuid,
        previous_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        if previous_password == new_password {
            return Err(AppError::Validation(
                "New password must be different from the previous password".to_string(),
            ));
        }
        validate_password(new_password).map_err(|e| AppError::Validation(e.to_string()))?;

        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        if !Self::verify_password(previous_password, &user.password_hash)? {
            return Err(AppError::Validation("Previous password is incorrect".to_string()));
        }

        let password_hash = Self::hash_password(new_password)?;
        UserRepository::update_profile(
            pool,
            user_id,
            ProfileChanges {
                password_hash: Some(&password_hash),
                ..Default::default()
            },
        )
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;

        tracing::info!(user_id = %user_id, "Password changed");

        Ok(())
    }

    /// Hash password using Argon2
    pub(crate) fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub(crate) fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = AuthService::hash_password("Password123").unwrap();
        assert_ne!(hash, "Password123");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_hash_is_salted() {
        let a = AuthService::hash_password("Password123").unwrap();
        let b = AuthService::hash_password("Password123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_password() {
        let hash = AuthService::hash_password("Password123").unwrap();
        assert!(AuthService::verify_password("Password123", &hash).unwrap());
        assert!(!AuthService::verify_password("password123", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_internal_error() {
        assert!(matches!(
            AuthService::verify_password("Password123", "not-a-phc-string"),
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn test_dummy_hash_available() {
        let hash = DUMMY_PASSWORD_HASH.as_deref().unwrap();
        assert!(!AuthService::verify_password("Password123", hash).unwrap());
    }
}
