//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{BlogRepository, ProfileChanges, UserRepository},
    error::{AppError, AppResult},
    models::{BlogDetails, User, UserEngagement},
    services::AuthService,
    utils::validate_password,
};

/// Profile fields editable from `PATCH /profile`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileUpdate<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub username: Option<&'a str>,
    pub email: Option<&'a str>,
}

/// Account fields editable from `PATCH /auth/updateProfile/{id}`
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountUpdate<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub username: Option<&'a str>,
    pub current_password: Option<&'a str>,
    pub new_password: Option<&'a str>,
}

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))
    }

    /// Update the caller's own profile
    pub async fn update_profile(
        pool: &PgPool,
        user_id: &Uuid,
        update: ProfileUpdate<'_>,
    ) -> AppResult<User> {
        Self::ensure_identity_free(pool, user_id, update.username, update.email).await?;

        UserRepository::update_profile(
            pool,
            user_id,
            ProfileChanges {
                first_name: update.first_name,
                last_name: update.last_name,
                username: update.username,
                email: update.email,
                password_hash: None,
            },
        )
        .await?
        .ok_or_else(|| AppError::not_found("User"))
    }

    /// Update names, username and optionally password of `target_id`.
    ///
    /// Only the account owner may do this; a new password needs the current one.
    pub async fn update_account(
        pool: &PgPool,
        requester_id: &Uuid,
        target_id: &Uuid,
        update: AccountUpdate<'_>,
    ) -> AppResult<User> {
        if requester_id != target_id {
            return Err(AppError::Forbidden(
                "You can only update your own profile".to_string(),
            ));
        }

        let user = Self::get_user_by_id(pool, target_id).await?;

        let password_hash = match update.new_password {
            Some(new_password) => {
                let current = update.current_password.ok_or_else(|| {
                    AppError::Validation(
                        "Current password is required to set a new password".to_string(),
                    )
                })?;
                if !AuthService::verify_password(current, &user.password_hash)? {
                    return Err(AppError::Validation(
                        "Current password is incorrect".to_string(),
                    ));
                }
                validate_password(new_password)
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                Some(AuthService::hash_password(new_password)?)
            }
            None => None,
        };

        Self::ensure_identity_free(pool, target_id, update.username, None).await?;

        UserRepository::update_profile(
            pool,
            target_id,
            ProfileChanges {
                first_name: update.first_name,
                last_name: update.last_name,
                username: update.username,
                email: None,
                password_hash: password_hash.as_deref(),
            },
        )
        .await?
        .ok_or_else(|| AppError::not_found("User"))
    }

    /// The caller's posts that are not in trash
    pub async fn own_blogs(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<BlogDetails>> {
        BlogRepository::list_by_owner(pool, user_id, false).await
    }

    /// The caller's trashed posts
    pub async fn trashed_blogs(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<BlogDetails>> {
        BlogRepository::list_by_owner(pool, user_id, true).await
    }

    /// Likes, views and post count across a user's posts
    pub async fn engagement(pool: &PgPool, user_id: &Uuid) -> AppResult<UserEngagement> {
        Self::get_user_by_id(pool, user_id).await?;
        BlogRepository::engagement_for_user(pool, user_id).await
    }

    /// Reject a username/email that belongs to another account
    async fn ensure_identity_free(
        pool: &PgPool,
        user_id: &Uuid,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<()> {
        if let Some(username) = username {
            if let Some(existing) = UserRepository::find_by_username(pool, username).await? {
                if existing.id != *user_id {
                    return Err(AppError::AlreadyExists("Username already taken".to_string()));
                }
            }
        }

        if let Some(email) = email {
            if let Some(existing) = UserRepository::find_by_email(pool, email).await? {
                if existing.id != *user_id {
                    return Err(AppError::AlreadyExists(
                        "Email already registered".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}
