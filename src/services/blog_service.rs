//! Blog service
//!
//! Lifecycle transitions read the current row, check the action against
//! [`BlogStatus::apply`], then write with a statement conditioned on the
//! status that was read. A write that matches no row means the post changed
//! in between, which is reported instead of silently retried.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{BlogChanges, BlogRepository, CategoryRepository, NewBlog},
    error::{AppError, AppResult},
    models::{Blog, BlogDetails, BlogStatus, LifecycleAction},
};

/// Who is performing a lifecycle action
#[derive(Debug, Clone, Copy)]
pub enum Actor<'a> {
    /// Owner routes only ever see the caller's own posts
    Owner(&'a Uuid),
    /// Admin routes see every post
    Moderator,
}

impl<'a> Actor<'a> {
    fn owner_id(self) -> Option<&'a Uuid> {
        match self {
            Actor::Owner(id) => Some(id),
            Actor::Moderator => None,
        }
    }
}

/// Blog service for business logic
pub struct BlogService;

impl BlogService {
    /// Create a new active post owned by `owner_id`
    pub async fn create(pool: &PgPool, owner_id: &Uuid, blog: NewBlog<'_>) -> AppResult<Blog> {
        if let Some(category_id) = blog.category_id {
            Self::ensure_category_exists(pool, &category_id).await?;
        }

        let blog = BlogRepository::create(pool, owner_id, blog).await?;

        tracing::info!(blog_id = %blog.id, owner_id = %owner_id, "Blog created");

        Ok(blog)
    }

    /// Public listing
    pub async fn list_public(pool: &PgPool, hide_disabled: bool) -> AppResult<Vec<BlogDetails>> {
        BlogRepository::list_public(pool, hide_disabled).await
    }

    /// Public detail read
    pub async fn get_public(
        pool: &PgPool,
        id: &Uuid,
        hide_disabled: bool,
    ) -> AppResult<BlogDetails> {
        BlogRepository::find_public(pool, id, hide_disabled)
            .await?
            .ok_or_else(|| AppError::not_found("Blog"))
    }

    /// Edit an active post owned by `owner_id`
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        owner_id: &Uuid,
        changes: BlogChanges<'_>,
    ) -> AppResult<Blog> {
        if let Some(category_id) = changes.category_id {
            Self::ensure_category_exists(pool, &category_id).await?;
        }

        if let Some(blog) = BlogRepository::update_content(pool, id, owner_id, changes).await? {
            tracing::debug!(blog_id = %id, "Blog updated");
            return Ok(blog);
        }

        let current = BlogRepository::find_scoped(pool, id, Some(owner_id))
            .await?
            .ok_or_else(|| AppError::not_found("Blog"))?;
        current.status.apply(LifecycleAction::Update)?;

        Err(AppError::Conflict(
            "Blog was modified concurrently, please retry".to_string(),
        ))
    }

    /// Owner moves a post to trash
    pub async fn trash(pool: &PgPool, id: &Uuid, owner_id: &Uuid) -> AppResult<Blog> {
        Self::transition(pool, id, Actor::Owner(owner_id), LifecycleAction::Trash, None).await
    }

    /// Owner restores a post from trash
    pub async fn restore(pool: &PgPool, id: &Uuid, owner_id: &Uuid) -> AppResult<Blog> {
        Self::transition(pool, id, Actor::Owner(owner_id), LifecycleAction::Restore, None).await
    }

    /// Moderator hides a post, optionally saying why
    pub async fn disable(pool: &PgPool, id: &Uuid, reason: Option<&str>) -> AppResult<Blog> {
        let blog =
            Self::transition(pool, id, Actor::Moderator, LifecycleAction::Disable, reason).await?;

        tracing::info!(blog_id = %id, reason = ?reason, "Blog disabled by moderator");

        Ok(blog)
    }

    /// Moderator lifts a disable
    pub async fn enable(pool: &PgPool, id: &Uuid) -> AppResult<Blog> {
        let blog =
            Self::transition(pool, id, Actor::Moderator, LifecycleAction::Enable, None).await?;

        tracing::info!(blog_id = %id, "Blog enabled by moderator");

        Ok(blog)
    }

    /// Permanently remove a post from any state
    pub async fn delete(pool: &PgPool, id: &Uuid, actor: Actor<'_>) -> AppResult<()> {
        if !BlogRepository::delete(pool, id, actor.owner_id()).await? {
            return Err(AppError::not_found("Blog"));
        }

        match actor {
            Actor::Owner(owner_id) => {
                tracing::info!(blog_id = %id, owner_id = %owner_id, "Blog deleted by owner")
            }
            Actor::Moderator => tracing::info!(blog_id = %id, "Blog deleted by moderator"),
        }

        Ok(())
    }

    /// Moderation listing, optionally filtered by status
    pub async fn list_for_moderation(
        pool: &PgPool,
        status: Option<BlogStatus>,
    ) -> AppResult<Vec<BlogDetails>> {
        BlogRepository::list_by_status(pool, status).await
    }

    /// Apply `action` to a post on behalf of `actor`
    async fn transition(
        pool: &PgPool,
        id: &Uuid,
        actor: Actor<'_>,
        action: LifecycleAction,
        reason: Option<&str>,
    ) -> AppResult<Blog> {
        let owner_id = actor.owner_id();

        let current = BlogRepository::find_scoped(pool, id, owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog"))?;
        let target = current.status.apply(action)?;

        if let Some(blog) =
            BlogRepository::transition(pool, id, owner_id, current.status, target, reason).await?
        {
            return Ok(blog);
        }

        // Zero rows: the post was removed or moved since it was read
        let latest = BlogRepository::find_scoped(pool, id, owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog"))?;
        latest.status.apply(action)?;

        Err(AppError::Conflict(
            "Blog was modified concurrently, please retry".to_string(),
        ))
    }

    async fn ensure_category_exists(pool: &PgPool, category_id: &Uuid) -> AppResult<()> {
        if CategoryRepository::find_by_id(pool, category_id)
            .await?
            .is_none()
        {
            return Err(AppError::Validation("Category does not exist".to_string()));
        }
        Ok(())
    }
}
