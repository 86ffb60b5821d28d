//! Blog repository
//!
//! Every lifecycle write is a single conditional statement keyed by post id,
//! the expected current status and, for owner routes, the owner id.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Blog, BlogCounts, BlogDetails, BlogStatus, UserEngagement},
};

/// Post joined with author and category columns
const DETAILS_SELECT: &str = r#"
    SELECT
        b.*,
        u.first_name AS author_first_name,
        u.last_name AS author_last_name,
        u.username AS author_username,
        u.email AS author_email,
        c.name AS category_name
    FROM blogs b
    JOIN users u ON u.id = b.user_id
    LEFT JOIN categories c ON c.id = b.category_id
"#;

/// Fields accepted when creating a post
#[derive(Debug, Clone, Copy)]
pub struct NewBlog<'a> {
    pub title: &'a str,
    pub synopsis: &'a str,
    pub content: &'a str,
    pub featured_image_url: Option<&'a str>,
    pub category_id: Option<Uuid>,
}

/// Partial content edit; `None` keeps the stored value
#[derive(Debug, Clone, Copy, Default)]
pub struct BlogChanges<'a> {
    pub title: Option<&'a str>,
    pub synopsis: Option<&'a str>,
    pub content: Option<&'a str>,
    pub featured_image_url: Option<&'a str>,
    pub category_id: Option<Uuid>,
}

/// Repository for blog database operations
pub struct BlogRepository;

impl BlogRepository {
    /// Create a new active post
    pub async fn create(pool: &PgPool, owner_id: &Uuid, blog: NewBlog<'_>) -> AppResult<Blog> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (user_id, category_id, title, synopsis, content, featured_image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(blog.category_id)
        .bind(blog.title)
        .bind(blog.synopsis)
        .bind(blog.content)
        .bind(blog.featured_image_url)
        .fetch_one(pool)
        .await?;

        Ok(blog)
    }

    /// Find post by ID, optionally restricted to an owner
    pub async fn find_scoped(
        pool: &PgPool,
        id: &Uuid,
        owner_id: Option<&Uuid>,
    ) -> AppResult<Option<Blog>> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"SELECT * FROM blogs WHERE id = $1 AND ($2::uuid IS NULL OR user_id = $2)"#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(blog)
    }

    /// Public detail read: never trashed, disabled only when allowed
    pub async fn find_public(
        pool: &PgPool,
        id: &Uuid,
        hide_disabled: bool,
    ) -> AppResult<Option<BlogDetails>> {
        let query = format!(
            "{DETAILS_SELECT} WHERE b.id = $1 AND b.status <> 'trashed' \
             AND (NOT $2 OR b.status <> 'disabled')"
        );
        let blog = sqlx::query_as::<_, BlogDetails>(&query)
            .bind(id)
            .bind(hide_disabled)
            .fetch_optional(pool)
            .await?;

        Ok(blog)
    }

    /// Public listing, newest first
    pub async fn list_public(pool: &PgPool, hide_disabled: bool) -> AppResult<Vec<BlogDetails>> {
        let query = format!(
            "{DETAILS_SELECT} WHERE b.status <> 'trashed' \
             AND (NOT $1 OR b.status <> 'disabled') \
             ORDER BY b.created_at DESC"
        );
        let blogs = sqlx::query_as::<_, BlogDetails>(&query)
            .bind(hide_disabled)
            .fetch_all(pool)
            .await?;

        Ok(blogs)
    }

    /// A user's own posts, either in or out of trash
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: &Uuid,
        trashed: bool,
    ) -> AppResult<Vec<BlogDetails>> {
        let query = format!(
            "{DETAILS_SELECT} WHERE b.user_id = $1 AND (b.status = 'trashed') = $2 \
             ORDER BY b.created_at DESC"
        );
        let blogs = sqlx::query_as::<_, BlogDetails>(&query)
            .bind(owner_id)
            .bind(trashed)
            .fetch_all(pool)
            .await?;

        Ok(blogs)
    }

    /// Moderation listing with an optional status filter
    pub async fn list_by_status(
        pool: &PgPool,
        status: Option<BlogStatus>,
    ) -> AppResult<Vec<BlogDetails>> {
        let query = format!(
            "{DETAILS_SELECT} WHERE ($1::blog_status IS NULL OR b.status = $1) \
             ORDER BY b.created_at DESC"
        );
        let blogs = sqlx::query_as::<_, BlogDetails>(&query)
            .bind(status)
            .fetch_all(pool)
            .await?;

        Ok(blogs)
    }

    /// Edit an active post owned by `owner_id`
    pub async fn update_content(
        pool: &PgPool,
        id: &Uuid,
        owner_id: &Uuid,
        changes: BlogChanges<'_>,
    ) -> AppResult<Option<Blog>> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            UPDATE blogs
            SET
                title = COALESCE($3, title),
                synopsis = COALESCE($4, synopsis),
                content = COALESCE($5, content),
                featured_image_url = COALESCE($6, featured_image_url),
                category_id = COALESCE($7, category_id),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2 AND status = 'active'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(changes.title)
        .bind(changes.synopsis)
        .bind(changes.content)
        .bind(changes.featured_image_url)
        .bind(changes.category_id)
        .fetch_optional(pool)
        .await?;

        Ok(blog)
    }

    /// Move a post from `from` to `to`.
    ///
    /// Returns `None` when no row matched the id, owner and expected status.
    /// Moderation fields are only kept while the post is disabled.
    pub async fn transition(
        pool: &PgPool,
        id: &Uuid,
        owner_id: Option<&Uuid>,
        from: BlogStatus,
        to: BlogStatus,
        reason: Option<&str>,
    ) -> AppResult<Option<Blog>> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            UPDATE blogs
            SET
                status = $4,
                disabled_reason = CASE WHEN $4 = 'disabled'::blog_status THEN $5 ELSE NULL END,
                disabled_at = CASE WHEN $4 = 'disabled'::blog_status THEN NOW() ELSE NULL END,
                updated_at = NOW()
            WHERE id = $1 AND ($2::uuid IS NULL OR user_id = $2) AND status = $3
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(from)
        .bind(to)
        .bind(reason)
        .fetch_optional(pool)
        .await?;

        Ok(blog)
    }

    /// Permanently remove a post; returns whether a row was deleted
    pub async fn delete(pool: &PgPool, id: &Uuid, owner_id: Option<&Uuid>) -> AppResult<bool> {
        let result = sqlx::query(
            r#"DELETE FROM blogs WHERE id = $1 AND ($2::uuid IS NULL OR user_id = $2)"#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count posts per lifecycle state
    pub async fn count_by_status(pool: &PgPool) -> AppResult<BlogCounts> {
        let counts = sqlx::query_as::<_, BlogCounts>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'active') AS active,
                COUNT(*) FILTER (WHERE status = 'disabled') AS disabled,
                COUNT(*) FILTER (WHERE status = 'trashed') AS trashed
            FROM blogs
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(counts)
    }

    /// Count posts referencing a category
    pub async fn count_by_category(pool: &PgPool, category_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM blogs WHERE category_id = $1"#)
            .bind(category_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Increment the view counter of a post that is not in trash
    pub async fn increment_views(pool: &PgPool, id: &Uuid) -> AppResult<Option<i64>> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE blogs SET view_count = view_count + 1
            WHERE id = $1 AND status <> 'trashed'
            RETURNING view_count
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(count)
    }

    /// Add one like
    pub async fn increment_likes(pool: &PgPool, id: &Uuid) -> AppResult<Option<i64>> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE blogs SET likes_count = likes_count + 1
            WHERE id = $1 AND status <> 'trashed'
            RETURNING likes_count
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(count)
    }

    /// Remove one like, clamped at zero
    pub async fn decrement_likes(pool: &PgPool, id: &Uuid) -> AppResult<Option<i64>> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE blogs SET likes_count = GREATEST(likes_count - 1, 0)
            WHERE id = $1 AND status <> 'trashed'
            RETURNING likes_count
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(count)
    }

    /// Record an accepted comment
    pub async fn increment_comments(pool: &PgPool, id: &Uuid) -> AppResult<Option<i64>> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE blogs SET comments_count = comments_count + 1
            WHERE id = $1 AND status <> 'trashed'
            RETURNING comments_count
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(count)
    }

    /// Likes, views and post count summed over every post of a user
    pub async fn engagement_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<UserEngagement> {
        let stats = sqlx::query_as::<_, UserEngagement>(
            r#"
            SELECT
                COALESCE(SUM(likes_count), 0)::BIGINT AS total_likes,
                COALESCE(SUM(view_count), 0)::BIGINT AS total_views,
                COUNT(*) AS post_count
            FROM blogs
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(stats)
    }
}
