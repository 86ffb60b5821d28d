//! Category repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Category};

/// Repository for category database operations
pub struct CategoryRepository;

impl CategoryRepository {
    /// Create a new category
    pub async fn create(pool: &PgPool, name: &str) -> AppResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"INSERT INTO categories (name) VALUES ($1) RETURNING *"#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(category)
    }

    /// List categories alphabetically
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>(r#"SELECT * FROM categories ORDER BY name ASC"#)
                .fetch_all(pool)
                .await?;

        Ok(categories)
    }

    /// Find category by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(r#"SELECT * FROM categories WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(category)
    }

    /// Find category by name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>(r#"SELECT * FROM categories WHERE name = $1"#)
                .bind(name)
                .fetch_optional(pool)
                .await?;

        Ok(category)
    }

    /// Rename a category
    pub async fn rename(pool: &PgPool, id: &Uuid, name: &str) -> AppResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"UPDATE categories SET name = $2 WHERE id = $1 RETURNING *"#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(category)
    }

    /// Delete a category; returns whether a row was deleted
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM categories WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count categories
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM categories"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
