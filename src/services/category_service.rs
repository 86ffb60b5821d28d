//! Category service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{BlogRepository, CategoryRepository},
    error::{AppError, AppResult},
    models::Category,
};

pub struct CategoryService;

impl CategoryService {
    /// List all categories
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Category>> {
        CategoryRepository::list(pool).await
    }

    /// Create a category with a unique name
    pub async fn create(pool: &PgPool, name: &str) -> AppResult<Category> {
        if CategoryRepository::find_by_name(pool, name).await?.is_some() {
            return Err(AppError::AlreadyExists("Category already exists".to_string()));
        }

        let category = CategoryRepository::create(pool, name).await?;

        tracing::info!(category_id = %category.id, name = %category.name, "Category created");

        Ok(category)
    }

    /// Rename a category
    pub async fn rename(pool: &PgPool, id: &Uuid, name: &str) -> AppResult<Category> {
        if let Some(existing) = CategoryRepository::find_by_name(pool, name).await? {
            if existing.id != *id {
                return Err(AppError::AlreadyExists("Category already exists".to_string()));
            }
        }

        CategoryRepository::rename(pool, id, name)
            .await?
            .ok_or_else(|| AppError::not_found("Category"))
    }

    /// Delete a category that no post references
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if CategoryRepository::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::not_found("Category"));
        }

        if BlogRepository::count_by_category(pool, id).await? > 0 {
            return Err(AppError::Conflict(
                "Category is in use by one or more blogs and cannot be deleted".to_string(),
            ));
        }

        // The foreign key still guards a post created after the count
        if !CategoryRepository::delete(pool, id).await? {
            return Err(AppError::not_found("Category"));
        }

        tracing::info!(category_id = %id, "Category deleted");

        Ok(())
    }
}
