use async_trait::async_trait;
use sqlx::PgPool;

use crate::categories::CategoriesRepository;
use crate::errors::AppError;
use crate::models::{Category, CategoryRow, Media, NewCategory};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn category_name_exists(&self, name: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Inserts the media row and the category pointing at it in one transaction.
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category, AppError> {
        let mut tx = self.pool.begin().await?;

        let media: Media = sqlx::query_as(
            r#"
            INSERT INTO media (url)
            VALUES ($1)
            RETURNING id, url
            "#,
        )
        .bind(&category.media.url)
        .fetch_one(&mut *tx)
        .await?;

        let row: CategoryRow = sqlx::query_as(
            r#"
            INSERT INTO categories (name, media_id)
            VALUES ($1, $2)
            RETURNING id, name, media_id, $3::TEXT AS media_url,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(&category.name)
        .bind(media.id)
        .bind(&media.url)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::from_unique_violation(
                e,
                format!("Category '{}' already exists", category.name),
            )
        })?;

        tx.commit().await?;

        Ok(row.into())
    }

    pub async fn get_category(&self, id: i32) -> Result<Option<Category>, AppError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            r#"
            SELECT c.id, c.name, c.media_id, m.url AS media_url,
                   c.created_at, c.updated_at, c.deleted_at
            FROM categories c
            LEFT JOIN media m ON m.id = c.media_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Category::from))
    }
}

#[async_trait]
impl CategoriesRepository for Database {
    async fn exists(&self, name: &str) -> Result<bool, AppError> {
        self.category_name_exists(name).await
    }

    async fn create(&self, category: NewCategory) -> Result<Category, AppError> {
        self.create_category(&category).await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        self.get_category(id).await
    }
}
