use async_trait::async_trait;

use crate::{
    errors::AppError,
    models::{Category, NewCategory},
};

/// Persistence operations the category service relies on.
///
/// Implementations must reject a second category with an existing name by
/// returning [`AppError::Conflict`] from [`create`](Self::create), even when
/// [`exists`](Self::exists) reported the name as free.
#[async_trait]
pub trait CategoriesRepository: Send + Sync {
    /// Whether any category (soft-deleted included) already uses `name`.
    async fn exists(&self, name: &str) -> Result<bool, AppError>;

    /// Inserts the category and its media atomically.
    async fn create(&self, category: NewCategory) -> Result<Category, AppError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError>;
}
