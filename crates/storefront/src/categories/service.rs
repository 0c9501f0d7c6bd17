//! Category creation and lookup.
//!
//! Name uniqueness is checked up front so the common duplicate case never
//! reaches the write path. The storage layer still owns the invariant: a
//! concurrent insert that slips past the check comes back from
//! [`CategoriesRepository::create`] as [`AppError::Conflict`].

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    categories::CategoriesRepository,
    errors::AppError,
    models::{Category, CreateCategory, NewCategory, NewMedia},
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Arc<dyn CategoriesRepository>,
}

impl CategoriesService {
    pub fn new(repository: Arc<dyn CategoriesRepository>) -> Self {
        Self { repository }
    }

    /// Creates a category and its image in one step.
    ///
    /// Fails with [`AppError::InvalidInput`] for a blank name and with
    /// [`AppError::Conflict`] when the name is taken, without writing
    /// anything in either case.
    pub async fn create_category(&self, input: CreateCategory) -> Result<Category, AppError> {
        if input.name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Category name must not be empty".to_string(),
            ));
        }

        if self.repository.exists(&input.name).await? {
            warn!("Category '{}' already exists", input.name);
            return Err(AppError::Conflict(format!(
                "Category '{}' already exists",
                input.name
            )));
        }

        let category = self
            .repository
            .create(NewCategory {
                name: input.name,
                media: NewMedia {
                    url: input.image_url,
                },
            })
            .await?;

        info!("Created category {} ('{}')", category.id, category.name);
        Ok(category)
    }

    pub async fn get_category_by_id(&self, id: i32) -> Result<Category, AppError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }
}
