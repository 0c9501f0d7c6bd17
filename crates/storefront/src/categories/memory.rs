//! In-process [`CategoriesRepository`] used as a test double.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::{
    categories::CategoriesRepository,
    errors::AppError,
    models::{Category, Media, NewCategory},
};

#[derive(Debug)]
struct State {
    categories: Vec<Category>,
    next_category_id: i32,
    next_media_id: i32,
}

/// Keeps categories in memory with the same unique-name rule as the database
/// and counts calls per operation.
#[derive(Debug)]
pub struct InMemoryCategoriesRepository {
    state: Mutex<State>,
    exists_calls: AtomicUsize,
    create_calls: AtomicUsize,
    get_by_id_calls: AtomicUsize,
}

impl Default for InMemoryCategoriesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCategoriesRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                categories: Vec::new(),
                next_category_id: 1,
                next_media_id: 1,
            }),
            exists_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            get_by_id_calls: AtomicUsize::new(0),
        }
    }

    /// Stores a category under a fixed id without going through
    /// [`CategoriesRepository::create`], so call counters stay untouched.
    pub fn insert(&self, id: i32, name: &str, image_url: &str) -> Category {
        let mut state = self.lock();
        let media_id = state.next_media_id;
        state.next_media_id += 1;
        state.next_category_id = state.next_category_id.max(id + 1);

        let category = new_category_row(id, name.to_string(), media_id, image_url.to_string());
        state.categories.retain(|c| c.id != id);
        state.categories.push(category.clone());
        category
    }

    pub fn len(&self) -> usize {
        self.lock().categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_by_name(&self, name: &str) -> Option<Category> {
        self.lock()
            .categories
            .iter()
            .find(|c| c.name == name)
            .cloned()
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn get_by_id_calls(&self) -> usize {
        self.get_by_id_calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // Each call mutates state in one step, so a poisoned guard is still consistent.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn new_category_row(id: i32, name: String, media_id: i32, url: String) -> Category {
    let now = OffsetDateTime::now_utc();
    Category {
        id,
        name,
        media_id: Some(media_id),
        media: Some(Media { id: media_id, url }),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

#[async_trait]
impl CategoriesRepository for InMemoryCategoriesRepository {
    async fn exists(&self, name: &str) -> Result<bool, AppError> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lock().categories.iter().any(|c| c.name == name))
    }

    async fn create(&self, category: NewCategory) -> Result<Category, AppError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock();

        if state.categories.iter().any(|c| c.name == category.name) {
            return Err(AppError::Conflict(format!(
                "Category '{}' already exists",
                category.name
            )));
        }

        let id = state.next_category_id;
        let media_id = state.next_media_id;
        state.next_category_id += 1;
        state.next_media_id += 1;

        let created = new_category_row(id, category.name, media_id, category.media.url);
        state.categories.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        self.get_by_id_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lock().categories.iter().find(|c| c.id == id).cloned())
    }
}
