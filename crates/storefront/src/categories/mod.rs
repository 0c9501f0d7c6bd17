//! Category business rules and the persistence port they depend on.

pub mod memory;
pub mod repository;
pub mod service;

pub use memory::InMemoryCategoriesRepository;
pub use repository::CategoriesRepository;
pub use service::CategoriesService;
