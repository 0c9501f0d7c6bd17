//! HTTP request handlers for the storefront API.

pub mod categories;

pub use categories::{
    __path_create_category, __path_get_category, CreateCategoryRequest, create_category,
    get_category,
};

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health_check() -> &'static str {
    "OK"
}
