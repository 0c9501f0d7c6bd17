//! Category handlers.

use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    categories::CategoriesService,
    errors::AppError,
    extractors::AppJson,
    models::{Category, CreateCategory},
};

/// Body of `POST /categories`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: String,
}

impl From<CreateCategoryRequest> for CreateCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        Self {
            name: req.name,
            image_url: req.image_url,
        }
    }
}

/// Create a category with its image.
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Malformed body or invalid input"),
        (status = 409, description = "A category with this name already exists")
    )
)]
pub async fn create_category(
    Extension(service): Extension<CategoriesService>,
    AppJson(req): AppJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    req.validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let category = service.create_category(req.into()).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Get a category by ID.
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    Extension(service): Extension<CategoriesService>,
    Path(id): Path<i32>,
) -> Result<Json<Category>, AppError> {
    let category = service.get_category_by_id(id).await?;
    Ok(Json(category))
}
