pub mod auth;
pub mod categories;
pub mod database;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use sqlx::{PgPool, migrate::Migrator};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    categories::CategoriesService,
    database::Database,
    handlers::{create_category, get_category, health_check},
};

/// Schema migrations embedded from `crates/storefront/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health_check,
        handlers::categories::create_category,
        handlers::categories::get_category,
    ),
    components(schemas(
        models::Category,
        models::Media,
        handlers::CreateCategoryRequest,
    )),
    tags(
        (name = "categories", description = "Product categories"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Routes served on top of an already constructed category service.
pub fn categories_router(service: CategoriesService) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi_json))
        .route("/categories", axum::routing::post(create_category))
        .route("/categories/{id}", get(get_category))
        .layer(Extension(service))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

pub fn create_router(pool: PgPool) -> Router {
    let db = Database::new(pool);
    categories_router(CategoriesService::new(Arc::new(db)))
}

pub async fn run_server(pool: PgPool, port: u16) -> anyhow::Result<()> {
    let app = create_router(pool);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
