//! Database tests for the PostgreSQL category repository.
//!
//! To run these tests, you need a PostgreSQL database and the DATABASE_URL
//! environment variable set. Migrations are applied automatically.
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p storefront --test categories_pg`
//!
//! Note: every test uses its own category names and removes its rows
//! afterwards, so they can run against a development database.

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;
use storefront::{
    MIGRATOR,
    categories::CategoriesRepository,
    database::Database,
    errors::AppError,
    models::{NewCategory, NewMedia},
};
use time::OffsetDateTime;

/// Get database pool, skipping tests if DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    let pool = match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            return None;
        }
    };

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");
    Some(pool)
}

fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", OffsetDateTime::now_utc().unix_timestamp_nanos())
}

fn new_category(name: &str, url: &str) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        media: NewMedia {
            url: url.to_string(),
        },
    }
}

/// Cleanup helper; categories first because they reference media.
async fn cleanup_category(pool: &PgPool, name: &str) {
    let media_ids: Vec<Option<i32>> =
        sqlx::query_scalar("DELETE FROM categories WHERE name = $1 RETURNING media_id")
            .bind(name)
            .fetch_all(pool)
            .await
            .unwrap_or_default();

    for media_id in media_ids.into_iter().flatten() {
        let _ = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(media_id)
            .execute(pool)
            .await;
    }
}

#[tokio::test]
async fn create_then_get_roundtrip() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let db = Database::new(pool.clone());
    let name = unique_name("roundtrip");

    assert!(!db.exists(&name).await.unwrap());

    let created = db
        .create(new_category(&name, "https://example.com/roundtrip.png"))
        .await
        .unwrap();
    assert!(db.exists(&name).await.unwrap());

    let fetched = db.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(
        fetched.media.map(|m| m.url),
        Some("https://example.com/roundtrip.png".to_string())
    );

    cleanup_category(&pool, &name).await;
}

#[tokio::test]
async fn duplicate_insert_is_conflict_and_leaves_no_orphan_media() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let db = Database::new(pool.clone());
    let name = unique_name("duplicate");
    let orphan_url = format!("https://example.com/{name}-second.png");

    db.create(new_category(&name, "https://example.com/first.png"))
        .await
        .unwrap();

    let err = db
        .create(new_category(&name, &orphan_url))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM media WHERE url = $1")
        .bind(&orphan_url)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orphans, 0);

    cleanup_category(&pool, &name).await;
}

#[tokio::test]
async fn missing_id_returns_none() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let db = Database::new(pool);

    assert!(db.get_by_id(i32::MAX).await.unwrap().is_none());
}
