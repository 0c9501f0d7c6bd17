//! Default seed script - creates the storefront fixtures
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use seed_data::prelude::*;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    if config.run_migrations {
        storefront::MIGRATOR.run(&pool).await?;
    }

    let report = Seeder::new(pool).seed_all().await?;

    // Summary output
    tracing::info!("Seed completed!");
    for (entity, counts) in report.iter() {
        tracing::info!(
            "  {entity}: {} created, {} already present",
            counts.created,
            counts.existing
        );
    }

    Ok(())
}
