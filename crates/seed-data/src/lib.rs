//! Fixture seeding for storefront.
//!
//! Populates a fresh database with an admin account, a test customer with a
//! cart and a sample order, and a small catalog of categories and products.
//! Every row is upserted by its natural key, so seeding can be re-run safely.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let report = Seeder::new(pool).seed_all().await?;
//! println!("created {} rows", report.created());
//! ```

pub mod config;
pub mod db;
pub mod fixtures;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, SeedReport, Seeder};
}
