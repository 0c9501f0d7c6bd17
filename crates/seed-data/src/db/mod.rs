//! Database integration for seeding fixture data.
//!
//! The [`Seeder`] upserts each fixture by its natural key and records what it
//! did in a [`SeedReport`].

mod report;
mod seeder;

pub use report::{EntityCounts, SeedReport, Upserted};
pub use seeder::{SeedError, Seeder};
