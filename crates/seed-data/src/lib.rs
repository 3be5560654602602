//! Database seeding for pantry-chef.
//!
//! Destructively resets the schema, then populates a fixed set of users,
//! their pantries, one recipe per user, and the full ingredient catalog,
//! finishing by stocking every non-admin pantry with random ingredients.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pantry::database::Database;
//! use seed_data::{SeedConfig, seed};
//!
//! let db = Database::new(pool);
//! let mut rng = rand::thread_rng();
//! let summary = seed(&db, SeedConfig::default(), &mut rng).await?;
//! println!("cody: {}", summary.cody.username);
//! ```

pub mod catalog;
pub mod config;
pub mod db;

pub use config::SeedConfig;
pub use db::{SeedError, SeedSummary, Seeder, run_seed, seed};
