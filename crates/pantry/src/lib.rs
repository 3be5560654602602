//! Persistence layer for pantry-chef.
//!
//! Entity models, the [`database::Database`] facade over a PostgreSQL pool,
//! destructive schema reset, and password hashing. The seeding crate and the
//! application both drive the database exclusively through this crate.

pub mod auth;
pub mod database;
pub mod errors;
pub mod models;
pub mod schema;
