//! Database integration for the seeding procedure.
//!
//! The [`Seeder`] provides one method per seeding step; [`seed`] runs the
//! steps in order and [`run_seed`] wraps it with error logging and a
//! guaranteed pool shutdown.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder, run_seed, seed};
