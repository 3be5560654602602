//! Configuration for seeding operations.

use serde::{Deserialize, Serialize};

/// Configuration for a seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Extra pantries created per non-admin user, on top of the default.
    pub extra_pantries_per_user: usize,

    /// Random ingredient picks per stocked pantry (with replacement).
    pub ingredients_per_pantry: usize,

    /// Batch size for bulk ingredient insertion.
    pub batch_size: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            extra_pantries_per_user: 3,
            ingredients_per_pantry: 50,
            batch_size: 50,
        }
    }
}
