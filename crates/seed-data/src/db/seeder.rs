//! The seeding procedure.

use rand::Rng;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use pantry::database::Database;
use pantry::errors::AppError;
use pantry::models::{Ingredient, NewPantry, NewRecipe, NewUser, Pantry, Recipe, User};
use pantry::schema;

use crate::catalog;
use crate::config::SeedConfig;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Storage error: {0}")]
    Storage(#[from] AppError),

    #[error("Ingredient catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Ingredient catalog is empty")]
    EmptyCatalog,
}

/// Summary handle returned by a successful seeding run.
#[derive(Debug)]
pub struct SeedSummary {
    pub cody: User,
    pub murphy: User,
    pub users: usize,
    pub pantries: usize,
    pub recipes: usize,
    pub ingredients: usize,
    pub pantry_items: usize,
}

/// Database seeder for the fixed demo dataset.
pub struct Seeder {
    db: Database,
    config: SeedConfig,
}

impl Seeder {
    /// Creates a new seeder with default configuration.
    pub fn new(db: Database) -> Self {
        Self {
            db,
            config: SeedConfig::default(),
        }
    }

    /// Replaces the seeding configuration.
    pub fn with_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    /// Drops and recreates the whole schema. Destructive and total.
    pub async fn reset_schema(&self) -> Result<(), SeedError> {
        schema::reset(self.db.pool()).await?;
        info!("Schema reset, all tables recreated");
        Ok(())
    }

    /// Creates the three fixed accounts: Cody, Murphy, and Admin.
    ///
    /// All three inserts are in flight before any is awaited; the result
    /// order is fixed by position, not by completion order.
    pub async fn seed_users(&self) -> Result<[User; 3], SeedError> {
        let cody = NewUser {
            username: "Cody".to_string(),
            password: "123".to_string(),
            email: "cody@gmail.com".to_string(),
            is_admin: false,
        };
        let murphy = NewUser {
            username: "Murphy".to_string(),
            password: "123".to_string(),
            email: "murphy@gmail.com".to_string(),
            is_admin: false,
        };
        let admin = NewUser {
            username: "Admin".to_string(),
            password: "123".to_string(),
            email: "admin@gmail.com".to_string(),
            is_admin: true,
        };

        let (cody, murphy, admin) = tokio::try_join!(
            self.db.create_user(&cody),
            self.db.create_user(&murphy),
            self.db.create_user(&admin),
        )?;

        info!("Seeded 3 users");
        Ok([cody, murphy, admin])
    }

    /// Resolves every user's default pantry and creates the extra pantries,
    /// returning the list of pantries to stock.
    ///
    /// Strictly sequential: the stocking step depends on this list being
    /// complete. Admin users keep their default pantry empty, so only
    /// non-admin pantries are collected.
    pub async fn collect_pantries(&self, users: &[User]) -> Result<Vec<Pantry>, SeedError> {
        let mut pantries = Vec::new();

        for user in users {
            let default = self.db.default_pantry(user).await?;

            if user.is_admin {
                continue;
            }

            pantries.push(default);
            for i in 1..=self.config.extra_pantries_per_user {
                let extra = NewPantry {
                    user_id: user.id,
                    name: format!("Extra Pantry {i}"),
                };
                pantries.push(self.db.create_pantry(&extra).await?);
            }
        }

        info!("Collected {} pantries to stock", pantries.len());
        Ok(pantries)
    }

    /// Creates one recipe per user, identical content, distinct ownership.
    pub async fn seed_recipes(&self, users: &[User; 3]) -> Result<Vec<Recipe>, SeedError> {
        let [first, second, third] = users.each_ref().map(|user| cinnamon_tea(user.id));

        let (first, second, third) = tokio::try_join!(
            self.db.create_recipe(&first),
            self.db.create_recipe(&second),
            self.db.create_recipe(&third),
        )?;

        let recipes = vec![first, second, third];
        info!("Seeded {} recipes", recipes.len());
        Ok(recipes)
    }

    /// Bulk-inserts the embedded catalog, then re-fetches it from the
    /// database so callers work with the persisted rows.
    pub async fn seed_ingredients(&self) -> Result<Vec<Ingredient>, SeedError> {
        let records = catalog::load()?;
        let inserted = self
            .db
            .bulk_insert_ingredients(&records, self.config.batch_size)
            .await?;

        // Logged after the insert completes, so the count reflects what
        // actually landed in the database.
        info!("Seeded {inserted} ingredients");

        Ok(self.db.all_ingredients().await?)
    }

    /// Stocks each pantry with independent uniform picks from the catalog.
    ///
    /// Selection is with replacement; duplicate pantry/ingredient pairs are
    /// expected and kept.
    pub async fn stock_pantries(
        &self,
        pantries: &[Pantry],
        ingredients: &[Ingredient],
        rng: &mut impl Rng,
    ) -> Result<usize, SeedError> {
        if ingredients.is_empty() {
            return Err(SeedError::EmptyCatalog);
        }

        let mut stocked = 0;
        for pantry in pantries {
            for _ in 0..self.config.ingredients_per_pantry {
                let ingredient = &ingredients[rng.gen_range(0..ingredients.len())];
                self.db.add_pantry_item(pantry.id, ingredient.id).await?;
                stocked += 1;
            }
        }

        info!("Stocked {} pantries with {} items", pantries.len(), stocked);
        Ok(stocked)
    }
}

/// The recipe attached to every seed user.
fn cinnamon_tea(user_id: Uuid) -> NewRecipe {
    NewRecipe {
        user_id,
        title: "Cinnamon Tea".to_string(),
        cuisine: "American".to_string(),
        prep_time: "15 mins".to_string(),
        cook_time: "Overnight".to_string(),
        ingredients: "Green tea bags (2), Black tea bags (2), Cinnamon sticks (3), \
                      Lemon slices, Lime slices, Honey, Brown Sugar"
            .to_string(),
        instructions: "Add tea, cinnamon, lemon and lime to water and let simmer for 1 hour. \
                       Turn off heat and let sit overnight. Add honey and brown sugar to taste. \
                       Strain ingredients and serve cold."
            .to_string(),
        created_by_user: true,
    }
}

/// Runs the full seeding sequence against a freshly reset schema.
///
/// Destructive: every table is dropped and recreated first. There is no
/// rollback across steps; a mid-sequence failure propagates and leaves the
/// database partially seeded.
pub async fn seed(
    db: &Database,
    config: SeedConfig,
    rng: &mut impl Rng,
) -> Result<SeedSummary, SeedError> {
    let seeder = Seeder::new(db.clone()).with_config(config);

    seeder.reset_schema().await?;

    let users = seeder.seed_users().await?;
    let pantries = seeder.collect_pantries(&users).await?;
    let recipes = seeder.seed_recipes(&users).await?;
    let ingredients = seeder.seed_ingredients().await?;
    let pantry_items = seeder
        .stock_pantries(&pantries, &ingredients, rng)
        .await?;

    info!("Seeded {} users", users.len());
    info!("Seeded successfully");

    let [cody, murphy, _admin] = users;
    Ok(SeedSummary {
        cody,
        murphy,
        users: 3,
        pantries: pantries.len(),
        recipes: recipes.len(),
        ingredients: ingredients.len(),
        pantry_items,
    })
}

/// Invokes [`seed`] with default configuration and guarantees the pool is
/// closed afterwards, on success and on failure alike.
///
/// Failures are logged here and still returned, so the binary only has to
/// map the result to an exit code. Kept free of process-exit side effects so
/// test harnesses can call it directly.
pub async fn run_seed(pool: PgPool) -> Result<SeedSummary, SeedError> {
    info!("Seeding...");

    let db = Database::new(pool.clone());
    let mut rng = rand::thread_rng();
    let outcome = seed(&db, SeedConfig::default(), &mut rng).await;

    info!("Closing database connection");
    pool.close().await;
    info!("Database connection closed");

    if let Err(err) = &outcome {
        error!("Seeding failed: {err}");
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_recipe_is_user_created() {
        let user_id = Uuid::new_v4();
        let recipe = cinnamon_tea(user_id);

        assert_eq!(recipe.user_id, user_id);
        assert_eq!(recipe.title, "Cinnamon Tea");
        assert!(recipe.created_by_user);
    }
}
