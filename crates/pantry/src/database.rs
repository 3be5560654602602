use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth;
use crate::errors::AppError;
use crate::models::{
    Ingredient, NewIngredient, NewPantry, NewRecipe, NewUser, Pantry, PantryItem, Recipe, User,
};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates a user together with their default pantry.
    ///
    /// The pantry is a side effect of user creation: the insert, the default
    /// pantry, and the `current_pantry_id` back-reference commit in one
    /// transaction, so a user without a default pantry is never observable.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, AppError> {
        let user_id = Uuid::new_v4();
        let pantry_id = Uuid::new_v4();
        let created_at = OffsetDateTime::now_utc();
        let password_hash = auth::hash_password(&new_user.password)?;

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, is_admin, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user_id)
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&password_hash)
        .bind(new_user.is_admin)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO pantries (id, user_id, name, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(pantry_id)
        .bind(user_id)
        .bind("Default Pantry")
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE users SET current_pantry_id = $2 WHERE id = $1")
            .bind(user_id)
            .bind(pantry_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(User {
            id: user_id,
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            password_hash,
            is_admin: new_user.is_admin,
            current_pantry_id: Some(pantry_id),
            created_at,
        })
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, is_admin, current_pantry_id, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Resolves the default pantry created alongside the user.
    pub async fn default_pantry(&self, user: &User) -> Result<Pantry, AppError> {
        let pantry_id = user.current_pantry_id.ok_or(AppError::NotFound)?;

        let pantry: Option<Pantry> = sqlx::query_as(
            r#"
            SELECT id, user_id, name, created_at
            FROM pantries
            WHERE id = $1
            "#,
        )
        .bind(pantry_id)
        .fetch_optional(&self.pool)
        .await?;

        pantry.ok_or(AppError::NotFound)
    }

    pub async fn create_pantry(&self, new_pantry: &NewPantry) -> Result<Pantry, AppError> {
        let pantry = Pantry {
            id: Uuid::new_v4(),
            user_id: new_pantry.user_id,
            name: new_pantry.name.clone(),
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r#"
            INSERT INTO pantries (id, user_id, name, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(pantry.id)
        .bind(pantry.user_id)
        .bind(&pantry.name)
        .bind(pantry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(pantry)
    }

    pub async fn user_pantries(&self, user_id: Uuid) -> Result<Vec<Pantry>, AppError> {
        let pantries: Vec<Pantry> = sqlx::query_as(
            r#"
            SELECT id, user_id, name, created_at
            FROM pantries
            WHERE user_id = $1
            ORDER BY created_at, name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(pantries)
    }

    pub async fn create_recipe(&self, new_recipe: &NewRecipe) -> Result<Recipe, AppError> {
        let recipe = Recipe {
            id: Uuid::new_v4(),
            user_id: new_recipe.user_id,
            title: new_recipe.title.clone(),
            cuisine: new_recipe.cuisine.clone(),
            prep_time: new_recipe.prep_time.clone(),
            cook_time: new_recipe.cook_time.clone(),
            ingredients: new_recipe.ingredients.clone(),
            instructions: new_recipe.instructions.clone(),
            created_by_user: new_recipe.created_by_user,
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r#"
            INSERT INTO recipes (id, user_id, title, cuisine, prep_time, cook_time,
                                 ingredients, instructions, created_by_user, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(recipe.id)
        .bind(recipe.user_id)
        .bind(&recipe.title)
        .bind(&recipe.cuisine)
        .bind(&recipe.prep_time)
        .bind(&recipe.cook_time)
        .bind(&recipe.ingredients)
        .bind(&recipe.instructions)
        .bind(recipe.created_by_user)
        .bind(recipe.created_at)
        .execute(&self.pool)
        .await?;

        Ok(recipe)
    }

    pub async fn user_recipes(&self, user_id: Uuid) -> Result<Vec<Recipe>, AppError> {
        let recipes: Vec<Recipe> = sqlx::query_as(
            r#"
            SELECT id, user_id, title, cuisine, prep_time, cook_time,
                   ingredients, instructions, created_by_user, created_at
            FROM recipes
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(recipes)
    }

    /// Inserts the ingredient catalog in batches, returning the row count.
    pub async fn bulk_insert_ingredients(
        &self,
        ingredients: &[NewIngredient],
        batch_size: usize,
    ) -> Result<u64, AppError> {
        for chunk in ingredients.chunks(batch_size) {
            self.insert_ingredient_batch(chunk).await?;
        }

        Ok(ingredients.len() as u64)
    }

    async fn insert_ingredient_batch(&self, ingredients: &[NewIngredient]) -> Result<(), AppError> {
        for ingredient in ingredients {
            sqlx::query(
                r#"
                INSERT INTO ingredients (id, name, category, created_at)
                VALUES ($1, $2, $3, NOW())
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&ingredient.name)
            .bind(&ingredient.category)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }

    pub async fn all_ingredients(&self) -> Result<Vec<Ingredient>, AppError> {
        let ingredients: Vec<Ingredient> = sqlx::query_as(
            r#"
            SELECT id, name, category, created_at
            FROM ingredients
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(ingredients)
    }

    /// Links an ingredient into a pantry. No conflict handling: stocking the
    /// same ingredient twice yields two rows.
    pub async fn add_pantry_item(
        &self,
        pantry_id: Uuid,
        ingredient_id: Uuid,
    ) -> Result<PantryItem, AppError> {
        let item = PantryItem {
            id: Uuid::new_v4(),
            pantry_id,
            ingredient_id,
            created_at: OffsetDateTime::now_utc(),
        };

        sqlx::query(
            r#"
            INSERT INTO pantry_items (id, pantry_id, ingredient_id, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.id)
        .bind(item.pantry_id)
        .bind(item.ingredient_id)
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn count_users(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_recipes(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_ingredients(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ingredients")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_pantry_items(&self, pantry_id: Uuid) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM pantry_items WHERE pantry_id = $1")
                .bind(pantry_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}
