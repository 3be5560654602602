use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// An account in the application. `current_pantry_id` points at the default
/// pantry created alongside the user; it is only `None` transiently inside
/// the creation transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub current_pantry_id: Option<Uuid>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub is_admin: bool,
}

/// A named collection of ingredient stocks owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pantry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPantry {
    pub user_id: Uuid,
    pub name: String,
}

/// Catalog entity, independent of any user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub created_at: OffsetDateTime,
}

/// Insert payload for an ingredient; also the record shape of the embedded
/// seed catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    pub category: String,
}

/// Free-text recipe owned by a user. `created_by_user` distinguishes recipes
/// entered by hand from ones imported from an external source.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub cuisine: String,
    pub prep_time: String,
    pub cook_time: String,
    pub ingredients: String,
    pub instructions: String,
    pub created_by_user: bool,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRecipe {
    pub user_id: Uuid,
    pub title: String,
    pub cuisine: String,
    pub prep_time: String,
    pub cook_time: String,
    pub ingredients: String,
    pub instructions: String,
    pub created_by_user: bool,
}

/// Association between one pantry and one ingredient. Carries its own key so
/// the same pantry/ingredient pair can appear more than once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PantryItem {
    pub id: Uuid,
    pub pantry_id: Uuid,
    pub ingredient_id: Uuid,
    pub created_at: OffsetDateTime,
}
