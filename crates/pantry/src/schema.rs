//! Destructive schema reset.
//!
//! Drops every table and recreates it to match the current models. Existing
//! data is discarded; this is the seeding equivalent of a full re-sync.

use sqlx::PgPool;

use crate::errors::AppError;

// Order matters due to foreign key constraints.
const DROP_STATEMENTS: &[&str] = &[
    "DROP TABLE IF EXISTS pantry_items CASCADE",
    "DROP TABLE IF EXISTS recipes CASCADE",
    "DROP TABLE IF EXISTS pantries CASCADE",
    "DROP TABLE IF EXISTS ingredients CASCADE",
    "DROP TABLE IF EXISTS users CASCADE",
];

// users.current_pantry_id and pantries.user_id reference each other, so the
// users-side constraint is installed after both tables exist.
const CREATE_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE users (
        id UUID PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        is_admin BOOLEAN NOT NULL DEFAULT FALSE,
        current_pantry_id UUID,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE pantries (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        name TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    ALTER TABLE users
        ADD CONSTRAINT users_current_pantry_fkey
        FOREIGN KEY (current_pantry_id) REFERENCES pantries (id) ON DELETE SET NULL
    "#,
    r#"
    CREATE TABLE ingredients (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE recipes (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        title TEXT NOT NULL,
        cuisine TEXT NOT NULL,
        prep_time TEXT NOT NULL,
        cook_time TEXT NOT NULL,
        ingredients TEXT NOT NULL,
        instructions TEXT NOT NULL,
        created_by_user BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE pantry_items (
        id UUID PRIMARY KEY,
        pantry_id UUID NOT NULL REFERENCES pantries (id) ON DELETE CASCADE,
        ingredient_id UUID NOT NULL REFERENCES ingredients (id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// Drops and recreates all tables, discarding any existing data.
pub async fn reset(pool: &PgPool) -> Result<(), AppError> {
    for statement in DROP_STATEMENTS.iter().chain(CREATE_STATEMENTS) {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_is_dropped_before_recreation() {
        for statement in CREATE_STATEMENTS
            .iter()
            .filter(|s| s.trim_start().starts_with("CREATE TABLE"))
        {
            let table = statement
                .split_whitespace()
                .nth(2)
                .expect("malformed CREATE statement");

            assert!(
                DROP_STATEMENTS
                    .iter()
                    .any(|drop| drop.contains(&format!("DROP TABLE IF EXISTS {table} "))),
                "no DROP statement for table {table}"
            );
        }
    }
}
