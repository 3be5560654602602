//! Static ingredient catalog.
//!
//! The catalog ships inside the binary so a seeding run has no file or
//! network dependencies beyond the database itself. Entries keep their
//! authored order.

use pantry::models::NewIngredient;

use crate::db::SeedError;

const INGREDIENTS_JSON: &str = include_str!("../data/ingredients.json");

/// Parses the embedded catalog into insert-ready ingredient records.
pub fn load() -> Result<Vec<NewIngredient>, SeedError> {
    let ingredients: Vec<NewIngredient> = serde_json::from_str(INGREDIENTS_JSON)?;
    Ok(ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_parses_and_is_non_empty() {
        let ingredients = load().expect("embedded catalog should parse");

        assert!(!ingredients.is_empty());
    }

    #[test]
    fn catalog_entries_are_complete() {
        for ingredient in load().unwrap() {
            assert!(!ingredient.name.is_empty());
            assert!(!ingredient.category.is_empty());
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        let ingredients = load().unwrap();
        let names: std::collections::HashSet<_> =
            ingredients.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(names.len(), ingredients.len());
    }
}
