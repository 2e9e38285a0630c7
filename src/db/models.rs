use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{Error, Result};

/// A persisted recipe with its ordered ingredient names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub vegetarian: bool,
    pub servings: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller supplies when creating or replacing a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub vegetarian: bool,
    pub servings: i64,
}

impl Recipe {
    /// Build an unsaved recipe with a fresh id. Timestamps are set by the store on save.
    pub fn new(new_recipe: NewRecipe) -> Self {
        let now = Utc::now();
        Recipe {
            id: Uuid::new_v4(),
            title: new_recipe.title,
            description: new_recipe.description,
            ingredients: new_recipe.ingredients,
            instructions: new_recipe.instructions,
            vegetarian: new_recipe.vegetarian,
            servings: new_recipe.servings,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable fields, keeping id and timestamps
    pub fn apply(&mut self, update: NewRecipe) {
        self.title = update.title;
        self.description = update.description;
        self.ingredients = update.ingredients;
        self.instructions = update.instructions;
        self.vegetarian = update.vegetarian;
        self.servings = update.servings;
    }
}

/// Unicode case-insensitive substring test. `needle` must already be lowercased.
pub fn instructions_contain(instructions: &str, needle: &str) -> bool {
    instructions.to_lowercase().contains(needle)
}

/// Row of the `recipes` table; ingredients live in `recipe_ingredients`
#[derive(Debug, Clone, FromRow)]
pub struct RecipeRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub instructions: String,
    pub vegetarian: bool,
    pub servings: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeRow {
    pub fn into_recipe(self, ingredients: Vec<String>) -> Result<Recipe> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| Error::Internal(format!("Stored recipe id '{}' is not a UUID: {e}", self.id)))?;

        Ok(Recipe {
            id,
            title: self.title,
            description: self.description,
            ingredients,
            instructions: self.instructions,
            vegetarian: self.vegetarian,
            servings: self.servings,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_contain_folds_unicode() {
        assert!(instructions_contain("Whip the CRÈME", "crème"));
        assert!(instructions_contain("STIR the Soup", "stir the soup"));
        assert!(instructions_contain("anything", ""));
        assert!(!instructions_contain("Whip the CRÈME", "creme"));
    }
}
