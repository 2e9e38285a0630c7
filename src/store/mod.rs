//! Recipe persistence boundary.
//!
//! The search engine and the service only talk to [`RecipeStore`]. The
//! SQLite implementation delegates to the query functions in [`crate::db`];
//! [`memory::InMemoryRecipeStore`] keeps everything in a `Vec` and is used by
//! tests and embedders that don't want a database.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::{self, models::Recipe, DbPool};
use crate::error::Result;

pub use memory::InMemoryRecipeStore;

/// Storage operations for recipes.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// All recipes in store order.
    async fn find_all(&self) -> Result<Vec<Recipe>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>>;

    /// Insert the recipe if its id is unknown, otherwise replace it.
    ///
    /// Implementations refresh `updated_at` and keep the original
    /// `created_at` on update. Returns the recipe as stored.
    async fn save(&self, recipe: &Recipe) -> Result<Recipe>;

    async fn exists_by_id(&self, id: Uuid) -> Result<bool>;

    /// Returns `Error::RecipeNotFound` if nothing was deleted.
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;

    /// Recipes matching every present attribute, in store order.
    ///
    /// `instruction_text` matches case-insensitively anywhere in the
    /// instructions.
    async fn search_by_attributes(
        &self,
        vegetarian: Option<bool>,
        servings: Option<i64>,
        instruction_text: Option<&str>,
    ) -> Result<Vec<Recipe>>;

    /// Distinct ingredient names with the number of recipes using each,
    /// most used first and then by name.
    async fn ingredient_usage(&self) -> Result<Vec<(String, i64)>>;
}

/// SQLite-backed store
#[derive(Clone)]
pub struct SqliteRecipeStore {
    pool: DbPool,
}

impl SqliteRecipeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore {
    async fn find_all(&self) -> Result<Vec<Recipe>> {
        db::recipes::list_all_recipes(&self.pool).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>> {
        db::recipes::get_recipe(&self.pool, id).await
    }

    async fn save(&self, recipe: &Recipe) -> Result<Recipe> {
        db::recipes::save_recipe(&self.pool, recipe).await
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool> {
        db::recipes::recipe_exists(&self.pool, id).await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        db::recipes::delete_recipe(&self.pool, id).await
    }

    async fn search_by_attributes(
        &self,
        vegetarian: Option<bool>,
        servings: Option<i64>,
        instruction_text: Option<&str>,
    ) -> Result<Vec<Recipe>> {
        db::recipes::search_recipes(&self.pool, vegetarian, servings, instruction_text).await
    }

    async fn ingredient_usage(&self) -> Result<Vec<(String, i64)>> {
        db::ingredients::get_ingredients_with_count(&self.pool).await
    }
}
