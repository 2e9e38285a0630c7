use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use super::RecipeStore;
use crate::db::models::{instructions_contain, Recipe};
use crate::error::{Error, Result};

/// Recipes held in insertion order behind a lock
#[derive(Default)]
pub struct InMemoryRecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with already-built recipes, kept as given
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Recipe>>> {
        self.recipes
            .read()
            .map_err(|_| Error::Internal("recipe store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Recipe>>> {
        self.recipes
            .write()
            .map_err(|_| Error::Internal("recipe store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn find_all(&self) -> Result<Vec<Recipe>> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>> {
        Ok(self.read()?.iter().find(|r| r.id == id).cloned())
    }

    async fn save(&self, recipe: &Recipe) -> Result<Recipe> {
        let now = Utc::now();
        let mut recipes = self.write()?;

        match recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = recipe.clone();
                existing.created_at = created_at;
                existing.updated_at = now;
                Ok(existing.clone())
            }
            None => {
                let mut stored = recipe.clone();
                stored.created_at = now;
                stored.updated_at = now;
                recipes.push(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool> {
        Ok(self.read()?.iter().any(|r| r.id == id))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        let mut recipes = self.write()?;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);

        if recipes.len() == before {
            return Err(Error::RecipeNotFound(id));
        }
        Ok(())
    }

    async fn search_by_attributes(
        &self,
        vegetarian: Option<bool>,
        servings: Option<i64>,
        instruction_text: Option<&str>,
    ) -> Result<Vec<Recipe>> {
        let needle = instruction_text.map(str::to_lowercase);

        Ok(self
            .read()?
            .iter()
            .filter(|r| vegetarian.map_or(true, |v| r.vegetarian == v))
            .filter(|r| servings.map_or(true, |s| r.servings == s))
            .filter(|r| {
                needle
                    .as_deref()
                    .map_or(true, |n| instructions_contain(&r.instructions, n))
            })
            .cloned()
            .collect())
    }

    async fn ingredient_usage(&self) -> Result<Vec<(String, i64)>> {
        let mut counts: BTreeMap<String, i64> = BTreeMap::new();

        for recipe in self.read()?.iter() {
            let distinct: HashSet<&str> = recipe.ingredients.iter().map(String::as_str).collect();
            for name in distinct {
                *counts.entry(name.to_string()).or_default() += 1;
            }
        }

        let mut usage: Vec<(String, i64)> = counts.into_iter().collect();
        usage.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(usage)
    }
}
