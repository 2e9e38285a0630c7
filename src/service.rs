use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::models::{IngredientUsage, RecipeDto, RecipeRequest};
use crate::db::models::Recipe;
use crate::error::{Error, Result};
use crate::search::{self, SearchCriteria};
use crate::store::RecipeStore;
use crate::utils::validation::validate_recipe_request;

/// Recipe CRUD and search on top of a [`RecipeStore`]
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_recipes(&self) -> Result<Vec<RecipeDto>> {
        let recipes = self.store.find_all().await?;
        Ok(recipes.into_iter().map(RecipeDto::from).collect())
    }

    pub async fn get_recipe(&self, id: Uuid) -> Result<RecipeDto> {
        let recipe = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(Error::RecipeNotFound(id))?;
        Ok(recipe.into())
    }

    pub async fn create_recipe(&self, request: RecipeRequest) -> Result<RecipeDto> {
        validate_recipe_request(&request)?;

        let recipe = Recipe::new(request.into());
        let saved = self.store.save(&recipe).await?;
        info!("Created recipe {} ({})", saved.id, saved.title);

        Ok(saved.into())
    }

    pub async fn update_recipe(&self, id: Uuid, request: RecipeRequest) -> Result<RecipeDto> {
        validate_recipe_request(&request)?;

        let mut recipe = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(Error::RecipeNotFound(id))?;

        recipe.apply(request.into());
        let saved = self.store.save(&recipe).await?;
        info!("Updated recipe {}", saved.id);

        Ok(saved.into())
    }

    pub async fn delete_recipe(&self, id: Uuid) -> Result<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(Error::RecipeNotFound(id));
        }

        self.store.delete_by_id(id).await?;
        info!("Deleted recipe {}", id);
        Ok(())
    }

    pub async fn search_recipes(&self, criteria: &SearchCriteria) -> Result<Vec<RecipeDto>> {
        debug!("Searching recipes: {:?}", criteria);
        let recipes = search::search(self.store.as_ref(), criteria).await?;
        Ok(recipes.into_iter().map(RecipeDto::from).collect())
    }

    pub async fn get_ingredient_usage(&self) -> Result<Vec<IngredientUsage>> {
        let usage = self.store.ingredient_usage().await?;
        Ok(usage
            .into_iter()
            .map(|(name, recipe_count)| IngredientUsage { name, recipe_count })
            .collect())
    }
}
