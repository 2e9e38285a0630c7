use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::models::{NewRecipe, Recipe};

/// Body of `POST /api/recipes` and `PUT /api/recipes/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub servings: i64,
}

impl From<RecipeRequest> for NewRecipe {
    fn from(request: RecipeRequest) -> Self {
        NewRecipe {
            title: request.title,
            description: request.description,
            ingredients: request.ingredients,
            instructions: request.instructions,
            vegetarian: request.vegetarian,
            servings: request.servings,
        }
    }
}

/// Recipe as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
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

impl From<Recipe> for RecipeDto {
    fn from(recipe: Recipe) -> Self {
        RecipeDto {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            vegetarian: recipe.vegetarian,
            servings: recipe.servings,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

/// Ingredient name with the number of recipes using it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientUsage {
    pub name: String,
    pub recipe_count: i64,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_uses_camel_case() {
        let recipe = Recipe::new(NewRecipe {
            title: "Toast".to_string(),
            description: None,
            ingredients: vec!["Bread".to_string()],
            instructions: "Toast the bread".to_string(),
            vegetarian: true,
            servings: 1,
        });

        let json = serde_json::to_value(RecipeDto::from(recipe)).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["ingredients"][0], "Bread");
    }

    #[test]
    fn test_request_missing_fields_default() {
        let request: RecipeRequest = serde_json::from_str(r#"{"title": "Toast"}"#).unwrap();
        assert_eq!(request.title, "Toast");
        assert!(request.ingredients.is_empty());
        assert_eq!(request.servings, 0);
    }
}
