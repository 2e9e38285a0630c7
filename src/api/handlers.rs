use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::{api::models::*, search::SearchCriteria, service::RecipeService, Result};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::SqlitePool,
    pub service: RecipeService,
}

/// GET /api/recipes - List all recipes
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<RecipeDto>>> {
    debug!("List recipes request");
    Ok(Json(state.service.get_all_recipes().await?))
}

/// GET /api/recipes/:id - Get recipe details
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecipeDto>> {
    debug!("Get recipe request: {}", id);
    Ok(Json(state.service.get_recipe(id).await?))
}

/// POST /api/recipes - Create a recipe
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(request): Json<RecipeRequest>,
) -> Result<(StatusCode, Json<RecipeDto>)> {
    debug!("Create recipe request: {:?}", request.title);
    let created = state.service.create_recipe(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/recipes/:id - Replace a recipe's contents
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RecipeRequest>,
) -> Result<Json<RecipeDto>> {
    debug!("Update recipe request: {}", id);
    Ok(Json(state.service.update_recipe(id, request).await?))
}

/// DELETE /api/recipes/:id - Delete a recipe
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    debug!("Delete recipe request: {}", id);
    state.service.delete_recipe(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/recipes/search - Filter recipes
pub async fn search_recipes(
    State(state): State<AppState>,
    Json(criteria): Json<SearchCriteria>,
) -> Result<Json<Vec<RecipeDto>>> {
    debug!("Search request: {:?}", criteria);
    Ok(Json(state.service.search_recipes(&criteria).await?))
}

/// GET /api/ingredients - Ingredient names with usage counts
pub async fn list_ingredients(State(state): State<AppState>) -> Result<Json<Vec<IngredientUsage>>> {
    debug!("List ingredients request");

    Ok(Json(state.service.get_ingredient_usage().await?))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

/// GET /ready - Readiness check endpoint
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<ReadinessResponse>> {
    let db_healthy = sqlx::query("SELECT 1").fetch_one(&state.pool).await.is_ok();

    Ok(Json(ReadinessResponse {
        ready: db_healthy,
        database: if db_healthy { "ok" } else { "error" }.to_string(),
    }))
}
