use crate::db::{ingredients, models::*, DbPool};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// Attach ingredient lists to recipe rows, keeping row order.
///
/// Runs on the caller's connection so rows and ingredients come from the
/// same read transaction.
async fn hydrate(conn: &mut SqliteConnection, rows: Vec<RecipeRow>) -> Result<Vec<Recipe>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
    let mut ingredients_map = ingredients::get_ingredients_for_recipes(conn, &ids).await?;

    rows.into_iter()
        .map(|row| {
            let ingredients = ingredients_map.remove(&row.id).unwrap_or_default();
            row.into_recipe(ingredients)
        })
        .collect()
}

async fn insert_recipe(
    conn: &mut SqliteConnection,
    recipe: &Recipe,
    now: DateTime<Utc>,
) -> Result<RecipeRow> {
    let row = sqlx::query_as::<_, RecipeRow>(
        r#"
        INSERT INTO recipes (
            id, title, description, instructions, vegetarian, servings,
            created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(recipe.id.to_string())
    .bind(&recipe.title)
    .bind(&recipe.description)
    .bind(&recipe.instructions)
    .bind(recipe.vegetarian)
    .bind(recipe.servings)
    .bind(now)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row)
}

async fn update_recipe(
    conn: &mut SqliteConnection,
    recipe: &Recipe,
    now: DateTime<Utc>,
) -> Result<RecipeRow> {
    // created_at is never rewritten
    let row = sqlx::query_as::<_, RecipeRow>(
        r#"
        UPDATE recipes
        SET title = ?, description = ?, instructions = ?,
            vegetarian = ?, servings = ?, updated_at = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(&recipe.title)
    .bind(&recipe.description)
    .bind(&recipe.instructions)
    .bind(recipe.vegetarian)
    .bind(recipe.servings)
    .bind(now)
    .bind(recipe.id.to_string())
    .fetch_one(&mut *conn)
    .await?;

    Ok(row)
}

/// Insert the recipe if its id is unknown, otherwise update it.
///
/// The recipe row and its ingredient list are written in one transaction.
/// `updated_at` is always set to the current time.
pub async fn save_recipe(pool: &DbPool, recipe: &Recipe) -> Result<Recipe> {
    let now = Utc::now();
    let id = recipe.id.to_string();

    let mut tx = pool.begin().await?;

    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM recipes WHERE id = ?)")
        .bind(&id)
        .fetch_one(&mut *tx)
        .await?;

    let row = if exists {
        update_recipe(&mut *tx, recipe, now).await?
    } else {
        insert_recipe(&mut *tx, recipe, now).await?
    };

    ingredients::set_recipe_ingredients(&mut *tx, &id, &recipe.ingredients).await?;
    let stored_ingredients = ingredients::get_recipe_ingredients(&mut *tx, &id).await?;

    tx.commit().await?;

    row.into_recipe(stored_ingredients)
}

/// Get recipe by ID
pub async fn get_recipe(pool: &DbPool, recipe_id: Uuid) -> Result<Option<Recipe>> {
    let id = recipe_id.to_string();
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, RecipeRow>("SELECT * FROM recipes WHERE id = ?")
        .bind(&id)
        .fetch_optional(&mut *tx)
        .await?;

    let recipe = match row {
        Some(row) => {
            let ingredients = ingredients::get_recipe_ingredients(&mut *tx, &id).await?;
            Some(row.into_recipe(ingredients)?)
        }
        None => None,
    };

    tx.commit().await?;
    Ok(recipe)
}

/// List all recipes, oldest first
pub async fn list_all_recipes(pool: &DbPool) -> Result<Vec<Recipe>> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query_as::<_, RecipeRow>("SELECT * FROM recipes ORDER BY created_at, id")
        .fetch_all(&mut *tx)
        .await?;
    let recipes = hydrate(&mut *tx, rows).await?;

    tx.commit().await?;
    Ok(recipes)
}

/// Check whether a recipe exists
pub async fn recipe_exists(pool: &DbPool, recipe_id: Uuid) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM recipes WHERE id = ?)")
        .bind(recipe_id.to_string())
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

/// Delete recipe; its ingredients go with it via ON DELETE CASCADE
pub async fn delete_recipe(pool: &DbPool, recipe_id: Uuid) -> Result<()> {
    let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
        .bind(recipe_id.to_string())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::RecipeNotFound(recipe_id));
    }

    Ok(())
}

/// Count all recipes
pub async fn count_all_recipes(pool: &DbPool) -> Result<i64> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipes")
        .fetch_one(pool)
        .await?;
    Ok(count.0)
}

/// Filter recipes by vegetarian flag, servings and instruction text.
///
/// Each `None` leaves its attribute unconstrained. The flag and servings are
/// evaluated by SQLite; `instruction_text` is a Unicode case-insensitive
/// substring match applied to the fetched rows, since SQLite's `LOWER` only
/// folds ASCII. Rows and ingredients are read in one transaction.
pub async fn search_recipes(
    pool: &DbPool,
    vegetarian: Option<bool>,
    servings: Option<i64>,
    instruction_text: Option<&str>,
) -> Result<Vec<Recipe>> {
    let needle = instruction_text.map(str::to_lowercase);
    let mut tx = pool.begin().await?;

    let rows = sqlx::query_as::<_, RecipeRow>(
        r#"
        SELECT * FROM recipes
        WHERE (?1 IS NULL OR vegetarian = ?1)
          AND (?2 IS NULL OR servings = ?2)
        ORDER BY created_at, id
        "#,
    )
    .bind(vegetarian)
    .bind(servings)
    .fetch_all(&mut *tx)
    .await?;

    let rows: Vec<RecipeRow> = match needle.as_deref() {
        Some(needle) => rows
            .into_iter()
            .filter(|row| instructions_contain(&row.instructions, needle))
            .collect(),
        None => rows,
    };
    let recipes = hydrate(&mut *tx, rows).await?;

    tx.commit().await?;
    Ok(recipes)
}
