use crate::api::models::RecipeDto;
use crate::search::SearchCriteria;
use crate::{Error, Result};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Turn a non-success response into an error, passing successes through
async fn check_response(response: Response, id: Option<Uuid>) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return Err(Error::RecipeNotFound(id));
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    };

    if status == StatusCode::BAD_REQUEST {
        Err(Error::Validation(message))
    } else {
        Err(Error::Internal(format!("Server returned {status}: {message}")))
    }
}

/// GET /api/recipes
pub async fn fetch_recipes(server_url: &str) -> Result<Vec<RecipeDto>> {
    let response = Client::new()
        .get(format!("{server_url}/api/recipes"))
        .send()
        .await?;

    Ok(check_response(response, None).await?.json().await?)
}

/// GET /api/recipes/:id
pub async fn fetch_recipe(server_url: &str, id: Uuid) -> Result<RecipeDto> {
    let response = Client::new()
        .get(format!("{server_url}/api/recipes/{id}"))
        .send()
        .await?;

    Ok(check_response(response, Some(id)).await?.json().await?)
}

/// POST /api/recipes/search
pub async fn search_remote(server_url: &str, criteria: &SearchCriteria) -> Result<Vec<RecipeDto>> {
    let response = Client::new()
        .post(format!("{server_url}/api/recipes/search"))
        .json(criteria)
        .send()
        .await?;

    Ok(check_response(response, None).await?.json().await?)
}

/// DELETE /api/recipes/:id
pub async fn delete_remote(server_url: &str, id: Uuid) -> Result<()> {
    let response = Client::new()
        .delete(format!("{server_url}/api/recipes/{id}"))
        .send()
        .await?;

    check_response(response, Some(id)).await?;
    Ok(())
}

/// List every recipe
pub async fn list(server_url: &str) -> Result<()> {
    let recipes = fetch_recipes(server_url).await?;
    print_recipe_table(&recipes);
    Ok(())
}

/// Show one recipe in full
pub async fn show(server_url: &str, id: Uuid) -> Result<()> {
    let recipe = fetch_recipe(server_url, id).await?;

    println!("{}", recipe.title);
    println!("{}", "=".repeat(recipe.title.chars().count()));
    if let Some(description) = &recipe.description {
        if !description.is_empty() {
            println!("{description}\n");
        }
    }
    println!("ID:         {}", recipe.id);
    println!("Servings:   {}", recipe.servings);
    println!("Vegetarian: {}", if recipe.vegetarian { "yes" } else { "no" });
    println!("Updated:    {}", recipe.updated_at.to_rfc3339());
    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }
    println!("\nInstructions:\n{}", recipe.instructions);

    Ok(())
}

/// Search and print matching recipes
pub async fn search(server_url: &str, criteria: &SearchCriteria) -> Result<()> {
    let recipes = search_remote(server_url, criteria).await?;
    print_recipe_table(&recipes);
    Ok(())
}

/// Delete a recipe by ID
pub async fn delete(server_url: &str, id: Uuid) -> Result<()> {
    delete_remote(server_url, id).await?;
    println!("✓ Deleted recipe {id}");
    Ok(())
}

fn print_recipe_table(recipes: &[RecipeDto]) {
    if recipes.is_empty() {
        println!("No recipes found");
        return;
    }

    println!("\nFound {} recipes:\n", recipes.len());
    println!("{:<36}  {:<40} {:<4} {:<8}", "ID", "Title", "Veg", "Servings");
    println!("{}", "-".repeat(92));

    for recipe in recipes {
        println!(
            "{:<36}  {:<40} {:<4} {:<8}",
            recipe.id,
            truncate(&recipe.title, 40),
            if recipe.vegetarian { "yes" } else { "no" },
            recipe.servings
        );
    }

    println!("\nTo see a recipe: recipes show <ID>");
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
