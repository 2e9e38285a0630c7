//! Recipe search.
//!
//! Attribute predicates (vegetarian, servings, instruction text) are pushed
//! down to the store in a single query. Ingredient inclusion and exclusion are
//! set tests over each recipe's ingredient list and run in memory on the
//! store's result, include first and then exclude. Both passes are pure
//! filters, so their order does not affect the result.

pub mod criteria;
pub mod filters;

pub use criteria::SearchCriteria;
pub use filters::{filter_by_excluded_ingredients, filter_by_included_ingredients};

use tracing::debug;

use crate::db::models::Recipe;
use crate::error::Result;
use crate::store::RecipeStore;

/// Return the recipes matching every present dimension of `criteria`,
/// in the order the store yields them.
pub async fn search<S>(store: &S, criteria: &SearchCriteria) -> Result<Vec<Recipe>>
where
    S: RecipeStore + ?Sized,
{
    let mut results = store
        .search_by_attributes(
            criteria.vegetarian,
            criteria.servings,
            criteria.instruction_text.as_deref(),
        )
        .await?;

    if !criteria.has_ingredient_filters() {
        debug!("Attribute search matched {} recipes", results.len());
        return Ok(results);
    }

    let candidates = results.len();

    if !criteria.include_ingredients.is_empty() {
        results = filter_by_included_ingredients(results, &criteria.include_ingredients);
    }

    if !criteria.exclude_ingredients.is_empty() {
        results = filter_by_excluded_ingredients(results, &criteria.exclude_ingredients);
    }

    debug!(
        "Ingredient filters kept {} of {} recipes",
        results.len(),
        candidates
    );

    Ok(results)
}
