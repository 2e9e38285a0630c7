//! Ingredient set predicates.
//!
//! Names are compared exactly: no trimming, no case folding.

use std::collections::HashSet;

use crate::db::models::Recipe;

/// `required ⊆ ingredients`. An empty `required` always matches.
pub fn contains_all(ingredients: &[String], required: &[String]) -> bool {
    if required.is_empty() {
        return true;
    }
    let present: HashSet<&str> = ingredients.iter().map(String::as_str).collect();
    required.iter().all(|name| present.contains(name.as_str()))
}

/// `ingredients ∩ excluded = ∅`. An empty `excluded` always matches.
pub fn contains_none(ingredients: &[String], excluded: &[String]) -> bool {
    if excluded.is_empty() {
        return true;
    }
    let excluded: HashSet<&str> = excluded.iter().map(String::as_str).collect();
    !ingredients.iter().any(|name| excluded.contains(name.as_str()))
}

/// Keep recipes that contain every ingredient in `include`
pub fn filter_by_included_ingredients(recipes: Vec<Recipe>, include: &[String]) -> Vec<Recipe> {
    recipes
        .into_iter()
        .filter(|recipe| contains_all(&recipe.ingredients, include))
        .collect()
}

/// Keep recipes that contain none of the ingredients in `exclude`
pub fn filter_by_excluded_ingredients(recipes: Vec<Recipe>, exclude: &[String]) -> Vec<Recipe> {
    recipes
        .into_iter()
        .filter(|recipe| contains_none(&recipe.ingredients, exclude))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_contains_all() {
        let ingredients = names(&["Pasta", "Tomato", "Basil", "Cheese"]);

        assert!(contains_all(&ingredients, &names(&["Tomato", "Basil"])));
        assert!(!contains_all(&ingredients, &names(&["Tomato", "Mushroom"])));
        assert!(contains_all(&ingredients, &[]));
        // duplicates in the required list don't change the outcome
        assert!(contains_all(&ingredients, &names(&["Basil", "Basil"])));
    }

    #[test]
    fn test_contains_none() {
        let ingredients = names(&["Pasta", "Tomato", "Basil", "Cheese"]);

        assert!(contains_none(&ingredients, &names(&["Meat"])));
        assert!(!contains_none(&ingredients, &names(&["Tomato"])));
        assert!(contains_none(&ingredients, &[]));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let ingredients = names(&["Tomato"]);

        assert!(!contains_all(&ingredients, &names(&["tomato"])));
        assert!(contains_none(&ingredients, &names(&["tomato"])));
        assert!(!contains_all(&ingredients, &names(&["Tomato "])));
    }

    #[test]
    fn test_no_ingredients() {
        assert!(!contains_all(&[], &names(&["Salt"])));
        assert!(contains_none(&[], &names(&["Salt"])));
    }
}
