// Validation utilities
use crate::api::models::RecipeRequest;
use crate::error::{Error, Result};
use tracing::debug;

/// Check a create/update request, reporting every violation at once
pub fn validate_recipe_request(request: &RecipeRequest) -> Result<()> {
    let mut problems = Vec::new();

    if request.title.trim().is_empty() {
        problems.push("Title is required");
    }

    if request.ingredients.is_empty() {
        problems.push("At least one ingredient is required");
    }

    if request.instructions.trim().is_empty() {
        problems.push("Instructions are required");
    }

    if request.servings < 1 {
        problems.push("Servings must be at least 1");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        debug!("Rejected recipe request: {:?}", problems);
        Err(Error::Validation(problems.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RecipeRequest {
        RecipeRequest {
            title: "Omelette".to_string(),
            description: None,
            ingredients: vec!["Eggs".to_string()],
            instructions: "Beat and cook".to_string(),
            vegetarian: true,
            servings: 1,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_recipe_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_each_rule() {
        let mut request = valid_request();
        request.title = "   ".to_string();
        assert!(validate_recipe_request(&request).is_err());

        let mut request = valid_request();
        request.ingredients.clear();
        assert!(validate_recipe_request(&request).is_err());

        let mut request = valid_request();
        request.instructions = String::new();
        assert!(validate_recipe_request(&request).is_err());

        let mut request = valid_request();
        request.servings = 0;
        assert!(validate_recipe_request(&request).is_err());
    }

    #[test]
    fn test_all_violations_reported() {
        let err = validate_recipe_request(&RecipeRequest::default()).unwrap_err();
        match err {
            Error::Validation(msg) => {
                assert!(msg.contains("Title is required"));
                assert!(msg.contains("At least one ingredient is required"));
                assert!(msg.contains("Instructions are required"));
                assert!(msg.contains("Servings must be at least 1"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
