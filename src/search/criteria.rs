use serde::{Deserialize, Serialize};

use super::filters;

/// Optional filters for a recipe search.
///
/// Every dimension left at its default is unconstrained. Empty ingredient
/// lists mean "no constraint", never "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    pub vegetarian: Option<bool>,
    pub servings: Option<i64>,
    pub include_ingredients: Vec<String>,
    pub exclude_ingredients: Vec<String>,
    pub instruction_text: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vegetarian(mut self, vegetarian: bool) -> Self {
        self.vegetarian = Some(vegetarian);
        self
    }

    pub fn servings(mut self, servings: i64) -> Self {
        self.servings = Some(servings);
        self
    }

    pub fn include<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_ingredients
            .extend(ingredients.into_iter().map(Into::into));
        self
    }

    pub fn exclude<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_ingredients
            .extend(ingredients.into_iter().map(Into::into));
        self
    }

    pub fn instruction_text(mut self, text: impl Into<String>) -> Self {
        self.instruction_text = Some(text.into());
        self
    }

    /// True when an in-memory ingredient pass is needed after the store query
    pub fn has_ingredient_filters(&self) -> bool {
        !self.include_ingredients.is_empty() || !self.exclude_ingredients.is_empty()
    }

    /// Whether an ingredient list satisfies both ingredient constraints
    pub fn matches_ingredients(&self, ingredients: &[String]) -> bool {
        filters::contains_all(ingredients, &self.include_ingredients)
            && filters::contains_none(ingredients, &self.exclude_ingredients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let criteria: SearchCriteria = serde_json::from_str("{}").unwrap();
        assert_eq!(criteria, SearchCriteria::default());
        assert!(!criteria.has_ingredient_filters());
    }

    #[test]
    fn test_deserialize_wire_names() {
        let criteria: SearchCriteria = serde_json::from_str(
            r#"{
                "vegetarian": true,
                "servings": 4,
                "includeIngredients": ["Tomato"],
                "excludeIngredients": ["Meat"],
                "instructionText": "bake"
            }"#,
        )
        .unwrap();

        assert_eq!(
            criteria,
            SearchCriteria::new()
                .vegetarian(true)
                .servings(4)
                .include(["Tomato"])
                .exclude(["Meat"])
                .instruction_text("bake")
        );
        assert!(criteria.has_ingredient_filters());
    }

    #[test]
    fn test_explicit_nulls_are_absent() {
        let criteria: SearchCriteria =
            serde_json::from_str(r#"{"vegetarian": null, "servings": null}"#).unwrap();
        assert_eq!(criteria.vegetarian, None);
        assert_eq!(criteria.servings, None);
    }
}
