use recipes::db::models::{NewRecipe, Recipe};
use recipes::search::{self, SearchCriteria};
use recipes::{db, RecipeStore, SqliteRecipeStore};

fn new_recipe(
    title: &str,
    ingredients: &[&str],
    instructions: &str,
    vegetarian: bool,
    servings: i64,
) -> Recipe {
    Recipe::new(NewRecipe {
        title: title.to_string(),
        description: None,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: instructions.to_string(),
        vegetarian,
        servings,
    })
}

async fn seeded_store() -> SqliteRecipeStore {
    let pool = db::init_memory_pool()
        .await
        .expect("Failed to create in-memory database");
    let store = SqliteRecipeStore::new(pool);

    let recipes = [
        new_recipe(
            "Spaghetti Carbonara",
            &["Pasta", "Eggs", "Cheese", "Bacon"],
            "Cook pasta. Fry the bacon and mix with eggs and cheese.",
            false,
            4,
        ),
        new_recipe(
            "Vegetable Stir Fry",
            &["Broccoli", "Carrots", "Peppers", "Soy Sauce"],
            "Stir fry the vegetables in a hot wok with soy sauce.",
            true,
            2,
        ),
        new_recipe(
            "Pasta Pomodoro",
            &["Pasta", "Tomato", "Basil", "Cheese"],
            "Simmer the tomato sauce, toss with pasta and BASIL.",
            true,
            4,
        ),
    ];

    for recipe in &recipes {
        store.save(recipe).await.expect("Failed to save recipe");
    }

    store
}

fn titles(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.title.as_str()).collect()
}

#[tokio::test]
async fn test_empty_criteria_matches_full_scan() {
    let store = seeded_store().await;

    let all = store.find_all().await.unwrap();
    let results = search::search(&store, &SearchCriteria::new()).await.unwrap();

    assert_eq!(results, all);
    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn test_empty_ingredient_lists_are_unconstrained() {
    let store = seeded_store().await;

    let criteria = SearchCriteria {
        vegetarian: Some(true),
        include_ingredients: Vec::new(),
        exclude_ingredients: Vec::new(),
        ..Default::default()
    };
    let results = search::search(&store, &criteria).await.unwrap();
    let attribute_only = store
        .search_by_attributes(Some(true), None, None)
        .await
        .unwrap();

    assert_eq!(results, attribute_only);
}

#[tokio::test]
async fn test_vegetarian_scenario() {
    let store = seeded_store().await;

    let results = search::search(&store, &SearchCriteria::new().vegetarian(true))
        .await
        .unwrap();
    assert_eq!(titles(&results), vec!["Vegetable Stir Fry", "Pasta Pomodoro"]);
}

#[tokio::test]
async fn test_include_and_exclude_scenarios() {
    let store = seeded_store().await;

    let results = search::search(&store, &SearchCriteria::new().include(["Tomato", "Basil"]))
        .await
        .unwrap();
    assert_eq!(titles(&results), vec!["Pasta Pomodoro"]);

    let results = search::search(&store, &SearchCriteria::new().include(["Tomato", "Mushroom"]))
        .await
        .unwrap();
    assert!(results.is_empty());

    let results = search::search(&store, &SearchCriteria::new().exclude(["Meat"]))
        .await
        .unwrap();
    assert_eq!(results.len(), 3);

    let results = search::search(&store, &SearchCriteria::new().exclude(["Tomato"]))
        .await
        .unwrap();
    assert_eq!(
        titles(&results),
        vec!["Spaghetti Carbonara", "Vegetable Stir Fry"]
    );
}

#[tokio::test]
async fn test_ingredient_matching_is_exact() {
    let store = seeded_store().await;

    let results = search::search(&store, &SearchCriteria::new().include(["tomato"]))
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_all_dimensions_combined() {
    let store = seeded_store().await;

    let criteria = SearchCriteria::new()
        .vegetarian(true)
        .servings(4)
        .include(["Pasta"])
        .exclude(["Bacon"])
        .instruction_text("basil");
    let results = search::search(&store, &criteria).await.unwrap();
    assert_eq!(titles(&results), vec!["Pasta Pomodoro"]);

    let criteria = criteria.servings(2);
    let results = search::search(&store, &criteria).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_instruction_text_is_case_insensitive_contains() {
    let store = seeded_store().await;

    let results = search::search(&store, &SearchCriteria::new().instruction_text("FRY"))
        .await
        .unwrap();
    assert_eq!(
        titles(&results),
        vec!["Spaghetti Carbonara", "Vegetable Stir Fry"]
    );
}

#[tokio::test]
async fn test_results_satisfy_set_predicates() {
    let store = seeded_store().await;
    let criteria = SearchCriteria::new().include(["Cheese"]).exclude(["Bacon"]);

    let results = search::search(&store, &criteria).await.unwrap();
    assert!(!results.is_empty());

    for recipe in &results {
        assert!(recipe.ingredients.iter().any(|i| i == "Cheese"));
        assert!(!recipe.ingredients.iter().any(|i| i == "Bacon"));
    }
}
