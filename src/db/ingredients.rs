use crate::db::DbPool;
use crate::error::Result;
use sqlx::{Sqlite, SqliteConnection};
use std::collections::HashMap;

/// SQLite caps the number of bound parameters per statement
const MAX_IDS_PER_QUERY: usize = 500;

/// Replace a recipe's ingredient list, keeping the given order
pub async fn set_recipe_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: &str,
    ingredients: &[String],
) -> Result<()> {
    sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = ?")
        .bind(recipe_id)
        .execute(&mut *conn)
        .await?;

    for (position, name) in ingredients.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO recipe_ingredients (recipe_id, position, name)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(recipe_id)
        .bind(position as i64)
        .bind(name)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

/// Get ingredients for a recipe in their stored order
pub async fn get_recipe_ingredients<'e, E>(executor: E, recipe_id: &str) -> Result<Vec<String>>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM recipe_ingredients WHERE recipe_id = ? ORDER BY position",
    )
    .bind(recipe_id)
    .fetch_all(executor)
    .await?;

    Ok(names)
}

/// Batch fetch ingredients for many recipes (avoids one query per recipe)
pub async fn get_ingredients_for_recipes(
    conn: &mut SqliteConnection,
    recipe_ids: &[String],
) -> Result<HashMap<String, Vec<String>>> {
    let mut ingredients_map: HashMap<String, Vec<String>> = HashMap::new();

    for chunk in recipe_ids.chunks(MAX_IDS_PER_QUERY) {
        let placeholders = chunk
            .iter()
            .enumerate()
            .map(|(i, _)| format!("?{}", i + 1))
            .collect::<Vec<_>>()
            .join(",");

        let query_str = format!(
            r#"
            SELECT recipe_id, name
            FROM recipe_ingredients
            WHERE recipe_id IN ({placeholders})
            ORDER BY recipe_id, position
            "#
        );

        let mut query = sqlx::query_as::<_, (String, String)>(&query_str);
        for id in chunk {
            query = query.bind(id);
        }

        for (recipe_id, name) in query.fetch_all(&mut *conn).await? {
            ingredients_map.entry(recipe_id).or_default().push(name);
        }
    }

    Ok(ingredients_map)
}

/// Distinct ingredient names with the number of recipes using each
pub async fn get_ingredients_with_count(pool: &DbPool) -> Result<Vec<(String, i64)>> {
    let ingredients: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT name, COUNT(DISTINCT recipe_id) as count
        FROM recipe_ingredients
        GROUP BY name
        ORDER BY count DESC, name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory_pool;
    use chrono::Utc;

    async fn insert_bare_recipe(pool: &DbPool, id: &str) {
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO recipes (id, title, instructions, vegetarian, servings, created_at, updated_at)
            VALUES (?, 'Test', 'Cook it', 0, 2, ?, ?)
            "#,
        )
        .bind(id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_ingredients_keep_order_and_case() {
        let pool = init_memory_pool().await.unwrap();
        insert_bare_recipe(&pool, "r1").await;

        let ingredients = vec![
            "Tomato".to_string(),
            "basil".to_string(),
            "Tomato".to_string(),
        ];
        let mut conn = pool.acquire().await.unwrap();
        set_recipe_ingredients(&mut conn, "r1", &ingredients)
            .await
            .unwrap();
        drop(conn);

        let retrieved = get_recipe_ingredients(&pool, "r1").await.unwrap();
        assert_eq!(retrieved, ingredients);
    }

    #[tokio::test]
    async fn test_set_replaces_existing() {
        let pool = init_memory_pool().await.unwrap();
        insert_bare_recipe(&pool, "r1").await;

        let mut conn = pool.acquire().await.unwrap();
        set_recipe_ingredients(&mut conn, "r1", &["Flour".to_string(), "Butter".to_string()])
            .await
            .unwrap();
        set_recipe_ingredients(&mut conn, "r1", &["Sugar".to_string()])
            .await
            .unwrap();
        drop(conn);

        let retrieved = get_recipe_ingredients(&pool, "r1").await.unwrap();
        assert_eq!(retrieved, vec!["Sugar".to_string()]);
    }

    #[tokio::test]
    async fn test_batch_fetch_and_counts() {
        let pool = init_memory_pool().await.unwrap();
        insert_bare_recipe(&pool, "r1").await;
        insert_bare_recipe(&pool, "r2").await;

        let mut conn = pool.acquire().await.unwrap();
        set_recipe_ingredients(&mut conn, "r1", &["Eggs".to_string(), "Milk".to_string()])
            .await
            .unwrap();
        set_recipe_ingredients(&mut conn, "r2", &["Eggs".to_string()])
            .await
            .unwrap();
        let map = get_ingredients_for_recipes(&mut conn, &["r1".to_string(), "r2".to_string()])
            .await
            .unwrap();
        drop(conn);
        assert_eq!(map["r1"], vec!["Eggs".to_string(), "Milk".to_string()]);
        assert_eq!(map["r2"], vec!["Eggs".to_string()]);

        let counts = get_ingredients_with_count(&pool).await.unwrap();
        assert_eq!(counts[0], ("Eggs".to_string(), 2));
        assert_eq!(counts[1], ("Milk".to_string(), 1));
    }
}
