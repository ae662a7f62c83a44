use anyhow::{Context, Result};
use pantrychef_engine::Recipe;

/// Load the static recipe collection from a JSON file.
///
/// Called once at process start; the engine treats the result as
/// read-only for the life of the process. Individual records with missing
/// optional fields deserialize with permissive defaults (empty ingredient
/// list, no tags) rather than failing the whole load.
pub fn load_recipes(path: &str) -> Result<Vec<Recipe>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read recipe data from {path}"))?;
    let recipes: Vec<Recipe> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse recipe data in {path}"))?;

    tracing::info!(count = recipes.len(), path, "Recipe collection loaded");
    Ok(recipes)
}
