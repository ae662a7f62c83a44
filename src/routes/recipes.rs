use axum::{Json, extract::State};
use pantrychef_engine::recipe::{NutritionBreakdown, Recipe};
use serde::Serialize;

use crate::routes::AppState;

/// A recipe shaped for clients: steps always present (generic fallback
/// when the author supplied none) and nutrition normalized per serving.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dietary_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_servings: Option<f64>,
    pub steps: Vec<String>,
    pub nutrition: NutritionBreakdown,
}

impl From<&Recipe> for EnrichedRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            cuisine: recipe.cuisine.clone(),
            dietary_tags: recipe.dietary_tags.clone(),
            difficulty: recipe.difficulty.clone(),
            time: recipe.time,
            base_servings: recipe.base_servings,
            steps: recipe.steps_or_default(),
            nutrition: recipe.nutrition_breakdown(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecipesResponse {
    pub recipes: Vec<EnrichedRecipe>,
}

/// GET /recipes - the full collection, enriched but unranked.
pub async fn index(State(state): State<AppState>) -> Json<RecipesResponse> {
    let recipes = state.recipes.iter().map(EnrichedRecipe::from).collect();
    Json(RecipesResponse { recipes })
}
