use axum::{Json, extract::State};
use pantrychef_engine::{Filters, ScoredRecipe, parse_ingredients, rank};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Raw comma-separated ingredient names.
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub dietary_preference: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "minutes_or_none")]
    pub max_time: Option<f64>,
    #[serde(default)]
    pub cuisine: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub recipes: Vec<ScoredRecipe>,
}

/// Accept a time limit as a JSON number or a numeric string (form clients
/// send strings). Anything unparseable means "no limit" rather than an
/// error.
fn minutes_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }))
}

/// POST /generate - rank the recipe collection against the user's
/// ingredient set, honoring all declared filters.
pub async fn action(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let raw = request.ingredients.unwrap_or_default();
    let user_ingredients = parse_ingredients(&raw)?;

    let filters = Filters {
        dietary_preference: request.dietary_preference,
        difficulty: request.difficulty,
        max_time: request.max_time,
        cuisine: request.cuisine,
    };

    let recipes = rank(&state.recipes, &user_ingredients, &filters);
    tracing::debug!(
        results = recipes.len(),
        ingredients = user_ingredients.len(),
        "Ranked recipe collection"
    );

    Ok(Json(GenerateResponse { recipes }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_time_accepts_number_or_string() {
        let req: GenerateRequest =
            serde_json::from_value(serde_json::json!({"ingredients": "rice", "maxTime": 30}))
                .unwrap();
        assert_eq!(req.max_time, Some(30.0));

        let req: GenerateRequest =
            serde_json::from_value(serde_json::json!({"ingredients": "rice", "maxTime": "45"}))
                .unwrap();
        assert_eq!(req.max_time, Some(45.0));
    }

    #[test]
    fn test_unparseable_max_time_means_no_limit() {
        let req: GenerateRequest =
            serde_json::from_value(serde_json::json!({"ingredients": "rice", "maxTime": "soon"}))
                .unwrap();
        assert_eq!(req.max_time, None);

        let req: GenerateRequest =
            serde_json::from_value(serde_json::json!({"ingredients": "rice", "maxTime": null}))
                .unwrap();
        assert_eq!(req.max_time, None);
    }
}
