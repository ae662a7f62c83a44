use axum::Json;
use pantrychef_engine::substitutions;
use serde_json::{Value, json};

use crate::error::AppError;

/// GET /substitutions - the full substitution table, for clients that
/// want to render alternatives up front.
pub async fn table() -> Json<Value> {
    Json(json!({ "substitutions": substitutions::table() }))
}

/// POST /substitutions - suggestions for a specific ingredient list
/// (typically the missing ingredients of a chosen recipe).
pub async fn suggest(Json(body): Json<Value>) -> Result<Json<Value>, AppError> {
    let Some(list) = body.get("ingredients").and_then(Value::as_array) else {
        return Err(AppError::ValidationError(
            "ingredients must be an array".to_string(),
        ));
    };

    let ingredients: Vec<String> = list
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();

    Ok(Json(
        json!({ "substitutions": substitutions::suggestions_for(&ingredients) }),
    ))
}
