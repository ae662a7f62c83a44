use axum::{Json, extract::State};
use pantrychef_engine::{known_cuisines, known_ingredients};
use serde_json::{Value, json};

use crate::routes::AppState;

/// GET /ingredients - de-duplicated, alphabetical ingredient names across
/// the collection plus common pantry items, for pickers.
pub async fn ingredients(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "ingredients": known_ingredients(&state.recipes) }))
}

/// GET /cuisines - de-duplicated, alphabetical cuisine labels.
pub async fn cuisines(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "cuisines": known_cuisines(&state.recipes) }))
}
