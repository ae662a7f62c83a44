use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Ready once the recipe collection is loaded and non-empty.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    if state.recipes.is_empty() {
        tracing::error!("Readiness check failed: recipe collection is empty");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": "recipe_data_unavailable"
            })),
        )
    } else {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "recipes": state.recipes.len()
            })),
        )
    }
}
