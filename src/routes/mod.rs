use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use pantrychef_engine::Recipe;
use tower_http::trace::TraceLayer;

mod catalog;
mod generate;
mod health;
mod recipes;
mod substitutions;

#[derive(Clone)]
pub struct AppState {
    /// The read-only recipe collection, shared across handlers.
    pub recipes: Arc<Vec<Recipe>>,
}

async fn index() -> &'static str {
    "PantryChef backend is running"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/generate", post(generate::action))
        .route("/recipes", get(recipes::index))
        .route("/ingredients", get(catalog::ingredients))
        .route("/cuisines", get(catalog::cuisines))
        .route(
            "/substitutions",
            get(substitutions::table).post(substitutions::suggest),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
