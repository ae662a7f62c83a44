pub mod catalog;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

/// Create the app router for a pre-loaded recipe collection.
///
/// Useful for integration testing without starting the full server.
pub fn create_app(recipes: Vec<pantrychef_engine::Recipe>) -> axum::Router {
    routes::router(AppState {
        recipes: std::sync::Arc::new(recipes),
    })
}
