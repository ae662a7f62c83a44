use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantrychef_engine::EngineError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Recipe data error: {0}")]
    DataError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Engine(EngineError::EmptyIngredients) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::DataError(msg) => {
                tracing::error!("Recipe data error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
