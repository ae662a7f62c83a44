use thiserror::Error;

/// The engine's single validation failure. Everything else degrades to
/// permissive defaults instead of erroring.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Ingredients are required")]
    EmptyIngredients,
}
