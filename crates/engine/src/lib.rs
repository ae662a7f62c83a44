//! Ingredient-matching and recipe-ranking engine.
//!
//! Fully synchronous and stateless: the recipe collection is read-only
//! input, every lookup table is a process-wide constant, and ranking the
//! same input twice yields the same output. No I/O happens here.

pub mod dietary;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod query;
pub mod rank;
pub mod recipe;
pub mod score;
pub mod substitutions;
pub mod synonyms;

pub use error::EngineError;
pub use matcher::ingredients_match;
pub use query::parse_ingredients;
pub use rank::{Filters, rank};
pub use recipe::{Recipe, known_cuisines, known_ingredients};
pub use score::{ScoredRecipe, score};
