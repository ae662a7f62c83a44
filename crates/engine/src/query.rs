use crate::error::EngineError;

/// Parse a raw comma-separated ingredient string into the user ingredient
/// set: split on commas, trim, lowercase, drop empties, and de-duplicate
/// by exact string value preserving first-seen order.
///
/// De-duplication is verbatim only: entries that the matcher would treat
/// as equivalent ("cilantro" and "coriander") remain distinct and each
/// counts on its own during coverage scoring.
///
/// An input with no usable entries is the engine's one hard error.
pub fn parse_ingredients(raw: &str) -> Result<Vec<String>, EngineError> {
    let mut seen = std::collections::HashSet::new();
    let ingredients: Vec<String> = raw
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_string()))
        .map(str::to_string)
        .collect();

    if ingredients.is_empty() {
        return Err(EngineError::EmptyIngredients);
    }
    Ok(ingredients)
}
