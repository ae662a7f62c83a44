/// Normalize an ingredient name for comparison: lowercase and trim.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Fold plural/singular ingredient name variants together using a fixed
/// set of suffix rules, checked in order. Only the first matching rule
/// applies:
///
/// 1. `ies` → `y` ("berries" → "berry")
/// 2. `oes` stripped ("tomatoes" → "tomat" — not a correct lemma, but both
///    sides of a comparison go through the same rule)
/// 3. `es` stripped ("boxes" → "box")
/// 4. trailing `s` stripped unless the word ends in `ss` ("peas" → "pea",
///    "glass" → "glass")
///
/// This is a heuristic for comparing ingredient names, not a linguistic
/// stemmer.
pub fn stem(word: &str) -> String {
    let w = normalize(word);
    if let Some(base) = w.strip_suffix("ies") {
        return format!("{base}y");
    }
    if w.ends_with("oes") {
        return w[..w.len() - 3].to_string();
    }
    if let Some(base) = w.strip_suffix("es") {
        return base.to_string();
    }
    if w.ends_with('s') && !w.ends_with("ss") {
        return w[..w.len() - 1].to_string();
    }
    w
}
