use std::collections::HashMap;
use std::sync::LazyLock;

/// Hand-curated alias table for regional and alternate ingredient names.
///
/// Lookups are directional: an entry maps one spelling to the canonical
/// form the matcher should also try. Most pairs are listed in both
/// directions, but some are deliberately one-way ("spring onion" maps to
/// "green onion", never the reverse; the oil varieties all collapse onto
/// plain "oil").
static SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("coriander", "cilantro"),
        ("cilantro", "coriander"),
        ("capsicum", "bell pepper"),
        ("bell pepper", "capsicum"),
        ("scallion", "green onion"),
        ("green onion", "scallion"),
        ("spring onion", "green onion"),
        ("courgette", "zucchini"),
        ("zucchini", "courgette"),
        ("aubergine", "eggplant"),
        ("eggplant", "aubergine"),
        ("prawns", "shrimp"),
        ("shrimp", "prawns"),
        ("curd", "yogurt"),
        ("yogurt", "curd"),
        ("heavy cream", "cream"),
        ("whipping cream", "cream"),
        ("spaghetti", "pasta"),
        ("penne", "pasta"),
        ("linguine", "pasta"),
        ("basmati rice", "rice"),
        ("jasmine rice", "rice"),
        ("brown rice", "rice"),
        ("olive oil", "oil"),
        ("coconut oil", "oil"),
        ("vegetable oil", "oil"),
    ])
});

/// Look up the registered alias for an ingredient name, if any.
///
/// The input is expected to already be normalized (lowercase, trimmed).
/// Absence of a key means "no known alias", not an error.
pub fn resolve(name: &str) -> Option<&'static str> {
    SYNONYMS.get(name).copied()
}
