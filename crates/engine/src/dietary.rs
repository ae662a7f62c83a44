use std::collections::HashSet;
use std::sync::LazyLock;

use crate::recipe::Recipe;

static NON_VEG_INGREDIENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "chicken", "egg", "beef", "pork", "fish", "mutton", "meat", "shrimp",
        "prawn", "lamb", "turkey", "bacon", "ham", "sausage", "crab", "lobster",
    ])
});

static DAIRY_INGREDIENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "milk", "cheese", "butter", "cream", "paneer", "yogurt", "curd", "ghee",
        "whey", "cottage cheese", "mozzarella", "parmesan",
    ])
});

static GLUTEN_INGREDIENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "flour", "bread", "pasta", "bun", "noodles", "wheat", "semolina",
        "spring roll wrapper", "soy sauce", "barley", "rye", "couscous",
    ])
});

static NUT_INGREDIENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "peanut", "almond", "cashew", "walnut", "pistachio", "hazelnut",
        "macadamia", "pecan", "pine nut",
    ])
});

static HIGH_CARB_INGREDIENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "rice", "pasta", "bread", "potato", "sugar", "flour", "oats", "bun",
        "noodles", "honey", "banana",
    ])
});

/// Decide whether a recipe satisfies a dietary preference.
///
/// `"any"` (or an empty preference) always passes. When the recipe declares
/// dietary tags, the preference is checked against them — with one
/// exception: `"non-vegetarian"` also passes when the ingredient list
/// contains a known meat term, even without the tag. Only this preference
/// gets ingredient reinforcement while tags are present; the asymmetry is
/// long-standing observed behavior and is kept as-is.
///
/// Without tags, classification falls back to ingredient membership in the
/// fixed category sets. Vegan additionally requires the absence of honey,
/// which belongs to neither the meat nor the dairy set.
///
/// Unrecognized preference strings pass everything (default-permit).
pub fn satisfies(recipe: &Recipe, preference: &str) -> bool {
    let pref = preference.trim().to_lowercase();
    if pref.is_empty() || pref == "any" {
        return true;
    }

    let ingredients = recipe.normalized_ingredients();
    let contains_any =
        |set: &HashSet<&'static str>| ingredients.iter().any(|i| set.contains(i.as_str()));

    let tags: Vec<String> = recipe
        .dietary_tags
        .iter()
        .map(|t| t.to_lowercase())
        .collect();

    if !tags.is_empty() {
        if pref == "non-vegetarian" {
            return tags.iter().any(|t| t == "non-vegetarian")
                || contains_any(&NON_VEG_INGREDIENTS);
        }
        return tags.iter().any(|t| *t == pref);
    }

    let has_non_veg = contains_any(&NON_VEG_INGREDIENTS);
    let has_dairy = contains_any(&DAIRY_INGREDIENTS);
    let has_honey = ingredients.iter().any(|i| i == "honey");

    match pref.as_str() {
        "vegetarian" => !has_non_veg,
        "vegan" => !has_non_veg && !has_dairy && !has_honey,
        "non-vegetarian" => has_non_veg,
        "gluten-free" => !contains_any(&GLUTEN_INGREDIENTS),
        "dairy-free" => !has_dairy,
        "nut-free" => !contains_any(&NUT_INGREDIENTS),
        "low-carb" => !contains_any(&HIGH_CARB_INGREDIENTS),
        _ => true,
    }
}
