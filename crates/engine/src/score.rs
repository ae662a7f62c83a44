use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use serde::Serialize;

use crate::matcher::ingredients_match;
use crate::recipe::{NutritionBreakdown, Recipe};
use crate::substitutions::suggestions_for;

/// Common ingredients assumed low-friction to acquire. Missing one of
/// these penalizes a recipe far less than missing anything else.
static PANTRY_STAPLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "salt", "pepper", "oil", "water", "sugar", "butter",
        "olive oil", "vegetable oil",
    ])
});

/// Composite ranking weights. Fixed policy: recipes that consume the
/// user's whole ingredient set beat recipes the user can merely complete.
const COVERAGE_WEIGHT: i64 = 3;
const MATCH_WEIGHT: i64 = 2;
const USED_INGREDIENT_BONUS: i64 = 10;
const MISSING_STAPLE_BONUS: i64 = 5;
const MISSING_NON_STAPLE_PENALTY: i64 = 8;

/// A recipe annotated with match results against one user ingredient set.
/// Computed fresh per request and never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dietary_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_servings: Option<f64>,
    pub match_count: usize,
    pub total_ingredients: usize,
    /// What share of the recipe's ingredient list the user has, 0-100.
    pub match_percentage: u32,
    /// What share of the user's ingredient set this recipe uses, 0-100.
    pub coverage_percentage: u32,
    pub user_ings_used: Vec<String>,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub substitution_suggestions: BTreeMap<String, Vec<String>>,
    /// Unbounded; only relative order matters.
    pub composite_score: i64,
    pub steps: Vec<String>,
    pub nutrition: NutritionBreakdown,
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((count as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Score one recipe against one user ingredient set.
///
/// Every recipe ingredient lands in exactly one of `matched_ingredients`
/// or `missing_ingredients`. User ingredients are counted as written:
/// synonym-equivalent entries that differ verbatim stay distinct in
/// `user_ings_used`.
pub fn score(recipe: &Recipe, user_ingredients: &[String]) -> ScoredRecipe {
    let recipe_ingredients = recipe.normalized_ingredients();

    let mut matched_ingredients = Vec::new();
    let mut missing_ingredients = Vec::new();
    for ri in &recipe_ingredients {
        let is_match = user_ingredients.iter().any(|ui| ingredients_match(ri, ui));
        if is_match {
            matched_ingredients.push(ri.clone());
        } else {
            missing_ingredients.push(ri.clone());
        }
    }

    // Which of the user's ingredients does this recipe actually use?
    let user_ings_used: Vec<String> = user_ingredients
        .iter()
        .filter(|ui| recipe_ingredients.iter().any(|ri| ingredients_match(ri, ui)))
        .cloned()
        .collect();

    let match_percentage = percentage(matched_ingredients.len(), recipe_ingredients.len());
    let coverage_percentage = percentage(user_ings_used.len(), user_ingredients.len());

    let missing_non_staple = missing_ingredients
        .iter()
        .filter(|m| !PANTRY_STAPLES.contains(m.as_str()))
        .count();
    let missing_staple = missing_ingredients.len() - missing_non_staple;

    let composite_score = COVERAGE_WEIGHT * i64::from(coverage_percentage)
        + MATCH_WEIGHT * i64::from(match_percentage)
        + USED_INGREDIENT_BONUS * user_ings_used.len() as i64
        + MISSING_STAPLE_BONUS * missing_staple as i64
        - MISSING_NON_STAPLE_PENALTY * missing_non_staple as i64;

    let substitution_suggestions = suggestions_for(&missing_ingredients);

    ScoredRecipe {
        name: recipe.name.clone(),
        ingredients: recipe.ingredients.clone(),
        cuisine: recipe.cuisine.clone(),
        dietary_tags: recipe.dietary_tags.clone(),
        difficulty: recipe.difficulty.clone(),
        time: recipe.time,
        base_servings: recipe.base_servings,
        match_count: matched_ingredients.len(),
        total_ingredients: recipe_ingredients.len(),
        match_percentage,
        coverage_percentage,
        user_ings_used,
        matched_ingredients,
        missing_ingredients,
        substitution_suggestions,
        composite_score,
        steps: recipe.steps_or_default(),
        nutrition: recipe.nutrition_breakdown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, ingredients: Vec<&str>) -> Recipe {
        Recipe {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            ..Recipe::default()
        }
    }

    fn user(ingredients: &[&str]) -> Vec<String> {
        ingredients.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matched_and_missing_partition_ingredient_list() {
        let r = recipe("Chicken Rice", vec!["chicken", "rice", "salt"]);
        let scored = score(&r, &user(&["rice", "chicken"]));

        assert_eq!(
            scored.matched_ingredients,
            vec!["chicken".to_string(), "rice".to_string()]
        );
        assert_eq!(scored.missing_ingredients, vec!["salt".to_string()]);
        assert_eq!(
            scored.matched_ingredients.len() + scored.missing_ingredients.len(),
            r.ingredients.len()
        );
        assert_eq!(scored.match_percentage, 67);
        assert_eq!(scored.coverage_percentage, 100);
    }

    #[test]
    fn test_composite_score_weights() {
        let r = recipe("Chicken Rice", vec!["chicken", "rice", "salt"]);
        let scored = score(&r, &user(&["rice", "chicken"]));

        // coverage 100, match 67, 2 user ingredients used, 1 missing staple
        assert_eq!(scored.composite_score, 3 * 100 + 2 * 67 + 10 * 2 + 5 * 1);
    }

    #[test]
    fn test_missing_non_staple_penalized() {
        let r = recipe("Saffron Rice", vec!["rice", "saffron"]);
        let scored = score(&r, &user(&["rice"]));

        // coverage 100, match 50, 1 used, 1 missing non-staple
        assert_eq!(scored.composite_score, 3 * 100 + 2 * 50 + 10 - 8);
    }

    #[test]
    fn test_zero_ingredient_recipe() {
        let r = recipe("Empty", vec![]);
        let scored = score(&r, &user(&["rice"]));
        assert_eq!(scored.match_count, 0);
        assert_eq!(scored.match_percentage, 0);
        assert_eq!(scored.coverage_percentage, 0);
    }

    #[test]
    fn test_zero_user_ingredients() {
        let r = recipe("Chicken Rice", vec!["chicken", "rice"]);
        let scored = score(&r, &[]);
        assert_eq!(scored.coverage_percentage, 0);
        assert_eq!(scored.missing_ingredients.len(), 2);
    }

    #[test]
    fn test_verbatim_duplicate_synonyms_counted_separately() {
        // "cilantro" and "coriander" both match the recipe's coriander and
        // are both counted in user_ings_used; de-duplication upstream is
        // by exact string only.
        let r = recipe("Chutney", vec!["coriander", "mint"]);
        let scored = score(&r, &user(&["cilantro", "coriander"]));
        assert_eq!(scored.user_ings_used.len(), 2);
        assert_eq!(scored.coverage_percentage, 100);
    }

    #[test]
    fn test_substitutions_attached_for_missing_only() {
        let r = recipe("Omelette", vec!["egg", "milk", "saffron"]);
        let scored = score(&r, &user(&["saffron"]));
        assert!(scored.substitution_suggestions.contains_key("egg"));
        assert!(scored.substitution_suggestions.contains_key("milk"));
        // saffron matched, and has no table entry anyway
        assert!(!scored.substitution_suggestions.contains_key("saffron"));
    }

    #[test]
    fn test_recipe_ingredients_normalized_in_output() {
        let r = recipe("Salad", vec![" Lettuce ", "TOMATO"]);
        let scored = score(&r, &user(&["lettuce"]));
        assert_eq!(scored.matched_ingredients, vec!["lettuce".to_string()]);
        assert_eq!(scored.missing_ingredients, vec!["tomato".to_string()]);
    }
}
