use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// A recipe as supplied by the external loader. Immutable for the engine.
///
/// The loader tolerates schema violations: every field except `name`
/// defaults when absent, so a record missing `ingredients` deserializes to
/// an empty list rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    /// Unique display identifier; downstream consumers key ratings and
    /// favorites on it.
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dietary_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Total time in minutes. Recipes without it are excluded whenever a
    /// time ceiling is requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_servings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionTotals>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
}

/// Macro totals for a recipe as written, before dividing by servings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutritionTotals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

/// Nutrition block attached to every recipe sent to a client: raw totals
/// plus per-serving values rounded to the nearest whole unit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionBreakdown {
    pub calories_per_serving: i64,
    pub per_serving: PerServing,
    pub totals: Totals,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerServing {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Generic fallback instructions used when a recipe ships no steps.
/// Presentation default only; never affects ranking.
pub const DEFAULT_STEPS: [&str; 4] = [
    "Prep ingredients (wash, chop as needed)",
    "Cook components (boil, sauté, bake) as appropriate",
    "Combine, season to taste, and adjust textures",
    "Plate and serve",
];

/// Common pantry items always offered in ingredient pickers, on top of
/// whatever the loaded collection mentions.
const PICKER_EXTRAS: [&str; 94] = [
    "salt", "pepper", "oil", "olive oil", "butter", "garlic", "ginger", "onion",
    "tomato", "potato", "carrot", "cucumber", "lettuce", "broccoli", "spinach",
    "cabbage", "mushroom", "bell pepper", "corn", "peas", "beans", "zucchini",
    "eggplant", "cauliflower", "celery", "avocado", "lemon", "lime",
    "chicken", "beef", "pork", "fish", "egg", "shrimp", "lamb", "turkey", "bacon",
    "milk", "cheese", "cream", "yogurt", "paneer", "tofu", "tempeh",
    "rice", "bread", "pasta", "noodles", "flour", "oats", "tortilla", "quinoa",
    "sugar", "honey", "soy sauce", "vinegar", "coconut milk", "peanut",
    "almond", "cashew", "walnut", "sesame", "basil", "oregano", "thyme",
    "cumin", "paprika", "turmeric", "cinnamon", "chili", "cilantro", "parsley",
    "mint", "rosemary", "bay leaf", "garam masala", "curry powder",
    "banana", "strawberry", "apple", "mango", "pineapple", "coconut",
    "chocolate", "cocoa powder", "vanilla", "maple syrup",
    "salmon", "tuna", "lentils", "chickpeas", "kale", "leek", "shallot",
];

impl Recipe {
    /// Ingredient list with every entry normalized (lowercase, trimmed).
    pub fn normalized_ingredients(&self) -> Vec<String> {
        self.ingredients.iter().map(|i| normalize(i)).collect()
    }

    /// Servings to divide macro totals by. Defaults to 1 and is floored at
    /// 1 — a recipe cannot serve zero.
    pub fn servings(&self) -> f64 {
        match self.base_servings {
            Some(s) if s > 0.0 => s,
            _ => 1.0,
        }
    }

    /// Total calories for the recipe as written, resolving the historical
    /// field fallback chain: `baseCalories`, then `calories`, then
    /// `nutrition.calories`, then 0.
    pub fn total_calories(&self) -> f64 {
        self.base_calories
            .or(self.calories)
            .or_else(|| self.nutrition.as_ref().and_then(|n| n.calories))
            .unwrap_or(0.0)
    }

    /// Totals plus rounded per-serving macros.
    pub fn nutrition_breakdown(&self) -> NutritionBreakdown {
        let servings = self.servings();
        let calories = self.total_calories();
        let protein = self.nutrition.as_ref().and_then(|n| n.protein).unwrap_or(0.0);
        let carbs = self.nutrition.as_ref().and_then(|n| n.carbs).unwrap_or(0.0);
        let fat = self.nutrition.as_ref().and_then(|n| n.fat).unwrap_or(0.0);

        let per = |total: f64| (total / servings).round() as i64;

        NutritionBreakdown {
            calories_per_serving: per(calories),
            per_serving: PerServing {
                calories: per(calories),
                protein: per(protein),
                carbs: per(carbs),
                fat: per(fat),
            },
            totals: Totals {
                calories,
                protein,
                carbs,
                fat,
            },
        }
    }

    /// The recipe's own steps, or the generic fallback when none are set.
    pub fn steps_or_default(&self) -> Vec<String> {
        if self.steps.is_empty() {
            DEFAULT_STEPS.iter().map(|s| s.to_string()).collect()
        } else {
            self.steps.clone()
        }
    }
}

/// De-duplicated, alphabetical list of every ingredient name across the
/// collection, merged with the fixed picker extras. Feeds ingredient
/// pickers in clients.
pub fn known_ingredients(recipes: &[Recipe]) -> Vec<String> {
    let mut names: BTreeSet<String> = recipes
        .iter()
        .flat_map(|r| r.ingredients.iter())
        .map(|i| i.to_lowercase())
        .collect();
    for extra in PICKER_EXTRAS {
        names.insert(extra.to_string());
    }
    names.into_iter().collect()
}

/// De-duplicated, alphabetical list of cuisines declared in the collection.
pub fn known_cuisines(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .filter_map(|r| r.cuisine.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
