use crate::dietary::satisfies;
use crate::recipe::Recipe;
use crate::score::{ScoredRecipe, score};

/// Filters applied when ranking a collection. Every field is optional and
/// permissive when absent; unrecognized values behave like `"any"` rather
/// than excluding everything.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub dietary_preference: Option<String>,
    pub difficulty: Option<String>,
    /// Inclusive ceiling in minutes. Recipes without a declared time are
    /// excluded while a ceiling is set.
    pub max_time: Option<f64>,
    pub cuisine: Option<String>,
}

impl Filters {
    fn passes_dietary(&self, recipe: &Recipe) -> bool {
        match &self.dietary_preference {
            Some(pref) => satisfies(recipe, pref),
            None => true,
        }
    }

    fn passes_difficulty(&self, recipe: &Recipe) -> bool {
        match &self.difficulty {
            Some(d) if !d.is_empty() && !d.eq_ignore_ascii_case("any") => recipe
                .difficulty
                .as_deref()
                .unwrap_or("")
                .eq_ignore_ascii_case(d),
            _ => true,
        }
    }

    fn passes_time(&self, recipe: &Recipe) -> bool {
        match (self.max_time, recipe.time) {
            (Some(limit), Some(time)) => time <= limit,
            (Some(_), None) => false,
            (None, _) => true,
        }
    }

    fn passes_cuisine(&self, recipe: &Recipe) -> bool {
        match &self.cuisine {
            Some(c) if !c.is_empty() && !c.eq_ignore_ascii_case("any") => recipe
                .cuisine
                .as_deref()
                .is_some_and(|rc| rc.eq_ignore_ascii_case(c)),
            _ => true,
        }
    }

    fn passes(&self, recipe: &Recipe) -> bool {
        self.passes_dietary(recipe)
            && self.passes_difficulty(recipe)
            && self.passes_time(recipe)
            && self.passes_cuisine(recipe)
    }
}

/// Score every recipe against the user's ingredient set, drop recipes with
/// no matched ingredient or failing a filter, and sort best-first.
///
/// Order: composite score descending, ties broken by coverage percentage
/// descending, then match percentage descending. The sort is stable, so
/// fully tied recipes keep their collection order — ranking the same input
/// twice yields the identical sequence.
pub fn rank(recipes: &[Recipe], user_ingredients: &[String], filters: &Filters) -> Vec<ScoredRecipe> {
    let mut scored: Vec<ScoredRecipe> = recipes
        .iter()
        .filter(|recipe| filters.passes(recipe))
        .map(|recipe| score(recipe, user_ingredients))
        .filter(|s| s.match_count > 0)
        .collect();

    scored.sort_by(|a, b| {
        b.composite_score
            .cmp(&a.composite_score)
            .then(b.coverage_percentage.cmp(&a.coverage_percentage))
            .then(b.match_percentage.cmp(&a.match_percentage))
    });

    scored
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
    fn test_recipes_with_no_match_are_dropped() {
        let recipes = vec![
            recipe("Chicken Rice", vec!["chicken", "rice"]),
            recipe("Fruit Salad", vec!["apple", "banana"]),
        ];
        let ranked = rank(&recipes, &user(&["chicken"]), &Filters::default());
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "Chicken Rice");
    }

    #[test]
    fn test_zero_ingredient_recipe_always_dropped() {
        let recipes = vec![recipe("Empty", vec![])];
        let ranked = rank(&recipes, &user(&["chicken"]), &Filters::default());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_sorted_by_composite_score_descending() {
        let recipes = vec![
            // user is missing two non-staples here
            recipe("Elaborate", vec!["rice", "saffron", "truffle"]),
            // full match
            recipe("Plain Rice", vec!["rice"]),
        ];
        let ranked = rank(&recipes, &user(&["rice"]), &Filters::default());
        assert_eq!(ranked[0].name, "Plain Rice");
        assert!(ranked[0].composite_score > ranked[1].composite_score);
    }

    #[test]
    fn test_difficulty_filter_case_insensitive() {
        let mut easy = recipe("Easy Dish", vec!["rice"]);
        easy.difficulty = Some("Easy".to_string());
        let mut hard = recipe("Hard Dish", vec!["rice"]);
        hard.difficulty = Some("hard".to_string());

        let filters = Filters {
            difficulty: Some("EASY".to_string()),
            ..Filters::default()
        };
        let ranked = rank(&[easy, hard], &user(&["rice"]), &filters);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "Easy Dish");
    }

    #[test]
    fn test_difficulty_any_passes_all() {
        let mut easy = recipe("Easy Dish", vec!["rice"]);
        easy.difficulty = Some("easy".to_string());
        let undeclared = recipe("Undeclared", vec!["rice"]);

        let filters = Filters {
            difficulty: Some("any".to_string()),
            ..Filters::default()
        };
        let ranked = rank(&[easy, undeclared], &user(&["rice"]), &filters);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_time_ceiling_inclusive() {
        let mut quick = recipe("Quick", vec!["rice"]);
        quick.time = Some(30.0);
        let mut slow = recipe("Slow", vec!["rice"]);
        slow.time = Some(31.0);
        let untimed = recipe("Untimed", vec!["rice"]);

        let filters = Filters {
            max_time: Some(30.0),
            ..Filters::default()
        };
        let ranked = rank(&[quick, slow, untimed], &user(&["rice"]), &filters);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "Quick");
    }

    #[test]
    fn test_no_time_ceiling_keeps_untimed_recipes() {
        let untimed = recipe("Untimed", vec!["rice"]);
        let ranked = rank(&[untimed], &user(&["rice"]), &Filters::default());
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_cuisine_filter() {
        let mut indian = recipe("Dal", vec!["lentils"]);
        indian.cuisine = Some("Indian".to_string());
        let mut italian = recipe("Risotto", vec!["lentils"]);
        italian.cuisine = Some("Italian".to_string());
        let unclassified = recipe("Stew", vec!["lentils"]);

        let filters = Filters {
            cuisine: Some("indian".to_string()),
            ..Filters::default()
        };
        let ranked = rank(
            &[indian, italian, unclassified],
            &user(&["lentils"]),
            &filters,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "Dal");
    }

    #[test]
    fn test_dietary_filter_applied() {
        let veg = recipe("Veg Curry", vec!["potato", "peas"]);
        let meat = recipe("Meat Curry", vec!["chicken", "potato"]);

        let filters = Filters {
            dietary_preference: Some("vegetarian".to_string()),
            ..Filters::default()
        };
        let ranked = rank(&[veg, meat], &user(&["potato"]), &filters);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "Veg Curry");
    }

    #[test]
    fn test_rank_is_idempotent() {
        let recipes = vec![
            recipe("A", vec!["rice", "peas"]),
            recipe("B", vec!["rice", "beans"]),
            recipe("C", vec!["rice"]),
        ];
        let ingredients = user(&["rice", "peas"]);
        let first = rank(&recipes, &ingredients, &Filters::default());
        let second = rank(&recipes, &ingredients, &Filters::default());

        let names1: Vec<&str> = first.iter().map(|r| r.name.as_str()).collect();
        let names2: Vec<&str> = second.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names1, names2);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.composite_score, b.composite_score);
        }
    }

    #[test]
    fn test_full_ties_keep_collection_order() {
        let recipes = vec![
            recipe("First", vec!["rice"]),
            recipe("Second", vec!["rice"]),
        ];
        let ranked = rank(&recipes, &user(&["rice"]), &Filters::default());
        assert_eq!(ranked[0].name, "First");
        assert_eq!(ranked[1].name, "Second");
    }
}
