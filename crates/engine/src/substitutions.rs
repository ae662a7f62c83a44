use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::normalize::normalize;

/// Fixed ingredient substitution table: ingredient name → ordered list of
/// possible substitutes. Consumed read-only to annotate missing
/// ingredients; entries are passed through to clients unmodified.
static SUBSTITUTIONS: LazyLock<BTreeMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        BTreeMap::from([
            // Dairy
            ("milk", &["oat milk", "almond milk", "soy milk", "coconut milk"][..]),
            ("butter", &["olive oil", "coconut oil", "margarine", "ghee"][..]),
            ("cheese", &["nutritional yeast", "tofu", "cashew cheese", "vegan cheese"][..]),
            ("cream", &["coconut cream", "cashew cream", "silken tofu"][..]),
            ("yogurt", &["coconut yogurt", "soy yogurt"][..]),
            ("curd", &["coconut yogurt", "soy yogurt"][..]),
            ("paneer", &["tofu", "tempeh"][..]),
            ("ghee", &["coconut oil", "olive oil"][..]),
            // Protein
            ("egg", &["flax egg", "chia egg", "applesauce", "mashed banana"][..]),
            ("chicken", &["tofu", "tempeh", "jackfruit", "seitan"][..]),
            ("beef", &["mushroom", "tempeh", "seitan", "lentils"][..]),
            ("pork", &["jackfruit", "tempeh", "mushroom"][..]),
            ("fish", &["tofu", "hearts of palm", "banana blossom"][..]),
            ("mutton", &["jackfruit", "mushroom", "soy chunks"][..]),
            // Grains & gluten
            ("flour", &["almond flour", "oat flour", "rice flour", "chickpea flour"][..]),
            ("bread", &["gluten-free bread", "lettuce wrap", "rice cake"][..]),
            ("pasta", &["rice noodles", "zucchini noodles", "gluten-free pasta"][..]),
            ("soy sauce", &["tamari", "coconut aminos"][..]),
            ("bun", &["lettuce wrap", "gluten-free bun"][..]),
            ("spring roll wrapper", &["rice paper wrapper"][..]),
            // Sweeteners
            ("sugar", &["honey", "maple syrup", "stevia", "coconut sugar"][..]),
            ("honey", &["maple syrup", "agave nectar", "date syrup"][..]),
            // Oils & fats
            ("oil", &["olive oil", "avocado oil", "coconut oil"][..]),
            ("olive oil", &["avocado oil", "canola oil"][..]),
            // Vegetables
            ("onion", &["shallot", "leek", "scallion"][..]),
            ("tomato", &["sun-dried tomato", "red bell pepper", "canned tomato"][..]),
            ("potato", &["sweet potato", "cauliflower", "turnip"][..]),
            ("carrot", &["parsnip", "sweet potato"][..]),
            ("lettuce", &["spinach", "kale", "arugula"][..]),
            ("cucumber", &["zucchini", "celery"][..]),
            ("bell pepper", &["zucchini", "celery"][..]),
            ("mushroom", &["eggplant", "zucchini"][..]),
            ("broccoli", &["cauliflower", "green beans"][..]),
            ("cabbage", &["kale", "bok choy"][..]),
            // Nuts & seeds
            ("peanut", &["sunflower seeds", "soy butter"][..]),
            ("almond", &["sunflower seeds", "pumpkin seeds"][..]),
            ("cashew", &["macadamia", "sunflower seeds"][..]),
            // Misc
            ("cocoa powder", &["carob powder"][..]),
            ("rice batter", &["chickpea batter"][..]),
            ("garam masala", &["cumin + coriander + cinnamon"][..]),
            ("spices", &["herb blend", "curry powder"][..]),
        ])
    });

/// Read-only access to the full substitution table, for picker-style
/// clients that want everything at once.
pub fn table() -> &'static BTreeMap<&'static str, &'static [&'static str]> {
    &SUBSTITUTIONS
}

/// Substitution suggestions for a list of (typically missing) ingredients.
///
/// Ingredients without a table entry are silently omitted; an empty map is
/// a normal outcome, not an error.
pub fn suggestions_for<S: AsRef<str>>(ingredients: &[S]) -> BTreeMap<String, Vec<String>> {
    let mut result = BTreeMap::new();
    for ing in ingredients {
        let key = normalize(ing.as_ref());
        if let Some(subs) = SUBSTITUTIONS.get(key.as_str()) {
            result.insert(key, subs.iter().map(|s| s.to_string()).collect());
        }
    }
    result
}
