use crate::normalize::{normalize, stem};
use crate::synonyms::resolve;

/// Decide whether two ingredient names denote the same thing.
///
/// Five checks run in order, first hit wins:
///
/// 1. Exact equality after normalization.
/// 2. Equality of the stemmed forms ("tomato" ↔ "tomatoes").
/// 3. Substring containment either way on the normalized forms
///    ("garlic" ↔ "garlic cloves").
/// 4. Substring containment either way on the stemmed forms.
/// 5. Synonym lookup on either side, compared exact or stemmed against the
///    other side.
///
/// The relation is symmetric but NOT transitive: the substring rule is
/// deliberately permissive and produces false positives ("pea" matches
/// "peanut"). Downstream scoring was tuned against this behavior, so
/// callers must not assume equivalence classes.
pub fn ingredients_match(a: &str, b: &str) -> bool {
    let la = normalize(a);
    let lb = normalize(b);
    if la == lb {
        return true;
    }

    let sa = stem(&la);
    let sb = stem(&lb);
    if sa == sb {
        return true;
    }

    if la.contains(&lb) || lb.contains(&la) {
        return true;
    }

    if sa.contains(&sb) || sb.contains(&sa) {
        return true;
    }

    if let Some(syn) = resolve(&la) {
        if syn == lb || stem(syn) == sb {
            return true;
        }
    }
    if let Some(syn) = resolve(&lb) {
        if syn == la || stem(syn) == sa {
            return true;
        }
    }

    false
}
