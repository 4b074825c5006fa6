//! Station and exit name normalisation.
//!
//! User input arrives in many spellings ("St. George Station", "  UNION ",
//! "Bloor_Yonge"). Everything is folded to a canonical key before any table
//! lookup, and the same function is used for both stations and exits.

/// Known variant spellings, already in generic normalised form, mapped to
/// their canonical station key.
///
/// Canonical keys map to themselves implicitly, so only genuine variants
/// need an entry here.
const SYNONYMS: &[(&str, &str)] = &[
    ("st george station", "st george"),
    ("union", "union station"),
    ("bloor yonge", "bloor-yonge"),
    ("bloor yonge station", "bloor-yonge"),
    ("under construction", "underconstruction"),
];

/// Normalise a raw station or exit name into its canonical key.
///
/// Returns `None` for absent input, or input that contains nothing but
/// whitespace and separators.
///
/// # Examples
///
/// ```
/// use transit_server::placement::normalize;
///
/// assert_eq!(normalize(Some("St. George Station")).as_deref(), Some("st george"));
/// assert_eq!(normalize(Some("  UNION station  ")).as_deref(), Some("union station"));
/// assert_eq!(normalize(Some("Bloor-Yonge")).as_deref(), Some("bloor-yonge"));
/// assert_eq!(normalize(Some("")), None);
/// assert_eq!(normalize(None), None);
/// ```
pub fn normalize(raw: Option<&str>) -> Option<String> {
    let generic = generic_form(raw?);
    if generic.is_empty() {
        return None;
    }

    let canonical = SYNONYMS
        .iter()
        .find(|(variant, _)| *variant == generic)
        .map(|(_, key)| (*key).to_string());

    Some(canonical.unwrap_or(generic))
}

/// Lowercase, turn `.`/`-`/`_` into spaces and collapse whitespace.
fn generic_form(raw: &str) -> String {
    let folded: String = raw
        .to_lowercase()
        .chars()
        .map(|c| if matches!(c, '.' | '-' | '_') { ' ' } else { c })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalising twice gives the same key as normalising once.
        #[test]
        fn idempotent(s in "\\PC{0,30}") {
            let once = normalize(Some(&s));
            let twice = once.as_deref().and_then(|k| normalize(Some(k)));
            prop_assert_eq!(once, twice);
        }

        /// Keys never carry edge whitespace, dots, underscores or uppercase.
        #[test]
        fn keys_are_clean(s in "[A-Za-z0-9 ._\\-]{0,30}") {
            if let Some(key) = normalize(Some(&s)) {
                prop_assert_eq!(key.trim(), key.as_str());
                prop_assert!(!key.contains('.'));
                prop_assert!(!key.contains('_'));
                prop_assert!(!key.contains("  "));
                prop_assert_eq!(key.to_lowercase(), key.clone());
            }
        }

        /// Synonym classes survive arbitrary casing and padding.
        #[test]
        fn st_george_padding(pad_l in " {0,3}", pad_r in " {0,3}", upper in any::<bool>()) {
            let name = if upper { "ST. GEORGE STATION" } else { "st. george station" };
            let input = format!("{pad_l}{name}{pad_r}");
            let key = normalize(Some(&input));
            prop_assert_eq!(key.as_deref(), Some("st george"));
        }
    }
}
