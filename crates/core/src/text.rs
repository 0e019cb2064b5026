//! Case-insensitive text helpers shared by the filter, sort and scoring code.
//!
//! Case folding is per `char` via [`char::to_lowercase`]. There is no
//! locale-aware collation.

use std::cmp::Ordering;

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Case-insensitive equality without allocating.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    folded(a).eq(folded(b))
}

/// Case-insensitive lexical ordering without allocating.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b))
}

/// Substring test against an already-lowercased `needle`.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Treat empty and whitespace-only parameters as absent.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_ignores_ascii_case() {
        assert!(eq_ignore_case("Drama", "dRAMA"));
        assert!(!eq_ignore_case("Drama", "Dramas"));
    }

    #[test]
    fn eq_folds_non_ascii() {
        assert!(eq_ignore_case("ÉTÉ", "été"));
    }

    #[test]
    fn cmp_orders_without_case() {
        assert_eq!(cmp_ignore_case("alpha", "Beta"), Ordering::Less);
        assert_eq!(cmp_ignore_case("Beta", "alpha"), Ordering::Greater);
        assert_eq!(cmp_ignore_case("ALPHA", "alpha"), Ordering::Equal);
    }

    #[test]
    fn cmp_prefix_sorts_first() {
        assert_eq!(cmp_ignore_case("Star", "star wars"), Ordering::Less);
    }

    #[test]
    fn contains_folded_matches_substring() {
        assert!(contains_folded("The Dark Knight", "dark"));
        assert!(!contains_folded("The Dark Knight", "light"));
    }

    #[test]
    fn non_blank_drops_empty_and_whitespace() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some("Film")), Some("Film"));
    }
}
