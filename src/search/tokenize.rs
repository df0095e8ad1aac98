//! Query normalization and keyword tokenization.
//!
//! Normalization is Unicode lower-casing plus trimming and nothing else: Albanian
//! diacritics (`ë`, `ç`) are kept, so `adresen` and `adresën` are different words.

/// Minimum token length in characters. Shorter tokens are mostly particles
/// (`të`, `e`, `në`, `si`) and match almost everything.
pub const MIN_TOKEN_LENGTH: usize = 3;

/// Trim and lower-case a raw query. Returns `None` when nothing is left.
pub fn normalize_query(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}

/// Split a normalized query on whitespace runs, dropping short tokens.
///
/// Length is counted in characters, not bytes, so `të` (3 bytes) is still short.
pub fn tokenize(query: &str) -> Vec<&str> {
    query
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("  Tatim  ", Some("tatim"))]
    #[case("ADRESËN", Some("adresën"))]
    #[case("", None)]
    #[case(" \t\n ", None)]
    fn test_normalize_query(#[case] raw: &str, #[case] expected: Option<&str>) {
        check!(normalize_query(raw).as_deref() == expected);
    }

    #[rstest]
    #[case("si të ndryshoj adresën", vec!["ndryshoj", "adresën"])]
    #[case("e-albania   tvsh", vec!["e-albania", "tvsh"])]
    #[case("si të në", vec![])]
    #[case("ab abc", vec!["abc"])]
    fn test_tokenize(#[case] query: &str, #[case] expected: Vec<&str>) {
        check!(tokenize(query) == expected);
    }

    #[test]
    fn test_multibyte_short_tokens_dropped() {
        // "që" is two characters but three bytes
        check!(tokenize("që").is_empty());
        check!(tokenize("çka") == vec!["çka"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        check!(tokenize("").is_empty());
        check!(tokenize("   ").is_empty());
        check!(tokenize("\n\t").is_empty());
    }
}
