use unicode_normalization::UnicodeNormalization;

/// Case-insensitive substring match against the display word. The empty
/// query matches everything.
pub fn matches(word: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    fold(word).contains(&fold(query))
}

/// NFC-normalize, then lowercase. Keeps composed and decomposed umlauts
/// comparable.
fn fold(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches("Apfel", ""));
        assert!(matches("", ""));
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        assert!(matches("Apfel", "ap"));
        assert!(matches("Apfel", "APFEL"));
        assert!(matches("schnell", "NELL"));
        assert!(!matches("Apfel", "apple"));
    }

    #[test]
    fn umlauts_fold_across_normalization_forms() {
        // "ü" composed vs "u" + combining diaeresis
        assert!(matches("h\u{fc}bsch", "hu\u{308}bsch"));
        assert!(matches("\u{dc}bung", "\u{fc}b"));
    }
}
