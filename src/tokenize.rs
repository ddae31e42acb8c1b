//! Word tokenization shared by index construction and queries.
//!
//! Unicode character names are uppercase words separated by spaces and
//! hyphens ("LATIN SMALL LETTER A", "EM-DASH"). Queries are tokenized with
//! the exact same rules so a query word matches an index token verbatim.

/// Split text into normalized uppercase word tokens.
///
/// Hyphens count as word separators, runs of whitespace delimit words, and
/// the result preserves left-to-right order. Empty or whitespace-only input
/// yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_uppercase()
        .replace('-', " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_name() {
        assert_eq!(
            tokenize("LATIN CAPITAL LETTER A"),
            vec!["LATIN", "CAPITAL", "LETTER", "A"]
        );
    }

    #[test]
    fn test_hyphen_is_a_separator() {
        assert_eq!(tokenize("EM-DASH"), vec!["EM", "DASH"]);
        assert_eq!(tokenize("HYPHEN-MINUS"), vec!["HYPHEN", "MINUS"]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(tokenize("abc"), tokenize("ABC"));
        assert_eq!(tokenize("eight digit"), vec!["EIGHT", "DIGIT"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
        assert!(tokenize("- - -").is_empty());
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(tokenize("  a   letter "), vec!["A", "LETTER"]);
    }

    #[test]
    fn test_order_preserved() {
        assert_eq!(tokenize("capital letter a"), vec!["CAPITAL", "LETTER", "A"]);
    }
}
