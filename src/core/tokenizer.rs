/// Minimum token length in characters
const MIN_TOKEN_CHARS: usize = 2;

/// Split text into lowercase word tokens.
///
/// Word characters are alphanumerics and underscore; everything else is a
/// separator. Tokens shorter than two characters are dropped. No stemming
/// or stop-word removal.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        assert_eq!(
            tokenize("Senior Rust/Go engineer, remote-first!"),
            vec!["senior", "rust", "go", "engineer", "remote", "first"]
        );
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        assert_eq!(tokenize("C a I/O x"), Vec::<String>::new());
        assert_eq!(tokenize("C++ and C#"), vec!["and"]);
    }

    #[test]
    fn test_tokenize_keeps_underscores_and_digits() {
        assert_eq!(tokenize("snake_case 10 years"), vec!["snake_case", "10", "years"]);
    }

    #[test]
    fn test_tokenize_unicode_words() {
        assert_eq!(tokenize("Résumé Über"), vec!["résumé", "über"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... ").is_empty());
    }
}
