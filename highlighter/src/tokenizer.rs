//! Query tokenization.

/// Split a query into whitespace-delimited tokens, dropping empty fragments.
/// Order is preserved.
pub fn tokenize(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_words() {
        assert_eq!(tokenize("Plz snip"), vec!["Plz", "snip"]);
        assert_eq!(tokenize("  Plz \t  snip\n me "), vec!["Plz", "snip", "me"]);
    }

    #[test]
    fn test_tokenize_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_punctuation_inside_tokens() {
        assert_eq!(tokenize("https://github.com foo.bar"), vec!["https://github.com", "foo.bar"]);
    }
}
