//! Definition-text tokenization

use regex::Regex;
use rustc_hash::FxHashSet;

/// Function words skipped when mining definitions for bridge words
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "of", "to", "in", "for", "on", "at", "by", "with",
];

/// Tokenizer for definition text
///
/// Tokens are maximal runs of letters with internal apostrophes or hyphens,
/// so "cow's milk-producing glands" yields ["cow's", "milk-producing",
/// "glands"]. Definitions in the lexicon are already lowercase.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    token: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer {
            token: Regex::new(r"[a-z][a-z'-]*").expect("token pattern is a valid regex"),
        }
    }

    /// Tokens of a definition in text order
    pub fn tokens<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> + '_ {
        self.token.find_iter(text).map(|m| m.as_str())
    }

    /// Token set of a definition, for membership checks
    pub fn token_set(&self, text: &str) -> FxHashSet<String> {
        self.tokens(text).map(str::to_string).collect()
    }

    pub fn is_stop_word(token: &str) -> bool {
        STOP_WORDS.contains(&token)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_split_on_punctuation() {
        let tokenizer = Tokenizer::new();
        let tokens: Vec<&str> = tokenizer
            .tokens("a white, nutritious drink (produced by cattle)")
            .collect();
        assert_eq!(
            tokens,
            vec!["a", "white", "nutritious", "drink", "produced", "by", "cattle"]
        );
    }

    #[test]
    fn test_tokens_keep_internal_hyphens() {
        let tokenizer = Tokenizer::new();
        let tokens: Vec<&str> = tokenizer.tokens("a warm-blooded vertebrate").collect();
        assert_eq!(tokens, vec!["a", "warm-blooded", "vertebrate"]);
    }

    #[test]
    fn test_token_set_membership() {
        let tokenizer = Tokenizer::new();
        let set = tokenizer.token_set("raised as livestock for meat or milk");
        assert!(set.contains("livestock"));
        assert!(set.contains("milk"));
        assert!(!set.contains("dairy"));
    }

    #[test]
    fn test_stop_words() {
        assert!(Tokenizer::is_stop_word("the"));
        assert!(Tokenizer::is_stop_word("with"));
        assert!(!Tokenizer::is_stop_word("cattle"));
    }
}
