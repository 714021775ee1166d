// File: src/core/predictor.rs
use crate::core::tables::{BIGRAM_TABLE, FALLBACK_WORDS};
use crate::core::tokenizer::{bigram_key, tokenize};

/// Anything that can propose next words for the full input buffer.
pub trait Predictor {
    /// Returns an ordered, non-empty list of candidate next words.
    fn predict(&self, text: &str) -> Vec<String>;
}

/// Next-word prediction over the built-in bigram table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPredictor;

impl StaticPredictor {
    pub fn new() -> Self {
        Self
    }
}

impl Predictor for StaticPredictor {
    fn predict(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let candidates = bigram_key(&tokens)
            .and_then(|key| BIGRAM_TABLE.get(key.as_str()).copied())
            .unwrap_or(FALLBACK_WORDS);

        candidates.iter().map(|w| w.to_string()).collect()
    }
}

/// Predicts next words for `text` using the built-in bigram table.
pub fn predict(text: &str) -> Vec<String> {
    StaticPredictor.predict(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> Vec<String> {
        FALLBACK_WORDS.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn known_bigram_returns_table_entry_in_order() {
        assert_eq!(predict("i am "), vec!["a", "not", "going", "the", "so"]);
        assert_eq!(predict("Going TO"), vec!["be", "the", "get", "have", "make"]);
    }

    #[test]
    fn only_the_last_two_tokens_matter() {
        assert_eq!(predict("yes i really want to"), vec!["go", "see", "make", "be", "get"]);
        assert_eq!(predict("well,\tthank   you "), vec!["for", "so", "very", "all", "!"]);
    }

    #[test]
    fn short_or_unknown_input_falls_back() {
        assert_eq!(predict(""), fallback());
        assert_eq!(predict("   "), fallback());
        assert_eq!(predict("hello"), fallback());
        assert_eq!(predict("xyz abc "), fallback());
    }

    #[test]
    fn every_table_entry_is_reachable() {
        for (key, words) in BIGRAM_TABLE.iter() {
            let expected: Vec<String> = words.iter().map(|w| w.to_string()).collect();
            assert_eq!(predict(&format!("{} ", key.to_uppercase())), expected);
        }
    }
}
