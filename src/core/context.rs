// File: src/core/context.rs
use crate::core::predictor::Predictor;
use crate::core::tokenizer::{bigram_key, tokenize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Returned when the input has fewer than two words.
pub const SENTENCE_STARTERS: &[&str] = &["the", "i", "we", "this", "that"];
/// Returned when the two-word context was never seen during training.
pub const COMMON_WORDS: &[&str] = &["the", "to", "a", "and", "is"];

/// A trigram model trained from sentences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextModel {
    max_suggestions: usize,
    /// Maps "w1 w2" -> [(next_word, frequency)], in first-seen order
    trigrams: HashMap<String, Vec<(String, u64)>>,
}

impl Default for ContextModel {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SUGGESTIONS)
    }
}

impl ContextModel {
    pub fn new(max_suggestions: usize) -> Self {
        Self {
            max_suggestions,
            trigrams: HashMap::new(),
        }
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.max_suggestions = max_suggestions;
    }

    /// Counts every consecutive word triple of `sentence`.
    /// Sentences shorter than three words contribute nothing.
    /// Returns the number of trigrams added.
    pub fn add_sentence(&mut self, sentence: &str) -> usize {
        let words = tokenize(sentence);
        if words.len() < 3 {
            return 0;
        }

        for window in words.windows(3) {
            let context = format!("{} {}", window[0], window[1]);
            let followers = self.trigrams.entry(context).or_default();
            match followers.iter_mut().find(|(w, _)| *w == window[2]) {
                Some((_, count)) => *count += 1,
                None => followers.push((window[2].clone(), 1)),
            }
        }
        words.len() - 2
    }

    /// Up to `max` next words for `context`, most frequent first.
    pub fn predict_next(&self, context: &str, max: usize) -> Vec<String> {
        let tokens = tokenize(context);
        let Some(key) = bigram_key(&tokens) else {
            return to_owned(SENTENCE_STARTERS);
        };

        match self.trigrams.get(&key) {
            Some(followers) if !followers.is_empty() => {
                let mut ranked: Vec<&(String, u64)> = followers.iter().collect();
                // Stable sort keeps first-seen order among equal counts
                ranked.sort_by_key(|&&(_, count)| std::cmp::Reverse(count));
                ranked.into_iter().take(max).map(|(w, _)| w.clone()).collect()
            }
            _ => to_owned(COMMON_WORDS),
        }
    }

    pub fn frequency(&self, context: &str, next: &str) -> u64 {
        self.trigrams
            .get(context)
            .and_then(|f| f.iter().find(|(w, _)| w == next))
            .map_or(0, |(_, count)| *count)
    }

    pub fn contexts(&self) -> impl Iterator<Item = (&str, &[(String, u64)])> {
        self.trigrams.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.trigrams.is_empty()
    }
}

impl Predictor for ContextModel {
    fn predict(&self, text: &str) -> Vec<String> {
        self.predict_next(text, self.max_suggestions)
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
