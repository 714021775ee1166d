// File: src/core/corrector.rs
use crate::core::tables::MISSPELLINGS;
use std::collections::HashMap;
use std::sync::LazyLock;

static DEFAULT_CORRECTOR: LazyLock<Corrector> = LazyLock::new(Corrector::default);

/// Fixed-table autocorrection for single words.
#[derive(Debug, Clone)]
pub struct Corrector {
    /// Lowercase misspelling -> correction
    corrections: HashMap<String, String>,
}

impl Default for Corrector {
    fn default() -> Self {
        Self::from_pairs(MISSPELLINGS.iter().map(|(k, v)| (*k, *v)))
    }
}

impl Corrector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a corrector from custom pairs. Keys are lowercased, values kept as given.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let corrections = pairs
            .into_iter()
            .map(|(wrong, right)| (wrong.to_lowercase(), right.to_string()))
            .collect();
        Self { corrections }
    }

    /// The correction for `word`, if its lowercase form is a known misspelling.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.corrections.get(&word.to_lowercase()).map(String::as_str)
    }

    /// The corrected spelling, or `word` unchanged (case preserved).
    pub fn correct(&self, word: &str) -> String {
        self.lookup(word).unwrap_or(word).to_string()
    }

    pub fn corrections(&self) -> &HashMap<String, String> {
        &self.corrections
    }
}

/// Corrects `word` against the built-in misspelling table.
pub fn correct(word: &str) -> String {
    DEFAULT_CORRECTOR.correct(word)
}
