// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionKind {
    /// A next word, offered after trailing whitespace.
    Prediction,
    /// A respelling of the word being typed.
    Correction,
}

/// One suggestion chip shown under the text box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub kind: SuggestionKind,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, kind: SuggestionKind) -> Self {
        Self {
            word: word.into(),
            kind,
        }
    }
}
