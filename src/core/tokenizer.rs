// File: src/core/tokenizer.rs

/// Lowercases, trims and splits the input on runs of whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// The last two tokens joined by a single space, if there are at least two.
pub fn bigram_key(tokens: &[String]) -> Option<String> {
    match tokens {
        [.., prev, last] => Some(format!("{} {}", prev, last)),
        _ => None,
    }
}

pub fn ends_with_whitespace(text: &str) -> bool {
    text.chars().next_back().is_some_and(char::is_whitespace)
}

/// The trailing, possibly partial, token of the raw input. `None` when the
/// input is empty or ends in whitespace.
pub fn last_token(text: &str) -> Option<&str> {
    if ends_with_whitespace(text) {
        return None;
    }
    text.split_whitespace().next_back()
}
