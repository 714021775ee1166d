// File: src/core/tables.rs
use std::collections::HashMap;
use std::sync::LazyLock;

const BIGRAMS: &[(&str, &[&str])] = &[
    ("i am", &["a", "not", "going", "the", "so"]),
    ("going to", &["be", "the", "get", "have", "make"]),
    ("want to", &["go", "see", "make", "be", "get"]),
    ("need to", &["get", "make", "be", "do", "find"]),
    ("would like", &["to", "some", "the", "a", "more"]),
    ("thank you", &["for", "so", "very", "all", "!"]),
];

/// Generic next words, used whenever no bigram key matches.
pub const FALLBACK_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
];

const COMMON_MISSPELLINGS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("recieve", "receive"),
    ("wierd", "weird"),
    ("theyre", "they're"),
    ("im", "I'm"),
    ("dont", "don't"),
    ("cant", "can't"),
    ("wont", "won't"),
];

/// Two-word lowercase key -> ordered next-word candidates.
pub static BIGRAM_TABLE: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| BIGRAMS.iter().copied().collect());

/// Lowercase misspelling -> corrected form. Values are kept literally,
/// including contractions and their casing.
pub static MISSPELLINGS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COMMON_MISSPELLINGS.iter().copied().collect());
