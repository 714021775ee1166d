// File: src/error.rs
use std::io;
use thiserror::Error;

/// Errors raised by the I/O, config and session-selection paths.
/// Prediction and correction themselves never fail.
#[derive(Error, Debug)]
pub enum SmartTypeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot encoding error: {0}")]
    Encode(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("no suggestion at position {index} ({available} available)")]
    NoSuchSuggestion { index: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, SmartTypeError>;
