// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod learning;
pub mod persistence;

pub use crate::core::context::ContextModel;
pub use crate::core::corrector::{correct, Corrector};
pub use crate::core::engine::KeyboardSession;
pub use crate::core::predictor::{predict, Predictor, StaticPredictor};
pub use crate::core::types::{Suggestion, SuggestionKind};
pub use crate::error::{Result, SmartTypeError};
