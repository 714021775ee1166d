pub mod context;
pub mod corrector;
pub mod engine;
pub mod predictor;
pub mod tables;
pub mod tokenizer;
pub mod types;
