//! # answerbank-core
//!
//! Foundation crate for the Answerbank question-matching pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AnswerbankConfig;
pub use errors::{AnswerbankError, AnswerbankResult};
pub use models::{KnowledgeEntry, SentimentScore};
pub use normalize::normalize_input;
