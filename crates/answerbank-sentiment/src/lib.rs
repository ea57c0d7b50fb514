//! # answerbank-sentiment
//!
//! Auxiliary polarity/subjectivity signal for chat messages. Never affects
//! which answer the resolver picks.

pub mod cache;
pub mod lexicon;

pub use cache::{CacheStats, SentimentCache};
pub use lexicon::LexiconAnalyzer;
