//! # answerbank-embeddings
//!
//! Converts question text into fixed-length vectors.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine
//! ├── provider (Box<dyn IEmbeddingProvider>)
//! │   ├── HashedProvider  (default, stateless, always available)
//! │   └── TfIdfProvider   (IDF weights fitted on the corpus questions)
//! └── QueryEmbeddingCache (moka, keyed by the blake3 digest of the query)
//! ```

pub mod cache;
pub mod engine;
pub mod providers;
mod tokenize;

pub use cache::QueryEmbeddingCache;
pub use engine::EmbeddingEngine;
pub use providers::{create_provider, HashedProvider, TfIdfProvider};
