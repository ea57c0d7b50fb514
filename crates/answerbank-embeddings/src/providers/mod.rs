//! Provider registry.
//!
//! 1. hashed (default, stateless)
//! 2. tfidf (fitted on the corpus questions)

pub mod hashed_provider;
pub mod tfidf_provider;

pub use hashed_provider::HashedProvider;
pub use tfidf_provider::TfIdfProvider;

use answerbank_core::config::EmbeddingConfig;
use answerbank_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// Create the configured provider. `corpus` is only used by fitted providers.
pub fn create_provider(config: &EmbeddingConfig, corpus: &[String]) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "hashed" => {
            info!(provider = "hashed", dims = config.dimensions, "using hashed embedding provider");
            Box::new(HashedProvider::new(config.dimensions))
        }
        "tfidf" => {
            let provider = TfIdfProvider::fit(corpus, config.dimensions);
            info!(
                provider = "tfidf",
                dims = config.dimensions,
                vocabulary = provider.vocabulary_size(),
                "using TF-IDF embedding provider"
            );
            Box::new(provider)
        }
        other => {
            warn!(provider = other, "unknown embedding provider, using hashed");
            Box::new(HashedProvider::new(config.dimensions))
        }
    }
}
