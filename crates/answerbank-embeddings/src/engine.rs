//! EmbeddingEngine: the entry point for answerbank-embeddings.
//!
//! Wraps one provider with dimension validation and a query cache.
//! Implements `IEmbeddingProvider`.

use answerbank_core::config::EmbeddingConfig;
use answerbank_core::errors::EmbeddingError;
use answerbank_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::QueryEmbeddingCache;
use crate::providers;

/// The embedding engine shared by the background indexer and query workers.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: QueryEmbeddingCache,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Create the configured provider. `corpus` feeds fitted providers.
    pub fn new(config: &EmbeddingConfig, corpus: &[String]) -> Self {
        let provider = providers::create_provider(config, corpus);
        Self::with_provider(provider, config.query_cache_size)
    }

    /// Wrap an existing provider.
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, query_cache_size: u64) -> Self {
        let dimensions = provider.dimensions();
        info!(
            provider = provider.name(),
            dims = dimensions,
            query_cache_size,
            "EmbeddingEngine initialized"
        );
        Self {
            provider,
            cache: QueryEmbeddingCache::new(query_cache_size),
            dimensions,
        }
    }

    /// Embed a user query, consulting the cache first.
    pub fn embed_query(&self, query: &str) -> Result<Vec<f32>, EmbeddingError> {
        if let Some(vec) = self.cache.lookup(query) {
            debug!(digest = %QueryEmbeddingCache::digest(query), "query embedding cache hit");
            return Ok(vec);
        }

        let embedding = self.provider.embed(query)?;
        validate_dimensions(&embedding, self.dimensions)?;
        self.cache.remember(query, &embedding);
        Ok(embedding)
    }

    /// Embed corpus texts in order. Not cached.
    pub fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let embeddings = self.provider.embed_batch(texts)?;
        if embeddings.len() != texts.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!(
                    "provider returned {} embeddings for {} texts",
                    embeddings.len(),
                    texts.len()
                ),
            });
        }
        for embedding in &embeddings {
            validate_dimensions(embedding, self.dimensions)?;
        }
        Ok(embeddings)
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of cached query embeddings.
    pub fn cached_queries(&self) -> u64 {
        self.cache.cached_queries()
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.embed_query(text)
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        EmbeddingEngine::embed_batch(self, texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        self.provider.name()
    }
}

/// Reject vectors whose length differs from the configured dimensionality.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> Result<(), EmbeddingError> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn default_engine() -> EmbeddingEngine {
        EmbeddingEngine::new(
            &EmbeddingConfig {
                provider: "hashed".to_string(),
                dimensions: 64,
                ..Default::default()
            },
            &[],
        )
    }

    /// Counts provider calls and returns a fixed-width vector.
    struct CountingProvider {
        calls: Arc<AtomicUsize>,
        width: usize,
    }

    impl IEmbeddingProvider for CountingProvider {
        fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![0.5; self.width])
        }
        fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            Ok(texts.iter().map(|_| vec![0.5; self.width]).collect())
        }
        fn dimensions(&self) -> usize {
            4
        }
        fn name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn embed_query_returns_correct_dims() {
        let engine = default_engine();
        assert_eq!(engine.embed_query("test query").unwrap().len(), 64);
    }

    #[test]
    fn embed_query_caches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = EmbeddingEngine::with_provider(
            Box::new(CountingProvider {
                calls: Arc::clone(&calls),
                width: 4,
            }),
            16,
        );
        let a = engine.embed_query("cached query").unwrap();
        let b = engine.embed_query("cached query").unwrap();
        assert_eq!(a, b);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn wrong_width_is_rejected() {
        let engine = EmbeddingEngine::with_provider(
            Box::new(CountingProvider {
                calls: Arc::new(AtomicUsize::new(0)),
                width: 3,
            }),
            16,
        );
        let err = engine.embed_query("x").unwrap_err();
        assert!(matches!(
            err,
            EmbeddingError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        ));
        assert!(engine.embed_batch(&["x".to_string()]).is_err());
    }

    #[test]
    fn batch_preserves_order_and_length() {
        let engine = default_engine();
        let texts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let vecs = engine.embed_batch(&texts).unwrap();
        assert_eq!(vecs.len(), 3);
        assert_eq!(vecs[1], engine.embed_query("b").unwrap());
    }

    #[test]
    fn empty_query_is_not_an_error() {
        let engine = default_engine();
        let v = engine.embed_query("").unwrap();
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn trait_impl_works() {
        let engine = default_engine();
        let provider: &dyn IEmbeddingProvider = &engine;
        assert_eq!(provider.dimensions(), 64);
        assert_eq!(provider.name(), "hashed");
        assert_eq!(provider.embed("hello").unwrap().len(), 64);
    }
}
