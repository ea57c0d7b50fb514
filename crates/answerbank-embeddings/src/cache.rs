//! Memo of query text → embedding for the similarity tier.
//!
//! Users repeat questions ("hi", "what can you do"), and each miss costs a
//! full provider call. Entries never go stale: a provider maps the same text to
//! the same vector for the life of the process, so only capacity evicts.
//! Corpus batches are embedded once at startup and never pass through here.

use std::sync::Arc;

use moka::sync::Cache;

/// Bounded map from the blake3 digest of a query to its embedding.
pub struct QueryEmbeddingCache {
    vectors: Cache<blake3::Hash, Arc<[f32]>>,
}

impl QueryEmbeddingCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            vectors: Cache::new(capacity),
        }
    }

    /// Digest used as the key. Queries are hashed exactly as given; the
    /// resolver normalizes before embedding.
    pub fn digest(query: &str) -> blake3::Hash {
        blake3::hash(query.as_bytes())
    }

    /// The remembered embedding of `query`, if any.
    pub fn lookup(&self, query: &str) -> Option<Vec<f32>> {
        self.vectors.get(&Self::digest(query)).map(|v| v.to_vec())
    }

    pub fn remember(&self, query: &str, embedding: &[f32]) {
        self.vectors.insert(Self::digest(query), Arc::from(embedding));
    }

    /// Queries currently held, after pending evictions are applied.
    pub fn cached_queries(&self) -> u64 {
        self.vectors.run_pending_tasks();
        self.vectors.entry_count()
    }

    pub fn forget_all(&self) {
        self.vectors.invalidate_all();
        self.vectors.run_pending_tasks();
    }
}
