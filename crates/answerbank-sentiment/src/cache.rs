//! Bounded memoization of sentiment scores.
//!
//! Least-recently-used eviction: moka's LRU policy plus a maintenance pass
//! after every insert, so the entry count never stays above capacity and the
//! evicted entry is always the one touched longest ago.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use answerbank_core::models::SentimentScore;
use answerbank_core::traits::ISentimentAnalyzer;
use moka::policy::EvictionPolicy;
use moka::sync::Cache;
use tracing::debug;

use crate::lexicon::LexiconAnalyzer;

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Thread-safe LRU cache from message text to its sentiment score.
pub struct SentimentCache {
    cache: Cache<String, SentimentScore>,
    analyzer: Arc<dyn ISentimentAnalyzer>,
    capacity: u64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SentimentCache {
    /// Cache backed by the built-in [`LexiconAnalyzer`].
    pub fn new(capacity: u64) -> Self {
        Self::with_analyzer(capacity, Arc::new(LexiconAnalyzer::new()))
    }

    pub fn with_analyzer(capacity: u64, analyzer: Arc<dyn ISentimentAnalyzer>) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self {
            cache,
            analyzer,
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Score `text`, computing at most once per resident entry.
    ///
    /// Concurrent callers for the same uncached text share one computation.
    pub fn sentiment_of(&self, text: &str) -> SentimentScore {
        let entry = self
            .cache
            .entry_by_ref(text)
            .or_insert_with(|| self.analyzer.analyze(text));

        if entry.is_fresh() {
            self.misses.fetch_add(1, Ordering::Relaxed);
            self.cache.run_pending_tasks();
            debug!(entries = self.cache.entry_count(), "sentiment cached");
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        entry.into_value()
    }

    /// Whether `text` is currently resident. Does not count as a use.
    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains_key(text)
    }

    /// Resident entries after pending maintenance.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
    }
}

impl std::fmt::Debug for SentimentCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentCache")
            .field("capacity", &self.capacity)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
