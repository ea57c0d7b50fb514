//! Memoization and eviction behaviour of the sentiment cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use answerbank_core::models::SentimentScore;
use answerbank_core::traits::ISentimentAnalyzer;
use answerbank_sentiment::{CacheStats, LexiconAnalyzer, SentimentCache};

/// Counts analyses, delegating to the lexicon analyzer.
#[derive(Default)]
struct CountingAnalyzer {
    calls: AtomicUsize,
}

impl CountingAnalyzer {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ISentimentAnalyzer for CountingAnalyzer {
    fn analyze(&self, text: &str) -> SentimentScore {
        self.calls.fetch_add(1, Ordering::SeqCst);
        LexiconAnalyzer::new().analyze(text)
    }
}

fn counting_cache(capacity: u64) -> (SentimentCache, Arc<CountingAnalyzer>) {
    let analyzer = Arc::new(CountingAnalyzer::default());
    let cache = SentimentCache::with_analyzer(capacity, analyzer.clone());
    (cache, analyzer)
}

#[test]
fn repeated_text_is_computed_once() {
    let (cache, analyzer) = counting_cache(10);
    let first = cache.sentiment_of("this is great");
    let second = cache.sentiment_of("this is great");
    assert_eq!(first, second);
    assert_eq!(analyzer.calls(), 1);
    assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
}

#[test]
fn cached_score_matches_analyzer() {
    let cache = SentimentCache::new(10);
    let text = "what a terrible day";
    assert_eq!(cache.sentiment_of(text), LexiconAnalyzer::new().analyze(text));
}

#[test]
fn least_recently_used_is_evicted() {
    let (cache, _) = counting_cache(2);
    cache.sentiment_of("alpha");
    cache.sentiment_of("beta");
    // Touch alpha so beta becomes the oldest.
    cache.sentiment_of("alpha");
    cache.sentiment_of("gamma");

    assert_eq!(cache.len(), 2);
    assert!(cache.contains("alpha"));
    assert!(cache.contains("gamma"));
    assert!(!cache.contains("beta"));
}

#[test]
fn evicted_text_is_recomputed() {
    let (cache, analyzer) = counting_cache(1);
    let before = cache.sentiment_of("good morning");
    cache.sentiment_of("bad evening");
    assert!(!cache.contains("good morning"));

    let after = cache.sentiment_of("good morning");
    assert_eq!(before, after);
    assert_eq!(analyzer.calls(), 3);
}

#[test]
fn size_never_exceeds_capacity() {
    let (cache, _) = counting_cache(5);
    for i in 0..50 {
        cache.sentiment_of(&format!("message number {i}"));
        assert!(cache.len() <= 5);
    }
    assert_eq!(cache.len(), 5);
}

#[test]
fn clear_empties_the_cache() {
    let (cache, analyzer) = counting_cache(5);
    cache.sentiment_of("nice");
    cache.clear();
    assert!(cache.is_empty());
    cache.sentiment_of("nice");
    assert_eq!(analyzer.calls(), 2);
}

#[test]
fn concurrent_callers_agree() {
    let (cache, analyzer) = counting_cache(100);
    let cache = Arc::new(cache);

    std::thread::scope(|s| {
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            s.spawn(move || {
                for _ in 0..100 {
                    let score = cache.sentiment_of("I love this, it is wonderful");
                    assert!(score.polarity > 0.0);
                }
            });
        }
    });

    assert_eq!(analyzer.calls(), 1);
    let stats = cache.stats();
    assert_eq!(stats.hits + stats.misses, 800);
    assert_eq!(stats.misses, 1);
}
