//! Batched embedding of the corpus followed by index construction.

use std::time::Duration;

use answerbank_core::config::EmbeddingConfig;
use answerbank_core::errors::{AnswerbankResult, IndexError};
use answerbank_core::models::IndexReport;
use answerbank_core::traits::IEmbeddingProvider;
use answerbank_similarity::SimilarityIndex;
use answerbank_store::KnowledgeBase;
use chrono::Utc;
use tracing::{debug, info};

use crate::progress::IndexProgress;
use crate::readiness::PublishedIndex;

/// Configuration for the background indexer.
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    /// Number of questions embedded per batch.
    pub batch_size: usize,
    /// Pause between batches so other startup work can interleave.
    pub throttle: Duration,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            batch_size: answerbank_core::config::defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            throttle: Duration::ZERO,
        }
    }
}

impl From<&EmbeddingConfig> for IndexerConfig {
    fn from(config: &EmbeddingConfig) -> Self {
        Self {
            batch_size: config.batch_size,
            ..Default::default()
        }
    }
}

/// Embed every question of `kb` in batches and build the similarity index.
///
/// Row `i` of the resulting index is the embedding of `kb.entries()[i]`.
pub fn build_index(
    kb: &KnowledgeBase,
    provider: &dyn IEmbeddingProvider,
    config: &IndexerConfig,
    progress: &IndexProgress,
) -> AnswerbankResult<PublishedIndex> {
    let started_at = Utc::now();
    let batch_size = config.batch_size.max(1);
    progress.start(kb.len() as u64);

    if kb.is_empty() {
        return Err(IndexError::Empty.into());
    }

    let mut matrix: Vec<Vec<f32>> = Vec::with_capacity(kb.len());
    let mut batches = 0usize;
    for chunk in kb.entries().chunks(batch_size) {
        let texts: Vec<String> = chunk.iter().map(|e| e.question.clone()).collect();
        let embeddings = provider.embed_batch(&texts)?;
        if embeddings.len() != texts.len() {
            return Err(IndexError::BuildFailed {
                reason: format!(
                    "batch {batches}: {} embeddings for {} questions",
                    embeddings.len(),
                    texts.len()
                ),
            }
            .into());
        }
        matrix.extend(embeddings);
        batches += 1;
        progress.record_batch(chunk.len() as u64);
        debug!(batch = batches, embedded = matrix.len(), total = kb.len(), "embedded batch");

        if !config.throttle.is_zero() {
            std::thread::sleep(config.throttle);
        }
    }

    let index = SimilarityIndex::build(&matrix)?;
    let report = IndexReport {
        entries: index.len(),
        dimensions: index.dimensions(),
        batches,
        provider: provider.name().to_string(),
        started_at,
        finished_at: Utc::now(),
    };

    info!(
        entries = report.entries,
        dims = report.dimensions,
        batches = report.batches,
        provider = %report.provider,
        duration_ms = report.duration_ms(),
        "similarity index built"
    );

    Ok(PublishedIndex { index, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use answerbank_core::errors::{AnswerbankError, EmbeddingError};
    use answerbank_core::models::KnowledgeEntry;

    /// Embeds each text as [len, 0] and records batch sizes.
    struct LengthProvider {
        batch_sizes: std::sync::Mutex<Vec<usize>>,
    }

    impl IEmbeddingProvider for LengthProvider {
        fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
            Ok(vec![text.len() as f32, 0.0])
        }
        fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            self.batch_sizes.lock().unwrap().push(texts.len());
            texts.iter().map(|t| self.embed(t)).collect()
        }
        fn dimensions(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "length"
        }
    }

    struct FailingProvider;

    impl IEmbeddingProvider for FailingProvider {
        fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
            Err(EmbeddingError::InferenceFailed {
                reason: "mock failure".to_string(),
            })
        }
        fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            Err(EmbeddingError::InferenceFailed {
                reason: "mock failure".to_string(),
            })
        }
        fn dimensions(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "failing"
        }
    }

    fn kb(n: usize) -> KnowledgeBase {
        KnowledgeBase::from_entries(
            (0..n)
                .map(|i| KnowledgeEntry::new("q".repeat(i + 1), format!("a{i}")))
                .collect(),
        )
    }

    #[test]
    fn batches_respect_batch_size() {
        let provider = LengthProvider {
            batch_sizes: Default::default(),
        };
        let progress = IndexProgress::new();
        let config = IndexerConfig {
            batch_size: 50,
            ..Default::default()
        };
        let published = build_index(&kb(120), &provider, &config, &progress).unwrap();

        assert_eq!(*provider.batch_sizes.lock().unwrap(), vec![50, 50, 20]);
        assert_eq!(published.report.batches, 3);
        assert_eq!(published.index.len(), 120);
        assert_eq!(progress.snapshot().embedded, 120);
    }

    #[test]
    fn rows_align_with_sorted_entries() {
        let kb = kb(5);
        let provider = LengthProvider {
            batch_sizes: Default::default(),
        };
        let published =
            build_index(&kb, &provider, &IndexerConfig::default(), &IndexProgress::new()).unwrap();
        for (i, entry) in kb.entries().iter().enumerate() {
            assert_eq!(
                published.index.vector(i).unwrap()[0],
                entry.question.len() as f32
            );
        }
    }

    #[test]
    fn empty_corpus_fails() {
        let provider = LengthProvider {
            batch_sizes: Default::default(),
        };
        let err = build_index(&kb(0), &provider, &IndexerConfig::default(), &IndexProgress::new())
            .unwrap_err();
        assert!(matches!(err, AnswerbankError::Index(IndexError::Empty)));
    }

    #[test]
    fn provider_failure_propagates() {
        let err = build_index(
            &kb(3),
            &FailingProvider,
            &IndexerConfig::default(),
            &IndexProgress::new(),
        )
        .unwrap_err();
        assert!(matches!(err, AnswerbankError::Embedding(_)));
    }

    #[test]
    fn zero_batch_size_is_treated_as_one() {
        let provider = LengthProvider {
            batch_sizes: Default::default(),
        };
        let config = IndexerConfig {
            batch_size: 0,
            ..Default::default()
        };
        build_index(&kb(3), &provider, &config, &IndexProgress::new()).unwrap();
        assert_eq!(*provider.batch_sizes.lock().unwrap(), vec![1, 1, 1]);
    }
}
