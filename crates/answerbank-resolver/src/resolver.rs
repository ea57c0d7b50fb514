//! The three-tier resolver.

use std::sync::Arc;

use answerbank_core::config::SimilarityConfig;
use answerbank_core::constants::{
    EMPTY_INPUT_MESSAGE, INTERNAL_FAILURE_MESSAGE, NOT_READY_MESSAGE, NO_CONFIDENT_MATCH_MESSAGE,
};
use answerbank_core::errors::AnswerbankResult;
use answerbank_core::models::{Resolution, ResolutionTier};
use answerbank_core::normalize_input;
use answerbank_core::traits::IEmbeddingProvider;
use answerbank_indexer::{PublishedIndex, Readiness};
use answerbank_similarity::Neighbor;
use answerbank_store::KnowledgeBase;
use tracing::{debug, warn};

/// Maps raw user input to an answer. Cheap to share across worker threads.
pub struct Resolver {
    kb: Arc<KnowledgeBase>,
    embedder: Arc<dyn IEmbeddingProvider>,
    readiness: Arc<Readiness>,
    max_distance: Option<f32>,
}

impl Resolver {
    pub fn new(
        kb: Arc<KnowledgeBase>,
        embedder: Arc<dyn IEmbeddingProvider>,
        readiness: Arc<Readiness>,
        config: &SimilarityConfig,
    ) -> Self {
        Self {
            kb,
            embedder,
            readiness,
            max_distance: config.max_distance,
        }
    }

    /// Resolve `raw` to an answer string.
    pub fn resolve(&self, raw: &str) -> String {
        self.resolve_detailed(raw).answer
    }

    /// Resolve `raw`, reporting which tier answered.
    pub fn resolve_detailed(&self, raw: &str) -> Resolution {
        let normalized = normalize_input(raw);
        if normalized.is_empty() {
            return Resolution::fixed(EMPTY_INPUT_MESSAGE, ResolutionTier::EmptyInput);
        }

        if let Some(hit) = self.kb.exact_lookup(&normalized) {
            debug!(tier = "exact", index = hit.index, "resolved");
            return matched(hit.answer, ResolutionTier::Exact, hit.index, None);
        }

        if let Some(hit) = self.kb.binary_search(&normalized) {
            debug!(tier = "binary_search", index = hit.index, "resolved");
            return matched(hit.answer, ResolutionTier::BinarySearch, hit.index, None);
        }

        let Some(published) = self.readiness.get() else {
            debug!(tier = "similarity", "index not ready");
            return Resolution::fixed(NOT_READY_MESSAGE, ResolutionTier::NotReady);
        };

        match self.nearest(published, &normalized) {
            Ok(Some(neighbor)) => self.answer_for(neighbor),
            Ok(None) => {
                warn!("similarity index returned no neighbour");
                Resolution::fixed(INTERNAL_FAILURE_MESSAGE, ResolutionTier::Failed)
            }
            Err(e) => {
                warn!(error = %e, "similarity lookup failed");
                Resolution::fixed(INTERNAL_FAILURE_MESSAGE, ResolutionTier::Failed)
            }
        }
    }

    /// Stored questions containing `query`, case-insensitively, in corpus order.
    pub fn autocomplete(&self, query: &str) -> Vec<String> {
        self.kb
            .autocomplete(query)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn readiness(&self) -> &Arc<Readiness> {
        &self.readiness
    }

    fn nearest(
        &self,
        published: &PublishedIndex,
        normalized: &str,
    ) -> AnswerbankResult<Option<Neighbor>> {
        let vector = self.embedder.embed(normalized)?;
        Ok(published.index.nearest(&vector)?)
    }

    fn answer_for(&self, neighbor: Neighbor) -> Resolution {
        if let Some(limit) = self.max_distance {
            if neighbor.distance > limit {
                debug!(distance = neighbor.distance, limit, "nearest neighbour too far");
                return Resolution {
                    distance: Some(neighbor.distance),
                    ..Resolution::fixed(NO_CONFIDENT_MATCH_MESSAGE, ResolutionTier::BelowThreshold)
                };
            }
        }

        match self.kb.get(neighbor.index) {
            Some(entry) => {
                debug!(
                    tier = "similarity",
                    index = neighbor.index,
                    distance = neighbor.distance,
                    "resolved"
                );
                matched(
                    &entry.answer,
                    ResolutionTier::Similarity,
                    neighbor.index,
                    Some(neighbor.distance),
                )
            }
            None => {
                warn!(index = neighbor.index, "neighbour outside the knowledge base");
                Resolution::fixed(INTERNAL_FAILURE_MESSAGE, ResolutionTier::Failed)
            }
        }
    }
}

fn matched(answer: &str, tier: ResolutionTier, index: usize, distance: Option<f32>) -> Resolution {
    Resolution {
        answer: answer.to_string(),
        tier,
        entry_index: Some(index),
        distance,
    }
}
