//! Stateless feature-hashing provider.
//!
//! Word terms and character trigrams are hashed into fixed-dimension buckets
//! and weighted by term frequency. No model files, no corpus fitting.

use std::collections::HashMap;

use answerbank_core::errors::EmbeddingError;
use answerbank_core::traits::IEmbeddingProvider;

use crate::tokenize::{bucket, char_trigrams, l2_normalize, sign, tokenize};

/// Weight of a single trigram relative to a whole word.
const TRIGRAM_WEIGHT: f32 = 0.35;

/// Feature-hashing embedding provider.
///
/// Deterministic and always available. Texts sharing words (or, to a lesser
/// degree, word fragments) land near each other under Euclidean distance.
pub struct HashedProvider {
    dimensions: usize,
}

impl HashedProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let tokens = tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }
        let total = tokens.len() as f32;

        for (term, count) in &tf {
            let freq = count / total;
            // Longer words carry more meaning than short function words.
            let idf = 1.0 + (term.chars().count() as f32).ln();
            let word_feature = format!("w:{term}");
            vec[bucket(&word_feature, self.dimensions)] += sign(&word_feature) * freq * idf;

            for gram in char_trigrams(term) {
                let feature = format!("c:{gram}");
                vec[bucket(&feature, self.dimensions)] += sign(&feature) * freq * TRIGRAM_WEIGHT;
            }
        }

        l2_normalize(&mut vec);
        vec
    }
}

impl IEmbeddingProvider for HashedProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed"
    }
}
