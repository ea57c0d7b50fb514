//! TF-IDF provider with inverse document frequencies fitted on the corpus.

use std::collections::HashMap;

use answerbank_core::errors::EmbeddingError;
use answerbank_core::traits::IEmbeddingProvider;

use crate::tokenize::{bucket, char_trigrams, l2_normalize, sign, tokenize};

const TRIGRAM_WEIGHT: f32 = 0.25;

/// TF-IDF embedding provider.
///
/// Terms common across the corpus ("what", "is") are down-weighted so the
/// distinguishing words of each question dominate the distance.
pub struct TfIdfProvider {
    dimensions: usize,
    idf: HashMap<String, f32>,
    /// IDF used for terms never seen in the corpus.
    unseen_idf: f32,
}

impl TfIdfProvider {
    /// Fit document frequencies over `documents`.
    pub fn fit(documents: &[String], dimensions: usize) -> Self {
        let mut df: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let mut terms = tokenize(doc);
            terms.sort_unstable();
            terms.dedup();
            for term in terms {
                *df.entry(term).or_default() += 1;
            }
        }

        let n = documents.len() as f32;
        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1.
        let idf = df
            .into_iter()
            .map(|(term, count)| (term, ((1.0 + n) / (1.0 + count as f32)).ln() + 1.0))
            .collect();

        Self {
            dimensions: dimensions.max(1),
            idf,
            unseen_idf: (1.0 + n).ln() + 1.0,
        }
    }

    /// Number of distinct terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
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
            let weight = (count / total) * self.idf.get(*term).copied().unwrap_or(self.unseen_idf);
            let word_feature = format!("w:{term}");
            vec[bucket(&word_feature, self.dimensions)] += sign(&word_feature) * weight;

            for gram in char_trigrams(term) {
                let feature = format!("c:{gram}");
                vec[bucket(&feature, self.dimensions)] += sign(&feature) * weight * TRIGRAM_WEIGHT;
            }
        }

        l2_normalize(&mut vec);
        vec
    }
}

impl IEmbeddingProvider for TfIdfProvider {
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
        "tfidf"
    }
}
