use serde::{Deserialize, Serialize};

/// Which lookup tier produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionTier {
    EmptyInput,
    Exact,
    BinarySearch,
    Similarity,
    NotReady,
    BelowThreshold,
    Failed,
}

/// An answer plus how it was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub answer: String,
    pub tier: ResolutionTier,
    /// Corpus position of the matched entry, when a tier matched one.
    pub entry_index: Option<usize>,
    /// Euclidean distance of the nearest neighbour, similarity tier only.
    pub distance: Option<f32>,
}

impl Resolution {
    pub fn fixed(answer: &str, tier: ResolutionTier) -> Self {
        Self {
            answer: answer.to_string(),
            tier,
            entry_index: None,
            distance: None,
        }
    }
}
