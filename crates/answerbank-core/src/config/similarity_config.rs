use serde::{Deserialize, Serialize};

use super::defaults;

/// Nearest-neighbour fallback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Euclidean distance above which the nearest neighbour is not trusted.
    /// `None` always returns the nearest neighbour.
    pub max_distance: Option<f32>,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            max_distance: defaults::DEFAULT_MAX_DISTANCE,
        }
    }
}
