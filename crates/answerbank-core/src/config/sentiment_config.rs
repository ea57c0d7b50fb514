use serde::{Deserialize, Serialize};

use super::defaults;

/// Sentiment signal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Compute sentiment for each chat message.
    pub enabled: bool,
    /// Max distinct texts kept in the memoization cache.
    pub capacity: u64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_SENTIMENT_ENABLED,
            capacity: defaults::DEFAULT_SENTIMENT_CAPACITY,
        }
    }
}
