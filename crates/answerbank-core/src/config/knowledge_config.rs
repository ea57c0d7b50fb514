use serde::{Deserialize, Serialize};

use super::defaults;

/// How repeated questions in the persisted corpus are collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The answer that appears last in the file wins, in every tier.
    #[default]
    LastWins,
}

/// Knowledge base source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Path to the persisted JSON corpus.
    pub path: String,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_KNOWLEDGE_PATH.to_string(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}
