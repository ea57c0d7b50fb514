//! Configuration, loaded from TOML. Every section falls back to its defaults.

pub mod defaults;
mod embedding_config;
mod knowledge_config;
mod observability_config;
mod pool_config;
mod sentiment_config;
mod similarity_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use embedding_config::EmbeddingConfig;
pub use knowledge_config::{DuplicatePolicy, KnowledgeConfig};
pub use observability_config::ObservabilityConfig;
pub use pool_config::PoolConfig;
pub use sentiment_config::SentimentConfig;
pub use similarity_config::SimilarityConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerbankConfig {
    pub knowledge: KnowledgeConfig,
    pub embedding: EmbeddingConfig,
    pub similarity: SimilarityConfig,
    pub pool: PoolConfig,
    pub sentiment: SentimentConfig,
    pub observability: ObservabilityConfig,
}

impl AnswerbankConfig {
    /// Parse a TOML string. Missing sections and fields keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&raw)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }
}
