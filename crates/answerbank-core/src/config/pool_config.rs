use serde::{Deserialize, Serialize};

use super::defaults;

/// Query worker pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of query worker threads.
    pub workers: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            workers: defaults::DEFAULT_POOL_WORKERS,
        }
    }
}
