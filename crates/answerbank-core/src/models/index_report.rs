use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a finished background indexing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexReport {
    pub entries: usize,
    pub dimensions: usize,
    pub batches: usize,
    pub provider: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl IndexReport {
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
