//! Indexing progress tracking.
//!
//! Tracks total, embedded, batches, and status for the background run.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

/// Indexing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexStatus {
    Pending,
    InProgress,
    Complete,
    Failed,
}

impl IndexStatus {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Pending,
            1 => Self::InProgress,
            2 => Self::Complete,
            _ => Self::Failed,
        }
    }
}

/// Thread-safe progress tracker, written by the indexer, read by anyone.
#[derive(Debug, Default)]
pub struct IndexProgress {
    total: AtomicU64,
    embedded: AtomicU64,
    batches: AtomicU64,
    status: AtomicU8,
}

impl IndexProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run as started over `total` questions.
    pub fn start(&self, total: u64) {
        self.total.store(total, Ordering::Relaxed);
        self.embedded.store(0, Ordering::Relaxed);
        self.batches.store(0, Ordering::Relaxed);
        self.status.store(1, Ordering::Relaxed);
    }

    /// Record one finished batch of `size` questions.
    pub fn record_batch(&self, size: u64) {
        self.embedded.fetch_add(size, Ordering::Relaxed);
        self.batches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn mark_complete(&self) {
        self.status.store(2, Ordering::Relaxed);
    }

    pub fn mark_failed(&self) {
        self.status.store(3, Ordering::Relaxed);
    }

    pub fn status(&self) -> IndexStatus {
        IndexStatus::from_u8(self.status.load(Ordering::Relaxed))
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        let total = self.total.load(Ordering::Relaxed);
        let embedded = self.embedded.load(Ordering::Relaxed);
        ProgressSnapshot {
            total,
            embedded,
            remaining: total.saturating_sub(embedded),
            batches: self.batches.load(Ordering::Relaxed),
            status: self.status(),
        }
    }
}

/// Immutable snapshot of indexing progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub total: u64,
    pub embedded: u64,
    pub remaining: u64,
    pub batches: u64,
    pub status: IndexStatus,
}
