//! One-shot publication of the similarity index.
//!
//! `OnceLock` makes the "ready" flag and the index handle a single value:
//! `get()` returning `Some` is the flag, and the `Release`/`Acquire` pairing
//! inside `OnceLock` guarantees the index behind it is fully constructed.

use std::sync::{Condvar, Mutex, OnceLock, PoisonError};
use std::time::{Duration, Instant};

use answerbank_core::errors::IndexError;
use answerbank_core::models::IndexReport;
use answerbank_similarity::SimilarityIndex;

use crate::progress::IndexProgress;

/// The immutable result of a successful background run.
#[derive(Debug)]
pub struct PublishedIndex {
    pub index: SimilarityIndex,
    pub report: IndexReport,
}

/// Process-wide readiness state shared by the indexer and query workers.
#[derive(Debug, Default)]
pub struct Readiness {
    published: OnceLock<PublishedIndex>,
    progress: IndexProgress,
    /// Set once the run ends, successfully or not. Only used for waiting.
    finished: Mutex<bool>,
    finished_cv: Condvar,
}

impl Readiness {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the index has been published. Never reverts.
    pub fn is_ready(&self) -> bool {
        self.published.get().is_some()
    }

    /// The published index, if any.
    pub fn get(&self) -> Option<&PublishedIndex> {
        self.published.get()
    }

    pub fn progress(&self) -> &IndexProgress {
        &self.progress
    }

    /// Publish the index. Fails if one was already published.
    pub fn publish(&self, published: PublishedIndex) -> Result<(), IndexError> {
        self.published
            .set(published)
            .map_err(|_| IndexError::AlreadyPublished)?;
        self.progress.mark_complete();
        self.signal_finished();
        Ok(())
    }

    /// Record that the run ended without publishing.
    pub fn fail(&self) {
        self.progress.mark_failed();
        self.signal_finished();
    }

    /// True once the run ended, successfully or not.
    pub fn is_finished(&self) -> bool {
        *self.finished.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block until the run ends or `timeout` elapses. Returns `is_ready()`.
    pub fn wait(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut finished = self.finished.lock().unwrap_or_else(PoisonError::into_inner);
        while !*finished {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            let (guard, _) = self
                .finished_cv
                .wait_timeout(finished, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            finished = guard;
        }
        drop(finished);
        self.is_ready()
    }

    fn signal_finished(&self) {
        let mut finished = self.finished.lock().unwrap_or_else(PoisonError::into_inner);
        *finished = true;
        self.finished_cv.notify_all();
    }
}
