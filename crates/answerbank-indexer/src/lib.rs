//! # answerbank-indexer
//!
//! Embeds every corpus question off the request path and publishes the
//! similarity index exactly once.
//!
//! ```text
//! spawn_indexer ──► [answerbank-indexer thread]
//!                     for batch in corpus.chunks(batch_size):
//!                         embed_batch → append to matrix → progress
//!                     SimilarityIndex::build(matrix)
//!                     Readiness::publish(index)   ◄── one-shot, Release
//! Resolver ──► Readiness::get()                   ◄── Acquire
//! ```
//!
//! A reader that sees the index sees all of it. If embedding or the build
//! fails, nothing is published and the similarity tier stays degraded.

pub mod pipeline;
pub mod progress;
pub mod readiness;
pub mod worker;

pub use pipeline::{build_index, IndexerConfig};
pub use progress::{IndexProgress, IndexStatus, ProgressSnapshot};
pub use readiness::{PublishedIndex, Readiness};
pub use worker::{spawn_indexer, IndexerHandle};
