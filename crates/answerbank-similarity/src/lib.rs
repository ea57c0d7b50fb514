//! # answerbank-similarity
//!
//! Nearest-neighbour lookup over the embedding matrix.
//!
//! The index stores every vector in one contiguous row-major buffer and
//! answers queries by exact Euclidean scan (parallel over rows for large
//! corpora). Results are ordered by distance, ties by lower row index.

pub mod distance;
pub mod flat_index;

pub use distance::euclidean;
pub use flat_index::{Neighbor, SimilarityIndex};
