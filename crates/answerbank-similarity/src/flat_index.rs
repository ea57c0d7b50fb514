//! Exact nearest-neighbour index.

use std::cmp::Ordering;

use answerbank_core::errors::IndexError;
use rayon::prelude::*;
use tracing::debug;

use crate::distance::squared_euclidean;

/// Row count above which distance computation is spread across the rayon pool.
const PARALLEL_THRESHOLD: usize = 4_096;

/// One query result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub distance: f32,
    /// Row in the embedding matrix, i.e. position in the sorted corpus.
    pub index: usize,
}

/// Immutable exact nearest-neighbour index.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    dimensions: usize,
    rows: usize,
    data: Vec<f32>,
}

impl SimilarityIndex {
    /// Build over `vectors`, preserving their order as row indices.
    ///
    /// All vectors must share one non-zero length.
    pub fn build(vectors: &[Vec<f32>]) -> Result<Self, IndexError> {
        let first = vectors.first().ok_or(IndexError::Empty)?;
        let dimensions = first.len();
        if dimensions == 0 {
            return Err(IndexError::BuildFailed {
                reason: "zero-dimensional vectors".to_string(),
            });
        }

        let mut data = Vec::with_capacity(vectors.len() * dimensions);
        for (position, v) in vectors.iter().enumerate() {
            if v.len() != dimensions {
                return Err(IndexError::DimensionMismatch {
                    position,
                    expected: dimensions,
                    actual: v.len(),
                });
            }
            if v.iter().any(|x| !x.is_finite()) {
                return Err(IndexError::BuildFailed {
                    reason: format!("vector {position} contains a non-finite component"),
                });
            }
            data.extend_from_slice(v);
        }

        debug!(rows = vectors.len(), dims = dimensions, "similarity index built");
        Ok(Self {
            dimensions,
            rows: vectors.len(),
            data,
        })
    }

    /// The `k` closest rows to `vector`, nearest first.
    pub fn query(&self, vector: &[f32], k: usize) -> Result<Vec<Neighbor>, IndexError> {
        if vector.len() != self.dimensions {
            return Err(IndexError::DimensionMismatch {
                position: 0,
                expected: self.dimensions,
                actual: vector.len(),
            });
        }
        let k = k.min(self.rows);
        if k == 0 {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(f32, usize)> = if self.rows >= PARALLEL_THRESHOLD {
            self.data
                .par_chunks_exact(self.dimensions)
                .enumerate()
                .map(|(i, row)| (squared_euclidean(row, vector), i))
                .collect()
        } else {
            self.data
                .chunks_exact(self.dimensions)
                .enumerate()
                .map(|(i, row)| (squared_euclidean(row, vector), i))
                .collect()
        };

        if k < scored.len() {
            scored.select_nth_unstable_by(k - 1, by_distance_then_index);
            scored.truncate(k);
        }
        scored.sort_unstable_by(by_distance_then_index);

        Ok(scored
            .into_iter()
            .map(|(sq, index)| Neighbor {
                distance: sq.sqrt(),
                index,
            })
            .collect())
    }

    /// The single closest row.
    pub fn nearest(&self, vector: &[f32]) -> Result<Option<Neighbor>, IndexError> {
        Ok(self.query(vector, 1)?.into_iter().next())
    }

    /// Row `index` of the underlying matrix.
    pub fn vector(&self, index: usize) -> Option<&[f32]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.dimensions;
        Some(&self.data[start..start + self.dimensions])
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

fn by_distance_then_index(a: &(f32, usize), b: &(f32, usize)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}
