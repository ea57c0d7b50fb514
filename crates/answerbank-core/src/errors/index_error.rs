/// Similarity index and background indexing errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("cannot build an index over zero vectors")]
    Empty,

    #[error("vector {position} has {actual} dimensions, index expects {expected}")]
    DimensionMismatch {
        position: usize,
        expected: usize,
        actual: usize,
    },

    #[error("index build failed: {reason}")]
    BuildFailed { reason: String },

    #[error("similarity index already published")]
    AlreadyPublished,
}
