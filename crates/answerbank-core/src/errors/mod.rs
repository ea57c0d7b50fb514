mod config_error;
mod corpus_error;
mod embedding_error;
mod index_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use embedding_error::EmbeddingError;
pub use index_error::IndexError;

/// Top-level error for the whole pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AnswerbankError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("query pool shut down")]
    PoolClosed,

    #[error("query job ended without a reply")]
    JobAborted,

    #[error("failed to spawn {name} thread: {reason}")]
    ThreadSpawn { name: String, reason: String },
}

pub type AnswerbankResult<T> = Result<T, AnswerbankError>;
