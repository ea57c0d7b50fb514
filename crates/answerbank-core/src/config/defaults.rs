// Single source of truth for all default values.

// --- Knowledge base ---
pub const DEFAULT_KNOWLEDGE_PATH: &str = "knowledge_base.json";

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "hashed";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 300;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 50;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 1_000;

// --- Similarity ---
pub const DEFAULT_MAX_DISTANCE: Option<f32> = None;

// --- Query pool ---
pub const DEFAULT_POOL_WORKERS: usize = 5;

// --- Sentiment ---
pub const DEFAULT_SENTIMENT_ENABLED: bool = true;
pub const DEFAULT_SENTIMENT_CAPACITY: u64 = 1_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
pub const LOG_FILTER_ENV: &str = "ANSWERBANK_LOG";
