mod embedding;
mod sentiment;

pub use embedding::IEmbeddingProvider;
pub use sentiment::ISentimentAnalyzer;
