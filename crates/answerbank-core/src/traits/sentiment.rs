use crate::models::SentimentScore;

/// Polarity/subjectivity scorer.
pub trait ISentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> SentimentScore;
}
