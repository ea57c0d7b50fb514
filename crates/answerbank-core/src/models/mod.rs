mod index_report;
mod knowledge_entry;
mod resolution;
mod sentiment;

pub use index_report::IndexReport;
pub use knowledge_entry::{CorpusFile, KnowledgeEntry};
pub use resolution::{Resolution, ResolutionTier};
pub use sentiment::SentimentScore;
