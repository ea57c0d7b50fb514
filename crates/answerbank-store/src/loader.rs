//! Reads the persisted corpus from disk.

use std::path::Path;

use answerbank_core::errors::CorpusError;
use answerbank_core::models::CorpusFile;
use tracing::info;

use crate::KnowledgeBase;

/// Read the raw corpus file without sorting or collapsing it.
pub fn read_corpus_file(path: &Path) -> Result<CorpusFile, CorpusError> {
    let raw = std::fs::read_to_string(path).map_err(|e| CorpusError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| CorpusError::Malformed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Load, sort, and index the knowledge base at `path`.
///
/// Reads the source exactly once.
pub fn load_knowledge_base(path: &Path) -> Result<KnowledgeBase, CorpusError> {
    let corpus = read_corpus_file(path)?;
    let source_len = corpus.questions.len();
    let kb = KnowledgeBase::from_entries(corpus.questions);

    info!(
        path = %path.display(),
        entries = kb.len(),
        source_entries = source_len,
        collapsed_duplicates = kb.collapsed_duplicates(),
        "knowledge base loaded"
    );

    Ok(kb)
}
