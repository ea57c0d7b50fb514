//! Corpus fixtures for Answerbank integration tests.
//!
//! Provides the JSON corpora under `corpora/` and helpers for loading or
//! building them in tests across crates.

use std::path::PathBuf;

use answerbank_core::models::{CorpusFile, KnowledgeEntry};

/// Root directory of the corpora folder.
fn corpora_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("corpora")
}

/// Absolute path of a corpus fixture, e.g. `corpus_path("small_talk.json")`.
pub fn corpus_path(name: &str) -> PathBuf {
    corpora_root().join(name)
}

/// Load and deserialize a corpus fixture.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_corpus(name: &str) -> CorpusFile {
    let path = corpus_path(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Build entries from `(question, answer)` pairs.
pub fn entries(pairs: &[(&str, &str)]) -> Vec<KnowledgeEntry> {
    pairs
        .iter()
        .map(|(q, a)| KnowledgeEntry::new(*q, *a))
        .collect()
}

/// The two-entry corpus used by the autocomplete examples.
pub fn name_and_time() -> Vec<KnowledgeEntry> {
    entries(&[("What is your name?", "Bot"), ("What time is it?", "Now")])
}

/// Write a corpus to a JSON string in the persisted layout.
pub fn corpus_json(entries: &[KnowledgeEntry]) -> String {
    let file = CorpusFile {
        questions: entries.to_vec(),
    };
    serde_json::to_string_pretty(&file).unwrap_or_default()
}
