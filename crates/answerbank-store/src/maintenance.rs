//! Offline corpus maintenance: rewrite the persisted corpus in sorted order.
//!
//! Not part of the query path. Duplicates are kept as-is so no authored
//! content is lost on disk; collapsing happens at load time.

use std::path::Path;

use answerbank_core::errors::CorpusError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::info;

/// Outcome of a sort pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    pub entries: usize,
    /// True when the file was already sorted and was left untouched.
    pub already_sorted: bool,
}

/// Sort the corpus at `path` by question and rewrite it with 4-space indentation.
///
/// Only the order of the `questions` array changes. Other top-level keys and
/// extra fields on each record are written back as they were read.
/// Idempotent: an already-sorted file is not rewritten.
pub fn sort_corpus_file(path: &Path) -> Result<SortReport, CorpusError> {
    let malformed = |reason: String| CorpusError::Malformed {
        path: path.display().to_string(),
        reason,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| CorpusError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut document: Value =
        serde_json::from_str(&raw).map_err(|e| malformed(e.to_string()))?;

    let questions = document
        .get_mut("questions")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| malformed("expected an object with a `questions` array".to_string()))?;

    if let Some(position) = questions.iter().position(|r| question_of(r).is_none()) {
        return Err(malformed(format!("record {position} has no string `question`")));
    }

    let entries = questions.len();
    let already_sorted = questions
        .windows(2)
        .all(|w| question_of(&w[0]) <= question_of(&w[1]));
    if already_sorted {
        info!(path = %path.display(), entries, "corpus already sorted");
        return Ok(SortReport {
            entries,
            already_sorted,
        });
    }

    // Stable: duplicate questions keep their file order, so last-wins at load is unchanged.
    questions.sort_by(|a, b| question_of(a).cmp(&question_of(b)));
    write_corpus_file(path, &document)?;

    info!(path = %path.display(), entries, "corpus sorted and rewritten");
    Ok(SortReport {
        entries,
        already_sorted,
    })
}

fn question_of(record: &Value) -> Option<&str> {
    record.get("question").and_then(Value::as_str)
}

/// Write `document` as pretty JSON, replacing the file atomically.
pub fn write_corpus_file<T: Serialize>(path: &Path, document: &T) -> Result<(), CorpusError> {
    let unwritable = |reason: String| CorpusError::Unwritable {
        path: path.display().to_string(),
        reason,
    };

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document
        .serialize(&mut ser)
        .map_err(|e| unwritable(e.to_string()))?;
    buf.push(b'\n');

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &buf).map_err(|e| unwritable(e.to_string()))?;
    std::fs::rename(&tmp, path).map_err(|e| unwritable(e.to_string()))
}
