//! The sorted corpus and its exact-match index.

use std::collections::HashMap;

use answerbank_core::models::KnowledgeEntry;
use tracing::debug;

/// A hit from one of the textual tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a> {
    /// Position in the sorted corpus (also the embedding matrix row).
    pub index: usize,
    pub answer: &'a str,
}

/// Immutable, alphabetically sorted knowledge base.
///
/// Invariants:
/// - `entries` is sorted ascending by `question` (byte-wise, case-sensitive).
/// - questions are unique; the last occurrence in the source wins.
/// - `exact[q] == i` iff `entries[i].question == q`.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    exact: HashMap<String, usize>,
    collapsed: usize,
}

impl KnowledgeBase {
    /// Build from entries in source order.
    pub fn from_entries(source: Vec<KnowledgeEntry>) -> Self {
        let total = source.len();
        let mut position: HashMap<String, usize> = HashMap::with_capacity(total);
        let mut unique: Vec<KnowledgeEntry> = Vec::with_capacity(total);

        for entry in source {
            match position.get(&entry.question) {
                Some(&i) => {
                    debug!(question = %entry.question, "duplicate question, keeping later answer");
                    unique[i].answer = entry.answer;
                }
                None => {
                    position.insert(entry.question.clone(), unique.len());
                    unique.push(entry);
                }
            }
        }

        unique.sort_by(|a, b| a.question.cmp(&b.question));

        let exact = unique
            .iter()
            .enumerate()
            .map(|(i, e)| (e.question.clone(), i))
            .collect();

        Self {
            collapsed: total - unique.len(),
            entries: unique,
            exact,
        }
    }

    /// O(1) lookup by exact question text.
    pub fn exact_lookup(&self, question: &str) -> Option<Lookup<'_>> {
        self.exact.get(question).map(|&index| Lookup {
            index,
            answer: &self.entries[index].answer,
        })
    }

    /// O(log n) lookup by exact question text over the sorted entries.
    pub fn binary_search(&self, question: &str) -> Option<Lookup<'_>> {
        self.entries
            .binary_search_by(|e| e.question.as_str().cmp(question))
            .ok()
            .map(|index| Lookup {
                index,
                answer: &self.entries[index].answer,
            })
    }

    pub fn get(&self, index: usize) -> Option<&KnowledgeEntry> {
        self.entries.get(index)
    }

    /// Sorted entries.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Sorted questions.
    pub fn questions(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.question.as_str())
    }

    /// Number of source entries dropped because a later entry had the same question.
    pub fn collapsed_duplicates(&self) -> usize {
        self.collapsed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
