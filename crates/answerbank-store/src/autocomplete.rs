//! Case-insensitive substring matching over stored questions.

use crate::KnowledgeBase;

impl KnowledgeBase {
    /// Every stored question containing `query` as a case-insensitive
    /// substring, in corpus order. An empty query matches everything.
    pub fn autocomplete(&self, query: &str) -> Vec<&str> {
        let needle = query.to_lowercase();
        self.questions()
            .filter(|q| q.to_lowercase().contains(&needle))
            .collect()
    }
}
