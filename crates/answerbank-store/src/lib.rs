//! # answerbank-store
//!
//! Loads the persisted question/answer corpus once at startup and keeps it
//! immutable for the life of the process.
//!
//! ## Layout
//!
//! ```text
//! KnowledgeBase
//! ├── entries   (sorted ascending by question, duplicates collapsed)
//! └── exact     (question → position, O(1) tier)
//! ```
//!
//! Both views are built from the same collapsed entry list, so the exact tier,
//! the binary-search tier, and autocomplete always agree on duplicates.

pub mod autocomplete;
pub mod knowledge_base;
pub mod loader;
pub mod maintenance;

pub use knowledge_base::{KnowledgeBase, Lookup};
pub use loader::load_knowledge_base;
pub use maintenance::{sort_corpus_file, SortReport};
