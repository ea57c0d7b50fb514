//! # answerbank-resolver
//!
//! Resolves free-text questions against the knowledge base, falling through
//! three tiers:
//!
//! 1. exact lookup on the normalized text (O(1))
//! 2. binary search over the sorted corpus (O(log n))
//! 3. nearest neighbour over question embeddings, once the background index
//!    is published
//!
//! Every failure inside the pipeline becomes one of the fixed messages in
//! [`answerbank_core::constants`]. Only startup (corpus load) can fail hard.

pub mod chat;
pub mod pool;
pub mod resolver;
pub mod runtime;
pub mod tracing_setup;

pub use chat::{AutocompleteResponse, ChatRequest, ChatResponse, ChatService, SessionIdentity};
pub use pool::QueryPool;
pub use resolver::Resolver;
pub use runtime::{AnswerbankRuntime, RuntimeStatus};
