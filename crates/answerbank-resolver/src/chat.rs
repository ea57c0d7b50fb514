//! The request/response boundary consumed by a web or CLI host.
//!
//! Always answers with a string. Internal failures never cross this boundary
//! as errors.

use std::sync::Arc;

use answerbank_core::constants::{
    EMPTY_INPUT_MESSAGE, GUEST_USERNAME, INTERNAL_FAILURE_MESSAGE, SIGN_IN_MESSAGE,
};
use answerbank_core::errors::AnswerbankResult;
use answerbank_core::models::SentimentScore;
use answerbank_sentiment::SentimentCache;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::pool::QueryPool;
use crate::resolver::Resolver;

/// An already-authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub username: String,
}

impl SessionIdentity {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// The identity handed out by the guest sign-in flow.
    pub fn guest() -> Self {
        Self::new(GUEST_USERNAME)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    /// Auxiliary signal; never influences `response`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentScore>,
}

impl ChatResponse {
    fn text(response: &str) -> Self {
        Self {
            response: response.to_string(),
            sentiment: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteResponse {
    pub matches: Vec<String>,
}

/// Chat and autocomplete entry points backed by the query pool.
pub struct ChatService {
    resolver: Arc<Resolver>,
    sentiment: Option<Arc<SentimentCache>>,
    pool: QueryPool,
}

impl ChatService {
    pub fn new(
        resolver: Arc<Resolver>,
        sentiment: Option<Arc<SentimentCache>>,
        pool: QueryPool,
    ) -> Self {
        Self {
            resolver,
            sentiment,
            pool,
        }
    }

    /// Answer `request` on a pool worker, blocking until it replies.
    pub fn chat(&self, session: Option<&SessionIdentity>, request: ChatRequest) -> ChatResponse {
        match self.admit(session, request) {
            Admission::Rejected(response) => response,
            Admission::Accepted(message) => {
                let job = self.job(message);
                Self::finish(self.pool.run(job))
            }
        }
    }

    /// Async variant of [`Self::chat`] for hosts running an executor.
    pub async fn chat_async(
        &self,
        session: Option<&SessionIdentity>,
        request: ChatRequest,
    ) -> ChatResponse {
        match self.admit(session, request) {
            Admission::Rejected(response) => response,
            Admission::Accepted(message) => {
                let job = self.job(message);
                Self::finish(self.pool.run_async(job).await)
            }
        }
    }

    /// Stored questions containing `query`, case-insensitively, in corpus order.
    pub fn autocomplete(&self, query: &str) -> AutocompleteResponse {
        AutocompleteResponse {
            matches: self.resolver.autocomplete(query),
        }
    }

    pub fn resolver(&self) -> &Arc<Resolver> {
        &self.resolver
    }

    pub fn sentiment(&self) -> Option<&Arc<SentimentCache>> {
        self.sentiment.as_ref()
    }

    pub fn pool(&self) -> &QueryPool {
        &self.pool
    }

    fn admit(&self, session: Option<&SessionIdentity>, request: ChatRequest) -> Admission {
        if session.is_none() {
            return Admission::Rejected(ChatResponse::text(SIGN_IN_MESSAGE));
        }
        match request.message {
            Some(message) if !message.trim().is_empty() => Admission::Accepted(message),
            _ => Admission::Rejected(ChatResponse::text(EMPTY_INPUT_MESSAGE)),
        }
    }

    fn job(&self, message: String) -> impl FnOnce() -> ChatResponse + Send + 'static {
        let resolver = Arc::clone(&self.resolver);
        let sentiment = self.sentiment.clone();
        move || ChatResponse {
            response: resolver.resolve(&message),
            sentiment: sentiment.map(|cache| cache.sentiment_of(message.trim())),
        }
    }

    fn finish(outcome: AnswerbankResult<ChatResponse>) -> ChatResponse {
        outcome.unwrap_or_else(|e| {
            warn!(error = %e, "chat request failed");
            ChatResponse::text(INTERNAL_FAILURE_MESSAGE)
        })
    }
}

enum Admission {
    Accepted(String),
    Rejected(ChatResponse),
}
