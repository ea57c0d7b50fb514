//! AnswerbankRuntime owns the knowledge base, embedding engine, background
//! indexer, sentiment cache, and chat service for one process.
//!
//! Constructed once at startup and passed by reference; nothing here is
//! global.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use answerbank_core::config::AnswerbankConfig;
use answerbank_core::errors::{AnswerbankError, AnswerbankResult};
use answerbank_core::models::IndexReport;
use answerbank_core::traits::IEmbeddingProvider;
use answerbank_embeddings::EmbeddingEngine;
use answerbank_indexer::{
    spawn_indexer, IndexerConfig, IndexerHandle, ProgressSnapshot, Readiness,
};
use answerbank_sentiment::SentimentCache;
use answerbank_store::{load_knowledge_base, KnowledgeBase};
use serde::Serialize;
use tracing::info;

use crate::chat::ChatService;
use crate::pool::QueryPool;
use crate::resolver::Resolver;

/// Point-in-time view of the runtime, for status output.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeStatus {
    pub entries: usize,
    pub collapsed_duplicates: usize,
    pub provider: String,
    pub dimensions: usize,
    pub cached_query_embeddings: u64,
    pub workers: usize,
    pub ready: bool,
    pub progress: ProgressSnapshot,
    pub report: Option<IndexReport>,
}

/// The running question-matching pipeline.
pub struct AnswerbankRuntime {
    config: AnswerbankConfig,
    engine: Arc<EmbeddingEngine>,
    indexer: IndexerHandle,
    chat: ChatService,
}

impl AnswerbankRuntime {
    /// Load the corpus named by `config.knowledge.path` and start serving.
    ///
    /// A missing or malformed corpus is fatal. Everything after that degrades
    /// instead of failing.
    pub fn start(config: AnswerbankConfig) -> AnswerbankResult<Self> {
        let kb = load_knowledge_base(Path::new(&config.knowledge.path))?;
        Self::with_knowledge_base(config, kb)
    }

    /// Start over an already-loaded knowledge base with the configured provider.
    pub fn with_knowledge_base(
        config: AnswerbankConfig,
        kb: KnowledgeBase,
    ) -> AnswerbankResult<Self> {
        let questions: Vec<String> = kb.questions().map(str::to_string).collect();
        let engine = EmbeddingEngine::new(&config.embedding, &questions);
        Self::assemble(config, kb, engine)
    }

    /// Start with a caller-supplied embedding provider.
    pub fn with_provider(
        config: AnswerbankConfig,
        kb: KnowledgeBase,
        provider: Box<dyn IEmbeddingProvider>,
    ) -> AnswerbankResult<Self> {
        let engine = EmbeddingEngine::with_provider(provider, config.embedding.query_cache_size);
        Self::assemble(config, kb, engine)
    }

    fn assemble(
        config: AnswerbankConfig,
        kb: KnowledgeBase,
        engine: EmbeddingEngine,
    ) -> AnswerbankResult<Self> {
        let kb = Arc::new(kb);
        let engine = Arc::new(engine);
        let embedder: Arc<dyn IEmbeddingProvider> = engine.clone();

        let indexer = spawn_indexer(
            Arc::clone(&kb),
            Arc::clone(&embedder),
            IndexerConfig::from(&config.embedding),
        )
        .map_err(|e| AnswerbankError::ThreadSpawn {
            name: "answerbank-indexer".to_string(),
            reason: e.to_string(),
        })?;

        let resolver = Arc::new(Resolver::new(
            Arc::clone(&kb),
            embedder,
            Arc::clone(indexer.readiness()),
            &config.similarity,
        ));

        let sentiment = config
            .sentiment
            .enabled
            .then(|| Arc::new(SentimentCache::new(config.sentiment.capacity)));

        let pool = QueryPool::new(config.pool.workers)?;

        info!(
            entries = kb.len(),
            provider = engine.provider_name(),
            workers = pool.size(),
            sentiment = sentiment.is_some(),
            "answerbank runtime started"
        );

        Ok(Self {
            config,
            engine,
            indexer,
            chat: ChatService::new(resolver, sentiment, pool),
        })
    }

    pub fn chat(&self) -> &ChatService {
        &self.chat
    }

    pub fn resolver(&self) -> &Arc<Resolver> {
        self.chat.resolver()
    }

    pub fn readiness(&self) -> &Arc<Readiness> {
        self.indexer.readiness()
    }

    pub fn config(&self) -> &AnswerbankConfig {
        &self.config
    }

    /// Block until background indexing ends or `timeout` passes. Returns readiness.
    pub fn wait_until_ready(&self, timeout: Duration) -> bool {
        self.readiness().wait(timeout)
    }

    pub fn status(&self) -> RuntimeStatus {
        let kb = self.resolver().knowledge_base();
        let readiness = self.readiness();
        RuntimeStatus {
            entries: kb.len(),
            collapsed_duplicates: kb.collapsed_duplicates(),
            provider: self.engine.provider_name().to_string(),
            dimensions: self.engine.dimensions(),
            cached_query_embeddings: self.engine.cached_queries(),
            workers: self.chat.pool().size(),
            ready: readiness.is_ready(),
            progress: readiness.progress().snapshot(),
            report: readiness.get().map(|p| p.report.clone()),
        }
    }
}
