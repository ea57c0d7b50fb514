//! The dedicated background indexing thread.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::JoinHandle;

use answerbank_core::traits::IEmbeddingProvider;
use answerbank_store::KnowledgeBase;
use tracing::{error, info, warn};

use crate::pipeline::{build_index, IndexerConfig};
use crate::readiness::Readiness;

/// Handle to the running (or finished) indexer thread.
pub struct IndexerHandle {
    readiness: Arc<Readiness>,
    thread: Option<JoinHandle<()>>,
}

impl IndexerHandle {
    pub fn readiness(&self) -> &Arc<Readiness> {
        &self.readiness
    }

    /// Wait for the thread to exit. Returns whether the index was published.
    pub fn join(mut self) -> bool {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("indexer thread panicked");
            }
        }
        self.readiness.is_ready()
    }
}

/// Start the indexer on its own thread. Returns immediately.
///
/// The thread embeds the corpus, builds the index, and publishes it into the
/// returned handle's [`Readiness`]. On any failure it records the failure and
/// exits; the index is never published for this process.
pub fn spawn_indexer(
    kb: Arc<KnowledgeBase>,
    provider: Arc<dyn IEmbeddingProvider>,
    config: IndexerConfig,
) -> std::io::Result<IndexerHandle> {
    let readiness = Arc::new(Readiness::new());
    let shared = Arc::clone(&readiness);

    let thread = std::thread::Builder::new()
        .name("answerbank-indexer".to_string())
        .spawn(move || run(&kb, provider.as_ref(), &config, &shared))?;

    Ok(IndexerHandle {
        readiness,
        thread: Some(thread),
    })
}

fn run(
    kb: &KnowledgeBase,
    provider: &dyn IEmbeddingProvider,
    config: &IndexerConfig,
    readiness: &Readiness,
) {
    info!(
        entries = kb.len(),
        batch_size = config.batch_size,
        provider = provider.name(),
        "processing question embeddings in the background"
    );

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        build_index(kb, provider, config, readiness.progress())
    }));

    match outcome {
        Ok(Ok(published)) => match readiness.publish(published) {
            Ok(()) => info!("similarity index published, similarity tier enabled"),
            Err(e) => {
                warn!(error = %e, "similarity index not published");
                readiness.fail();
            }
        },
        Ok(Err(e)) => {
            warn!(error = %e, "background indexing failed, similarity tier stays degraded");
            readiness.fail();
        }
        Err(_) => {
            error!("background indexing panicked, similarity tier stays degraded");
            readiness.fail();
        }
    }
}
