//! Fixed-size query worker pool.
//!
//! Jobs go through an unbounded crossbeam channel to `N` named worker
//! threads. Each job replies on its own oneshot channel, so a caller can
//! either block on the reply or await it from async code.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread::JoinHandle;

use answerbank_core::errors::{AnswerbankError, AnswerbankResult};
use crossbeam_channel::{Receiver, Sender};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Bounded pool of query workers sharing one FIFO job queue.
pub struct QueryPool {
    sender: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl QueryPool {
    /// Spawn `size` workers (at least one).
    pub fn new(size: usize) -> AnswerbankResult<Self> {
        let size = size.max(1);
        let (sender, receiver) = crossbeam_channel::unbounded::<Job>();

        let mut workers = Vec::with_capacity(size);
        for id in 0..size {
            let name = format!("answerbank-query-{id}");
            let rx = receiver.clone();
            let handle = std::thread::Builder::new()
                .name(name.clone())
                .spawn(move || worker_loop(id, rx))
                .map_err(|e| AnswerbankError::ThreadSpawn {
                    name,
                    reason: e.to_string(),
                })?;
            workers.push(handle);
        }

        info!(workers = size, "query pool started");
        Ok(Self {
            sender: Some(sender),
            workers,
        })
    }

    /// Number of worker threads.
    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Jobs waiting for a free worker.
    pub fn queued(&self) -> usize {
        self.sender.as_ref().map_or(0, Sender::len)
    }

    /// Queue `job` and return the receiver for its result.
    pub fn submit<T, F>(&self, job: F) -> AnswerbankResult<oneshot::Receiver<T>>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let sender = self.sender.as_ref().ok_or(AnswerbankError::PoolClosed)?;
        let (reply_tx, reply_rx) = oneshot::channel();
        let wrapped: Job = Box::new(move || {
            // The caller may have given up waiting; nothing to do then.
            let _ = reply_tx.send(job());
        });
        sender
            .send(wrapped)
            .map_err(|_| AnswerbankError::PoolClosed)?;
        Ok(reply_rx)
    }

    /// Run `job` on a worker and block the calling thread until it finishes.
    ///
    /// Must not be called from inside an async runtime; use [`Self::run_async`].
    pub fn run<T, F>(&self, job: F) -> AnswerbankResult<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        self.submit(job)?
            .blocking_recv()
            .map_err(|_| AnswerbankError::JobAborted)
    }

    /// Run `job` on a worker and await its result.
    pub async fn run_async<T, F>(&self, job: F) -> AnswerbankResult<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        self.submit(job)?
            .await
            .map_err(|_| AnswerbankError::JobAborted)
    }

    /// Stop accepting jobs, drain the queue, and join every worker.
    pub fn shutdown(&mut self) {
        if self.sender.take().is_none() {
            return;
        }
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                warn!("query worker exited abnormally");
            }
        }
        info!("query pool stopped");
    }
}

impl Drop for QueryPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for QueryPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryPool")
            .field("workers", &self.workers.len())
            .field("open", &self.sender.is_some())
            .finish()
    }
}

fn worker_loop(id: usize, jobs: Receiver<Job>) {
    debug!(worker = id, "query worker started");
    // Ends once every sender is dropped and the queue is empty.
    for job in jobs.iter() {
        if catch_unwind(AssertUnwindSafe(job)).is_err() {
            warn!(worker = id, "query job panicked");
        }
    }
    debug!(worker = id, "query worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};

    #[test]
    fn runs_jobs_and_returns_results() {
        let pool = QueryPool::new(2).unwrap();
        assert_eq!(pool.run(|| 21 * 2).unwrap(), 42);
    }

    #[test]
    fn zero_size_is_promoted_to_one() {
        let pool = QueryPool::new(0).unwrap();
        assert_eq!(pool.size(), 1);
        assert_eq!(pool.run(|| "ok").unwrap(), "ok");
    }

    #[test]
    fn workers_run_concurrently() {
        // Five jobs only get past the barrier if five workers hold them at once.
        let pool = QueryPool::new(5).unwrap();
        let barrier = Arc::new(Barrier::new(5));
        let receivers: Vec<_> = (0..5)
            .map(|i| {
                let barrier = Arc::clone(&barrier);
                pool.submit(move || {
                    barrier.wait();
                    i
                })
                .unwrap()
            })
            .collect();
        let mut results: Vec<i32> = receivers
            .into_iter()
            .map(|rx| rx.blocking_recv().unwrap())
            .collect();
        results.sort_unstable();
        assert_eq!(results, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn panicking_job_reports_aborted_and_pool_survives() {
        let pool = QueryPool::new(1).unwrap();
        let err = pool.run(|| -> u32 { panic!("boom") }).unwrap_err();
        assert!(matches!(err, AnswerbankError::JobAborted));
        assert_eq!(pool.run(|| 7).unwrap(), 7);
    }

    #[test]
    fn shutdown_drains_queued_jobs() {
        let mut pool = QueryPool::new(1).unwrap();
        let done = Arc::new(AtomicUsize::new(0));
        for _ in 0..10 {
            let done = Arc::clone(&done);
            pool.submit(move || {
                done.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        }
        pool.shutdown();
        assert_eq!(done.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn submit_after_shutdown_fails() {
        let mut pool = QueryPool::new(1).unwrap();
        pool.shutdown();
        assert!(matches!(
            pool.submit(|| ()).unwrap_err(),
            AnswerbankError::PoolClosed
        ));
    }

    #[tokio::test]
    async fn run_async_awaits_result() {
        let pool = QueryPool::new(2).unwrap();
        assert_eq!(pool.run_async(|| 5 + 5).await.unwrap(), 10);
    }
}
