//! Batch Processor
//!
//! The single worker loop that drains the job queue and advances batch
//! statuses in the store.
//!
//! ## Responsibilities
//! - **Draining**: Repeatedly takes the head job from the queue until the
//!   queue reports empty, then returns (the queue marks the worker idle).
//! - **Head-of-line execution**: Every batch of the current job is driven to
//!   completion before the next job is dequeued. A higher-priority job that
//!   arrives mid-run waits for the current job to finish.
//! - **Lifecycle**: Each untouched batch moves `YetToStart` -> `Triggered`,
//!   the injected unit of work runs, then `Triggered` -> `Completed`. Both
//!   moves go through the store's guarded transition API.

use super::queue::JobQueue;
use super::types::JobDescriptor;
use crate::ingestion::types::{Batch, BatchStatus};
use crate::storage::memory::IngestionStore;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Type alias for the injected per-batch unit of work.
///
/// The processing step itself is opaque to the loop; production wires in a
/// fixed delay, tests wire in near-zero fakes or recorders. The work is
/// assumed to always succeed; there is no retry path.
pub type BatchWorkFn =
    Arc<dyn Fn(Batch) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// The engine that drives batch execution.
pub struct BatchProcessor {
    /// Source of jobs, shared with the submission path.
    queue: Arc<JobQueue>,
    /// Sole writer target for batch status updates.
    store: Arc<IngestionStore>,
    /// The unit of work run once per batch.
    work: BatchWorkFn,
}

impl BatchProcessor {
    pub fn new(queue: Arc<JobQueue>, store: Arc<IngestionStore>, work: BatchWorkFn) -> Arc<Self> {
        Arc::new(Self { queue, store, work })
    }

    /// Production configuration: each batch takes a fixed delay to process.
    pub fn with_fixed_delay(
        queue: Arc<JobQueue>,
        store: Arc<IngestionStore>,
        delay: Duration,
    ) -> Arc<Self> {
        Self::new(
            queue,
            store,
            Arc::new(move |_batch: Batch| {
                Box::pin(tokio::time::sleep(delay)) as Pin<Box<dyn Future<Output = ()> + Send>>
            }),
        )
    }

    /// The worker loop. Runs until the queue is drained, then returns.
    ///
    /// The queue clears its worker-active flag on the empty poll, so the next
    /// submission starts a fresh loop. Callers spawn this exactly when
    /// `JobQueue::submit` returns `true`.
    pub async fn run(self: Arc<Self>) {
        while let Some(job) = self.queue.next() {
            self.process_job(&job).await;
        }

        tracing::debug!("Job queue drained, worker going idle");
    }

    /// Drives every batch of one job to completion, in split order.
    async fn process_job(&self, job: &JobDescriptor) {
        let Some(batch_count) = self.store.batch_count(&job.ingestion_id) else {
            // Cannot happen through the service path: the record is inserted
            // before the job is queued and never deleted.
            tracing::warn!("Dequeued job for unknown ingestion {}", job.ingestion_id.0);
            return;
        };

        tracing::info!(
            "Processing ingestion {} (rank {}, {} batches)",
            job.ingestion_id.0,
            job.priority_rank,
            batch_count
        );

        for index in 0..batch_count {
            // Skips any batch already past YetToStart. Descriptors are
            // consumed on dequeue, so a batch is never driven twice.
            if !self
                .store
                .advance_batch_status(&job.ingestion_id, index, BatchStatus::Triggered)
            {
                continue;
            }

            if let Some(batch) = self.store.batch(&job.ingestion_id, index) {
                tracing::debug!(
                    "Triggered batch {} ({} ids)",
                    batch.batch_id.0,
                    batch.ids.len()
                );
                (self.work)(batch).await;
            }

            if !self
                .store
                .advance_batch_status(&job.ingestion_id, index, BatchStatus::Completed)
            {
                tracing::warn!(
                    "Batch {} of ingestion {} left the triggered state unexpectedly",
                    index,
                    job.ingestion_id.0
                );
            }
        }

        tracing::info!("Completed ingestion {}", job.ingestion_id.0);
    }
}
