//! Ingestion Service
//!
//! Transport-agnostic boundary operations shared by the HTTP handlers and the
//! tests: submit, status query, queue inspection. All validation happens here
//! so that a rejected submission leaves no trace in the store or the queue.

use super::splitter::split_into_batches;
use super::status::aggregate_status;
use super::types::{BatchId, IngestError, Ingestion, IngestionId, ItemId, StatusResponse};
use crate::executor::processor::BatchProcessor;
use crate::executor::queue::JobQueue;
use crate::executor::types::{now_ms, JobDescriptor};
use crate::storage::memory::IngestionStore;

use std::sync::Arc;

/// Entry point for the boundary operations. Owns shared handles to the store,
/// the queue and the worker.
pub struct IngestionService {
    store: Arc<IngestionStore>,
    queue: Arc<JobQueue>,
    processor: Arc<BatchProcessor>,
}

impl IngestionService {
    pub fn new(
        store: Arc<IngestionStore>,
        queue: Arc<JobQueue>,
        processor: Arc<BatchProcessor>,
    ) -> Self {
        Self {
            store,
            queue,
            processor,
        }
    }

    /// Accepts a submission: validates, splits into batches, records the
    /// ingestion and schedules it.
    ///
    /// Non-blocking: the ingestion id is returned immediately, processing
    /// happens on the worker loop. If the worker was idle it is restarted
    /// here; otherwise the submission only changes queue order.
    ///
    /// # Errors
    /// [`IngestError::InvalidInput`] if `ids` is empty or `priority` is not
    /// one of `HIGH` / `MEDIUM` / `LOW`. Nothing is stored or queued then.
    pub fn submit(&self, ids: Vec<ItemId>, priority: &str) -> Result<IngestionId, IngestError> {
        if ids.is_empty() {
            return Err(IngestError::InvalidInput);
        }
        let priority = priority.parse()?;

        let batches = split_into_batches(&ids, BatchId::new);
        let ingestion_id = IngestionId::new();
        let created_at = now_ms();
        let job = JobDescriptor::new(ingestion_id.clone(), priority, created_at);

        // The record must be visible in the store before the worker can
        // dequeue the job that points at it.
        self.store.insert(Ingestion {
            ingestion_id: ingestion_id.clone(),
            priority,
            created_at,
            batches,
        });

        if self.queue.submit(job) {
            tracing::debug!("Worker was idle, starting processing loop");
            tokio::spawn(Arc::clone(&self.processor).run());
        }

        tracing::info!(
            "Accepted ingestion {} ({} ids, {:?})",
            ingestion_id.0,
            ids.len(),
            priority
        );

        Ok(ingestion_id)
    }

    /// Aggregate progress of one ingestion: overall status plus every batch
    /// in split order. Read-only.
    ///
    /// # Errors
    /// [`IngestError::NotFound`] if the id was never issued.
    pub fn status(&self, id: &IngestionId) -> Result<StatusResponse, IngestError> {
        let ingestion = self.store.get(id).ok_or(IngestError::NotFound)?;

        Ok(StatusResponse {
            ingestion_id: ingestion.ingestion_id,
            status: aggregate_status(&ingestion.batches),
            batches: ingestion.batches,
        })
    }

    /// Ordered snapshot of the pending-job queue, for diagnostics.
    pub fn queued_jobs(&self) -> Vec<JobDescriptor> {
        self.queue.snapshot()
    }
}
