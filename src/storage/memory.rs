use crate::ingestion::types::{Batch, BatchStatus, Ingestion, IngestionId};

use dashmap::DashMap;

/// Process-wide map of every ingestion ever accepted, keyed by ingestion id.
///
/// Insertion happens exactly once per ingestion, at submission time, before
/// the job reaches the queue. The only mutation afterwards is a single batch
/// `status` field at a time, through [`IngestionStore::advance_batch_status`],
/// and the only caller of that is the worker loop. Status queries read cloned
/// snapshots, so they never observe a half-written record: every write
/// happens under the map entry's guard.
pub struct IngestionStore {
    ingestions: DashMap<IngestionId, Ingestion>,
}

impl IngestionStore {
    pub fn new() -> Self {
        Self {
            ingestions: DashMap::new(),
        }
    }

    /// Records a freshly created ingestion. Called once per submission.
    pub fn insert(&self, ingestion: Ingestion) {
        tracing::debug!(
            "Stored ingestion {} ({} batches)",
            ingestion.ingestion_id.0,
            ingestion.batches.len()
        );
        self.ingestions
            .insert(ingestion.ingestion_id.clone(), ingestion);
    }

    /// Cloned snapshot of one ingestion, for readers.
    pub fn get(&self, id: &IngestionId) -> Option<Ingestion> {
        self.ingestions.get(id).map(|entry| entry.clone())
    }

    /// Number of batches owned by an ingestion, without cloning the record.
    pub fn batch_count(&self, id: &IngestionId) -> Option<usize> {
        self.ingestions.get(id).map(|entry| entry.batches.len())
    }

    /// Cloned snapshot of a single batch.
    pub fn batch(&self, id: &IngestionId, batch_index: usize) -> Option<Batch> {
        self.ingestions
            .get(id)
            .and_then(|entry| entry.batches.get(batch_index).cloned())
    }

    /// Current status of a single batch.
    pub fn batch_status(&self, id: &IngestionId, batch_index: usize) -> Option<BatchStatus> {
        self.ingestions
            .get(id)
            .and_then(|entry| entry.batches.get(batch_index).map(|batch| batch.status))
    }

    /// Moves one batch to `next`, writing nothing unless `next` is the
    /// immediate successor of the batch's current status.
    ///
    /// This is the sole mutation path after insertion, which makes the
    /// monotonic lifecycle (`YetToStart` -> `Triggered` -> `Completed`, no
    /// skip, no reversal) a property of the store rather than of its callers.
    ///
    /// # Returns
    /// `true` if the transition was applied, `false` if the batch was not in
    /// the expected predecessor state or the id/index is unknown.
    pub fn advance_batch_status(
        &self,
        id: &IngestionId,
        batch_index: usize,
        next: BatchStatus,
    ) -> bool {
        let Some(mut entry) = self.ingestions.get_mut(id) else {
            tracing::warn!("Status update for unknown ingestion {}", id.0);
            return false;
        };
        let Some(batch) = entry.batches.get_mut(batch_index) else {
            tracing::warn!(
                "Status update for out-of-range batch {} of ingestion {}",
                batch_index,
                id.0
            );
            return false;
        };

        if batch.status.successor() != Some(next) {
            return false;
        }

        batch.status = next;
        true
    }

    /// Number of ingestions ever accepted.
    pub fn len(&self) -> usize {
        self.ingestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingestions.is_empty()
    }
}

impl Default for IngestionStore {
    fn default() -> Self {
        Self::new()
    }
}
