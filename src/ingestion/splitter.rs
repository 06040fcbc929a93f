//! Batch Splitter
//!
//! Pure decomposition of a submitted id list into fixed-size batches. No
//! shared state is touched here; given the same generator outputs the result
//! is identical, which is what the tests rely on.

use super::types::{Batch, BatchId, BatchStatus, ItemId, MAX_BATCH_SIZE};

/// Partitions `ids` into consecutive chunks of at most [`MAX_BATCH_SIZE`]
/// elements, preserving order.
///
/// Every chunk becomes a [`Batch`] with a freshly generated id and status
/// `YetToStart`. All batches except possibly the last are exactly full.
/// The id generator is injected so tests can use deterministic ids;
/// production passes [`BatchId::new`].
///
/// Callers are responsible for rejecting an empty id list before calling.
pub fn split_into_batches(
    ids: &[ItemId],
    mut next_batch_id: impl FnMut() -> BatchId,
) -> Vec<Batch> {
    ids.chunks(MAX_BATCH_SIZE)
        .map(|chunk| Batch {
            batch_id: next_batch_id(),
            ids: chunk.to_vec(),
            status: BatchStatus::YetToStart,
        })
        .collect()
}
