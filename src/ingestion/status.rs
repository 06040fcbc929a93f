//! Status Aggregation
//!
//! Derives the overall status of an ingestion from its batches.

use super::types::{Batch, BatchStatus};

/// Folds the batch statuses into one overall status.
///
/// `Completed` iff every batch completed; otherwise `Triggered` iff at least
/// one batch has left `YetToStart`; otherwise `YetToStart`.
pub fn aggregate_status(batches: &[Batch]) -> BatchStatus {
    if batches.iter().all(|b| b.status == BatchStatus::Completed) {
        BatchStatus::Completed
    } else if batches.iter().any(|b| b.status != BatchStatus::YetToStart) {
        BatchStatus::Triggered
    } else {
        BatchStatus::YetToStart
    }
}
