//! Ingestion Data Types
//!
//! Defines the domain model (ingestions, batches, priorities) and the
//! Data Transfer Objects (DTOs) used by the HTTP layer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Maximum number of item ids a single batch may hold.
pub const MAX_BATCH_SIZE: usize = 3;

/// Identifier of one submitted item.
pub type ItemId = u64;

/// Unique identifier for one client submission.
///
/// Wrapper around a UUID string so the token stays opaque to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct IngestionId(pub String);

impl IngestionId {
    /// Generates a new random UUID v4-based IngestionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Unique identifier for one batch. Unique across all ingestions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BatchId(pub String);

impl BatchId {
    /// Generates a new random UUID v4-based BatchId.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Lifecycle state of a batch.
///
/// Also used for the aggregated status of a whole ingestion, which is derived
/// from its batches (see `ingestion::status`). Transitions are strictly
/// one-directional: `YetToStart` -> `Triggered` -> `Completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// No worker has picked the batch up yet.
    YetToStart,
    /// The worker is currently processing the batch.
    Triggered,
    /// Processing finished.
    Completed,
}

impl BatchStatus {
    /// The only state a batch may move to from this one, if any.
    ///
    /// `IngestionStore::advance_batch_status` refuses every transition that
    /// is not the successor, which keeps the lifecycle monotonic. A terminal
    /// failure state would slot in here if the processing step ever grew a
    /// failure channel.
    pub fn successor(self) -> Option<BatchStatus> {
        match self {
            BatchStatus::YetToStart => Some(BatchStatus::Triggered),
            BatchStatus::Triggered => Some(BatchStatus::Completed),
            BatchStatus::Completed => None,
        }
    }
}

/// Priority label attached to a submission.
///
/// Only the three labels `HIGH`, `MEDIUM` and `LOW` are recognized; anything
/// else is rejected at the service boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Numeric rank used for queue ordering. Lower dequeues first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl FromStr for Priority {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(Priority::High),
            "MEDIUM" => Ok(Priority::Medium),
            "LOW" => Ok(Priority::Low),
            _ => Err(IngestError::InvalidInput),
        }
    }
}

/// A bounded-size chunk of item ids with its own lifecycle status.
///
/// Created by the splitter at submission time; only its `status` field ever
/// changes afterward, and only through the store's guarded transition API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub batch_id: BatchId,
    pub ids: Vec<ItemId>,
    pub status: BatchStatus,
}

/// One client submission and the batches it owns.
///
/// The `batches` sequence is fixed after creation; concatenating the batch id
/// lists in order reproduces the submitted id list exactly. Records live for
/// the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingestion {
    pub ingestion_id: IngestionId,
    pub priority: Priority,
    /// Submission time in milliseconds since the epoch.
    pub created_at: u64,
    pub batches: Vec<Batch>,
}

/// Failures surfaced by the ingestion boundary operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    /// Malformed submission: missing or empty id list, or a priority label
    /// outside `HIGH` / `MEDIUM` / `LOW`. No state is mutated.
    #[error("Invalid input")]
    InvalidInput,
    /// Status query for an ingestion id that was never issued.
    #[error("Not found")]
    NotFound,
}

/// Body of a `POST /ingest` request.
///
/// Both fields are optional so that missing fields surface as `InvalidInput`
/// from the service rather than as a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    #[serde(default)]
    pub ids: Option<Vec<ItemId>>,
    #[serde(default)]
    pub priority: Option<String>,
}

/// Response returned to the client immediately after a submission is accepted.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub ingestion_id: IngestionId,
}

/// Response format for the status endpoint: the aggregated status plus every
/// batch in split order.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub ingestion_id: IngestionId,
    pub status: BatchStatus,
    pub batches: Vec<Batch>,
}

/// Error body shared by all rejection responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
