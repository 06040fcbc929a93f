use crate::ingestion::types::{IngestionId, Priority};
use serde::Serialize;

/// Scheduling-only record for one pending ingestion.
///
/// Holds just enough to order the queue: the ingestion it points at, the
/// numeric priority rank and the submission timestamp. Descriptors are
/// transient; they exist only while queued and are consumed on dequeue.
#[derive(Debug, Clone, Serialize)]
pub struct JobDescriptor {
    pub ingestion_id: IngestionId,
    /// HIGH=1, MEDIUM=2, LOW=3. Lower rank dequeues first.
    pub priority_rank: u8,
    /// Submission time in milliseconds since the epoch.
    pub created_at: u64,
}

impl JobDescriptor {
    pub fn new(ingestion_id: IngestionId, priority: Priority, created_at: u64) -> Self {
        Self {
            ingestion_id,
            priority_rank: priority.rank(),
            created_at,
        }
    }
}

/// Helper to get the current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}
