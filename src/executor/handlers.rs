use super::queue::JobQueue;
use super::types::JobDescriptor;

use axum::{Extension, Json};
use std::sync::Arc;

/// Diagnostic endpoint: the current scheduler contents, in dequeue order.
pub async fn handle_queue_snapshot(
    Extension(queue): Extension<Arc<JobQueue>>,
) -> Json<Vec<JobDescriptor>> {
    Json(queue.snapshot())
}
