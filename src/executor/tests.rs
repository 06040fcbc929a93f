//! Executor Module Tests
//!
//! This module contains unit and scenario tests for the scheduling and
//! processing system.
//!
//! ## Test Scopes
//! - **Queue**: Dequeue order under mixed priorities, tie-breaking, and the
//!   idle-flag handoff between submissions and the worker.
//! - **Processor**: Batch lifecycle progression, drain-then-stop behavior,
//!   and the no-preemption guarantee for jobs already in progress.

#[cfg(test)]
mod tests {
    use crate::executor::processor::{BatchProcessor, BatchWorkFn};
    use crate::executor::queue::JobQueue;
    use crate::executor::types::JobDescriptor;
    use crate::ingestion::splitter::split_into_batches;
    use crate::ingestion::status::aggregate_status;
    use crate::ingestion::types::{
        Batch, BatchId, BatchStatus, Ingestion, IngestionId, ItemId, Priority,
    };
    use crate::storage::memory::IngestionStore;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn job(id: &str, priority: Priority, created_at: u64) -> JobDescriptor {
        JobDescriptor::new(IngestionId(id.to_string()), priority, created_at)
    }

    fn ingestion(id: &str, priority: Priority, ids: &[ItemId]) -> Ingestion {
        let mut n = 0;
        let batches = split_into_batches(ids, || {
            n += 1;
            BatchId(format!("{}-{}", id, n))
        });

        Ingestion {
            ingestion_id: IngestionId(id.to_string()),
            priority,
            created_at: 1,
            batches,
        }
    }

    /// Work fn that records which batch ran, then yields for `delay`.
    fn recording_work(order: Arc<Mutex<Vec<String>>>, delay: Duration) -> BatchWorkFn {
        Arc::new(move |batch: Batch| {
            let order = order.clone();
            Box::pin(async move {
                order.lock().unwrap().push(batch.batch_id.0.clone());
                tokio::time::sleep(delay).await;
            }) as Pin<Box<dyn Future<Output = ()> + Send>>
        })
    }

    // ============================================================
    // TEST 1: JobQueue - Priority ordering
    // ============================================================

    #[test]
    fn test_dequeue_order_by_rank_then_submission_time() {
        // ARRANGE: four jobs at increasing timestamps
        let queue = JobQueue::new();
        queue.submit(job("a", Priority::Low, 1));
        queue.submit(job("b", Priority::High, 2));
        queue.submit(job("c", Priority::Medium, 3));
        queue.submit(job("d", Priority::High, 4));

        // ACT + ASSERT: HIGHs first (earliest first), then MEDIUM, then LOW
        assert_eq!(queue.next().unwrap().ingestion_id.0, "b");
        assert_eq!(queue.next().unwrap().ingestion_id.0, "d");
        assert_eq!(queue.next().unwrap().ingestion_id.0, "c");
        assert_eq!(queue.next().unwrap().ingestion_id.0, "a");
        assert!(queue.next().is_none());
    }

    #[test]
    fn test_equal_rank_and_timestamp_keeps_submission_order() {
        let queue = JobQueue::new();
        queue.submit(job("first", Priority::High, 7));
        queue.submit(job("second", Priority::High, 7));
        queue.submit(job("third", Priority::High, 7));

        assert_eq!(queue.next().unwrap().ingestion_id.0, "first");
        assert_eq!(queue.next().unwrap().ingestion_id.0, "second");
        assert_eq!(queue.next().unwrap().ingestion_id.0, "third");
    }

    #[test]
    fn test_snapshot_reflects_queue_order_without_consuming() {
        let queue = JobQueue::new();
        queue.submit(job("a", Priority::Low, 1));
        queue.submit(job("b", Priority::High, 2));

        let snapshot = queue.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].ingestion_id.0, "b");
        assert_eq!(snapshot[1].ingestion_id.0, "a");

        // Snapshot is a copy; the queue still holds both jobs.
        assert_eq!(queue.len(), 2);
    }

    // ============================================================
    // TEST 2: JobQueue - Worker idle flag handoff
    // ============================================================

    #[test]
    fn test_only_first_submission_starts_the_worker() {
        let queue = JobQueue::new();
        assert!(!queue.worker_active());

        // First submission finds the worker idle and claims the start.
        assert!(queue.submit(job("a", Priority::High, 1)));
        assert!(queue.worker_active());

        // Later submissions only affect queue order.
        assert!(!queue.submit(job("b", Priority::Low, 2)));

        // Draining to empty marks the worker idle again.
        assert!(queue.next().is_some());
        assert!(queue.next().is_some());
        assert!(queue.next().is_none());
        assert!(!queue.worker_active());

        // The next submission must start a fresh loop.
        assert!(queue.submit(job("c", Priority::Medium, 3)));
    }

    // ============================================================
    // TEST 3: BatchProcessor - Lifecycle progression
    // ============================================================

    #[tokio::test]
    async fn test_processor_completes_every_batch_in_order() {
        // ARRANGE: one ingestion with two batches, zero-latency work
        let store = Arc::new(IngestionStore::new());
        let queue = Arc::new(JobQueue::new());
        store.insert(ingestion("ing", Priority::High, &[1, 2, 3, 4, 5]));
        queue.submit(job("ing", Priority::High, 1));

        let order = Arc::new(Mutex::new(Vec::new()));
        let processor = BatchProcessor::new(
            queue.clone(),
            store.clone(),
            recording_work(order.clone(), Duration::ZERO),
        );

        // ACT: drive the loop to completion
        processor.run().await;

        // ASSERT: batches processed in split order, all completed
        assert_eq!(*order.lock().unwrap(), vec!["ing-1", "ing-2"]);

        let id = IngestionId("ing".to_string());
        let record = store.get(&id).unwrap();
        assert!(record
            .batches
            .iter()
            .all(|b| b.status == BatchStatus::Completed));
        assert_eq!(aggregate_status(&record.batches), BatchStatus::Completed);

        // The queue drained and released the worker.
        assert!(queue.is_empty());
        assert!(!queue.worker_active());
    }

    #[tokio::test]
    async fn test_processor_drains_jobs_in_priority_order() {
        let store = Arc::new(IngestionStore::new());
        let queue = Arc::new(JobQueue::new());
        store.insert(ingestion("low", Priority::Low, &[1]));
        store.insert(ingestion("high", Priority::High, &[2]));
        queue.submit(job("low", Priority::Low, 1));
        queue.submit(job("high", Priority::High, 2));

        let order = Arc::new(Mutex::new(Vec::new()));
        let processor = BatchProcessor::new(
            queue.clone(),
            store.clone(),
            recording_work(order.clone(), Duration::ZERO),
        );

        processor.run().await;

        // The later-submitted HIGH job ran first.
        assert_eq!(*order.lock().unwrap(), vec!["high-1", "low-1"]);
    }

    #[tokio::test]
    async fn test_processor_survives_dangling_job() {
        // A descriptor whose ingestion is missing from the store is logged
        // and skipped; the loop keeps draining.
        let store = Arc::new(IngestionStore::new());
        let queue = Arc::new(JobQueue::new());
        store.insert(ingestion("real", Priority::Medium, &[1, 2]));
        queue.submit(job("ghost", Priority::High, 1));
        queue.submit(job("real", Priority::Medium, 2));

        let order = Arc::new(Mutex::new(Vec::new()));
        let processor = BatchProcessor::new(
            queue.clone(),
            store.clone(),
            recording_work(order.clone(), Duration::ZERO),
        );

        processor.run().await;

        assert_eq!(*order.lock().unwrap(), vec!["real-1"]);
        assert!(queue.is_empty());
    }

    // ============================================================
    // TEST 4: No preemption of a running job
    // ============================================================

    #[tokio::test]
    async fn test_running_job_finishes_before_later_high_priority_job() {
        // ARRANGE: a LOW job with two batches, each taking ~30ms
        let store = Arc::new(IngestionStore::new());
        let queue = Arc::new(JobQueue::new());
        store.insert(ingestion("low", Priority::Low, &[1, 2, 3, 4]));

        let order = Arc::new(Mutex::new(Vec::new()));
        let processor = BatchProcessor::new(
            queue.clone(),
            store.clone(),
            recording_work(order.clone(), Duration::from_millis(30)),
        );

        // ACT: start the worker on the LOW job
        assert!(queue.submit(job("low", Priority::Low, 1)));
        let worker = tokio::spawn(processor.run());

        // A HIGH job arrives while the first LOW batch is mid-flight.
        tokio::time::sleep(Duration::from_millis(10)).await;
        store.insert(ingestion("high", Priority::High, &[9]));
        assert!(!queue.submit(job("high", Priority::High, 2)));

        worker.await.unwrap();

        // ASSERT: both LOW batches ran before the HIGH batch began
        assert_eq!(*order.lock().unwrap(), vec!["low-1", "low-2", "high-1"]);

        let high = store.get(&IngestionId("high".to_string())).unwrap();
        assert_eq!(aggregate_status(&high.batches), BatchStatus::Completed);
    }
}
