//! Priority Job Queue
//!
//! The ordered queue of pending jobs, shared between submission requests and
//! the worker loop.
//!
//! ## Responsibilities
//! - **Ordering**: The queue is sorted by `(priority_rank, created_at)` at
//!   every observation point. Insertion re-sorts with a stable sort, so jobs
//!   with equal rank and timestamp keep their submission order.
//! - **Worker handoff**: The worker-active flag lives under the same mutex as
//!   the job list. `submit` flips it idle -> active and tells the caller to
//!   start the loop; `next` flips it back when the queue runs dry. Both
//!   transitions happen inside the lock, so a submission racing the worker's
//!   final empty poll either lands before the pop or starts a fresh loop.
//!   Exactly one loop can be active at a time.

use super::types::JobDescriptor;
use std::sync::Mutex;

struct QueueState {
    jobs: Vec<JobDescriptor>,
    worker_active: bool,
}

/// Pending-job queue plus the single-worker idle flag.
pub struct JobQueue {
    state: Mutex<QueueState>,
}

impl JobQueue {
    /// Creates an empty queue with an idle worker.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                jobs: Vec::new(),
                worker_active: false,
            }),
        }
    }

    /// Inserts a job and restores the queue's total order.
    ///
    /// Returns `true` exactly when the worker was idle; the flag is marked
    /// active before the lock is released, so the caller that receives `true`
    /// is the one responsible for starting the processing loop.
    pub fn submit(&self, job: JobDescriptor) -> bool {
        let mut state = self.state.lock().unwrap();

        state.jobs.push(job);
        // Stable sort: ties on (rank, created_at) keep submission order.
        state.jobs.sort_by(|a, b| {
            a.priority_rank
                .cmp(&b.priority_rank)
                .then(a.created_at.cmp(&b.created_at))
        });

        if state.worker_active {
            false
        } else {
            state.worker_active = true;
            true
        }
    }

    /// Removes and returns the head of the queue: lowest rank, earliest
    /// timestamp among ties.
    ///
    /// On an empty queue this clears the worker-active flag and returns
    /// `None`, which is the worker loop's signal to stop.
    pub fn next(&self) -> Option<JobDescriptor> {
        let mut state = self.state.lock().unwrap();

        if state.jobs.is_empty() {
            state.worker_active = false;
            return None;
        }

        Some(state.jobs.remove(0))
    }

    /// Ordered copy of the current queue contents, for diagnostics.
    pub fn snapshot(&self) -> Vec<JobDescriptor> {
        self.state.lock().unwrap().jobs.clone()
    }

    /// Number of queued jobs.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a worker loop currently owns the queue.
    pub fn worker_active(&self) -> bool {
        self.state.lock().unwrap().worker_active
    }
}

impl Default for JobQueue {
    fn default() -> Self {
        Self::new()
    }
}
