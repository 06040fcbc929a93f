//! Executor Module
//!
//! Implements the asynchronous processing engine behind the ingestion API.
//!
//! ## Architecture Overview
//! The executor follows a **pull-based** model with a single logical worker:
//! 1. **Submission**: Accepted ingestions are represented by lightweight
//!    [`types::JobDescriptor`]s and pushed into the [`queue::JobQueue`], which
//!    keeps them sorted by `(priority rank, submission time)`.
//! 2. **Startup**: When a submission finds the worker idle, the caller starts
//!    one [`processor::BatchProcessor`] loop. The queue's idle flag guarantees
//!    at most one loop is ever active.
//! 3. **Execution**: The loop drains jobs strictly in queue order and drives
//!    every batch of the selected job to completion before looking at the
//!    queue again. Priority decides which pending job runs next; it never
//!    preempts a job already in progress.
//!
//! ## Submodules
//! - **`types`**: The scheduling-only job descriptor and time helpers.
//! - **`queue`**: The priority-ordered pending-job queue plus the idle flag.
//! - **`processor`**: The worker loop advancing batch statuses in the store.
//! - **`handlers`**: Diagnostic HTTP endpoint exposing the queue contents.

pub mod handlers;
pub mod processor;
pub mod queue;
pub mod types;

#[cfg(test)]
mod tests;
