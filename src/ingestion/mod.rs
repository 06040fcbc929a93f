//! Ingestion Module
//!
//! Handles the intake of client submissions and the reporting of their progress.
//!
//! ## Workflow
//! 1. **Validation**: Rejects submissions with an empty id list or an unknown
//!    priority label before any state is touched.
//! 2. **Splitting**: Partitions the submitted ids into fixed-size batches,
//!    each with its own identifier and lifecycle status.
//! 3. **Storage**: Records the ingestion in the `IngestionStore`.
//! 4. **Coordination**: Hands a job descriptor to the priority queue and
//!    starts the worker loop if it was idle.
//!
//! ## Submodules
//! - **`types`**: Domain types (batches, ingestions, priorities) and HTTP DTOs.
//! - **`splitter`**: Pure decomposition of an id list into batches.
//! - **`status`**: Pure aggregation of batch statuses into an overall status.
//! - **`service`**: Transport-agnostic boundary operations (submit / status).
//! - **`handlers`**: Axum handlers mapping service results onto HTTP responses.

pub mod handlers;
pub mod service;
pub mod splitter;
pub mod status;
pub mod types;
