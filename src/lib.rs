//! Priority Batch Ingestion Service Library
//!
//! This library crate defines the core modules of the ingestion service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`ingestion`**: The intake pipeline. Validates submissions, splits the
//!   submitted item ids into fixed-size batches, aggregates per-batch progress
//!   into an overall status, and exposes the HTTP-facing handlers.
//! - **`executor`**: The asynchronous processing engine. Keeps pending jobs in
//!   a priority-ordered queue and drives the single worker loop that advances
//!   batch statuses through their lifecycle.
//! - **`storage`**: The state layer. An in-memory map holding every accepted
//!   ingestion for the lifetime of the process.

pub mod executor;
pub mod ingestion;
pub mod storage;
