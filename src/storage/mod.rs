//! Storage Module
//!
//! The in-memory state layer. Holds every accepted ingestion for the lifetime
//! of the process; nothing is ever evicted. The store is the only place batch
//! statuses are written, and the only writer is the worker loop.

pub mod memory;
