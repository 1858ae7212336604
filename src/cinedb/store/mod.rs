//! # Storage Layer
//!
//! The whole dataset lives in one JSON document. The [`DataStore`] trait
//! exposes exactly two operations: read everything, write everything. There
//! are no partial updates.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage at a configured path
//!   - Two-space indented JSON, stable key order
//!   - Writes go to a temporary sibling and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Counts saves so tests can assert nothing was persisted
//!
//! ## Concurrency
//!
//! There is no locking. Two processes doing load → add → save against the
//! same path race, and the last writer wins.

use crate::error::Result;
use crate::model::Dataset;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the full dataset.
    fn load_all(&self) -> Result<Dataset>;

    /// Replace the stored dataset with `dataset`.
    fn save_all(&mut self, dataset: &Dataset) -> Result<()>;
}
