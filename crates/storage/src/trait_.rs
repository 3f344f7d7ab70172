//! Record store abstraction.

use skillmatch_core::{Resource, Task};
use std::path::PathBuf;
use tracing::warn;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur while loading records.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The input source could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Source of resource and task records.
///
/// Implementations only load; nothing is written back.
pub trait RecordStore {
    /// Load every resource record, in input order.
    fn load_resources(&self) -> Result<Vec<Resource>>;

    /// Load every task record, in input order.
    fn load_tasks(&self) -> Result<Vec<Task>>;

    /// Load resources, treating an unreadable source as an empty pool.
    fn resources_or_empty(&self) -> Vec<Resource> {
        self.load_resources().unwrap_or_else(|e| {
            warn!("Resource pool left empty: {}", e);
            Vec::new()
        })
    }

    /// Load tasks, treating an unreadable source as an empty pool.
    fn tasks_or_empty(&self) -> Vec<Task> {
        self.load_tasks().unwrap_or_else(|e| {
            warn!("Task pool left empty: {}", e);
            Vec::new()
        })
    }
}
