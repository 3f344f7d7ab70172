//! In-memory record store.

use skillmatch_core::{Resource, Task};
use super::{RecordStore, Result};
use crate::record::{parse_resources, parse_tasks};

/// Holds the text of both record documents in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    resources: String,
    tasks: String,
}

impl MemoryStore {
    /// Create a store from the two documents.
    pub fn new(resources: impl Into<String>, tasks: impl Into<String>) -> Self {
        Self {
            resources: resources.into(),
            tasks: tasks.into(),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load_resources(&self) -> Result<Vec<Resource>> {
        Ok(parse_resources(&self.resources))
    }

    fn load_tasks(&self) -> Result<Vec<Task>> {
        Ok(parse_tasks(&self.tasks))
    }
}
