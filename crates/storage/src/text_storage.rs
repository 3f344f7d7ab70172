//! Line-oriented text file store.

use std::path::{Path, PathBuf};
use skillmatch_core::{Resource, Task};
use tracing::info;
use super::{RecordStore, StorageError, Result};
use crate::record::{parse_resources, parse_tasks};

/// Default resource file name.
pub const DEFAULT_RESOURCES_FILE: &str = "resources.txt";

/// Default task file name.
pub const DEFAULT_TASKS_FILE: &str = "tasks.txt";

/// Reads resources and tasks from two text files, one record per line.
#[derive(Debug, Clone)]
pub struct TextFileStore {
    resources_path: PathBuf,
    tasks_path: PathBuf,
}

impl TextFileStore {
    /// Create a store over the given files.
    pub fn new(resources_path: impl Into<PathBuf>, tasks_path: impl Into<PathBuf>) -> Self {
        Self {
            resources_path: resources_path.into(),
            tasks_path: tasks_path.into(),
        }
    }

    /// Resource file path.
    pub fn resources_path(&self) -> &Path {
        &self.resources_path
    }

    /// Task file path.
    pub fn tasks_path(&self) -> &Path {
        &self.tasks_path
    }

    fn read(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for TextFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCES_FILE, DEFAULT_TASKS_FILE)
    }
}

impl RecordStore for TextFileStore {
    fn load_resources(&self) -> Result<Vec<Resource>> {
        let resources = parse_resources(&Self::read(&self.resources_path)?);
        info!("Loaded {} resources from {}", resources.len(), self.resources_path.display());
        Ok(resources)
    }

    fn load_tasks(&self) -> Result<Vec<Task>> {
        let tasks = parse_tasks(&Self::read(&self.tasks_path)?);
        info!("Loaded {} tasks from {}", tasks.len(), self.tasks_path.display());
        Ok(tasks)
    }
}
