//! Record loading for skillmatch.
//!
//! This crate turns line-oriented `name | skill:level, ...` text into
//! [`Resource`](skillmatch_core::Resource) and [`Task`](skillmatch_core::Task)
//! records behind a small [`RecordStore`] trait.

#![warn(missing_docs)]

pub mod trait_;
pub mod record;
pub mod text_storage;
pub mod memory_storage;

pub use trait_::{RecordStore, StorageError, Result};
pub use record::{parse_record, parse_records, parse_resources, parse_tasks, Record};
pub use text_storage::{TextFileStore, DEFAULT_RESOURCES_FILE, DEFAULT_TASKS_FILE};
pub use memory_storage::MemoryStore;
