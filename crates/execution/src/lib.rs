//! Execution layer - matching strategies, allocation, and reporting.

#![warn(missing_docs)]

pub mod strategy;
pub mod engine;
pub mod report;

pub use strategy::{MatchingStrategy, ExactMatch, SkillOnlyMatch, Strategy};
pub use engine::{AllocationEngine, Allocation, TaskMatches};
pub use report::{ReportFormat, ReportError, write_report, write_text, write_json};
