//! Skillmatch core data models.
//!
//! This crate defines the records the matching engine works on: resources,
//! tasks, and the proficiency scale used to compare their skill levels.

#![warn(missing_docs)]

mod level;
mod resource;
mod task;

pub use level::{ProficiencyScale, ScaleError, SkillLevel};
pub use resource::Resource;
pub use task::Task;
