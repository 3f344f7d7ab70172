//! Task model - a named unit of work and the skills it requires.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A task with minimum proficiency requirements.
///
/// A task with no requirements is satisfied by every resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task name
    name: String,

    /// Skill name -> minimum proficiency label
    required_skills: HashMap<String, String>,
}

impl Task {
    /// Create a task with no requirements.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required_skills: HashMap::new(),
        }
    }

    /// Require a skill, replacing any level already required for it.
    pub fn add_required_skill(&mut self, skill: impl Into<String>, level: impl Into<String>) {
        self.required_skills.insert(skill.into(), level.into());
    }

    /// Builder form of [`Task::add_required_skill`].
    pub fn with_required_skill(mut self, skill: impl Into<String>, level: impl Into<String>) -> Self {
        self.add_required_skill(skill, level);
        self
    }

    /// Task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum level required for a skill, if the skill is required.
    pub fn required_level(&self, skill: &str) -> Option<&str> {
        self.required_skills.get(skill).map(String::as_str)
    }

    /// All `(skill, minimum level)` requirements, in no particular order.
    pub fn required_skills(&self) -> impl Iterator<Item = (&str, &str)> {
        self.required_skills.iter().map(|(s, l)| (s.as_str(), l.as_str()))
    }

    /// Names of the required skills.
    pub fn required_skill_names(&self) -> HashSet<&str> {
        self.required_skills.keys().map(String::as_str).collect()
    }

    /// Whether the task requires anything.
    pub fn has_requirements(&self) -> bool {
        !self.required_skills.is_empty()
    }
}
