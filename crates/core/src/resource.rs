//! Resource model - a named worker and the skills it holds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A resource that can be allocated to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource name (not required to be unique)
    name: String,

    /// Skill name -> proficiency label
    skills: HashMap<String, String>,
}

impl Resource {
    /// Create a resource with no skills.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skills: HashMap::new(),
        }
    }

    /// Add a skill, replacing any level already recorded for it.
    pub fn add_skill(&mut self, skill: impl Into<String>, level: impl Into<String>) {
        self.skills.insert(skill.into(), level.into());
    }

    /// Builder form of [`Resource::add_skill`].
    pub fn with_skill(mut self, skill: impl Into<String>, level: impl Into<String>) -> Self {
        self.add_skill(skill, level);
        self
    }

    /// Resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Level held for a skill, if any.
    pub fn level_of(&self, skill: &str) -> Option<&str> {
        self.skills.get(skill).map(String::as_str)
    }

    /// True when the resource holds the skill at any level.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains_key(skill)
    }

    /// All `(skill, level)` pairs, in no particular order.
    pub fn skills(&self) -> impl Iterator<Item = (&str, &str)> {
        self.skills.iter().map(|(s, l)| (s.as_str(), l.as_str()))
    }

    /// Number of distinct skills.
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}
