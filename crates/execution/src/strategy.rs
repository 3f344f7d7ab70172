//! Matching strategies.

use skillmatch_core::{ProficiencyScale, Resource, Task};

/// Decides whether a resource qualifies for a task.
///
/// Strategies are pure predicates: they never modify the records they inspect.
pub trait MatchingStrategy: Send + Sync {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Whether `resource` qualifies for `task`.
    fn is_match(&self, resource: &Resource, task: &Task) -> bool;
}

/// Requires every skill at or above the required level.
#[derive(Debug, Clone)]
pub struct ExactMatch {
    scale: ProficiencyScale,
}

impl ExactMatch {
    /// Create an exact matcher on the standard scale.
    pub fn new() -> Self {
        Self {
            scale: ProficiencyScale::standard(),
        }
    }

    /// Use a custom proficiency scale.
    pub fn with_scale(mut self, scale: ProficiencyScale) -> Self {
        self.scale = scale;
        self
    }

    /// Scale used for level comparisons.
    pub fn scale(&self) -> &ProficiencyScale {
        &self.scale
    }
}

impl Default for ExactMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchingStrategy for ExactMatch {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn is_match(&self, resource: &Resource, task: &Task) -> bool {
        task.required_skills().all(|(skill, required)| {
            resource.has_skill(skill) && self.scale.sufficient(resource.level_of(skill), required)
        })
    }
}

/// Requires every skill, at any level.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillOnlyMatch;

impl MatchingStrategy for SkillOnlyMatch {
    fn name(&self) -> &'static str {
        "skill-only"
    }

    fn is_match(&self, resource: &Resource, task: &Task) -> bool {
        task.required_skills().all(|(skill, _)| resource.has_skill(skill))
    }
}

/// Matching strategies available.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Skill and level must both be satisfied
    Exact(ExactMatch),
    /// Only skill presence is checked
    SkillOnly(SkillOnlyMatch),
}

impl Strategy {
    /// Exact matching on the standard scale.
    pub fn exact() -> Self {
        Self::Exact(ExactMatch::new())
    }

    /// Presence-only matching.
    pub fn skill_only() -> Self {
        Self::SkillOnly(SkillOnlyMatch)
    }

    /// Every strategy, strictest first.
    pub fn all(scale: ProficiencyScale) -> Vec<Self> {
        vec![
            Self::Exact(ExactMatch::new().with_scale(scale)),
            Self::SkillOnly(SkillOnlyMatch),
        ]
    }
}

impl MatchingStrategy for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Self::Exact(s) => s.name(),
            Self::SkillOnly(s) => s.name(),
        }
    }

    fn is_match(&self, resource: &Resource, task: &Task) -> bool {
        match self {
            Self::Exact(s) => s.is_match(resource, task),
            Self::SkillOnly(s) => s.is_match(resource, task),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [&str; 5] = ["beginner", "intermediate", "expert", "Expert", "guru"];

    #[test]
    fn test_insufficient_level() {
        let resource = Resource::new("Bob").with_skill("java", "beginner");
        let task = Task::new("Backend").with_required_skill("java", "expert");

        assert!(!ExactMatch::new().is_match(&resource, &task));
        assert!(SkillOnlyMatch.is_match(&resource, &task));
    }

    #[test]
    fn test_missing_skill_rejected_by_both() {
        let resource = Resource::new("Bob").with_skill("java", "expert");
        let task = Task::new("Ops").with_required_skill("bash", "beginner");

        assert!(!ExactMatch::new().is_match(&resource, &task));
        assert!(!SkillOnlyMatch.is_match(&resource, &task));
    }

    #[test]
    fn test_missing_skill_with_unknown_requirement() {
        // rank 0 is satisfiable by an absent level, presence still decides
        let resource = Resource::new("Bob");
        let task = Task::new("Ops").with_required_skill("bash", "wizard");

        assert!(!ExactMatch::new().is_match(&resource, &task));
    }

    #[test]
    fn test_all_requirements_must_hold() {
        let resource = Resource::new("Alice")
            .with_skill("java", "expert")
            .with_skill("sql", "beginner");
        let task = Task::new("Backend")
            .with_required_skill("java", "intermediate")
            .with_required_skill("sql", "intermediate");

        assert!(!ExactMatch::new().is_match(&resource, &task));
        assert!(SkillOnlyMatch.is_match(&resource, &task));
    }

    #[test]
    fn test_level_comparison_case_insensitive() {
        let resource = Resource::new("Alice").with_skill("java", "EXPERT");
        let task = Task::new("Backend").with_required_skill("java", "Expert");

        assert!(ExactMatch::new().is_match(&resource, &task));
    }

    #[test]
    fn test_empty_task_matches_everyone() {
        let task = Task::new("Onboarding");
        let resources = [
            Resource::new("Alice").with_skill("java", "expert"),
            Resource::new("Nobody"),
        ];

        for resource in &resources {
            assert!(Strategy::exact().is_match(resource, &task));
            assert!(Strategy::skill_only().is_match(resource, &task));
        }
    }

    #[test]
    fn test_exact_implies_skill_only() {
        let mut resources = vec![Resource::new("none")];
        for have in LEVELS {
            resources.push(Resource::new(have).with_skill("java", have));
            resources.push(Resource::new(have).with_skill("java", have).with_skill("sql", have));
        }

        let mut tasks = vec![Task::new("empty")];
        for need in LEVELS {
            tasks.push(Task::new(need).with_required_skill("java", need));
            tasks.push(Task::new(need).with_required_skill("java", need).with_required_skill("sql", "beginner"));
        }

        let exact = ExactMatch::new();
        for task in &tasks {
            for resource in &resources {
                if exact.is_match(resource, task) {
                    assert!(
                        SkillOnlyMatch.is_match(resource, task),
                        "{} matched {} exactly but not by skill",
                        resource.name(),
                        task.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_custom_scale() {
        let scale = ProficiencyScale::new(["junior", "senior"]).unwrap();
        let exact = ExactMatch::new().with_scale(scale);
        let resource = Resource::new("Alice").with_skill("rust", "senior");

        assert!(exact.is_match(&resource, &Task::new("t").with_required_skill("rust", "junior")));
        // "expert" is not on this scale, so it ranks 0
        assert!(exact.is_match(&resource, &Task::new("t").with_required_skill("rust", "expert")));
        assert!(!exact.is_match(
            &Resource::new("Bob").with_skill("rust", "expert"),
            &Task::new("t").with_required_skill("rust", "junior"),
        ));
    }

    #[test]
    fn test_exact_scale() {
        assert_eq!(ExactMatch::default().scale(), &ProficiencyScale::standard());

        let scale = ProficiencyScale::new(["junior", "senior"]).unwrap();
        let exact = ExactMatch::new().with_scale(scale.clone());
        assert_eq!(exact.scale(), &scale);
    }

    #[test]
    fn test_strategy_names() {
        let names: Vec<_> = Strategy::all(ProficiencyScale::standard())
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["exact", "skill-only"]);
    }
}
