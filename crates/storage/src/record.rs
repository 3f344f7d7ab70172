//! Parsing of `name | skill:level, skill:level` record lines.

use skillmatch_core::{Resource, Task};
use tracing::debug;

/// One parsed input line, before it becomes a [`Resource`] or [`Task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Trimmed record name
    pub name: String,
    /// `(skill, level)` pairs in input order; levels are lower-cased
    pub entries: Vec<(String, String)>,
}

impl Record {
    /// Build a resource, replaying entries in order.
    pub fn into_resource(self) -> Resource {
        let mut resource = Resource::new(self.name);
        for (skill, level) in self.entries {
            resource.add_skill(skill, level);
        }
        resource
    }

    /// Build a task, replaying entries in order.
    pub fn into_task(self) -> Task {
        let mut task = Task::new(self.name);
        for (skill, level) in self.entries {
            task.add_required_skill(skill, level);
        }
        task
    }
}

/// Parse a single line.
///
/// Returns `None` when the line does not split into exactly two `|`-separated
/// fields or the name is blank. Malformed `skill:level` tokens are dropped
/// without rejecting the line.
pub fn parse_record(line: &str) -> Option<Record> {
    let mut fields = line.split('|');
    let (Some(name), Some(skills), None) = (fields.next(), fields.next(), fields.next()) else {
        return None;
    };

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let entries = skills
        .trim()
        .split(',')
        .filter_map(parse_entry)
        .collect();

    Some(Record {
        name: name.to_string(),
        entries,
    })
}

fn parse_entry(token: &str) -> Option<(String, String)> {
    let mut parts = token.trim().split(':');
    let (Some(skill), Some(level), None) = (parts.next(), parts.next(), parts.next()) else {
        if !token.trim().is_empty() {
            debug!("Skipping malformed skill token: {:?}", token);
        }
        return None;
    };

    // A token with nothing after the colon names no level and is dropped.
    // An empty skill name is kept as-is.
    let level = level.trim();
    if level.is_empty() {
        debug!("Skipping skill token without a level: {:?}", token);
        return None;
    }
    let skill = skill.trim();

    Some((skill.to_string(), level.to_lowercase()))
}

/// Parse every well-formed line of a document.
pub fn parse_records(text: &str) -> Vec<Record> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let record = parse_record(line);
            if record.is_none() && !line.trim().is_empty() {
                debug!("Skipping malformed record on line {}", i + 1);
            }
            record
        })
        .collect()
}

/// Parse a resource document.
pub fn parse_resources(text: &str) -> Vec<Resource> {
    parse_records(text).into_iter().map(Record::into_resource).collect()
}

/// Parse a task document.
pub fn parse_tasks(text: &str) -> Vec<Task> {
    parse_records(text).into_iter().map(Record::into_task).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmatch_core::ProficiencyScale;

    #[test]
    fn test_parse_record() {
        let record = parse_record("  Alice | java:Expert, sql : beginner ").unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(
            record.entries,
            vec![
                ("java".to_string(), "expert".to_string()),
                ("sql".to_string(), "beginner".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_record_wrong_field_count() {
        assert!(parse_record("Alice java:expert").is_none());
        assert!(parse_record("Alice | java:expert | extra").is_none());
        assert!(parse_record("").is_none());
    }

    #[test]
    fn test_parse_record_blank_name() {
        assert!(parse_record("   | java:expert").is_none());
    }

    #[test]
    fn test_malformed_tokens_dropped() {
        let record = parse_record("Bob | java, sql:beginner, a:b:c, rust:").unwrap();
        assert_eq!(record.entries, vec![("sql".to_string(), "beginner".to_string())]);
    }

    #[test]
    fn test_empty_skill_name_kept() {
        let record = parse_record("Bob | :expert, java:beginner").unwrap();
        assert_eq!(
            record.entries,
            vec![
                (String::new(), "expert".to_string()),
                ("java".to_string(), "beginner".to_string()),
            ]
        );

        let resource = record.into_resource();
        assert!(resource.has_skill(""));
        assert_eq!(resource.level_of(""), Some("expert"));
    }

    #[test]
    fn test_record_without_skills() {
        let record = parse_record("Carol | ").unwrap();
        assert_eq!(record.name, "Carol");
        assert!(record.entries.is_empty());
    }

    #[test]
    fn test_duplicate_skill_last_write_wins() {
        let resources = parse_resources("Dave | java:beginner, java:expert");
        assert_eq!(resources.len(), 1);
        assert_eq!(
            ProficiencyScale::standard().rank_of(resources[0].level_of("java")),
            3
        );
    }

    #[test]
    fn test_malformed_line_tolerance() {
        let text = "Alice | java:expert\nnot a record\n";
        let resources = parse_resources(text);
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].name(), "Alice");
    }

    #[test]
    fn test_parse_tasks_keeps_order_and_duplicates() {
        let text = "Backend | java:intermediate\nFrontend | js:beginner\nBackend | go:expert\n";
        let tasks = parse_tasks(text);
        let names: Vec<_> = tasks.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Backend", "Frontend", "Backend"]);
        assert_eq!(tasks[0].required_level("java"), Some("intermediate"));
        assert_eq!(tasks[2].required_level("go"), Some("expert"));
    }
}
