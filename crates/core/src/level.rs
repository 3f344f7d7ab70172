//! Proficiency levels and the ordering used to decide sufficiency.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Errors raised while building a [`ProficiencyScale`] or parsing a level.
#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    /// The scale has no labels at all.
    #[error("proficiency scale must contain at least one level")]
    Empty,

    /// A label is empty or whitespace only.
    #[error("proficiency level labels must not be blank")]
    BlankLabel,

    /// The same label appears twice (compared case-insensitively).
    #[error("duplicate proficiency level: {0}")]
    DuplicateLabel(String),

    /// A label is not one of the canonical levels.
    #[error("unknown skill level: {0}")]
    UnknownLevel(String),

    /// The scale file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The canonical proficiency levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    /// Rank 1
    Beginner,
    /// Rank 2
    Intermediate,
    /// Rank 3
    Expert,
}

impl SkillLevel {
    /// All canonical levels, lowest first.
    pub const ALL: [SkillLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    /// Numeric rank of this level. Unknown labels rank below every level at `0`.
    pub fn rank(self) -> u32 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Expert => 3,
        }
    }

    /// Lower-case label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "expert" => Ok(Self::Expert),
            other => Err(ScaleError::UnknownLevel(other.to_string())),
        }
    }
}

/// Ordered mapping from proficiency label to rank.
///
/// The label at position `i` has rank `i + 1`. Any label not on the scale,
/// and any missing level, has rank `0`. Lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScaleFile", into = "ScaleFile")]
pub struct ProficiencyScale {
    levels: Vec<String>,
}

/// On-disk shape of a scale: `{"levels": ["beginner", ...]}`.
#[derive(Serialize, Deserialize)]
struct ScaleFile {
    levels: Vec<String>,
}

impl TryFrom<ScaleFile> for ProficiencyScale {
    type Error = ScaleError;

    fn try_from(file: ScaleFile) -> Result<Self, Self::Error> {
        Self::new(file.levels)
    }
}

impl From<ProficiencyScale> for ScaleFile {
    fn from(scale: ProficiencyScale) -> Self {
        Self { levels: scale.levels }
    }
}

impl ProficiencyScale {
    /// Build a scale from labels ordered lowest to highest.
    pub fn new<I, S>(labels: I) -> Result<Self, ScaleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut levels: Vec<String> = Vec::new();
        for label in labels {
            let label = label.as_ref().trim().to_lowercase();
            if label.is_empty() {
                return Err(ScaleError::BlankLabel);
            }
            if levels.contains(&label) {
                return Err(ScaleError::DuplicateLabel(label));
            }
            levels.push(label);
        }

        if levels.is_empty() {
            return Err(ScaleError::Empty);
        }

        Ok(Self { levels })
    }

    /// The beginner < intermediate < expert scale.
    pub fn standard() -> Self {
        Self {
            levels: SkillLevel::ALL.iter().map(|l| l.as_str().to_string()).collect(),
        }
    }

    /// Parse a scale from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ScaleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rank of a label, `0` when the label is not on the scale.
    pub fn rank(&self, level: &str) -> u32 {
        let level = level.trim().to_lowercase();
        self.levels
            .iter()
            .position(|l| *l == level)
            .map_or(0, |i| i as u32 + 1)
    }

    /// Rank of a possibly missing level.
    pub fn rank_of(&self, level: Option<&str>) -> u32 {
        level.map_or(0, |l| self.rank(l))
    }

    /// Whether `have` meets the `need` requirement.
    pub fn sufficient(&self, have: Option<&str>, need: &str) -> bool {
        self.rank_of(have) >= self.rank(need)
    }

    /// Labels, lowest rank first.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }
}

impl Default for ProficiencyScale {
    fn default() -> Self {
        Self::standard()
    }
}
