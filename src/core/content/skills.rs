use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillCategoryError {
    #[error("unknown skill category {0:?}, expected frontend, backend, database, devops or other")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Other,
}

impl SkillCategory {
    pub const ALL: &'static [Self] = &[
        Self::Frontend,
        Self::Backend,
        Self::Database,
        Self::Devops,
        Self::Other,
    ];

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Database => "Database",
            Self::Devops => "DevOps",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

impl FromStr for SkillCategory {
    type Err = SkillCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.display_name().eq_ignore_ascii_case(value))
            .ok_or_else(|| SkillCategoryError::Unknown(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Fill fraction for level bars.
    #[must_use]
    pub fn fraction(self) -> f32 {
        match self {
            Self::Beginner => 0.25,
            Self::Intermediate => 0.5,
            Self::Advanced => 0.75,
            Self::Expert => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Category(SkillCategory),
}

impl SkillFilter {
    #[must_use]
    pub fn matches(self, skill: &Skill) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => skill.category == category,
        }
    }

    pub fn apply(self, skills: &[Skill]) -> impl Iterator<Item = &Skill> {
        skills.iter().filter(move |skill| self.matches(skill))
    }
}
