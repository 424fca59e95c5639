//! Static portfolio content shown inside the sections.

pub mod profile;
pub mod projects;
pub mod skills;

pub use profile::{ExperienceEntry, Profile, SocialLink};
pub use projects::{Project, ProjectFilter, all_technologies};
pub use skills::{Skill, SkillCategory, SkillCategoryError, SkillFilter, SkillLevel};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}
