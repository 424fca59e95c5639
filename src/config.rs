//! Portfolio configuration: section layout, transition tunables and content.
//!
//! The bundled `content/portfolio.toml` is the default; an explicit file
//! replaces it wholesale.

use crate::core::content::PortfolioContent;
use crate::core::data::SectionId;
use crate::core::navigation::{PassiveScrollPolicy, TransitionTimings};
use crate::core::sections::{RegistryError, SectionRegistry};
use crate::presenters::headless::StaticPage;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const BUILTIN_PORTFOLIO: &str = include_str!("../content/portfolio.toml");

pub const DEFAULT_SECTION_HEIGHT: f32 = 800.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid portfolio config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid section list: {0}")]
    Registry(#[from] RegistryError),
    #[error("section {id} has invalid height {height}")]
    InvalidSectionHeight { id: SectionId, height: f32 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    #[serde(flatten)]
    pub timings: TransitionTimings,
    pub passive_scroll: PassiveScrollPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: SectionId,
    pub label: String,
    /// Height used by the headless page layout.
    #[serde(default = "default_section_height")]
    pub height: f32,
}

fn default_section_height() -> f32 {
    DEFAULT_SECTION_HEIGHT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,
    pub sections: Vec<SectionConfig>,
    #[serde(flatten)]
    pub content: PortfolioContent,
}

impl PortfolioConfig {
    /// The bundled portfolio.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_PORTFOLIO)
    }

    /// Loads `explicit` if given, otherwise the bundled portfolio.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = explicit else {
            debug!("using bundled portfolio config");
            return Self::builtin();
        };

        debug!(path = %path.display(), "loading portfolio config");
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.registry()?;

        for section in &self.sections {
            if !section.height.is_finite() || section.height <= 0.0 {
                return Err(ConfigError::InvalidSectionHeight {
                    id: section.id.clone(),
                    height: section.height,
                });
            }
        }

        Ok(())
    }

    pub fn registry(&self) -> Result<SectionRegistry, ConfigError> {
        let entries = self
            .sections
            .iter()
            .map(|section| (section.id.clone(), section.label.clone()));

        Ok(SectionRegistry::new(entries)?)
    }

    /// Headless page laid out with the configured section heights.
    #[must_use]
    pub fn static_page(&self) -> StaticPage {
        StaticPage::stacked(
            self.sections
                .iter()
                .map(|section| (section.id.clone(), section.height)),
        )
    }
}
