use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionIdError {
    #[error("section id must not be empty")]
    Empty,
    #[error("section id {0:?} must not contain whitespace")]
    Whitespace(String),
}

/// Identity of a page section, e.g. `home` or `projects`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Result<Self, SectionIdError> {
        let id = id.into();

        if id.is_empty() {
            return Err(SectionIdError::Empty);
        }

        if id.chars().any(char::is_whitespace) {
            return Err(SectionIdError::Whitespace(id));
        }

        Ok(Self(id))
    }

    /// For compile-time ids that are known to be valid.
    pub(crate) fn from_static(id: &'static str) -> Self {
        debug_assert!(Self::new(id).is_ok(), "invalid static section id {id:?}");
        Self(id.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SectionId {
    type Error = SectionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionId> for String {
    fn from(value: SectionId) -> Self {
        value.0
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
