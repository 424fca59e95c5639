use crate::core::data::section_id::SectionId;

/// A registered section of the page.
///
/// The rendered region is not owned here; hosts resolve it from the section
/// when a scroll offset is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    ordinal: usize,
    label: String,
}

impl Section {
    #[must_use]
    pub fn new(id: SectionId, ordinal: usize, label: impl Into<String>) -> Self {
        Self {
            id,
            ordinal,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}
