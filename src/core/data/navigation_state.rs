use crate::core::data::section_id::SectionId;
use serde::Serialize;

pub const FULL_OPACITY: f32 = 1.0;

/// Snapshot of the page navigation record.
///
/// Only the navigation controller writes it. Everyone else gets a copy or a
/// borrow that is valid until the next change notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationState {
    pub current_section: SectionId,
    pub previous_section: SectionId,
    pub is_transitioning: bool,
    pub section_opacity: f32,
}

impl NavigationState {
    #[must_use]
    pub fn initial(first_section: SectionId) -> Self {
        Self {
            previous_section: first_section.clone(),
            current_section: first_section,
            is_transitioning: false,
            section_opacity: FULL_OPACITY,
        }
    }

    #[must_use]
    pub fn is_current(&self, section: &SectionId) -> bool {
        &self.current_section == section
    }
}
