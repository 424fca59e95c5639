use crate::core::data::{Region, Section};

/// The rendered page, as seen by the navigation controller.
pub trait PageHost {
    /// Current region of a section, or `None` if it is not mounted.
    fn resolve_region(&self, section: &Section) -> Option<Region>;

    /// Starts a smooth scroll that brings `region` to the top of the viewport.
    fn smooth_scroll_to(&mut self, section: &Section, region: Region);
}
