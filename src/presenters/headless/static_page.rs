use crate::controllers::navigation::PageHost;
use crate::core::data::{Region, Section, SectionId};
use std::collections::HashSet;

/// Page with fixed section heights stacked top to bottom.
///
/// Smooth scrolls land instantly; every scroll target is kept in
/// [`StaticPage::scroll_history`].
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    layout: Vec<(SectionId, Region)>,
    unmounted: HashSet<SectionId>,
    scroll_y: f32,
    scroll_history: Vec<SectionId>,
}

impl StaticPage {
    /// Stacks sections in the given order, each `height` tall.
    #[must_use]
    pub fn stacked<I>(sections: I) -> Self
    where
        I: IntoIterator<Item = (SectionId, f32)>,
    {
        let mut top = 0.0;
        let layout = sections
            .into_iter()
            .map(|(id, height)| {
                let region = Region::new(top, height);
                top += height;
                (id, region)
            })
            .collect();

        Self {
            layout,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn region_of(&self, id: &str) -> Option<Region> {
        if self.unmounted.iter().any(|unmounted| unmounted == id) {
            return None;
        }

        self.layout
            .iter()
            .find(|(section, _)| section == id)
            .map(|(_, region)| *region)
    }

    /// Takes a section off the page, as if its component had not rendered.
    pub fn unmount_section(&mut self, id: SectionId) {
        self.unmounted.insert(id);
    }

    pub fn mount_section(&mut self, id: &SectionId) {
        self.unmounted.remove(id);
    }

    pub fn set_scroll_y(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y.max(0.0);
    }

    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    #[must_use]
    pub fn scroll_history(&self) -> &[SectionId] {
        &self.scroll_history
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.layout
            .last()
            .map_or(0.0, |(_, region)| region.bottom())
    }

    pub fn layout(&self) -> impl Iterator<Item = (&SectionId, Region)> {
        self.layout.iter().map(|(id, region)| (id, *region))
    }
}

impl PageHost for StaticPage {
    fn resolve_region(&self, section: &Section) -> Option<Region> {
        self.region_of(section.id().as_str())
    }

    fn smooth_scroll_to(&mut self, section: &Section, region: Region) {
        self.scroll_y = region.top;
        self.scroll_history.push(section.id().clone());
    }
}
