use std::collections::HashMap;
use std::time::Duration;

use crate::controllers::navigation::PageHost;
use crate::core::data::{Region, Section, SectionId};
use crate::core::navigation::SmoothScroll;

/// Page host backed by the egui scroll area.
///
/// Section regions are measured while the page is laid out, so a section that
/// has not been drawn yet does not resolve.
#[derive(Debug, Default)]
pub struct EguiPageHost {
    regions: HashMap<SectionId, Region>,
    scroll: SmoothScroll,
}

impl EguiPageHost {
    /// Replaces the measured layout with the one from the latest frame.
    pub fn set_regions<I>(&mut self, regions: I)
    where
        I: IntoIterator<Item = (SectionId, Region)>,
    {
        self.regions.clear();
        self.regions.extend(regions);
    }

    /// Offset to force on the scroll area this frame, if a smooth scroll is
    /// running.
    pub fn advance_scroll(&mut self, elapsed: Duration) -> Option<f32> {
        if !self.scroll.is_animating() {
            return None;
        }

        Some(self.scroll.step(elapsed))
    }

    /// Adopts the offset the user scrolled to.
    pub fn sync_scroll(&mut self, offset: f32) {
        if !self.scroll.is_animating() {
            self.scroll.sync(offset);
        }
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_animating()
    }
}

impl PageHost for EguiPageHost {
    fn resolve_region(&self, section: &Section) -> Option<Region> {
        self.regions.get(section.id()).copied()
    }

    fn smooth_scroll_to(&mut self, _section: &Section, region: Region) {
        self.scroll.scroll_to(region.top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str) -> Section {
        Section::new(SectionId::new(id).unwrap(), 0, id)
    }

    #[test]
    fn unmeasured_sections_do_not_resolve() {
        let mut host = EguiPageHost::default();
        assert_eq!(host.resolve_region(&section("about")), None);

        host.set_regions([(SectionId::new("about").unwrap(), Region::new(700.0, 600.0))]);

        assert_eq!(
            host.resolve_region(&section("about")),
            Some(Region::new(700.0, 600.0))
        );
    }

    #[test]
    fn smooth_scroll_runs_until_target() {
        let mut host = EguiPageHost::default();
        assert_eq!(host.advance_scroll(Duration::from_millis(16)), None);

        host.smooth_scroll_to(&section("about"), Region::new(700.0, 600.0));
        let first = host.advance_scroll(Duration::from_millis(16)).unwrap();
        assert!(first > 0.0 && first < 700.0);

        let last = host.advance_scroll(Duration::from_secs(5)).unwrap();
        assert_eq!(last, 700.0);
        assert!(!host.is_scrolling());
    }

    #[test]
    fn user_scroll_is_ignored_while_animating() {
        let mut host = EguiPageHost::default();
        host.smooth_scroll_to(&section("about"), Region::new(700.0, 600.0));

        host.sync_scroll(50.0);
        assert!(host.is_scrolling());

        host.advance_scroll(Duration::from_secs(5));
        host.sync_scroll(50.0);
        assert_eq!(host.advance_scroll(Duration::from_millis(16)), None);
    }
}
