use crate::core::data::NavigationState;
use crate::core::sections::SectionRegistry;
use crate::core::visibility::section_visibility::{SectionVisibility, VisibilityChange};

/// One visibility presenter per registered section, in page order.
#[derive(Debug, Clone)]
pub struct SectionVisibilityBoard {
    sections: Vec<SectionVisibility>,
}

impl SectionVisibilityBoard {
    #[must_use]
    pub fn new(registry: &SectionRegistry) -> Self {
        Self {
            sections: registry
                .iter()
                .map(|section| SectionVisibility::new(section.id().clone()))
                .collect(),
        }
    }

    /// Feeds a snapshot to every section. Returns true if any section changed.
    pub fn observe(&mut self, state: &NavigationState) -> bool {
        self.sections
            .iter_mut()
            .map(|section| section.observe(state))
            .fold(false, |changed, change| changed || change != VisibilityChange::Unchanged)
    }

    /// Returns true if any scheduled replay completed.
    pub fn tick(&mut self) -> bool {
        self.sections
            .iter_mut()
            .map(SectionVisibility::tick)
            .fold(false, |changed, change| changed || change != VisibilityChange::Unchanged)
    }

    #[must_use]
    pub fn get(&self, section: &str) -> Option<&SectionVisibility> {
        self.sections.iter().find(|visibility| visibility.section() == section)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionVisibility> {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::SectionId;

    #[test]
    fn initial_state_reveals_only_first_section() {
        let registry = SectionRegistry::portfolio();
        let mut board = SectionVisibilityBoard::new(&registry);

        let changed = board.observe(&NavigationState::initial(registry.first().id().clone()));

        assert!(changed);
        let visible: Vec<&str> = board
            .iter()
            .filter(|visibility| visibility.is_visible())
            .map(|visibility| visibility.section().as_str())
            .collect();
        assert_eq!(visible, ["home"]);
    }

    #[test]
    fn every_section_observes_each_snapshot() {
        let registry = SectionRegistry::portfolio();
        let mut board = SectionVisibilityBoard::new(&registry);
        let home = registry.first().id().clone();
        board.observe(&NavigationState::initial(home.clone()));

        let mut state = NavigationState::initial(home);
        state.current_section = SectionId::new("skills").unwrap();
        board.observe(&state);

        assert!(board.get("home").is_some_and(SectionVisibility::is_visible));
        assert!(board.get("skills").is_some_and(SectionVisibility::is_visible));
        assert!(!board.get("about").is_some_and(SectionVisibility::is_visible));
    }

    #[test]
    fn tick_completes_replays() {
        let registry = SectionRegistry::portfolio();
        let mut board = SectionVisibilityBoard::new(&registry);
        let home = NavigationState::initial(registry.first().id().clone());
        let mut about = home.clone();
        about.current_section = SectionId::new("about").unwrap();

        board.observe(&home);
        board.observe(&about);
        board.observe(&home);

        assert!(!board.get("home").is_some_and(SectionVisibility::is_visible));
        assert!(board.tick());
        assert!(board.get("home").is_some_and(SectionVisibility::is_visible));
        assert!(!board.tick());
    }
}
