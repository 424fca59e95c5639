use crate::core::data::{FULL_OPACITY, NavigationState, SectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Unchanged,
    /// First time the section became current.
    Entered,
    /// The section became current again; it is hidden until the next tick.
    ReplayScheduled,
    /// A scheduled replay made the section visible again.
    Replayed,
}

/// Decides when one section plays its entrance animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionVisibility {
    section: SectionId,
    has_animated_once: bool,
    is_visible: bool,
    was_current: bool,
    replay_pending: bool,
}

impl SectionVisibility {
    #[must_use]
    pub fn new(section: SectionId) -> Self {
        Self {
            section,
            has_animated_once: false,
            is_visible: false,
            was_current: false,
            replay_pending: false,
        }
    }

    /// Reacts to a state snapshot. Only the observation on which the section
    /// becomes current has an effect.
    pub fn observe(&mut self, state: &NavigationState) -> VisibilityChange {
        let is_current = state.is_current(&self.section);
        let became_current = is_current && !self.was_current;
        self.was_current = is_current;

        if !became_current {
            return VisibilityChange::Unchanged;
        }

        if self.has_animated_once {
            self.is_visible = false;
            self.replay_pending = true;
            VisibilityChange::ReplayScheduled
        } else {
            self.has_animated_once = true;
            self.is_visible = true;
            VisibilityChange::Entered
        }
    }

    /// Advances one presentation tick, completing a scheduled replay.
    pub fn tick(&mut self) -> VisibilityChange {
        if !self.replay_pending {
            return VisibilityChange::Unchanged;
        }

        self.replay_pending = false;
        self.is_visible = true;
        VisibilityChange::Replayed
    }

    /// Opacity multiplier for this section, independent of the entrance
    /// animation.
    #[must_use]
    pub fn opacity(&self, state: &NavigationState) -> f32 {
        if state.is_current(&self.section) {
            state.section_opacity
        } else {
            FULL_OPACITY
        }
    }

    #[must_use]
    pub fn section(&self) -> &SectionId {
        &self.section
    }

    #[must_use]
    pub fn has_animated_once(&self) -> bool {
        self.has_animated_once
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.is_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> SectionId {
        SectionId::new(value).unwrap()
    }

    fn state_on(section: &str) -> NavigationState {
        NavigationState::initial(id(section))
    }

    #[test]
    fn starts_hidden_and_unanimated() {
        let visibility = SectionVisibility::new(id("about"));

        assert!(!visibility.is_visible());
        assert!(!visibility.has_animated_once());
    }

    #[test]
    fn first_entry_plays_entrance() {
        let mut visibility = SectionVisibility::new(id("about"));

        assert_eq!(visibility.observe(&state_on("about")), VisibilityChange::Entered);
        assert!(visibility.is_visible());
        assert!(visibility.has_animated_once());
    }

    #[test]
    fn repeated_snapshots_while_current_do_nothing() {
        let mut visibility = SectionVisibility::new(id("about"));
        visibility.observe(&state_on("about"));

        let mut dimmed = state_on("about");
        dimmed.section_opacity = 0.3;

        assert_eq!(visibility.observe(&dimmed), VisibilityChange::Unchanged);
        assert!(visibility.is_visible());
    }

    #[test]
    fn other_sections_do_not_trigger() {
        let mut visibility = SectionVisibility::new(id("about"));

        assert_eq!(visibility.observe(&state_on("home")), VisibilityChange::Unchanged);
        assert!(!visibility.is_visible());
    }

    #[test]
    fn revisit_hides_then_shows_on_next_tick() {
        let mut visibility = SectionVisibility::new(id("about"));
        visibility.observe(&state_on("about"));
        visibility.observe(&state_on("home"));

        assert_eq!(
            visibility.observe(&state_on("about")),
            VisibilityChange::ReplayScheduled
        );
        assert!(!visibility.is_visible());

        assert_eq!(visibility.tick(), VisibilityChange::Replayed);
        assert!(visibility.is_visible());

        assert_eq!(visibility.tick(), VisibilityChange::Unchanged);
    }

    #[test]
    fn leaving_keeps_section_visible() {
        let mut visibility = SectionVisibility::new(id("about"));
        visibility.observe(&state_on("about"));

        visibility.observe(&state_on("skills"));

        assert!(visibility.is_visible());
    }

    #[test]
    fn shared_opacity_applies_only_to_current_section() {
        let visibility = SectionVisibility::new(id("about"));

        let mut state = state_on("about");
        state.section_opacity = 0.3;
        assert_eq!(visibility.opacity(&state), 0.3);

        state.current_section = id("home");
        assert_eq!(visibility.opacity(&state), 1.0);
    }
}
