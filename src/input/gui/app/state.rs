use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::core::content::{ProjectFilter, SkillFilter};
use crate::core::data::SectionId;
use crate::core::navigation::NavbarState;

/// Length of a section's entrance animation.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(600);

/// Start times of the entrance animations that are playing or have played.
#[derive(Debug, Default)]
pub struct EntranceTracker {
    started: HashMap<SectionId, Instant>,
}

impl EntranceTracker {
    /// Follows a section's visibility. Becoming visible restarts the animation;
    /// hiding it resets it.
    pub fn update(&mut self, section: &SectionId, is_visible: bool, now: Instant) {
        if !is_visible {
            self.started.remove(section);
        } else if !self.started.contains_key(section) {
            self.started.insert(section.clone(), now);
        }
    }

    /// 0 when hidden, 1 once the entrance has finished.
    #[must_use]
    pub fn progress(&self, section: &SectionId, now: Instant) -> f32 {
        self.started.get(section).map_or(0.0, |started| {
            let elapsed = now.saturating_duration_since(*started);
            (elapsed.as_secs_f32() / ENTRANCE_DURATION.as_secs_f32()).min(1.0)
        })
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        self.started
            .values()
            .any(|started| now.saturating_duration_since(*started) < ENTRANCE_DURATION)
    }
}

/// UI state that lives outside the navigation record.
#[derive(Debug, Default)]
pub struct GuiAppState {
    pub navbar: NavbarState,
    pub project_filter: ProjectFilter,
    pub skill_filter: SkillFilter,
    pub entrances: EntranceTracker,
    last_observed_scroll: Option<f32>,
}

impl GuiAppState {
    /// Records the scroll offset of this frame. Returns true if it moved since
    /// the last frame.
    pub fn observe_scroll(&mut self, offset: f32) -> bool {
        if self.last_observed_scroll == Some(offset) {
            return false;
        }

        self.last_observed_scroll = Some(offset);
        self.navbar.observe_scroll(offset);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> SectionId {
        SectionId::new(value).unwrap()
    }

    #[test]
    fn entrance_progresses_over_its_duration() {
        let mut entrances = EntranceTracker::default();
        let start = Instant::now();

        assert_eq!(entrances.progress(&id("home"), start), 0.0);

        entrances.update(&id("home"), true, start);
        assert_eq!(entrances.progress(&id("home"), start), 0.0);
        assert!(entrances.is_running(start));

        let halfway = entrances.progress(&id("home"), start + ENTRANCE_DURATION / 2);
        assert!((halfway - 0.5).abs() < 1e-3);

        let done = start + ENTRANCE_DURATION;
        assert_eq!(entrances.progress(&id("home"), done), 1.0);
        assert!(!entrances.is_running(done));
    }

    #[test]
    fn staying_visible_does_not_restart() {
        let mut entrances = EntranceTracker::default();
        let start = Instant::now();
        let later = start + ENTRANCE_DURATION;

        entrances.update(&id("home"), true, start);
        entrances.update(&id("home"), true, later);

        assert_eq!(entrances.progress(&id("home"), later), 1.0);
    }

    #[test]
    fn hiding_resets_for_replay() {
        let mut entrances = EntranceTracker::default();
        let start = Instant::now();
        let later = start + ENTRANCE_DURATION * 2;

        entrances.update(&id("about"), true, start);
        entrances.update(&id("about"), false, later);
        assert_eq!(entrances.progress(&id("about"), later), 0.0);

        entrances.update(&id("about"), true, later);
        assert_eq!(entrances.progress(&id("about"), later), 0.0);
        assert!(entrances.is_running(later));
    }

    #[test]
    fn scroll_observation_reports_movement_and_updates_navbar() {
        let mut state = GuiAppState::default();

        assert!(state.observe_scroll(0.0));
        assert!(!state.observe_scroll(0.0));
        assert!(!state.navbar.is_scrolled());

        assert!(state.observe_scroll(120.0));
        assert!(state.navbar.is_scrolled());
    }
}
