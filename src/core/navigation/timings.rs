use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delays and presentation values for one click-driven transition.
///
/// Stages are chained: `reveal_delay` counts from the resolve step and
/// `settle_delay` counts from the reveal step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTimings {
    /// Fade-out cue before the target region is resolved.
    #[serde(with = "humantime_serde")]
    pub resolve_delay: Duration,
    /// From scroll start until opacity is restored.
    #[serde(with = "humantime_serde")]
    pub reveal_delay: Duration,
    /// From opacity restore until the transition flag clears.
    #[serde(with = "humantime_serde")]
    pub settle_delay: Duration,
    pub dimmed_opacity: f32,
    /// Height of the fixed navbar, added to the scroll position during passive
    /// detection.
    pub navbar_offset: f32,
}

impl TransitionTimings {
    /// Time from a navigation request until the transition flag clears.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.resolve_delay + self.reveal_delay + self.settle_delay
    }
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            resolve_delay: Duration::from_millis(100),
            reveal_delay: Duration::from_millis(200),
            settle_delay: Duration::from_millis(400),
            dimmed_opacity: 0.3,
            navbar_offset: 100.0,
        }
    }
}
