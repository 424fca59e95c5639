use serde::{Deserialize, Serialize};

/// How scroll-driven detection interacts with a click-driven transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PassiveScrollPolicy {
    /// Passive updates are dropped while a transition is in flight.
    #[default]
    LockDuringTransition,
    /// Passive updates always apply; the last writer wins.
    LastWriteWins,
}

impl PassiveScrollPolicy {
    #[must_use]
    pub fn allows_update(self, is_transitioning: bool) -> bool {
        match self {
            Self::LockDuringTransition => !is_transitioning,
            Self::LastWriteWins => true,
        }
    }
}
