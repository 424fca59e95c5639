/// Stage of a click-driven transition.
///
/// `Idle` is the only stage in which a new navigation request is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    /// Opacity is dimmed; waiting to resolve and scroll to `target`. The
    /// target is kept as requested and may not name a registered section.
    FadingOut { target: String, transition: u64 },
    /// Scrolled to the target; waiting to restore opacity.
    Revealing { transition: u64 },
    /// Opacity restored; waiting to clear the transition flag.
    Settling { transition: u64 },
}

impl TransitionPhase {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn transition(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::FadingOut { transition, .. }
            | Self::Revealing { transition }
            | Self::Settling { transition } => Some(*transition),
        }
    }
}

/// Deferred step of a transition, queued on the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionStep {
    ResolveTarget { transition: u64 },
    RestoreOpacity { transition: u64 },
    Settle { transition: u64 },
}

impl TransitionStep {
    #[must_use]
    pub fn transition(&self) -> u64 {
        match self {
            Self::ResolveTarget { transition }
            | Self::RestoreOpacity { transition }
            | Self::Settle { transition } => *transition,
        }
    }
}
