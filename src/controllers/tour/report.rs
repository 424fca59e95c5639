use crate::controllers::navigation::{NavigationRequest, PassiveUpdate};
use crate::controllers::tour::step::TourStep;
use crate::core::data::{NavigationState, SectionId};
use serde::Serialize;
use std::fmt;

/// A state change observed while a step ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateChange {
    pub at_ms: u64,
    pub state: NavigationState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StepOutcome {
    Navigation(NavigationRequest),
    Scroll(PassiveUpdate),
    Waited { fired: usize },
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigation(NavigationRequest::Started { transition }) => {
                write!(f, "transition {transition} started")
            }
            Self::Navigation(NavigationRequest::IgnoredInFlight) => {
                f.write_str("ignored, transition in flight")
            }
            Self::Navigation(NavigationRequest::IgnoredCurrent) => {
                f.write_str("ignored, already current")
            }
            Self::Scroll(PassiveUpdate::Updated { from, to }) => write!(f, "{from} -> {to}"),
            Self::Scroll(PassiveUpdate::Unchanged) => f.write_str("section unchanged"),
            Self::Scroll(PassiveUpdate::Suppressed) => f.write_str("suppressed during transition"),
            Self::Scroll(PassiveUpdate::Undetected) => f.write_str("no section detected"),
            Self::Waited { fired: 0 } => f.write_str("nothing due"),
            Self::Waited { fired: 1 } => f.write_str("1 step fired"),
            Self::Waited { fired } => write!(f, "{fired} steps fired"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    /// Virtual time when the step started.
    pub at_ms: u64,
    pub step: TourStep,
    pub outcome: StepOutcome,
    pub changes: Vec<StateChange>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourReport {
    pub steps: Vec<StepRecord>,
    pub final_state: NavigationState,
    /// Sections whose entrance animation has played, in page order.
    pub visible_sections: Vec<SectionId>,
    pub scroll_y: f32,
    pub elapsed_ms: u64,
}

impl TourReport {
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.steps.iter().map(|step| step.changes.len()).sum()
    }
}
