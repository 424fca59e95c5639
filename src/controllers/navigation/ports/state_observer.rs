use crate::core::data::NavigationState;

/// Read-only subscriber to navigation state changes.
pub trait NavigationStatePort {
    fn state_changed(&self, state: &NavigationState);
}

impl<F> NavigationStatePort for F
where
    F: Fn(&NavigationState),
{
    fn state_changed(&self, state: &NavigationState) {
        self(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);
