use crate::controllers::navigation::errors::NavigationSetupError;
use crate::controllers::navigation::ports::{
    Clock, NavigationStatePort, PageHost, SubscriptionId,
};
use crate::controllers::navigation::timer_queue::TimerQueue;
use crate::core::data::{FULL_OPACITY, NavigationState, SectionId};
use crate::core::navigation::{
    PassiveScrollPolicy, TransitionPhase, TransitionStep, TransitionTimings, detect_section,
};
use crate::core::sections::SectionRegistry;
use serde::Serialize;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, trace};

/// Outcome of a navigation request. Completion is never reported here; watch
/// the state instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum NavigationRequest {
    Started { transition: u64 },
    IgnoredInFlight,
    IgnoredCurrent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum PassiveUpdate {
    Updated { from: SectionId, to: SectionId },
    Unchanged,
    /// A different section was detected but a transition holds the lock.
    Suppressed,
    /// No mounted section starts above the probe line.
    Undetected,
}

/// Owns the page navigation record and serializes section changes.
pub struct NavigationController<H: PageHost, C: Clock> {
    registry: SectionRegistry,
    timings: TransitionTimings,
    policy: PassiveScrollPolicy,
    host: H,
    clock: C,
    state: NavigationState,
    phase: TransitionPhase,
    timers: TimerQueue<TransitionStep>,
    observers: Vec<(SubscriptionId, Rc<dyn NavigationStatePort>)>,
    next_subscription: u64,
    next_transition: u64,
}

impl<H: PageHost, C: Clock> NavigationController<H, C> {
    pub fn new(
        registry: SectionRegistry,
        timings: TransitionTimings,
        policy: PassiveScrollPolicy,
        host: H,
        clock: C,
    ) -> Result<Self, NavigationSetupError> {
        if !(0.0..=1.0).contains(&timings.dimmed_opacity) {
            return Err(NavigationSetupError::DimmedOpacityOutOfRange(
                timings.dimmed_opacity,
            ));
        }

        if !timings.navbar_offset.is_finite() {
            return Err(NavigationSetupError::NonFiniteNavbarOffset(
                timings.navbar_offset,
            ));
        }

        let state = NavigationState::initial(registry.first().id().clone());
        debug!(sections = registry.len(), start = %state.current_section, "page mounted");

        Ok(Self {
            registry,
            timings,
            policy,
            host,
            clock,
            state,
            phase: TransitionPhase::Idle,
            timers: TimerQueue::new(),
            observers: Vec::new(),
            next_subscription: 0,
            next_transition: 1,
        })
    }

    /// Requests a move to `target`. Returns immediately; the transition runs
    /// as the clock passes its deadlines and [`Self::pump`] is called.
    pub fn navigate_to_section(&mut self, target: &str) -> NavigationRequest {
        if self.state.current_section == target {
            trace!(requested = target, "already on requested section");
            return NavigationRequest::IgnoredCurrent;
        }

        if !self.phase.is_idle() {
            trace!(
                requested = target,
                in_flight = ?self.phase.transition(),
                "transition in flight, request ignored"
            );
            return NavigationRequest::IgnoredInFlight;
        }

        let before = self.state.clone();
        let transition = self.next_transition;
        self.next_transition += 1;

        self.state.is_transitioning = true;
        self.state.previous_section = self.state.current_section.clone();
        self.state.section_opacity = self.timings.dimmed_opacity;
        self.phase = TransitionPhase::FadingOut {
            target: target.to_string(),
            transition,
        };

        let deadline = self.clock.now() + self.timings.resolve_delay;
        self.timers
            .schedule(deadline, TransitionStep::ResolveTarget { transition });

        debug!(
            transition,
            from = %self.state.current_section,
            requested = target,
            "transition started"
        );
        self.publish(&before);

        NavigationRequest::Started { transition }
    }

    /// Passive scroll tracking. Never touches the transition flag or opacity.
    pub fn observe_scroll(&mut self, scroll_y: f32) -> PassiveUpdate {
        let host = &self.host;
        let offsets = self.registry.iter().map(|section| {
            let top = host.resolve_region(section).map(|region| region.top);
            (section, top)
        });

        let Some(section) = detect_section(offsets, scroll_y, self.timings.navbar_offset) else {
            return PassiveUpdate::Undetected;
        };

        if &self.state.current_section == section.id() {
            return PassiveUpdate::Unchanged;
        }

        if !self.policy.allows_update(self.state.is_transitioning) {
            trace!(
                scroll_y,
                detected = %section.id(),
                "passive update suppressed during transition"
            );
            return PassiveUpdate::Suppressed;
        }

        let before = self.state.clone();
        let to = section.id().clone();
        let from = std::mem::replace(&mut self.state.current_section, to.clone());
        self.state.previous_section = from.clone();

        trace!(scroll_y, %from, %to, "section changed by scrolling");
        self.publish(&before);

        PassiveUpdate::Updated { from, to }
    }

    /// Fires every step due at the current clock time, in deadline order.
    /// Returns the number of steps fired.
    pub fn pump(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;

        while let Some((deadline, step)) = self.timers.pop_due(now) {
            self.run_step(deadline, step);
            fired += 1;
        }

        fired
    }

    fn run_step(&mut self, deadline: Duration, step: TransitionStep) {
        let before = self.state.clone();
        let phase = std::mem::take(&mut self.phase);

        match (phase, step) {
            (
                TransitionPhase::FadingOut { target, transition },
                TransitionStep::ResolveTarget { transition: step_transition },
            ) if transition == step_transition => {
                self.resolve_target(deadline, transition, &target);
            }
            (
                TransitionPhase::Revealing { transition },
                TransitionStep::RestoreOpacity { transition: step_transition },
            ) if transition == step_transition => {
                self.state.section_opacity = FULL_OPACITY;
                self.phase = TransitionPhase::Settling { transition };
                self.timers.schedule(
                    deadline + self.timings.settle_delay,
                    TransitionStep::Settle { transition },
                );
            }
            (
                TransitionPhase::Settling { transition },
                TransitionStep::Settle { transition: step_transition },
            ) if transition == step_transition => {
                self.state.is_transitioning = false;
                debug!(transition, section = %self.state.current_section, "transition finished");
            }
            (phase, step) => {
                trace!(?phase, ?step, "dropping stale transition step");
                self.phase = phase;
            }
        }

        self.publish(&before);
    }

    fn resolve_target(&mut self, deadline: Duration, transition: u64, target: &str) {
        let resolved = self.registry.get(target).and_then(|section| {
            self.host
                .resolve_region(section)
                .map(|region| (section, region))
        });

        match resolved {
            Some((section, region)) => {
                self.host.smooth_scroll_to(section, region);
                self.state.current_section = section.id().clone();
                self.phase = TransitionPhase::Revealing { transition };
                self.timers.schedule(
                    deadline + self.timings.reveal_delay,
                    TransitionStep::RestoreOpacity { transition },
                );

                debug!(
                    transition,
                    section = %section.id(),
                    top = region.top,
                    "scrolling to section"
                );
            }
            None => {
                self.state.is_transitioning = false;
                self.state.section_opacity = FULL_OPACITY;

                debug!(
                    transition,
                    requested = target,
                    "target section not mounted, transition aborted"
                );
            }
        }
    }

    pub fn subscribe(&mut self, observer: Rc<dyn NavigationStatePort>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));

        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(subscription, _)| *subscription != id);

        self.observers.len() != before
    }

    fn publish(&self, before: &NavigationState) {
        if &self.state == before {
            return;
        }

        for (_, observer) in &self.observers {
            observer.state_changed(&self.state);
        }
    }

    /// Tears the page down. Pending steps and subscribers are dropped without
    /// firing.
    pub fn unmount(self) {
        drop(self);
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> &TransitionPhase {
        &self.phase
    }

    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    #[must_use]
    pub fn timings(&self) -> &TransitionTimings {
        &self.timings
    }

    #[must_use]
    pub fn policy(&self) -> PassiveScrollPolicy {
        self.policy
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Page time at which the next pending step is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn pending_steps(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}

impl<H: PageHost, C: Clock> Drop for NavigationController<H, C> {
    fn drop(&mut self) {
        let dropped = self.timers.len();
        self.timers.clear();
        self.observers.clear();

        debug!(dropped_steps = dropped, "page unmounted");
    }
}
