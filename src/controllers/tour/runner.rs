use crate::controllers::navigation::{
    Clock, ManualClock, NavigationController, NavigationSetupError,
};
use crate::controllers::tour::report::{StateChange, StepOutcome, StepRecord, TourReport};
use crate::controllers::tour::step::{TourStep, TourStepError};
use crate::core::data::NavigationState;
use crate::core::navigation::{PassiveScrollPolicy, TransitionTimings};
use crate::core::sections::SectionRegistry;
use crate::core::visibility::{SectionVisibility, SectionVisibilityBoard};
use crate::presenters::headless::StaticPage;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info};

fn millis(at: Duration) -> u64 {
    u64::try_from(at.as_millis()).unwrap_or(u64::MAX)
}

/// Replays scripted clicks, scrolls and waits against a headless page on a
/// virtual clock.
pub struct TourRunner {
    controller: NavigationController<StaticPage, ManualClock>,
    clock: ManualClock,
    changes: Rc<RefCell<Vec<StateChange>>>,
    board: Rc<RefCell<SectionVisibilityBoard>>,
}

impl TourRunner {
    pub fn new(
        registry: SectionRegistry,
        timings: TransitionTimings,
        policy: PassiveScrollPolicy,
        page: StaticPage,
    ) -> Result<Self, NavigationSetupError> {
        let clock = ManualClock::new();
        let board = Rc::new(RefCell::new(SectionVisibilityBoard::new(&registry)));
        let changes = Rc::new(RefCell::new(Vec::new()));

        let mut controller =
            NavigationController::new(registry, timings, policy, page, clock.clone())?;
        board.borrow_mut().observe(controller.state());

        let recorder = {
            let changes = Rc::clone(&changes);
            let board = Rc::clone(&board);
            let clock = clock.clone();

            move |state: &NavigationState| {
                changes.borrow_mut().push(StateChange {
                    at_ms: millis(clock.now()),
                    state: state.clone(),
                });
                board.borrow_mut().observe(state);
            }
        };
        controller.subscribe(Rc::new(recorder));

        Ok(Self {
            controller,
            clock,
            changes,
            board,
        })
    }

    pub fn run_step(&mut self, step: &TourStep) -> Result<StepRecord, TourStepError> {
        self.board.borrow_mut().tick();
        let at_ms = millis(self.clock.now());

        let outcome = match step {
            TourStep::Click(target) => {
                let request = self.controller.navigate_to_section(target);
                self.pump();
                StepOutcome::Navigation(request)
            }
            TourStep::Scroll(scroll_y) => self.scroll_page(*scroll_y),
            TourStep::Section(id) => {
                let region = self
                    .controller
                    .host()
                    .region_of(id)
                    .ok_or_else(|| TourStepError::UnknownSection(id.clone()))?;
                self.scroll_page(region.top)
            }
            TourStep::Wait(duration) => {
                self.clock.advance(*duration);
                StepOutcome::Waited { fired: self.pump() }
            }
        };

        debug!(at_ms, %step, %outcome, "tour step");

        Ok(StepRecord {
            at_ms,
            step: step.clone(),
            outcome,
            changes: std::mem::take(&mut *self.changes.borrow_mut()),
        })
    }

    /// Runs every step, then unmounts the page.
    pub fn run(mut self, steps: &[TourStep]) -> Result<TourReport, TourStepError> {
        let mut records = Vec::with_capacity(steps.len());

        for step in steps {
            records.push(self.run_step(step)?);
        }

        Ok(self.finish(records))
    }

    fn finish(self, steps: Vec<StepRecord>) -> TourReport {
        let Self {
            controller, board, ..
        } = self;

        let mut board = board.borrow_mut();
        board.tick();

        let report = TourReport {
            final_state: controller.state().clone(),
            visible_sections: board
                .iter()
                .filter(|visibility| visibility.is_visible())
                .map(SectionVisibility::section)
                .cloned()
                .collect(),
            scroll_y: controller.host().scroll_y(),
            elapsed_ms: millis(controller.clock().now()),
            steps,
        };

        info!(
            steps = report.steps.len(),
            changes = report.change_count(),
            section = %report.final_state.current_section,
            "tour finished"
        );
        controller.unmount();

        report
    }

    fn scroll_page(&mut self, scroll_y: f32) -> StepOutcome {
        self.controller.host_mut().set_scroll_y(scroll_y);
        let scroll_y = self.controller.host().scroll_y();

        let update = self.controller.observe_scroll(scroll_y);
        self.pump();

        StepOutcome::Scroll(update)
    }

    /// Fires due steps. A programmatic scroll is reported back to the
    /// controller the way a browser scroll event would be.
    fn pump(&mut self) -> usize {
        let scroll_before = self.controller.host().scroll_y();
        let fired = self.controller.pump();
        let scroll_y = self.controller.host().scroll_y();

        if scroll_y != scroll_before {
            self.controller.observe_scroll(scroll_y);
        }

        fired
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        self.controller.state()
    }

    #[must_use]
    pub fn page(&self) -> &StaticPage {
        self.controller.host()
    }

    pub fn page_mut(&mut self) -> &mut StaticPage {
        self.controller.host_mut()
    }
}
