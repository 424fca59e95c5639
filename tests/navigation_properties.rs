use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use portfolio_nav::core::navigation::detect_section;
use portfolio_nav::{
    ManualClock, NavigationController, NavigationState, PassiveScrollPolicy, SectionId,
    SectionRegistry, StaticPage, TransitionTimings,
};
use proptest::prelude::*;

const TARGETS: &[&str] = &[
    "home",
    "about",
    "experience",
    "projects",
    "skills",
    "contact",
    "blog",
];

#[derive(Debug, Clone)]
enum Op {
    Click(usize),
    Scroll(f32),
    Wait(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..TARGETS.len()).prop_map(Op::Click),
        (0.0f32..6000.0).prop_map(Op::Scroll),
        (0u64..800).prop_map(Op::Wait),
    ]
}

fn policy_strategy() -> impl Strategy<Value = PassiveScrollPolicy> {
    prop_oneof![
        Just(PassiveScrollPolicy::LockDuringTransition),
        Just(PassiveScrollPolicy::LastWriteWins),
    ]
}

fn page(unmounted: Option<usize>) -> StaticPage {
    let registry = SectionRegistry::portfolio();
    let mut page = StaticPage::stacked(
        registry
            .iter()
            .map(|section| (section.id().clone(), 1000.0)),
    );

    if let Some(index) = unmounted {
        if let Some(section) = registry.iter().nth(index) {
            page.unmount_section(section.id().clone());
        }
    }

    page
}

fn controller(
    policy: PassiveScrollPolicy,
    unmounted: Option<usize>,
) -> (NavigationController<StaticPage, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let controller = NavigationController::new(
        SectionRegistry::portfolio(),
        TransitionTimings::default(),
        policy,
        page(unmounted),
        clock.clone(),
    )
    .expect("default timings are valid");

    (controller, clock)
}

fn apply(
    controller: &mut NavigationController<StaticPage, ManualClock>,
    clock: &ManualClock,
    op: &Op,
) {
    match op {
        Op::Click(index) => {
            controller.navigate_to_section(TARGETS[*index]);
        }
        Op::Scroll(scroll_y) => {
            controller.host_mut().set_scroll_y(*scroll_y);
            controller.observe_scroll(*scroll_y);
        }
        Op::Wait(ms) => clock.advance(Duration::from_millis(*ms)),
    }

    controller.pump();
}

proptest! {
    #[test]
    fn state_stays_consistent_under_any_interleaving(
        ops in proptest::collection::vec(op_strategy(), 0..40),
        policy in policy_strategy(),
        unmounted in proptest::option::of(1usize..6),
    ) {
        let (mut controller, clock) = controller(policy, unmounted);
        let registry = SectionRegistry::portfolio();
        let dimmed = controller.timings().dimmed_opacity;

        for op in &ops {
            apply(&mut controller, &clock, op);
            let state = controller.state();

            prop_assert!(registry.contains(state.current_section.as_str()));
            prop_assert!(registry.contains(state.previous_section.as_str()));
            prop_assert!(state.section_opacity == dimmed || state.section_opacity == 1.0);
            prop_assert_eq!(state.is_transitioning, !controller.phase().is_idle());
            if !state.is_transitioning {
                prop_assert_eq!(state.section_opacity, 1.0);
            }
        }
    }

    #[test]
    fn every_transition_settles_once_the_chain_has_elapsed(
        ops in proptest::collection::vec(op_strategy(), 0..40),
        policy in policy_strategy(),
        unmounted in proptest::option::of(1usize..6),
    ) {
        let (mut controller, clock) = controller(policy, unmounted);

        for op in &ops {
            apply(&mut controller, &clock, op);
        }

        let total = controller.timings().total();
        clock.advance(total + Duration::from_millis(1));
        controller.pump();

        let state = controller.state();
        prop_assert!(!state.is_transitioning);
        prop_assert_eq!(state.section_opacity, 1.0);
        prop_assert_eq!(controller.pending_steps(), 0);
        prop_assert!(controller.phase().is_idle());
    }

    #[test]
    fn clicks_only_land_on_mounted_sections(
        target in 0..TARGETS.len(),
        unmounted in proptest::option::of(1usize..6),
    ) {
        let (mut controller, clock) = controller(PassiveScrollPolicy::default(), unmounted);
        let unmounted_id = unmounted.and_then(|index| TARGETS.get(index).copied());
        let name = TARGETS[target];

        controller.navigate_to_section(name);
        clock.advance(controller.timings().total());
        controller.pump();

        let state = controller.state();
        let reachable = name != "blog" && Some(name) != unmounted_id;
        if reachable {
            prop_assert_eq!(state.current_section.as_str(), name);
        } else {
            prop_assert_eq!(state.current_section.as_str(), "home");
        }
        prop_assert!(!state.is_transitioning);
    }

    #[test]
    fn observers_see_each_change_exactly_once(
        ops in proptest::collection::vec(op_strategy(), 1..40),
        policy in policy_strategy(),
    ) {
        let (mut controller, clock) = controller(policy, None);
        let seen: Rc<RefCell<Vec<NavigationState>>> = Rc::default();
        let recorder = {
            let seen = Rc::clone(&seen);
            move |state: &NavigationState| seen.borrow_mut().push(state.clone())
        };
        controller.subscribe(Rc::new(recorder));

        let mut previous = controller.state().clone();
        let mut changes = 0;
        for op in &ops {
            apply(&mut controller, &clock, op);
            let seen_so_far = seen.borrow().len();
            if controller.state() != &previous {
                prop_assert!(seen_so_far > changes);
                previous = controller.state().clone();
            } else {
                prop_assert_eq!(seen_so_far, changes);
            }
            changes = seen_so_far;
        }

        let seen = seen.borrow();
        for pair in seen.windows(2) {
            prop_assert_ne!(&pair[0], &pair[1]);
        }
        if let Some(last) = seen.last() {
            prop_assert_eq!(last, controller.state());
        }
    }

    #[test]
    fn detection_matches_a_forward_scan(
        sections in proptest::collection::vec((1.0f32..2000.0, any::<bool>()), 1..8),
        scroll_y in 0.0f32..10_000.0,
        navbar_offset in 0.0f32..200.0,
    ) {
        let mut top = 0.0;
        let offsets: Vec<(usize, Option<f32>)> = sections
            .iter()
            .enumerate()
            .map(|(index, (height, mounted))| {
                let offset = (index, mounted.then_some(top));
                top += height;
                offset
            })
            .collect();

        let expected = offsets
            .iter()
            .filter(|(_, top)| top.is_some_and(|top| top <= scroll_y + navbar_offset))
            .map(|(index, _)| *index)
            .last();

        prop_assert_eq!(detect_section(offsets, scroll_y, navbar_offset), expected);
    }
}

#[test]
fn section_ids_from_the_stock_registry_are_valid() {
    for section in &SectionRegistry::portfolio() {
        assert!(SectionId::new(section.id().as_str()).is_ok());
    }
}
