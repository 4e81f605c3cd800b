use super::*;
use crate::config::IntroConfig;
use crate::foundation::core::Viewport;
use crate::sequence::controller::{SequenceController, TickHandle, TickScheduler};

struct ManualScheduler {
    next: u64,
    pending: Vec<TickHandle>,
}

impl ManualScheduler {
    fn new() -> Self {
        Self {
            next: 0,
            pending: Vec::new(),
        }
    }
}

impl TickScheduler for ManualScheduler {
    fn request(&mut self) -> TickHandle {
        let handle = TickHandle(self.next);
        self.next += 1;
        self.pending.push(handle);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.pending.retain(|&h| h != handle);
    }
}

const VP: Viewport = Viewport {
    width: 16,
    height: 16,
};

fn intro() -> SequenceController {
    SequenceController::new(IntroConfig {
        total_ms: 2_000.0,
        orbit_lines_ms: [0.0, 2_000.0],
        exterior_ms: [0.0, 2_000.0],
        interior_ms: [0.0, 2_000.0],
        eyepiece_ms: [0.0, 2_000.0],
        optics_ms: [0.0, 2_000.0],
        data_transform_ms: [0.0, 2_000.0],
        cosmos_ms: [0.0, 2_000.0],
        reveal_hide_delay_ms: 500.0,
        ..IntroConfig::default()
    })
    .unwrap()
}

fn flow_with_intro() -> PageFlow {
    PageFlow::new(
        Some(intro()),
        crate::sequence::ambient_loop::AmbientController::new(3).unwrap(),
        500.0,
    )
}

#[test]
fn missing_intro_falls_straight_through_to_revealed() {
    let mut sched = ManualScheduler::new();
    let mut flow = PageFlow::new(
        None,
        crate::sequence::ambient_loop::AmbientController::new(3).unwrap(),
        500.0,
    );
    flow.begin(VP, &mut sched, 0.0).unwrap();
    assert_eq!(flow.phase(), PagePhase::Revealed);
    assert!(!flow.listeners_attached());
    let tick = flow.tick(&mut sched, 16.0).unwrap();
    assert!(tick.ambient.is_some());
    assert!(tick.intro.is_none());
}

#[test]
fn tab_does_not_skip_but_other_keys_do() {
    let mut sched = ManualScheduler::new();
    let mut flow = flow_with_intro();
    flow.begin(VP, &mut sched, 0.0).unwrap();
    flow.tick(&mut sched, 0.0).unwrap();
    assert_eq!(flow.phase(), PagePhase::Landing);

    flow.handle_input(InputEvent::Key("Tab"), &mut sched).unwrap();
    flow.tick(&mut sched, 16.0).unwrap();
    assert_eq!(flow.phase(), PagePhase::Landing, "Tab must not trigger skip");

    flow.handle_input(InputEvent::Key("Enter"), &mut sched).unwrap();
    flow.tick(&mut sched, 32.0).unwrap();
    assert_eq!(flow.phase(), PagePhase::Revealed);
}

#[test]
fn pointer_and_touch_both_skip() {
    for event in [InputEvent::PointerDown, InputEvent::Touch] {
        let mut sched = ManualScheduler::new();
        let mut flow = flow_with_intro();
        flow.begin(VP, &mut sched, 0.0).unwrap();
        flow.handle_input(event, &mut sched).unwrap();
        flow.tick(&mut sched, 16.0).unwrap();
        assert_eq!(flow.phase(), PagePhase::Revealed);
    }
}

#[test]
fn listeners_cannot_be_rearmed_after_teardown() {
    let mut sched = ManualScheduler::new();
    let mut flow = flow_with_intro();
    flow.begin(VP, &mut sched, 0.0).unwrap();
    flow.handle_input(InputEvent::PointerDown, &mut sched).unwrap();
    flow.tick(&mut sched, 16.0).unwrap();
    assert!(!flow.listeners_attached());

    flow.attach_listeners();
    assert!(!flow.listeners_attached(), "teardown is permanent");
}

#[test]
fn reveal_tears_down_listeners_and_later_input_is_inert() {
    let mut sched = ManualScheduler::new();
    let mut flow = flow_with_intro();
    flow.begin(VP, &mut sched, 0.0).unwrap();
    assert!(flow.listeners_attached());

    flow.handle_input(InputEvent::PointerDown, &mut sched).unwrap();
    flow.tick(&mut sched, 16.0).unwrap();
    assert!(!flow.listeners_attached());

    // Events after teardown change nothing.
    flow.handle_input(InputEvent::Key("Enter"), &mut sched).unwrap();
    assert_eq!(flow.phase(), PagePhase::Revealed);
}

#[test]
fn landing_hides_only_after_the_configured_delay() {
    let mut sched = ManualScheduler::new();
    let mut flow = flow_with_intro();
    flow.begin(VP, &mut sched, 0.0).unwrap();
    flow.handle_input(InputEvent::PointerDown, &mut sched).unwrap();

    flow.tick(&mut sched, 100.0).unwrap();
    assert_eq!(flow.phase(), PagePhase::Revealed);
    assert!(!flow.landing_hidden());

    flow.tick(&mut sched, 400.0).unwrap();
    assert!(!flow.landing_hidden(), "hide delay has not elapsed yet");

    flow.tick(&mut sched, 650.0).unwrap();
    assert!(flow.landing_hidden());
}

#[test]
fn ambient_starts_exactly_once_on_reveal() {
    let mut sched = ManualScheduler::new();
    let mut flow = flow_with_intro();
    flow.begin(VP, &mut sched, 0.0).unwrap();
    flow.handle_input(InputEvent::Touch, &mut sched).unwrap();
    let first = flow.tick(&mut sched, 16.0).unwrap();
    assert!(first.ambient.is_some());
    // Further ticks keep the same loop running.
    let later = flow.tick(&mut sched, 32.0).unwrap();
    assert!(later.ambient.is_some());
}

#[test]
fn natural_completion_reveals_without_input() {
    let mut sched = ManualScheduler::new();
    let mut flow = flow_with_intro();
    flow.begin(VP, &mut sched, 0.0).unwrap();
    flow.tick(&mut sched, 0.0).unwrap();
    flow.tick(&mut sched, 1_000.0).unwrap();
    assert_eq!(flow.phase(), PagePhase::Landing);
    // Intro total is 2000ms; this frame completes it.
    flow.tick(&mut sched, 2_000.0).unwrap();
    assert_eq!(flow.phase(), PagePhase::Revealed);
}
