use super::*;
use crate::foundation::core::Viewport;
use crate::render::painter::Painter;
use crate::scene::{SceneFrame, SceneRenderer};
use std::cell::RefCell;
use std::rc::Rc;

/// Records every invocation: (name, progress, elapsed).
struct ProbeScene {
    name: &'static str,
    log: Rc<RefCell<Vec<(&'static str, f64, f64)>>>,
    rebuilds: Rc<RefCell<usize>>,
}

impl SceneRenderer for ProbeScene {
    fn name(&self) -> &'static str {
        self.name
    }

    fn rebuild(&mut self, _viewport: Viewport) {
        *self.rebuilds.borrow_mut() += 1;
    }

    fn render(
        &mut self,
        _painter: &mut Painter,
        frame: SceneFrame,
    ) -> crate::foundation::error::StarglassResult<()> {
        self.log
            .borrow_mut()
            .push((self.name, frame.progress, frame.elapsed_ms));
        Ok(())
    }
}

fn probe_timeline(
    windows: &[(&'static str, f64, f64)],
) -> (
    Timeline,
    Rc<RefCell<Vec<(&'static str, f64, f64)>>>,
    Rc<RefCell<usize>>,
) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let rebuilds = Rc::new(RefCell::new(0));
    let entries = windows
        .iter()
        .map(|&(name, start, end)| TimelineEntry {
            scene: Box::new(ProbeScene {
                name,
                log: Rc::clone(&log),
                rebuilds: Rc::clone(&rebuilds),
            }) as Box<dyn SceneRenderer>,
            window: PhaseWindow::new(start, end).unwrap(),
        })
        .collect();
    (Timeline::new(entries), log, rebuilds)
}

#[test]
fn window_rejects_zero_or_negative_length() {
    assert!(PhaseWindow::new(5.0, 5.0).is_err());
    assert!(PhaseWindow::new(5.0, 4.0).is_err());
    assert!(PhaseWindow::new(0.0, 1.0).is_ok());
}

#[test]
fn local_progress_is_exact_at_the_boundaries_and_clamped_outside() {
    let w = PhaseWindow::new(6_000.0, 18_000.0).unwrap();
    assert_eq!(w.local_progress(6_000.0), 0.0);
    assert_eq!(w.local_progress(18_000.0), 1.0);
    assert_eq!(w.local_progress(12_000.0), 0.5);
    assert_eq!(w.local_progress(0.0), 0.0);
    assert_eq!(w.local_progress(99_999.0), 1.0);
    assert!(w.contains(6_000.0));
    assert!(w.contains(18_000.0));
    assert!(!w.contains(18_000.1));
}

#[test]
fn scenes_outside_their_window_are_skipped_entirely() {
    let (mut timeline, log, _) = probe_timeline(&[("a", 0.0, 1_000.0), ("b", 2_000.0, 3_000.0)]);
    let mut painter = Painter::new(Viewport::new(8, 8)).unwrap();
    timeline.render_pass(&mut painter, 1_500.0).unwrap();
    assert!(log.borrow().is_empty());
}

#[test]
fn overlapping_windows_keep_listed_order_on_every_frame() {
    let schedule = [
        ("back", 0.0, 9_000.0),
        ("mid", 6_000.0, 18_000.0),
        ("front", 15_000.0, 26_000.0),
    ];
    let (mut timeline, log, _) = probe_timeline(&schedule);
    let mut painter = Painter::new(Viewport::new(8, 8)).unwrap();

    for elapsed in [7_000.0, 7_500.0, 8_000.0, 8_999.9] {
        log.borrow_mut().clear();
        timeline.render_pass(&mut painter, elapsed).unwrap();
        let names: Vec<&str> = log.borrow().iter().map(|e| e.0).collect();
        assert_eq!(names, vec!["back", "mid"], "at {elapsed}ms");
    }

    log.borrow_mut().clear();
    timeline.render_pass(&mut painter, 16_000.0).unwrap();
    let names: Vec<&str> = log.borrow().iter().map(|e| e.0).collect();
    assert_eq!(names, vec!["mid", "front"]);
}

#[test]
fn active_count_matches_the_window_table() {
    let (timeline, _, _) = probe_timeline(&[
        ("s0", 0.0, 9_000.0),
        ("s1", 6_000.0, 18_000.0),
        ("s2", 15_000.0, 26_000.0),
        ("s3", 23_000.0, 32_000.0),
    ]);
    assert_eq!(timeline.active_count(7_000.0), 2);
    assert_eq!(timeline.active_count(29_000.0), 1);
    assert_eq!(timeline.active_count(40_000.0), 0);
    assert_eq!(timeline.active_names(7_000.0), vec!["s0", "s1"]);
}

#[test]
fn rebuild_reaches_every_scene() {
    let (mut timeline, _, rebuilds) = probe_timeline(&[("a", 0.0, 1.0), ("b", 0.0, 1.0)]);
    timeline.rebuild(Viewport::new(100, 100));
    assert_eq!(*rebuilds.borrow(), 2);
}

#[test]
fn renderer_sees_its_local_progress() {
    let (mut timeline, log, _) = probe_timeline(&[("a", 1_000.0, 3_000.0)]);
    let mut painter = Painter::new(Viewport::new(8, 8)).unwrap();
    timeline.render_pass(&mut painter, 2_000.0).unwrap();
    let entries = log.borrow();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].1, 0.5);
    assert_eq!(entries[0].2, 2_000.0);
}
