use crate::config::IntroConfig;
use crate::foundation::core::{FrameRGBA, Viewport};
use crate::foundation::error::StarglassResult;
use crate::render::painter::Painter;
use crate::scene::BASE_SKY;
use crate::timeline::intro_timeline;
use crate::timeline::phase::Timeline;

/// Handle to one pending frame tick, returned by [`TickScheduler::request`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// The host's animation-frame mechanism, made explicit.
///
/// The controller never loops on its own: it requests one tick at a time and
/// the host calls [`SequenceController::on_frame`] when that tick fires.
/// Cancellation is first-class so `skip`/`stop` can guarantee no further
/// callback executes after they return.
pub trait TickScheduler {
    /// Request one callback on the next animation frame.
    fn request(&mut self) -> TickHandle;
    /// Cancel a previously requested tick. Must take effect synchronously.
    fn cancel(&mut self, handle: TickHandle);
}

/// Lifecycle of one intro run. `Skipped` and `Completed` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceState {
    /// Not started (or stopped for teardown).
    Idle,
    /// Frames are being scheduled and painted.
    Running,
    /// Terminated early by `skip()`.
    Skipped,
    /// Ran to `total_ms`.
    Completed,
}

impl SequenceState {
    /// Return `true` for `Skipped` and `Completed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Skipped | Self::Completed)
    }
}

/// Orchestrates the intro: owns the clock, the timeline, the drawing
/// surface and the terminal flags; exposes `start`/`skip`/`resize`/`stop`.
///
/// Single-instance semantics without hidden globals: construct one, hand it
/// to the page flow by value, drive it from the host's frame callback.
pub struct SequenceController {
    config: IntroConfig,
    timeline: Timeline,
    painter: Painter,
    state: SequenceState,
    start_ms: Option<f64>,
    last_elapsed: f64,
    pending: Option<TickHandle>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl SequenceController {
    /// Build a controller for `config` with the default intro timeline,
    /// validating the config up front.
    pub fn new(config: IntroConfig) -> StarglassResult<Self> {
        let timeline = intro_timeline(&config)?;
        Self::with_timeline(config, timeline)
    }

    /// Build a controller with a caller-supplied timeline (used by hosts and
    /// tests that schedule their own scenes).
    pub fn with_timeline(config: IntroConfig, timeline: Timeline) -> StarglassResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            timeline,
            painter: Painter::new(Viewport::new(0, 0))?,
            state: SequenceState::Idle,
            start_ms: None,
            last_elapsed: 0.0,
            pending: None,
            on_complete: None,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SequenceState {
        self.state
    }

    /// Elapsed milliseconds observed so far in this run.
    pub fn elapsed_ms(&self) -> f64 {
        self.last_elapsed
    }

    /// Shared access to the timeline (test probes inspect active scenes).
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Start (or restart) the sequence: reset the clock, build pools for
    /// `viewport`, enter `Running`, request the first tick.
    ///
    /// A no-op while already `Running` (re-entrant starts are idempotent).
    #[tracing::instrument(skip_all)]
    pub fn start(
        &mut self,
        viewport: Viewport,
        scheduler: &mut dyn TickScheduler,
        on_complete: impl FnOnce() + 'static,
    ) -> StarglassResult<()> {
        if self.state == SequenceState::Running {
            return Ok(());
        }
        self.painter.resize(viewport)?;
        self.timeline.rebuild(viewport);
        self.start_ms = None;
        self.last_elapsed = 0.0;
        self.state = SequenceState::Running;
        self.on_complete = Some(Box::new(on_complete));
        self.pending = Some(scheduler.request());
        tracing::debug!("intro sequence started");
        Ok(())
    }

    /// Advance one frame at host timestamp `now_ms`.
    ///
    /// Returns the painted frame while running, `None` once terminal (a
    /// stale tick arriving after `skip`/`stop` is a no-op). The first
    /// observed timestamp fixes the clock origin; regressing timestamps
    /// clamp so elapsed never decreases within a run.
    pub fn on_frame(
        &mut self,
        scheduler: &mut dyn TickScheduler,
        now_ms: f64,
    ) -> StarglassResult<Option<FrameRGBA>> {
        if self.state != SequenceState::Running {
            return Ok(None);
        }
        self.pending = None;

        let start = *self.start_ms.get_or_insert(now_ms);
        let elapsed = (now_ms - start).max(self.last_elapsed);
        self.last_elapsed = elapsed;

        if elapsed >= self.config.total_ms {
            let frame = self.paint_final()?;
            self.state = SequenceState::Completed;
            tracing::debug!(elapsed_ms = elapsed, "intro sequence completed");
            self.fire_completion();
            return Ok(Some(frame));
        }

        self.painter.begin_frame(BASE_SKY);
        self.timeline.render_pass(&mut self.painter, elapsed)?;
        let frame = self.painter.finish_frame()?;
        self.pending = Some(scheduler.request());
        Ok(Some(frame))
    }

    /// Skip the rest of the sequence.
    ///
    /// Callable any time while `Running`, including before the first frame:
    /// cancels the pending tick synchronously, paints one immediate solid
    /// final frame, transitions to `Skipped` and fires the completion
    /// callback. Calling again after any terminal state is a no-op.
    #[tracing::instrument(skip_all)]
    pub fn skip(
        &mut self,
        scheduler: &mut dyn TickScheduler,
    ) -> StarglassResult<Option<FrameRGBA>> {
        if self.state != SequenceState::Running {
            return Ok(None);
        }
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        let frame = self.paint_final()?;
        self.state = SequenceState::Skipped;
        tracing::debug!(elapsed_ms = self.last_elapsed, "intro sequence skipped");
        self.fire_completion();
        Ok(Some(frame))
    }

    /// Rebuild particle pools for a new viewport without touching the clock.
    pub fn resize(&mut self, viewport: Viewport) -> StarglassResult<()> {
        self.painter.resize(viewport)?;
        self.timeline.rebuild(viewport);
        Ok(())
    }

    /// Teardown: cancel the pending tick without invoking completion.
    ///
    /// Not counted as skip or completion; the controller returns to `Idle`
    /// and can be started again.
    pub fn stop(&mut self, scheduler: &mut dyn TickScheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        if self.state == SequenceState::Running {
            self.state = SequenceState::Idle;
        }
        self.on_complete = None;
    }

    /// Solid final frame painted on completion and on skip, so the reveal
    /// transition starts from a stable backdrop.
    fn paint_final(&mut self) -> StarglassResult<FrameRGBA> {
        self.painter.begin_frame(BASE_SKY);
        self.painter.finish_frame()
    }

    fn fire_completion(&mut self) {
        // `take()` makes exactly-once structural: a second terminal
        // transition finds nothing to call.
        if let Some(cb) = self.on_complete.take() {
            cb();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/controller.rs"]
mod tests;
