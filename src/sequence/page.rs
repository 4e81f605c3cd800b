use crate::foundation::core::{FrameRGBA, Viewport};
use crate::foundation::error::StarglassResult;
use crate::sequence::ambient_loop::AmbientController;
use crate::sequence::controller::{SequenceController, TickScheduler};
use std::cell::Cell;
use std::rc::Rc;

/// Host input events the landing page listens for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent<'a> {
    /// Mouse button press.
    PointerDown,
    /// Touch start.
    Touch,
    /// Key press, identified by the host's key name (for example `"Tab"`,
    /// `"Enter"`, `" "`).
    Key(&'a str),
}

/// Page lifecycle: landing intro, then the revealed main site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagePhase {
    /// Intro visible, skip listeners armed.
    Landing,
    /// Main site revealed; ambient loop running.
    Revealed,
}

/// Frames produced by one [`PageFlow::tick`].
#[derive(Debug, Default)]
pub struct PageTick {
    /// Intro frame, while the intro is running.
    pub intro: Option<FrameRGBA>,
    /// Ambient frame, once revealed.
    pub ambient: Option<FrameRGBA>,
}

/// The landing → main-site state machine wrapped around the intro.
///
/// The intro sequence is an *optional* collaborator: with `None`, `begin`
/// falls straight through to `Revealed` (the documented fallback path). Skip
/// listeners are attached once, Tab is explicitly ignored so keyboard
/// navigation survives, and on first reveal the listeners come off, the
/// landing surface is hidden after a fixed delay, and the ambient loop
/// starts exactly once.
pub struct PageFlow {
    intro: Option<SequenceController>,
    ambient: AmbientController,
    phase: PagePhase,
    viewport: Viewport,
    listeners_attached: bool,
    listeners_ever_attached: bool,
    hide_delay_ms: f64,
    hide_at_ms: Option<f64>,
    landing_hidden: bool,
    intro_done: Rc<Cell<bool>>,
}

impl PageFlow {
    /// Build a page flow. `intro: None` models a page without the detailed
    /// intro renderer. `hide_delay_ms` is typically
    /// [`IntroConfig::reveal_hide_delay_ms`](crate::config::IntroConfig::reveal_hide_delay_ms).
    pub fn new(
        intro: Option<SequenceController>,
        ambient: AmbientController,
        hide_delay_ms: f64,
    ) -> Self {
        Self {
            intro,
            ambient,
            phase: PagePhase::Landing,
            viewport: Viewport::new(0, 0),
            listeners_attached: false,
            listeners_ever_attached: false,
            hide_delay_ms,
            hide_at_ms: None,
            landing_hidden: false,
            intro_done: Rc::new(Cell::new(false)),
        }
    }

    /// Current page phase.
    pub fn phase(&self) -> PagePhase {
        self.phase
    }

    /// Return `true` while skip listeners are armed.
    pub fn listeners_attached(&self) -> bool {
        self.listeners_attached
    }

    /// Return `true` once the landing surface has been hidden.
    pub fn landing_hidden(&self) -> bool {
        self.landing_hidden
    }

    /// Attach skip listeners. Only the first call ever arms them; once the
    /// reveal tears them down they cannot be re-armed.
    pub fn attach_listeners(&mut self) {
        if self.listeners_ever_attached {
            return;
        }
        self.listeners_ever_attached = true;
        self.listeners_attached = true;
    }

    /// Enter the landing phase: start the intro if present, otherwise go
    /// straight to `Revealed`.
    #[tracing::instrument(skip_all)]
    pub fn begin(
        &mut self,
        viewport: Viewport,
        scheduler: &mut dyn TickScheduler,
        now_ms: f64,
    ) -> StarglassResult<()> {
        self.viewport = viewport;
        self.attach_listeners();
        match self.intro.as_mut() {
            Some(intro) => {
                let done = Rc::clone(&self.intro_done);
                intro.start(viewport, scheduler, move || done.set(true))?;
            }
            None => self.reveal(now_ms)?,
        }
        Ok(())
    }

    /// Handle one host input event.
    ///
    /// While landing with listeners armed: Tab is ignored (it must keep
    /// driving keyboard focus), every other pointer, touch or key event
    /// requests a skip. After reveal, listeners are gone and events no-op.
    /// Returns the immediate final intro frame when a skip was performed.
    pub fn handle_input(
        &mut self,
        event: InputEvent<'_>,
        scheduler: &mut dyn TickScheduler,
    ) -> StarglassResult<Option<FrameRGBA>> {
        if self.phase != PagePhase::Landing || !self.listeners_attached {
            return Ok(None);
        }
        if let InputEvent::Key("Tab") = event {
            return Ok(None);
        }
        match self.intro.as_mut() {
            Some(intro) => intro.skip(scheduler),
            None => {
                self.intro_done.set(true);
                Ok(None)
            }
        }
    }

    /// Drive one host frame: intro while landing, ambient once revealed,
    /// and the deferred landing hide in between.
    pub fn tick(
        &mut self,
        scheduler: &mut dyn TickScheduler,
        now_ms: f64,
    ) -> StarglassResult<PageTick> {
        let mut out = PageTick::default();

        if self.phase == PagePhase::Landing {
            if let Some(intro) = self.intro.as_mut() {
                out.intro = intro.on_frame(scheduler, now_ms)?;
            }
            if self.intro_done.get() {
                self.reveal(now_ms)?;
            }
        }

        if self.phase == PagePhase::Revealed {
            if let Some(hide_at) = self.hide_at_ms
                && now_ms >= hide_at
            {
                self.landing_hidden = true;
                self.hide_at_ms = None;
            }
            out.ambient = self.ambient.on_frame(now_ms)?;
        }

        Ok(out)
    }

    /// Forward a viewport change to whichever loops are live.
    pub fn resize(&mut self, viewport: Viewport) -> StarglassResult<()> {
        self.viewport = viewport;
        if let Some(intro) = self.intro.as_mut() {
            intro.resize(viewport)?;
        }
        self.ambient.resize(viewport)?;
        Ok(())
    }

    /// First (and only) transition to `Revealed`.
    fn reveal(&mut self, now_ms: f64) -> StarglassResult<()> {
        if self.phase == PagePhase::Revealed {
            return Ok(());
        }
        self.phase = PagePhase::Revealed;
        self.listeners_attached = false;
        self.hide_at_ms = Some(now_ms + self.hide_delay_ms);
        // Idempotent by the ambient controller's own start guard.
        self.ambient.start(self.viewport)?;
        tracing::debug!("page revealed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/page.rs"]
mod tests;
