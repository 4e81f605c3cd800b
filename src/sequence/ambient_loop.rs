use crate::foundation::core::{FrameRGBA, Viewport};
use crate::foundation::error::StarglassResult;
use crate::render::painter::Painter;
use crate::scene::ambient_dots::AmbientDotsScene;
use crate::scene::{BASE_SKY, SceneFrame, SceneRenderer};

/// The floating-dots background for the main site.
///
/// Starts at most once (idempotent guard) and then runs for the page's
/// lifetime: there is deliberately no stop. It owns its own surface, so it
/// never contends with the intro sequence for the intro canvas.
pub struct AmbientController {
    scene: AmbientDotsScene,
    painter: Painter,
    started: bool,
    start_ms: Option<f64>,
    last_elapsed: f64,
}

impl AmbientController {
    /// Build an ambient loop seeded with `seed`.
    pub fn new(seed: u64) -> StarglassResult<Self> {
        Ok(Self {
            scene: AmbientDotsScene::new(seed),
            painter: Painter::new(Viewport::new(0, 0))?,
            started: false,
            start_ms: None,
            last_elapsed: 0.0,
        })
    }

    /// Return `true` once started.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Start the loop for `viewport`. Calling again is a no-op.
    #[tracing::instrument(skip_all)]
    pub fn start(&mut self, viewport: Viewport) -> StarglassResult<()> {
        if self.started {
            return Ok(());
        }
        self.painter.resize(viewport)?;
        self.scene.rebuild(viewport);
        self.started = true;
        tracing::debug!("ambient loop started");
        Ok(())
    }

    /// Paint one ambient frame at host timestamp `now_ms`.
    ///
    /// Returns `None` until the loop has been started.
    pub fn on_frame(&mut self, now_ms: f64) -> StarglassResult<Option<FrameRGBA>> {
        if !self.started {
            return Ok(None);
        }
        let start = *self.start_ms.get_or_insert(now_ms);
        let elapsed = (now_ms - start).max(self.last_elapsed);
        self.last_elapsed = elapsed;

        self.painter.begin_frame(BASE_SKY);
        let frame = SceneFrame {
            progress: 0.0,
            elapsed_ms: elapsed,
            viewport: self.painter.viewport(),
        };
        self.scene.render(&mut self.painter, frame)?;
        Ok(Some(self.painter.finish_frame()?))
    }

    /// Rebuild the dot pool for a new viewport; the clock keeps running.
    pub fn resize(&mut self, viewport: Viewport) -> StarglassResult<()> {
        if !self.started {
            return Ok(());
        }
        self.painter.resize(viewport)?;
        self.scene.rebuild(viewport);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/ambient_loop.rs"]
mod tests;
