//! Scene renderers: one per visual phase of the intro.
//!
//! A scene is a pure function of (local progress, absolute elapsed time,
//! viewport) painting into the shared [`Painter`]; it owns its particle
//! pools between [`SceneRenderer::rebuild`] calls and nothing else. No scene
//! owns lifecycle: the timeline decides when a scene runs, and the scene's
//! own fade envelope decides how much of it is visible.

pub(crate) mod ambient_dots;
pub(crate) mod cosmos;
pub(crate) mod datastream;
pub(crate) mod exterior;
pub(crate) mod eyepiece;
pub(crate) mod interior;
pub(crate) mod optics;
pub(crate) mod orbit_lines;

use crate::foundation::core::Viewport;
use crate::foundation::error::StarglassResult;
use crate::render::painter::Painter;

/// Per-frame input to a scene renderer.
#[derive(Clone, Copy, Debug)]
pub struct SceneFrame {
    /// Local progress through the scene's phase window, in `[0, 1]`.
    pub progress: f64,
    /// Absolute elapsed time since the sequence started, in milliseconds.
    pub elapsed_ms: f64,
    /// Current viewport.
    pub viewport: Viewport,
}

/// A renderer for one visual phase.
///
/// Implementations must be callable every frame without accumulating state
/// outside their owned pools, must derive sub-effect activation from
/// `frame.progress` (never wall-clock time), and must paint nothing once
/// their fade envelope reaches zero.
pub trait SceneRenderer {
    /// Stable name used for tracing and test probes.
    fn name(&self) -> &'static str;

    /// Rebuild particle pools for `viewport`. Called on start and on every
    /// resize; never resets any clock.
    fn rebuild(&mut self, viewport: Viewport);

    /// Paint this scene's contribution to the current frame.
    fn render(&mut self, painter: &mut Painter, frame: SceneFrame) -> StarglassResult<()>;
}

/// Deep-sky base color shared by every scene and the final solid frame.
pub(crate) const BASE_SKY: crate::foundation::core::Rgba8 =
    crate::foundation::core::Rgba8::opaque(5, 8, 20);
