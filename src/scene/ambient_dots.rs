use crate::foundation::core::{Rgba8, Viewport};
use crate::foundation::error::StarglassResult;
use crate::foundation::rng::SeededRng;
use crate::pool::ambient::AmbientPool;
use crate::render::painter::Painter;
use crate::scene::{SceneFrame, SceneRenderer};

/// Floating dots behind the main site. Runs indefinitely; `progress` is
/// ignored because this scene has no phase window.
pub(crate) struct AmbientDotsScene {
    seed: u64,
    pool: AmbientPool,
}

impl AmbientDotsScene {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            seed,
            pool: AmbientPool::default(),
        }
    }
}

impl SceneRenderer for AmbientDotsScene {
    fn name(&self) -> &'static str {
        "ambient-dots"
    }

    fn rebuild(&mut self, viewport: Viewport) {
        let mut rng = SeededRng::new(self.seed);
        self.pool = AmbientPool::generate(viewport, &mut rng);
    }

    fn render(&mut self, painter: &mut Painter, frame: SceneFrame) -> StarglassResult<()> {
        if frame.viewport.is_degenerate() {
            return Ok(());
        }
        for dot in &self.pool.dots {
            let pos = dot.position(frame.elapsed_ms, frame.viewport);
            // Soft halo under a brighter core.
            painter.fill_circle(
                pos,
                dot.size * 2.6,
                Rgba8::from_hsla(dot.hue, 0.55, 0.6, dot.alpha * 0.35),
            );
            painter.fill_circle(pos, dot.size, Rgba8::from_hsla(dot.hue, 0.6, 0.72, dot.alpha));
        }
        Ok(())
    }
}
