use crate::foundation::core::{Point, Rgba8, Viewport};
use crate::foundation::error::StarglassResult;
use crate::foundation::math::{ease_in, fade_envelope, window};
use crate::foundation::rng::SeededRng;
use crate::pool::lens::LensPool;
use crate::pool::starfield::StarfieldPool;
use crate::render::painter::Painter;
use crate::scene::{SceneFrame, SceneRenderer};

const BARREL_RADIUS_FRAC: f64 = 0.55;
const SHAFT_COUNT: usize = 6;

/// Travelling down the optical train: the barrel interior, stacked glass
/// elements, and light shafts converging on the exit pupil.
pub(crate) struct OpticsScene {
    seed: u64,
    knees: (f64, f64),
    elements: LensPool,
    dust: StarfieldPool,
}

impl OpticsScene {
    pub(crate) fn new(seed: u64, knees: (f64, f64)) -> Self {
        Self {
            seed,
            knees,
            elements: LensPool::default(),
            dust: StarfieldPool::default(),
        }
    }
}

impl SceneRenderer for OpticsScene {
    fn name(&self) -> &'static str {
        "optics"
    }

    fn rebuild(&mut self, viewport: Viewport) {
        let mut rng = SeededRng::new(self.seed);
        self.elements = LensPool::generate(viewport, &mut rng);
        self.dust = StarfieldPool::generate(viewport, &mut rng);
    }

    fn render(&mut self, painter: &mut Painter, frame: SceneFrame) -> StarglassResult<()> {
        let env = fade_envelope(frame.progress, self.knees.0, self.knees.1);
        if env <= 0.0 || frame.viewport.is_degenerate() {
            return Ok(());
        }

        let center = frame.viewport.center();
        let barrel_r = frame.viewport.min_dim() * BARREL_RADIUS_FRAC;

        // Barrel wall: darker with depth, built from concentric discs.
        for i in 0..5 {
            let t = i as f64 / 4.0;
            let l = 0.06 - t * 0.045;
            painter.fill_circle(
                center,
                barrel_r * (1.0 - t * 0.75),
                Rgba8::from_hsla(222.0, 0.35, l.max(0.01), 0.9 * env),
            );
        }

        // Dust caught in the light path.
        let dust_gate = window(0.1, 0.3, frame.progress);
        if dust_gate > 0.0 {
            for mote in &self.dust.dust {
                let pos = mote.position(frame.elapsed_ms, frame.viewport);
                if pos.distance(center) > barrel_r {
                    continue;
                }
                painter.fill_circle(
                    pos,
                    mote.size * 0.7,
                    Rgba8::from_hsla(48.0, 0.4, 0.8, mote.alpha * 2.0 * dust_gate * env),
                );
            }
        }

        // Glass elements: translucent discs with bright rims, camera pushing
        // through them as the window progresses.
        let push = ease_in(frame.progress);
        for (i, ring) in self.elements.rings.iter().enumerate() {
            let depth = (i as f64 + 1.0) / (self.elements.rings.len() as f64 + 1.0);
            // Elements ahead of the camera grow as we approach.
            let scale = (depth + push * 0.8).min(1.35);
            let r = barrel_r * ring.radius_frac * scale;
            painter.fill_circle(
                center,
                r,
                Rgba8::from_hsla(ring.hue, 0.45, 0.5, 0.05 * env),
            );
            painter.stroke_circle(
                center,
                r,
                ring.width,
                Rgba8::from_hsla(ring.hue, 0.55, 0.7, ring.alpha * 1.4 * env),
            );
        }

        // Light shafts sweeping slowly around the axis.
        let shaft_gate = window(0.35, 0.6, frame.progress);
        if shaft_gate > 0.0 {
            let sweep = frame.elapsed_ms * 0.00025;
            for i in 0..SHAFT_COUNT {
                let a = sweep + i as f64 * std::f64::consts::TAU / SHAFT_COUNT as f64;
                let inner = Point::new(
                    center.x + a.cos() * barrel_r * 0.1,
                    center.y + a.sin() * barrel_r * 0.1,
                );
                let outer = Point::new(
                    center.x + a.cos() * barrel_r * 0.95,
                    center.y + a.sin() * barrel_r * 0.95,
                );
                painter.stroke_line(
                    inner,
                    outer,
                    2.2,
                    Rgba8::from_hsla(48.0, 0.65, 0.72, 0.12 * shaft_gate * env),
                );
            }
        }

        // Exit pupil brightening toward the handoff.
        let pupil_gate = window(0.55, 0.85, frame.progress);
        if pupil_gate > 0.0 {
            for (mult, alpha) in [(0.2, 0.25), (0.1, 0.45), (0.045, 0.8)] {
                painter.fill_circle(
                    center,
                    barrel_r * mult,
                    Rgba8::from_hsla(50.0, 0.8, 0.78, alpha * pupil_gate * env),
                );
            }
        }

        Ok(())
    }
}
