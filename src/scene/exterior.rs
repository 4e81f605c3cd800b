use crate::foundation::core::{Point, Rect, Rgba8, Viewport};
use crate::foundation::error::StarglassResult;
use crate::foundation::math::{ease_out, fade_envelope, window};
use crate::foundation::rng::SeededRng;
use crate::pool::starfield::StarfieldPool;
use crate::render::painter::Painter;
use crate::scene::{SceneFrame, SceneRenderer};

// Dome proportions relative to the min viewport dimension.
const DOME_RADIUS_FRAC: f64 = 0.26;
const SLIT_WIDTH_FRAC: f64 = 0.14;
const HORIZON_FRAC: f64 = 0.72;

/// Observatory exterior at night: star sky, horizon, dome with an open
/// slit. Largely a static tableau; only the stars twinkle and the sky
/// drifts slightly.
pub(crate) struct ExteriorScene {
    seed: u64,
    knees: (f64, f64),
    pool: StarfieldPool,
}

impl ExteriorScene {
    pub(crate) fn new(seed: u64, knees: (f64, f64)) -> Self {
        Self {
            seed,
            knees,
            pool: StarfieldPool::default(),
        }
    }
}

impl SceneRenderer for ExteriorScene {
    fn name(&self) -> &'static str {
        "exterior"
    }

    fn rebuild(&mut self, viewport: Viewport) {
        let mut rng = SeededRng::new(self.seed);
        self.pool = StarfieldPool::generate(viewport, &mut rng);
    }

    fn render(&mut self, painter: &mut Painter, frame: SceneFrame) -> StarglassResult<()> {
        let env = fade_envelope(frame.progress, self.knees.0, self.knees.1);
        if env <= 0.0 || frame.viewport.is_degenerate() {
            return Ok(());
        }

        let w = f64::from(frame.viewport.width);
        let h = f64::from(frame.viewport.height);
        let horizon = h * HORIZON_FRAC;
        let dome_r = frame.viewport.min_dim() * DOME_RADIUS_FRAC;
        let dome_c = Point::new(w * 0.5, horizon);

        // Sky stars, drifting very slowly to sell the long exposure.
        let drift = frame.elapsed_ms * 0.0006;
        for star in &self.pool.stars {
            let pos = Point::new((star.pos.x + drift).rem_euclid(w), star.pos.y);
            if pos.y >= horizon {
                continue;
            }
            let b = star.brightness(frame.elapsed_ms);
            painter.fill_circle(
                pos,
                star.size,
                Rgba8::from_hsla(star.hue, 0.3, 0.85, 0.8 * b * env),
            );
        }
        for mote in &self.pool.dust {
            let pos = mote.position(frame.elapsed_ms, frame.viewport);
            if pos.y >= horizon {
                continue;
            }
            painter.fill_circle(
                pos,
                mote.size,
                Rgba8::from_hsla(220.0, 0.3, 0.7, mote.alpha * env),
            );
        }

        // Ground plane and horizon line.
        let ground_gate = window(0.05, 0.25, frame.progress);
        painter.fill_rect(
            Rect::new(0.0, horizon, w, h),
            Rgba8::opaque(8, 10, 18).with_alpha(ground_gate * env),
        );
        painter.stroke_line(
            Point::new(0.0, horizon),
            Point::new(w, horizon),
            1.0,
            Rgba8::from_hsla(220.0, 0.25, 0.4, 0.5 * ground_gate * env),
        );

        // Dome hemisphere rises into view.
        let dome_gate = ease_out(window(0.12, 0.4, frame.progress));
        if dome_gate > 0.0 {
            let r = dome_r * dome_gate;
            painter.fill_circle(dome_c, r, Rgba8::opaque(16, 20, 34).with_alpha(env));
            painter.stroke_circle(
                dome_c,
                r,
                1.4,
                Rgba8::from_hsla(215.0, 0.3, 0.55, 0.6 * env),
            );
            // Ground re-covers the lower half of the dome circle.
            painter.fill_rect(
                Rect::new(dome_c.x - r - 2.0, horizon, dome_c.x + r + 2.0, h),
                Rgba8::opaque(8, 10, 18).with_alpha(env),
            );

            // Slit opening, glowing faintly from the inside.
            let slit_gate = window(0.45, 0.7, frame.progress);
            if slit_gate > 0.0 {
                let slit_w = r * SLIT_WIDTH_FRAC;
                let slit = Rect::new(
                    dome_c.x - slit_w * 0.5,
                    dome_c.y - r,
                    dome_c.x + slit_w * 0.5,
                    dome_c.y,
                );
                painter.fill_rect(slit, Rgba8::opaque(4, 6, 14).with_alpha(slit_gate * env));
                painter.fill_rect(
                    Rect::new(slit.x0 + slit_w * 0.3, slit.y0, slit.x1 - slit_w * 0.3, slit.y1),
                    Rgba8::from_hsla(45.0, 0.7, 0.6, 0.25 * slit_gate * env),
                );
            }
        }

        Ok(())
    }
}
