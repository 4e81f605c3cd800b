use crate::foundation::core::{Point, Rect, Rgba8, Viewport};
use crate::foundation::error::StarglassResult;
use crate::foundation::math::{fade_envelope, window};
use crate::foundation::rng::SeededRng;
use crate::pool::starfield::StarfieldPool;
use crate::render::painter::Painter;
use crate::scene::{SceneFrame, SceneRenderer};

// Telescope tube proportions along its axis, front (sky end) to back.
// dew shield | main tube | focuser | eyepiece
const DEW_SHIELD_FRAC: f64 = 0.22;
const MAIN_TUBE_FRAC: f64 = 0.58;
const FOCUSER_FRAC: f64 = 0.12;
const EYEPIECE_FRAC: f64 = 0.08;

const TUBE_LENGTH_FRAC: f64 = 0.52;
const TUBE_WIDTH_FRAC: f64 = 0.075;

/// Inside the dome: ribbed ceiling, the open slit with stars behind it,
/// and the telescope on its pier aimed at the slit. A static tableau with
/// mild pointing drift.
pub(crate) struct InteriorScene {
    seed: u64,
    knees: (f64, f64),
    pool: StarfieldPool,
}

impl InteriorScene {
    pub(crate) fn new(seed: u64, knees: (f64, f64)) -> Self {
        Self {
            seed,
            knees,
            pool: StarfieldPool::default(),
        }
    }
}

impl SceneRenderer for InteriorScene {
    fn name(&self) -> &'static str {
        "interior"
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
        let min_dim = frame.viewport.min_dim();
        let dome_c = Point::new(w * 0.5, h * 0.92);
        let dome_r = (w.hypot(h)) * 0.52;

        // Interior shell.
        painter.fill_rect(
            Rect::new(0.0, 0.0, w, h),
            Rgba8::opaque(10, 12, 22).with_alpha(window(0.0, 0.15, frame.progress) * env),
        );

        // Slit: a vertical opening with the night sky behind it.
        let slit_gate = window(0.1, 0.3, frame.progress);
        let slit_w = w * 0.16;
        let slit = Rect::new(dome_c.x - slit_w * 0.5, 0.0, dome_c.x + slit_w * 0.5, h * 0.55);
        if slit_gate > 0.0 {
            painter.fill_rect(slit, Rgba8::opaque(4, 7, 16).with_alpha(slit_gate * env));
            for star in &self.pool.stars {
                let pos = Point::new(
                    slit.x0 + (star.pos.x / w) * slit_w,
                    (star.pos.y / h) * slit.height(),
                );
                let b = star.brightness(frame.elapsed_ms);
                painter.fill_circle(
                    pos,
                    star.size * 0.8,
                    Rgba8::from_hsla(star.hue, 0.3, 0.85, 0.7 * b * slit_gate * env),
                );
            }
            // Slit edges.
            for x in [slit.x0, slit.x1] {
                painter.stroke_line(
                    Point::new(x, slit.y0),
                    Point::new(x, slit.y1),
                    2.0,
                    Rgba8::from_hsla(215.0, 0.25, 0.45, 0.7 * slit_gate * env),
                );
            }
        }

        // Dome ribs converging on the slit.
        let rib_gate = window(0.15, 0.35, frame.progress);
        if rib_gate > 0.0 {
            for i in 0..7 {
                let t = (i as f64 + 1.0) / 8.0;
                let x = t * w;
                let top = Point::new(x, (x - dome_c.x).abs() / dome_r * h * 0.35);
                painter.stroke_line(
                    top,
                    Point::new(x, h * 0.55),
                    1.0,
                    Rgba8::from_hsla(220.0, 0.2, 0.4, 0.25 * rib_gate * env),
                );
            }
        }

        // Pier and telescope, aimed at the slit with a slow pointing drift.
        let scope_gate = window(0.3, 0.55, frame.progress);
        if scope_gate > 0.0 {
            let pivot = Point::new(w * 0.5, h * 0.78);
            painter.fill_rect(
                Rect::new(pivot.x - min_dim * 0.02, pivot.y, pivot.x + min_dim * 0.02, h),
                Rgba8::opaque(18, 22, 36).with_alpha(scope_gate * env),
            );

            let aim = -std::f64::consts::FRAC_PI_2 + 0.18
                + (frame.elapsed_ms * 0.0002).sin() * 0.015;
            let dir = Point::new(aim.cos(), aim.sin());
            let len = min_dim * TUBE_LENGTH_FRAC;
            let width = min_dim * TUBE_WIDTH_FRAC;
            let at = |t: f64| Point::new(pivot.x + dir.x * len * t, pivot.y + dir.y * len * t);

            // Back-to-front: eyepiece, focuser, main tube, dew shield.
            let mut t0 = 0.0;
            let sections = [
                (EYEPIECE_FRAC, width * 0.35, Rgba8::opaque(48, 54, 74)),
                (FOCUSER_FRAC, width * 0.55, Rgba8::opaque(36, 42, 60)),
                (MAIN_TUBE_FRAC, width, Rgba8::opaque(26, 32, 50)),
                (DEW_SHIELD_FRAC, width * 1.18, Rgba8::opaque(20, 26, 44)),
            ];
            for (frac, sect_width, color) in sections {
                let t1 = t0 + frac;
                painter.stroke_line(at(t0), at(t1), sect_width, color.with_alpha(scope_gate * env));
                t0 = t1;
            }
            // Objective: a faint glass disc at the front.
            painter.fill_circle(
                at(1.0),
                width * 0.55,
                Rgba8::from_hsla(205.0, 0.5, 0.6, 0.4 * scope_gate * env),
            );
            painter.stroke_circle(
                at(1.0),
                width * 0.55,
                1.2,
                Rgba8::from_hsla(205.0, 0.4, 0.75, 0.6 * scope_gate * env),
            );
        }

        Ok(())
    }
}
