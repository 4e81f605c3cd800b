use crate::foundation::core::{Rgba8, Viewport};
use crate::foundation::error::StarglassResult;
use crate::foundation::math::{ease_in_out, fade_envelope, window};
use crate::foundation::rng::SeededRng;
use crate::pool::lens::LensPool;
use crate::pool::starfield::StarfieldPool;
use crate::render::painter::Painter;
use crate::scene::{SceneFrame, SceneRenderer};

/// Aperture radius at progress 0, as a fraction of min(width, height).
const APERTURE_MIN_FRAC: f64 = 0.08;
/// Aperture radius at progress 1, as a fraction of the screen diagonal.
const APERTURE_MAX_FRAC: f64 = 0.62;

/// The eyepiece approach: a circular aperture grows from a pinhole toward
/// the full view while lens rings and a starlit core swim inside it.
/// Everything outside the aperture is solid darkness: a true clip, not a
/// dim.
pub(crate) struct EyepieceScene {
    seed: u64,
    knees: (f64, f64),
    rings: LensPool,
    stars: StarfieldPool,
}

impl EyepieceScene {
    pub(crate) fn new(seed: u64, knees: (f64, f64)) -> Self {
        Self {
            seed,
            knees,
            rings: LensPool::default(),
            stars: StarfieldPool::default(),
        }
    }

    /// Current aperture radius in pixels.
    fn aperture_radius(progress: f64, viewport: Viewport) -> f64 {
        let lo = viewport.min_dim() * APERTURE_MIN_FRAC;
        let hi = viewport.diagonal() * APERTURE_MAX_FRAC;
        lo + (hi - lo) * ease_in_out(progress)
    }
}

impl SceneRenderer for EyepieceScene {
    fn name(&self) -> &'static str {
        "eyepiece"
    }

    fn rebuild(&mut self, viewport: Viewport) {
        let mut rng = SeededRng::new(self.seed);
        self.rings = LensPool::generate(viewport, &mut rng);
        self.stars = StarfieldPool::generate(viewport, &mut rng);
    }

    fn render(&mut self, painter: &mut Painter, frame: SceneFrame) -> StarglassResult<()> {
        let env = fade_envelope(frame.progress, self.knees.0, self.knees.1);
        if env <= 0.0 || frame.viewport.is_degenerate() {
            return Ok(());
        }

        let center = frame.viewport.center();
        let radius = Self::aperture_radius(frame.progress, frame.viewport);

        // Starlit field inside the aperture.
        for star in &self.stars.stars {
            if star.pos.distance(center) > radius {
                continue;
            }
            let b = star.brightness(frame.elapsed_ms);
            painter.fill_circle(
                star.pos,
                star.size,
                Rgba8::from_hsla(star.hue, 0.35, 0.85, 0.85 * b * env),
            );
        }

        // Central glow breathing gently.
        let glow_gate = window(0.1, 0.4, frame.progress);
        if glow_gate > 0.0 {
            let breathe = 1.0 + (frame.elapsed_ms * 0.0012).sin() * 0.06;
            for (mult, alpha) in [(1.0, 0.35), (0.55, 0.3), (0.22, 0.5)] {
                painter.fill_circle(
                    center,
                    radius * 0.5 * mult * breathe,
                    Rgba8::from_hsla(48.0, 0.75, 0.7, alpha * glow_gate * env),
                );
            }
        }

        // Lens rings scaled to the growing aperture.
        for ring in &self.rings.rings {
            painter.stroke_circle(
                center,
                radius * ring.radius_frac,
                ring.width,
                Rgba8::from_hsla(ring.hue, 0.5, 0.65, ring.alpha * env),
            );
        }

        // The iris: darkness clips everything outside the aperture.
        painter.fill_outside_circle(center, radius, Rgba8::opaque(1, 2, 6).with_alpha(env));
        painter.stroke_circle(
            center,
            radius,
            2.0,
            Rgba8::from_hsla(210.0, 0.4, 0.6, 0.5 * env),
        );

        Ok(())
    }
}
