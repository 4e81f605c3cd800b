use crate::foundation::core::{Point, Viewport};
use crate::foundation::rng::SeededRng;
use crate::pool::area_scaled_count;

const DOTS_PX_PER_ENTITY: f64 = 18_000.0;
const DOTS_MIN: usize = 20;
const DOTS_MAX: usize = 160;

/// A floating background dot for the main site.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AmbientDot {
    pub(crate) pos: Point,
    pub(crate) size: f64,
    pub(crate) hue: f64,
    pub(crate) alpha: f64,
    /// Upward drift speed in px/s.
    pub(crate) rise: f64,
    /// Horizontal wobble amplitude and phase.
    pub(crate) wobble_amp: f64,
    pub(crate) wobble_phase: f64,
    pub(crate) wobble_speed: f64,
}

impl AmbientDot {
    /// Position at `elapsed_ms`, wrapped vertically so dots float forever.
    pub(crate) fn position(&self, elapsed_ms: f64, viewport: Viewport) -> Point {
        if viewport.is_degenerate() {
            return self.pos;
        }
        let t = elapsed_ms * 0.001;
        let h = f64::from(viewport.height);
        let w = f64::from(viewport.width);
        let x = self.pos.x + (t * self.wobble_speed + self.wobble_phase).sin() * self.wobble_amp;
        let y = (self.pos.y - self.rise * t).rem_euclid(h);
        Point::new(x.rem_euclid(w), y)
    }
}

/// Ambient floating dots; runs for the page's lifetime.
#[derive(Clone, Debug, Default)]
pub(crate) struct AmbientPool {
    pub(crate) dots: Vec<AmbientDot>,
}

impl AmbientPool {
    pub(crate) fn generate(viewport: Viewport, rng: &mut SeededRng) -> Self {
        let count = area_scaled_count(viewport, DOTS_PX_PER_ENTITY, DOTS_MIN, DOTS_MAX);
        let w = f64::from(viewport.width);
        let h = f64::from(viewport.height);
        let mut dots = Vec::with_capacity(count);
        for _ in 0..count {
            dots.push(AmbientDot {
                pos: Point::new(rng.in_range(0.0, w), rng.in_range(0.0, h)),
                size: rng.in_range(1.0, 3.4),
                hue: rng.in_range(190.0, 260.0),
                alpha: rng.in_range(0.06, 0.28),
                rise: rng.in_range(4.0, 14.0),
                wobble_amp: rng.in_range(4.0, 18.0),
                wobble_phase: rng.in_range(0.0, std::f64::consts::TAU),
                wobble_speed: rng.in_range(0.2, 0.8),
            });
        }
        Self { dots }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pool/ambient.rs"]
mod tests;
