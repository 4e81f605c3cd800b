use crate::foundation::core::{Point, Viewport};
use crate::foundation::rng::SeededRng;
use crate::pool::area_scaled_count;

const STAR_PX_PER_ENTITY: f64 = 9_000.0;
const STAR_MIN: usize = 40;
const STAR_MAX: usize = 420;
const DUST_PX_PER_ENTITY: f64 = 26_000.0;
const DUST_MIN: usize = 12;
const DUST_MAX: usize = 140;

// Background role: small, dim, slow twinkle. Hue band is a cold white-blue.
const STAR_HUE_BAND: [f64; 2] = [200.0, 250.0];
const STAR_SIZE_BAND: [f64; 2] = [0.4, 1.8];
const DUST_SIZE_BAND: [f64; 2] = [0.8, 2.6];

/// A background star with generation-time parameters fixed from the RNG
/// stream and brightness derived per frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Star {
    pub(crate) pos: Point,
    pub(crate) size: f64,
    pub(crate) hue: f64,
    pub(crate) twinkle_phase: f64,
    pub(crate) twinkle_speed: f64,
}

impl Star {
    /// Twinkle brightness in `[0.25, 1.0]` at `elapsed_ms`.
    pub(crate) fn brightness(&self, elapsed_ms: f64) -> f64 {
        let s = (elapsed_ms * 0.001 * self.twinkle_speed + self.twinkle_phase).sin();
        0.625 + 0.375 * s
    }
}

/// A drifting dust mote.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Dust {
    pub(crate) pos: Point,
    pub(crate) size: f64,
    pub(crate) drift: Point,
    pub(crate) alpha: f64,
}

impl Dust {
    /// Position at `elapsed_ms`, wrapped back into the viewport.
    pub(crate) fn position(&self, elapsed_ms: f64, viewport: Viewport) -> Point {
        if viewport.is_degenerate() {
            return self.pos;
        }
        let t = elapsed_ms * 0.001;
        let w = f64::from(viewport.width);
        let h = f64::from(viewport.height);
        Point::new(
            (self.pos.x + self.drift.x * t).rem_euclid(w),
            (self.pos.y + self.drift.y * t).rem_euclid(h),
        )
    }
}

/// Twinkling background stars plus slow dust.
#[derive(Clone, Debug, Default)]
pub(crate) struct StarfieldPool {
    pub(crate) stars: Vec<Star>,
    pub(crate) dust: Vec<Dust>,
}

impl StarfieldPool {
    pub(crate) fn generate(viewport: Viewport, rng: &mut SeededRng) -> Self {
        let w = f64::from(viewport.width);
        let h = f64::from(viewport.height);

        let star_count = area_scaled_count(viewport, STAR_PX_PER_ENTITY, STAR_MIN, STAR_MAX);
        let mut stars = Vec::with_capacity(star_count);
        for _ in 0..star_count {
            stars.push(Star {
                pos: Point::new(rng.in_range(0.0, w), rng.in_range(0.0, h)),
                size: rng.in_range(STAR_SIZE_BAND[0], STAR_SIZE_BAND[1]),
                hue: rng.in_range(STAR_HUE_BAND[0], STAR_HUE_BAND[1]),
                twinkle_phase: rng.in_range(0.0, std::f64::consts::TAU),
                twinkle_speed: rng.in_range(0.4, 2.2),
            });
        }

        let dust_count = area_scaled_count(viewport, DUST_PX_PER_ENTITY, DUST_MIN, DUST_MAX);
        let mut dust = Vec::with_capacity(dust_count);
        for _ in 0..dust_count {
            dust.push(Dust {
                pos: Point::new(rng.in_range(0.0, w), rng.in_range(0.0, h)),
                size: rng.in_range(DUST_SIZE_BAND[0], DUST_SIZE_BAND[1]),
                drift: Point::new(rng.in_range(-6.0, 6.0), rng.in_range(-3.0, 3.0)),
                alpha: rng.in_range(0.04, 0.16),
            });
        }

        Self { stars, dust }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pool/starfield.rs"]
mod tests;
