use crate::foundation::core::{Point, Viewport};
use crate::foundation::rng::SeededRng;
use crate::pool::min_dim_scaled_count;

/// Number of spiral arms every galaxy carries.
pub(crate) const ARM_COUNT: u8 = 3;
/// Number of fixed hue sectors stars are clustered into.
pub(crate) const SECTOR_COUNT: u8 = 4;

/// Hue band per sector, degrees. Clustering stars into these bands is a
/// required visual invariant of the cosmos scene, not incidental styling.
pub(crate) const SECTOR_HUE_BANDS: [[f64; 2]; SECTOR_COUNT as usize] = [
    [190.0, 215.0], // teal
    [225.0, 250.0], // blue
    [270.0, 295.0], // violet
    [35.0, 55.0],   // gold
];

const STAR_PX_PER_MIN_DIM: f64 = 6.0;
const STAR_MIN: usize = 60;
const STAR_MAX: usize = 240;

// How tightly the arms wind: radians of sweep across the full radius.
const SPIRAL_SWEEP_RAD: f64 = 3.4;
const ARM_JITTER_RAD: f64 = 0.22;

/// A star bound to one spiral arm and one hue sector.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GalaxyStar {
    pub(crate) arm: u8,
    pub(crate) sector: u8,
    /// Distance from the core as a fraction of the galaxy radius.
    pub(crate) radius_frac: f64,
    /// Angular jitter off the arm's spine.
    pub(crate) angle_jitter: f64,
    pub(crate) size: f64,
    pub(crate) hue: f64,
    pub(crate) pulse_phase: f64,
}

impl GalaxyStar {
    /// Screen position given the galaxy center, pixel radius and rotation.
    pub(crate) fn position(&self, center: Point, radius_px: f64, rotation_rad: f64) -> Point {
        let arm_base = f64::from(self.arm) * std::f64::consts::TAU / f64::from(ARM_COUNT);
        let angle =
            arm_base + self.radius_frac * SPIRAL_SWEEP_RAD + self.angle_jitter + rotation_rad;
        let r = self.radius_frac * radius_px;
        Point::new(center.x + angle.cos() * r, center.y + angle.sin() * r * 0.62)
    }
}

/// Spiral-armed, hue-clustered galaxy stars.
#[derive(Clone, Debug, Default)]
pub(crate) struct GalaxyPool {
    pub(crate) stars: Vec<GalaxyStar>,
}

impl GalaxyPool {
    pub(crate) fn generate(viewport: Viewport, rng: &mut SeededRng) -> Self {
        let count = min_dim_scaled_count(viewport, STAR_PX_PER_MIN_DIM, STAR_MIN, STAR_MAX);
        let mut stars = Vec::with_capacity(count);
        for _ in 0..count {
            let arm = rng.pick_index(ARM_COUNT as usize) as u8;
            let sector = rng.pick_index(SECTOR_COUNT as usize) as u8;
            let band = SECTOR_HUE_BANDS[sector as usize];
            // Bias stars toward the core with a square-root falloff.
            let radius_frac = rng.next_f64().sqrt().max(0.04);
            stars.push(GalaxyStar {
                arm,
                sector,
                radius_frac,
                angle_jitter: rng.in_range(-ARM_JITTER_RAD, ARM_JITTER_RAD),
                size: rng.in_range(0.6, 2.4),
                hue: rng.in_range(band[0], band[1]),
                pulse_phase: rng.in_range(0.0, std::f64::consts::TAU),
            });
        }
        Self { stars }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pool/galaxy.rs"]
mod tests;
