use crate::foundation::core::{Point, Viewport};
use crate::foundation::rng::SeededRng;
use crate::pool::min_dim_scaled_count;
use smallvec::SmallVec;

const NODES_PER_MIN_DIM_PX: f64 = 90.0;
const NODES_MIN: usize = 4;
const NODES_MAX: usize = 12;

/// Maximum retained trail points per orbit node.
pub(crate) const TRAIL_CAP: usize = 24;
/// Life removed from every trail point per draw call.
pub(crate) const TRAIL_DECAY: f64 = 0.055;

/// One point of a fading trail.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TrailPoint {
    pub(crate) pos: Point,
    pub(crate) life: f64,
}

/// Bounded ordered sequence of recent positions with decaying life.
///
/// Oldest points drop once the cap is exceeded. Life is decremented every
/// draw call; dead points are skipped when painting and pruned lazily on the
/// next push, not removed the moment they expire.
#[derive(Clone, Debug, Default)]
pub(crate) struct Trail {
    points: SmallVec<[TrailPoint; TRAIL_CAP]>,
}

impl Trail {
    /// Append the current position, dropping dead and over-cap points first.
    pub(crate) fn push(&mut self, pos: Point) {
        while self.points.first().is_some_and(|p| p.life <= 0.0) {
            self.points.remove(0);
        }
        while self.points.len() >= TRAIL_CAP {
            self.points.remove(0);
        }
        self.points.push(TrailPoint { pos, life: 1.0 });
    }

    /// Age every point by one draw call.
    pub(crate) fn decay(&mut self) {
        for p in &mut self.points {
            p.life -= TRAIL_DECAY;
        }
    }

    /// Points still alive, oldest first.
    pub(crate) fn live(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter().filter(|p| p.life > 0.0)
    }

    /// Total retained points, dead ones included.
    pub(crate) fn retained(&self) -> usize {
        self.points.len()
    }
}

/// A node circling the viewport center, leaving a trail.
#[derive(Clone, Debug)]
pub(crate) struct OrbitNode {
    /// Orbit radius as a fraction of the min viewport dimension.
    pub(crate) radius_frac: f64,
    /// Vertical squash of the orbit ellipse.
    pub(crate) eccentricity: f64,
    /// Angular speed in radians per second.
    pub(crate) angular_speed: f64,
    pub(crate) phase: f64,
    pub(crate) size: f64,
    pub(crate) hue: f64,
    pub(crate) trail: Trail,
}

impl OrbitNode {
    /// Orbit position at `elapsed_ms` around `center` with `scale` pixels
    /// per unit radius.
    pub(crate) fn position(&self, center: Point, scale: f64, elapsed_ms: f64) -> Point {
        let a = self.phase + elapsed_ms * 0.001 * self.angular_speed;
        let r = self.radius_frac * scale;
        Point::new(
            center.x + a.cos() * r,
            center.y + a.sin() * r * self.eccentricity,
        )
    }
}

/// Orbit nodes for the lines scene.
#[derive(Clone, Debug, Default)]
pub(crate) struct OrbitPool {
    pub(crate) nodes: Vec<OrbitNode>,
}

impl OrbitPool {
    pub(crate) fn generate(viewport: Viewport, rng: &mut SeededRng) -> Self {
        let count = min_dim_scaled_count(viewport, NODES_PER_MIN_DIM_PX, NODES_MIN, NODES_MAX);
        let mut nodes = Vec::with_capacity(count);
        for i in 0..count {
            // Stagger radii so rings do not collapse onto each other.
            let ring = (i as f64 + 1.0) / (count.max(1) as f64 + 1.0);
            nodes.push(OrbitNode {
                radius_frac: 0.12 + ring * 0.30 + rng.in_range(-0.02, 0.02),
                eccentricity: rng.in_range(0.45, 0.85),
                angular_speed: rng.in_range(0.25, 0.9) * if rng.chance(0.5) { 1.0 } else { -1.0 },
                phase: rng.in_range(0.0, std::f64::consts::TAU),
                size: rng.in_range(1.6, 3.4),
                hue: rng.in_range(185.0, 255.0),
                trail: Trail::default(),
            });
        }
        Self { nodes }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pool/orbit.rs"]
mod tests;
