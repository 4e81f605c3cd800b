use crate::foundation::core::{Point, Viewport};
use crate::foundation::rng::SeededRng;
use crate::pool::min_dim_scaled_count;

const COMETS_MIN: usize = 2;
const COMETS_MAX: usize = 5;
const BINARIES_MIN: usize = 2;
const BINARIES_MAX: usize = 4;
const SYSTEMS_MIN: usize = 2;
const SYSTEMS_MAX: usize = 4;
const SPARKS_PER_MIN_DIM_PX: f64 = 40.0;
const SPARKS_MIN: usize = 8;
const SPARKS_MAX: usize = 32;
const HALO_RINGS: usize = 3;

/// Samples taken stepping backward along a comet's orbit for its tail.
pub(crate) const COMET_TAIL_SAMPLES: usize = 14;

/// A comet on an elliptical orbit; the tail is drawn by stepping backward
/// along the same path.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Comet {
    /// Semi-major axis as a fraction of the min viewport dimension.
    pub(crate) radius_frac: f64,
    /// Vertical squash of the orbit.
    pub(crate) squash: f64,
    /// Radians per second.
    pub(crate) angular_speed: f64,
    pub(crate) phase: f64,
    /// Angular spacing between consecutive tail samples.
    pub(crate) tail_step: f64,
    pub(crate) size: f64,
    pub(crate) hue: f64,
}

impl Comet {
    /// Head position at `elapsed_ms`.
    pub(crate) fn position(&self, center: Point, scale: f64, elapsed_ms: f64) -> Point {
        self.at_angle(center, scale, self.angle(elapsed_ms))
    }

    /// Orbit angle at `elapsed_ms`.
    pub(crate) fn angle(&self, elapsed_ms: f64) -> f64 {
        self.phase + elapsed_ms * 0.001 * self.angular_speed
    }

    /// Position on the orbit path at `angle`.
    pub(crate) fn at_angle(&self, center: Point, scale: f64, angle: f64) -> Point {
        let r = self.radius_frac * scale;
        Point::new(
            center.x + angle.cos() * r,
            center.y + angle.sin() * r * self.squash,
        )
    }
}

/// A pair of stars orbiting their shared barycenter, which itself orbits
/// the scene center.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BinaryPair {
    pub(crate) center_radius_frac: f64,
    pub(crate) center_speed: f64,
    pub(crate) center_phase: f64,
    /// Half the separation between the two stars, viewport fraction.
    pub(crate) separation_frac: f64,
    pub(crate) spin_speed: f64,
    pub(crate) spin_phase: f64,
    pub(crate) size: f64,
    pub(crate) hue: f64,
}

impl BinaryPair {
    /// Positions of both stars at `elapsed_ms`.
    pub(crate) fn positions(&self, center: Point, scale: f64, elapsed_ms: f64) -> (Point, Point) {
        let t = elapsed_ms * 0.001;
        let ca = self.center_phase + t * self.center_speed;
        let bary = Point::new(
            center.x + ca.cos() * self.center_radius_frac * scale,
            center.y + ca.sin() * self.center_radius_frac * scale * 0.7,
        );
        let sa = self.spin_phase + t * self.spin_speed;
        let sep = self.separation_frac * scale;
        let offset = Point::new(sa.cos() * sep, sa.sin() * sep);
        (
            Point::new(bary.x + offset.x, bary.y + offset.y),
            Point::new(bary.x - offset.x, bary.y - offset.y),
        )
    }
}

/// A structural halo ring around the cosmos core.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HaloRing {
    pub(crate) radius_frac: f64,
    pub(crate) width: f64,
    pub(crate) pulse_phase: f64,
    pub(crate) pulse_speed: f64,
}

impl HaloRing {
    /// Ring alpha in `[0.05, 0.35]` at `elapsed_ms`.
    pub(crate) fn alpha(&self, elapsed_ms: f64) -> f64 {
        let s = (elapsed_ms * 0.001 * self.pulse_speed + self.pulse_phase).sin();
        0.2 + 0.15 * s
    }
}

/// A short-lived radial spark; foreground flow-line role.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Spark {
    pub(crate) direction: f64,
    /// Travel distance fraction per cycle.
    pub(crate) reach_frac: f64,
    pub(crate) length: f64,
    /// Cycle period in seconds.
    pub(crate) period: f64,
    pub(crate) phase: f64,
    pub(crate) hue: f64,
}

impl Spark {
    /// Cycle progress in `[0, 1)` at `elapsed_ms`.
    pub(crate) fn cycle(&self, elapsed_ms: f64) -> f64 {
        (elapsed_ms * 0.001 / self.period + self.phase).fract()
    }
}

/// A mini planetary system: a star orbiting the scene with its own planets.
#[derive(Clone, Debug)]
pub(crate) struct MiniSystem {
    pub(crate) center_radius_frac: f64,
    pub(crate) center_speed: f64,
    pub(crate) center_phase: f64,
    pub(crate) star_size: f64,
    pub(crate) hue: f64,
    /// Planet orbital radii (viewport fraction) and speeds.
    pub(crate) planets: Vec<(f64, f64, f64)>,
}

impl MiniSystem {
    /// System barycenter at `elapsed_ms`.
    pub(crate) fn barycenter(&self, center: Point, scale: f64, elapsed_ms: f64) -> Point {
        let a = self.center_phase + elapsed_ms * 0.001 * self.center_speed;
        Point::new(
            center.x + a.cos() * self.center_radius_frac * scale,
            center.y + a.sin() * self.center_radius_frac * scale * 0.75,
        )
    }
}

/// Comets, binary pairs, halo rings, sparks and mini systems for the cosmos.
#[derive(Clone, Debug, Default)]
pub(crate) struct CelestialPool {
    pub(crate) comets: Vec<Comet>,
    pub(crate) binaries: Vec<BinaryPair>,
    pub(crate) halos: Vec<HaloRing>,
    pub(crate) sparks: Vec<Spark>,
    pub(crate) systems: Vec<MiniSystem>,
}

impl CelestialPool {
    pub(crate) fn generate(viewport: Viewport, rng: &mut SeededRng) -> Self {
        if viewport.is_degenerate() {
            return Self::default();
        }

        let comet_count = min_dim_scaled_count(viewport, 260.0, COMETS_MIN, COMETS_MAX);
        let mut comets = Vec::with_capacity(comet_count);
        for _ in 0..comet_count {
            comets.push(Comet {
                radius_frac: rng.in_range(0.28, 0.46),
                squash: rng.in_range(0.5, 0.8),
                angular_speed: rng.in_range(0.3, 0.7) * if rng.chance(0.5) { 1.0 } else { -1.0 },
                phase: rng.in_range(0.0, std::f64::consts::TAU),
                tail_step: rng.in_range(0.035, 0.06),
                size: rng.in_range(1.8, 3.2),
                hue: rng.in_range(18.0, 45.0),
            });
        }

        let binary_count = min_dim_scaled_count(viewport, 320.0, BINARIES_MIN, BINARIES_MAX);
        let mut binaries = Vec::with_capacity(binary_count);
        for _ in 0..binary_count {
            binaries.push(BinaryPair {
                center_radius_frac: rng.in_range(0.18, 0.4),
                center_speed: rng.in_range(0.1, 0.3),
                center_phase: rng.in_range(0.0, std::f64::consts::TAU),
                separation_frac: rng.in_range(0.012, 0.03),
                spin_speed: rng.in_range(1.2, 2.6),
                spin_phase: rng.in_range(0.0, std::f64::consts::TAU),
                size: rng.in_range(1.2, 2.2),
                hue: rng.in_range(200.0, 260.0),
            });
        }

        let mut halos = Vec::with_capacity(HALO_RINGS);
        for i in 0..HALO_RINGS {
            halos.push(HaloRing {
                radius_frac: 0.1 + i as f64 * 0.07 + rng.in_range(0.0, 0.02),
                width: rng.in_range(1.0, 2.4),
                pulse_phase: rng.in_range(0.0, std::f64::consts::TAU),
                pulse_speed: rng.in_range(0.3, 0.9),
            });
        }

        let spark_count = min_dim_scaled_count(viewport, SPARKS_PER_MIN_DIM_PX, SPARKS_MIN, SPARKS_MAX);
        let mut sparks = Vec::with_capacity(spark_count);
        for _ in 0..spark_count {
            sparks.push(Spark {
                direction: rng.in_range(0.0, std::f64::consts::TAU),
                reach_frac: rng.in_range(0.2, 0.45),
                length: rng.in_range(8.0, 26.0),
                period: rng.in_range(1.4, 3.6),
                phase: rng.next_f64(),
                hue: rng.in_range(180.0, 220.0),
            });
        }

        let system_count = min_dim_scaled_count(viewport, 340.0, SYSTEMS_MIN, SYSTEMS_MAX);
        let mut systems = Vec::with_capacity(system_count);
        for _ in 0..system_count {
            let planet_count = 2 + rng.pick_index(3);
            let mut planets = Vec::with_capacity(planet_count);
            for p in 0..planet_count {
                planets.push((
                    0.012 + p as f64 * 0.01 + rng.in_range(0.0, 0.004),
                    rng.in_range(0.8, 2.4) * if rng.chance(0.5) { 1.0 } else { -1.0 },
                    rng.in_range(0.0, std::f64::consts::TAU),
                ));
            }
            systems.push(MiniSystem {
                center_radius_frac: rng.in_range(0.32, 0.48),
                center_speed: rng.in_range(0.06, 0.16),
                center_phase: rng.in_range(0.0, std::f64::consts::TAU),
                star_size: rng.in_range(1.6, 2.8),
                hue: rng.in_range(35.0, 60.0),
                planets,
            });
        }

        Self {
            comets,
            binaries,
            halos,
            sparks,
            systems,
        }
    }
}
