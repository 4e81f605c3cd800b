use crate::foundation::core::Viewport;
use crate::foundation::rng::SeededRng;

const RINGS_MIN: usize = 3;
const RINGS_MAX: usize = 6;

/// A concentric optical ring; structural role, distinguished from point
/// particles by radius and stroke width rather than fill.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LensRing {
    /// Radius as a fraction of the current aperture (or barrel) radius.
    pub(crate) radius_frac: f64,
    pub(crate) width: f64,
    pub(crate) alpha: f64,
    pub(crate) hue: f64,
}

/// Concentric lens rings for the eyepiece and optical-interior scenes.
#[derive(Clone, Debug, Default)]
pub(crate) struct LensPool {
    pub(crate) rings: Vec<LensRing>,
}

impl LensPool {
    pub(crate) fn generate(viewport: Viewport, rng: &mut SeededRng) -> Self {
        if viewport.is_degenerate() {
            return Self::default();
        }
        let count = RINGS_MIN + rng.pick_index(RINGS_MAX - RINGS_MIN + 1);
        let mut rings = Vec::with_capacity(count);
        for i in 0..count {
            let base = (i as f64 + 1.0) / (count as f64 + 1.0);
            rings.push(LensRing {
                radius_frac: base + rng.in_range(-0.04, 0.04),
                width: rng.in_range(0.8, 2.2),
                alpha: rng.in_range(0.08, 0.3),
                hue: rng.in_range(195.0, 230.0),
            });
        }
        Self { rings }
    }
}
