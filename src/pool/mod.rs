//! Particle pools: typed collections of generated visual entities.
//!
//! Pools are pure data plus small per-frame derivation helpers. They are
//! built wholesale from a [`SeededRng`](crate::foundation::rng::SeededRng) in
//! a `generate` pass (on start and on every resize) and never edited
//! incrementally. Counts scale with viewport area or min-dimension so larger
//! screens get denser populations.

pub(crate) mod ambient;
pub(crate) mod celestial;
pub(crate) mod galaxy;
pub(crate) mod lens;
pub(crate) mod market;
pub(crate) mod neural;
pub(crate) mod orbit;
pub(crate) mod starfield;
pub(crate) mod stream;

use crate::foundation::core::Viewport;

/// Count scaled by viewport area: one entity per `px_per_entity` pixels,
/// clamped into `[min, max]`. Degenerate viewports get zero.
pub(crate) fn area_scaled_count(
    viewport: Viewport,
    px_per_entity: f64,
    min: usize,
    max: usize,
) -> usize {
    if viewport.is_degenerate() {
        return 0;
    }
    ((viewport.area() / px_per_entity) as usize).clamp(min, max)
}

/// Count scaled by the smaller viewport dimension, clamped into `[min, max]`.
/// Degenerate viewports get zero.
pub(crate) fn min_dim_scaled_count(
    viewport: Viewport,
    px_per_entity: f64,
    min: usize,
    max: usize,
) -> usize {
    if viewport.is_degenerate() {
        return 0;
    }
    ((viewport.min_dim() / px_per_entity) as usize).clamp(min, max)
}

#[cfg(test)]
#[path = "../../tests/unit/pool/density.rs"]
mod tests;
