use crate::foundation::core::Viewport;
use crate::foundation::rng::SeededRng;
use crate::pool::min_dim_scaled_count;

const COLUMNS_PER_PX: f64 = 34.0;
const COLUMNS_MIN: usize = 10;
const COLUMNS_MAX: usize = 52;

/// A falling column of data glyphs in the transform scene.
#[derive(Clone, Copy, Debug)]
pub(crate) struct StreamColumn {
    /// Horizontal position as a fraction of the viewport width.
    pub(crate) x_frac: f64,
    /// Fall speed as viewport heights per second.
    pub(crate) speed: f64,
    pub(crate) glyphs: usize,
    pub(crate) glyph_size: f64,
    pub(crate) phase: f64,
    pub(crate) hue: f64,
}

impl StreamColumn {
    /// Head position as a fraction of the viewport height, wrapped.
    pub(crate) fn head_frac(&self, elapsed_ms: f64) -> f64 {
        (self.phase + elapsed_ms * 0.001 * self.speed).fract()
    }
}

/// Falling data columns.
#[derive(Clone, Debug, Default)]
pub(crate) struct StreamPool {
    pub(crate) columns: Vec<StreamColumn>,
}

impl StreamPool {
    pub(crate) fn generate(viewport: Viewport, rng: &mut SeededRng) -> Self {
        let count = min_dim_scaled_count(viewport, COLUMNS_PER_PX, COLUMNS_MIN, COLUMNS_MAX);
        let mut columns = Vec::with_capacity(count);
        for i in 0..count {
            // Spread columns across the width with a little jitter so the
            // curtain has no obvious grid.
            let lane = (i as f64 + 0.5) / count.max(1) as f64;
            columns.push(StreamColumn {
                x_frac: (lane + rng.in_range(-0.02, 0.02)).clamp(0.0, 1.0),
                speed: rng.in_range(0.12, 0.5),
                glyphs: 4 + rng.pick_index(8),
                glyph_size: rng.in_range(1.6, 3.4),
                phase: rng.next_f64(),
                hue: rng.in_range(140.0, 190.0),
            });
        }
        Self { columns }
    }
}
