use crate::foundation::core::Viewport;
use crate::foundation::rng::SeededRng;
use crate::pool::min_dim_scaled_count;

const CANDLES_PER_COLUMN_PX: f64 = 48.0;
const CANDLES_MIN: usize = 6;
const CANDLES_MAX: usize = 18;

const BOOK_BARS_PER_COLUMN_PX: f64 = 60.0;
const BOOK_BARS_MIN: usize = 5;
const BOOK_BARS_MAX: usize = 14;

/// Normalized price band candle values are clamped into after jitter.
pub(crate) const PRICE_BAND: [f64; 2] = [0.1, 0.9];

/// One candlestick with normalized price values in [`PRICE_BAND`].
///
/// Invariant (must survive jitter): `high >= max(open, close)` and
/// `low <= min(open, close)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Candle {
    pub(crate) open: f64,
    pub(crate) close: f64,
    pub(crate) high: f64,
    pub(crate) low: f64,
    pub(crate) jitter_phase: f64,
    pub(crate) jitter_speed: f64,
}

/// Candle values after per-frame jitter, invariant re-established.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CandleSample {
    pub(crate) open: f64,
    pub(crate) close: f64,
    pub(crate) high: f64,
    pub(crate) low: f64,
}

impl Candle {
    /// Sample jittered values at `elapsed_ms`.
    ///
    /// Jitter wobbles close and both wicks, then re-clamps: body into
    /// [`PRICE_BAND`], wicks back outside the body.
    pub(crate) fn sample(&self, elapsed_ms: f64) -> CandleSample {
        let t = elapsed_ms * 0.001 * self.jitter_speed + self.jitter_phase;
        let wobble = t.sin() * 0.03;
        let open = self.open.clamp(PRICE_BAND[0], PRICE_BAND[1]);
        let close = (self.close + wobble).clamp(PRICE_BAND[0], PRICE_BAND[1]);
        let body_hi = open.max(close);
        let body_lo = open.min(close);
        let high = (self.high + (t * 1.7).cos() * 0.02).max(body_hi);
        let low = (self.low - (t * 1.3).sin().abs() * 0.02).min(body_lo);
        CandleSample {
            open,
            close,
            high,
            low,
        }
    }
}

/// One depth bar of the pulsing order book.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BookBar {
    /// Resting depth as a fraction of the column width.
    pub(crate) depth: f64,
    pub(crate) pulse_phase: f64,
    pub(crate) pulse_speed: f64,
    /// `true` for the bid side, `false` for the ask side.
    pub(crate) bid: bool,
}

impl BookBar {
    /// Pulsed depth fraction at `elapsed_ms`, kept in `[0.05, 1.0]`.
    pub(crate) fn depth_at(&self, elapsed_ms: f64) -> f64 {
        let s = (elapsed_ms * 0.001 * self.pulse_speed + self.pulse_phase).sin();
        (self.depth * (0.8 + 0.2 * s)).clamp(0.05, 1.0)
    }
}

/// Candlestick columns and order-book bars for the cosmos scene.
#[derive(Clone, Debug, Default)]
pub(crate) struct MarketPool {
    /// Two mirrored columns share one candle list; the scene mirrors x.
    pub(crate) candles: Vec<Candle>,
    pub(crate) bars: Vec<BookBar>,
}

impl MarketPool {
    pub(crate) fn generate(viewport: Viewport, rng: &mut SeededRng) -> Self {
        let candle_count =
            min_dim_scaled_count(viewport, CANDLES_PER_COLUMN_PX, CANDLES_MIN, CANDLES_MAX);
        let mut candles = Vec::with_capacity(candle_count);
        let mut price = rng.in_range(0.35, 0.65);
        for _ in 0..candle_count {
            let open = price;
            let close = (open + rng.in_range(-0.12, 0.12)).clamp(PRICE_BAND[0], PRICE_BAND[1]);
            let body_hi = open.max(close);
            let body_lo = open.min(close);
            let high = (body_hi + rng.in_range(0.0, 0.08)).min(PRICE_BAND[1] + 0.05);
            let low = (body_lo - rng.in_range(0.0, 0.08)).max(PRICE_BAND[0] - 0.05);
            candles.push(Candle {
                open,
                close,
                high,
                low,
                jitter_phase: rng.in_range(0.0, std::f64::consts::TAU),
                jitter_speed: rng.in_range(0.5, 1.6),
            });
            price = close;
        }

        let bar_count =
            min_dim_scaled_count(viewport, BOOK_BARS_PER_COLUMN_PX, BOOK_BARS_MIN, BOOK_BARS_MAX);
        let mut bars = Vec::with_capacity(bar_count * 2);
        for side in [true, false] {
            for i in 0..bar_count {
                // Depth decays away from the touch.
                let falloff = 1.0 - (i as f64 / bar_count.max(1) as f64) * 0.6;
                bars.push(BookBar {
                    depth: rng.in_range(0.25, 1.0) * falloff,
                    pulse_phase: rng.in_range(0.0, std::f64::consts::TAU),
                    pulse_speed: rng.in_range(0.8, 2.4),
                    bid: side,
                });
            }
        }

        Self { candles, bars }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pool/market.rs"]
mod tests;
