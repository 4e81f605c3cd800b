use super::*;
use crate::foundation::core::Viewport;
use crate::foundation::rng::SeededRng;

#[test]
fn candle_invariant_holds_at_generation() {
    let pool = MarketPool::generate(Viewport::new(1280, 720), &mut SeededRng::new(31));
    assert!(!pool.candles.is_empty());
    for c in &pool.candles {
        assert!(c.high >= c.open.max(c.close));
        assert!(c.low <= c.open.min(c.close));
    }
}

#[test]
fn candle_invariant_survives_jitter_at_every_sampled_frame() {
    let pool = MarketPool::generate(Viewport::new(1280, 720), &mut SeededRng::new(31));
    for ms in (0..120_000).step_by(61) {
        for c in &pool.candles {
            let s = c.sample(ms as f64);
            assert!(
                s.high >= s.open.max(s.close),
                "high wick dipped into the body at {ms}ms"
            );
            assert!(
                s.low <= s.open.min(s.close),
                "low wick rose into the body at {ms}ms"
            );
            assert!(s.open >= PRICE_BAND[0] && s.open <= PRICE_BAND[1]);
            assert!(s.close >= PRICE_BAND[0] && s.close <= PRICE_BAND[1]);
        }
    }
}

#[test]
fn book_depth_pulses_inside_bounds() {
    let pool = MarketPool::generate(Viewport::new(800, 600), &mut SeededRng::new(8));
    assert!(pool.bars.iter().any(|b| b.bid));
    assert!(pool.bars.iter().any(|b| !b.bid));
    for bar in &pool.bars {
        for ms in (0..30_000).step_by(97) {
            let d = bar.depth_at(ms as f64);
            assert!((0.05..=1.0).contains(&d));
        }
    }
}

#[test]
fn candle_walk_is_continuous() {
    // Each candle opens where the previous one closed.
    let pool = MarketPool::generate(Viewport::new(1280, 720), &mut SeededRng::new(4));
    for pair in pool.candles.windows(2) {
        assert_eq!(pair[1].open, pair[0].close);
    }
}
