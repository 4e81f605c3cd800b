use super::*;
use crate::foundation::core::Viewport;
use crate::foundation::rng::SeededRng;

#[test]
fn generation_is_deterministic_for_a_seed() {
    let vp = Viewport::new(800, 600);
    let a = StarfieldPool::generate(vp, &mut SeededRng::new(11));
    let b = StarfieldPool::generate(vp, &mut SeededRng::new(11));
    assert_eq!(a.stars.len(), b.stars.len());
    for (x, y) in a.stars.iter().zip(b.stars.iter()) {
        assert_eq!(x.pos, y.pos);
        assert_eq!(x.hue, y.hue);
    }
}

#[test]
fn star_count_grows_with_viewport() {
    let small = StarfieldPool::generate(Viewport::new(640, 480), &mut SeededRng::new(1));
    let large = StarfieldPool::generate(Viewport::new(1920, 1080), &mut SeededRng::new(1));
    assert!(large.stars.len() > small.stars.len());
    assert!(large.dust.len() >= small.dust.len());
}

#[test]
fn stars_stay_inside_the_viewport_and_hue_band() {
    let vp = Viewport::new(1024, 768);
    let pool = StarfieldPool::generate(vp, &mut SeededRng::new(3));
    for star in &pool.stars {
        assert!(star.pos.x >= 0.0 && star.pos.x < 1024.0);
        assert!(star.pos.y >= 0.0 && star.pos.y < 768.0);
        assert!(star.hue >= 200.0 && star.hue < 250.0);
    }
}

#[test]
fn brightness_stays_in_band() {
    let pool = StarfieldPool::generate(Viewport::new(400, 300), &mut SeededRng::new(9));
    let star = pool.stars[0];
    for ms in (0..60_000).step_by(137) {
        let b = star.brightness(ms as f64);
        assert!((0.25..=1.0).contains(&b));
    }
}

#[test]
fn dust_positions_wrap_into_the_viewport() {
    let vp = Viewport::new(200, 100);
    let pool = StarfieldPool::generate(vp, &mut SeededRng::new(21));
    for mote in &pool.dust {
        let p = mote.position(123_456.0, vp);
        assert!(p.x >= 0.0 && p.x < 200.0);
        assert!(p.y >= 0.0 && p.y < 100.0);
    }
}

#[test]
fn degenerate_viewport_yields_empty_pool() {
    let pool = StarfieldPool::generate(Viewport::new(0, 0), &mut SeededRng::new(1));
    assert!(pool.stars.is_empty());
    assert!(pool.dust.is_empty());
}
