use super::*;
use crate::foundation::core::{Point, Viewport};
use crate::foundation::rng::SeededRng;

#[test]
fn every_star_lands_in_an_arm_and_a_sector() {
    let pool = GalaxyPool::generate(Viewport::new(1280, 720), &mut SeededRng::new(17));
    assert!(!pool.stars.is_empty());
    for star in &pool.stars {
        assert!(star.arm < ARM_COUNT);
        assert!(star.sector < SECTOR_COUNT);
        let band = SECTOR_HUE_BANDS[star.sector as usize];
        assert!(
            star.hue >= band[0] && star.hue < band[1],
            "hue {} outside sector band {:?}",
            star.hue,
            band
        );
    }
}

#[test]
fn all_arms_and_sectors_are_populated() {
    let pool = GalaxyPool::generate(Viewport::new(1920, 1080), &mut SeededRng::new(23));
    for arm in 0..ARM_COUNT {
        assert!(
            pool.stars.iter().any(|s| s.arm == arm),
            "arm {arm} is empty"
        );
    }
    for sector in 0..SECTOR_COUNT {
        assert!(
            pool.stars.iter().any(|s| s.sector == sector),
            "sector {sector} is empty"
        );
    }
}

#[test]
fn same_arm_stars_trace_one_spiral() {
    // Two stars on the same arm at different radii must differ in angle by
    // roughly the spiral sweep, not sit on a straight ray.
    let pool = GalaxyPool::generate(Viewport::new(1280, 720), &mut SeededRng::new(5));
    let center = Point::new(0.0, 0.0);
    let mut on_arm: Vec<_> = pool.stars.iter().filter(|s| s.arm == 0).collect();
    on_arm.sort_by(|a, b| a.radius_frac.total_cmp(&b.radius_frac));
    let inner = on_arm.first().unwrap();
    let outer = on_arm.last().unwrap();
    let pi = inner.position(center, 100.0, 0.0);
    let po = outer.position(center, 100.0, 0.0);
    let angle_inner = pi.y.atan2(pi.x);
    let angle_outer = po.y.atan2(po.x);
    assert!(
        (angle_outer - angle_inner).abs() > 0.3,
        "arm should wind, not radiate"
    );
}

#[test]
fn rotation_moves_every_star() {
    let pool = GalaxyPool::generate(Viewport::new(640, 480), &mut SeededRng::new(2));
    let center = Point::new(320.0, 240.0);
    for star in &pool.stars {
        let a = star.position(center, 150.0, 0.0);
        let b = star.position(center, 150.0, 0.5);
        assert!(a.distance(b) > 0.0);
    }
}
