use super::*;
use crate::foundation::core::{Point, Viewport};
use crate::foundation::rng::SeededRng;

#[test]
fn trail_drops_oldest_past_the_cap() {
    let mut trail = Trail::default();
    for i in 0..(TRAIL_CAP + 10) {
        trail.push(Point::new(i as f64, 0.0));
    }
    assert!(trail.retained() <= TRAIL_CAP);
    // The newest point survives; the very first ones are gone.
    let xs: Vec<f64> = trail.live().map(|p| p.pos.x).collect();
    assert_eq!(*xs.last().unwrap(), (TRAIL_CAP + 9) as f64);
    assert!(xs.first().unwrap() >= &10.0);
}

#[test]
fn decayed_points_are_skipped_but_pruned_lazily() {
    let mut trail = Trail::default();
    trail.push(Point::new(0.0, 0.0));
    trail.push(Point::new(1.0, 0.0));
    let draws_to_kill = (1.0 / TRAIL_DECAY).ceil() as usize;
    for _ in 0..draws_to_kill {
        trail.decay();
    }
    // Dead points are retained until the next push, just not drawn.
    assert_eq!(trail.live().count(), 0);
    assert_eq!(trail.retained(), 2);
    trail.push(Point::new(2.0, 0.0));
    assert_eq!(trail.retained(), 1);
    assert_eq!(trail.live().count(), 1);
}

#[test]
fn fresh_points_have_full_life_and_age_per_draw() {
    let mut trail = Trail::default();
    trail.push(Point::new(0.0, 0.0));
    assert_eq!(trail.live().next().unwrap().life, 1.0);
    trail.decay();
    let life = trail.live().next().unwrap().life;
    assert!((life - (1.0 - TRAIL_DECAY)).abs() < 1e-12);
}

#[test]
fn orbit_positions_are_periodic_and_elliptical() {
    let pool = OrbitPool::generate(Viewport::new(800, 600), &mut SeededRng::new(7));
    let center = Point::new(400.0, 300.0);
    for node in &pool.nodes {
        let p0 = node.position(center, 600.0, 0.0);
        let period_ms = std::f64::consts::TAU / node.angular_speed.abs() * 1000.0;
        let p1 = node.position(center, 600.0, period_ms);
        assert!((p0.x - p1.x).abs() < 1e-6);
        assert!((p0.y - p1.y).abs() < 1e-6);
    }
}

#[test]
fn node_count_scales_with_viewport() {
    let small = OrbitPool::generate(Viewport::new(480, 320), &mut SeededRng::new(1));
    let large = OrbitPool::generate(Viewport::new(2560, 1440), &mut SeededRng::new(1));
    assert!(large.nodes.len() >= small.nodes.len());
}
