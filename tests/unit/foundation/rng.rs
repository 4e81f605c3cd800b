use super::*;

#[test]
fn same_seed_yields_identical_streams() {
    for seed in [1_u64, 7, 16807, 424242, u64::MAX] {
        let mut a = SeededRng::new(seed);
        let mut b = SeededRng::new(seed);
        for _ in 0..1000 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }
}

#[test]
fn outputs_stay_in_unit_interval() {
    let mut rng = SeededRng::new(99);
    for _ in 0..10_000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn zero_seed_does_not_collapse() {
    let mut rng = SeededRng::new(0);
    let first: Vec<f64> = (0..8).map(|_| rng.next_f64()).collect();
    assert!(first.iter().any(|&v| v != 0.0));
}

#[test]
fn different_seeds_diverge() {
    let mut a = SeededRng::new(1);
    let mut b = SeededRng::new(2);
    let va: Vec<f64> = (0..16).map(|_| a.next_f64()).collect();
    let vb: Vec<f64> = (0..16).map(|_| b.next_f64()).collect();
    assert_ne!(va, vb);
}

#[test]
fn in_range_and_pick_index_respect_bounds() {
    let mut rng = SeededRng::new(5);
    for _ in 0..1000 {
        let v = rng.in_range(-3.0, 7.0);
        assert!((-3.0..7.0).contains(&v));
        let i = rng.pick_index(4);
        assert!(i < 4);
    }
    assert_eq!(rng.pick_index(0), 0);
}
