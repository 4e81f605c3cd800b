use super::*;
use crate::foundation::core::Viewport;

#[test]
fn counts_scale_monotonically_with_area() {
    let sizes = [(320, 240), (640, 480), (1280, 720), (1920, 1080), (3840, 2160)];
    let mut last = 0;
    for (w, h) in sizes {
        let n = area_scaled_count(Viewport::new(w, h), 9_000.0, 1, 100_000);
        assert!(n >= last, "count must not shrink as area grows");
        last = n;
    }
}

#[test]
fn counts_scale_monotonically_with_min_dimension() {
    let mut last = 0;
    for min_dim in [200, 400, 800, 1600] {
        let n = min_dim_scaled_count(Viewport::new(min_dim, min_dim * 2), 10.0, 1, 100_000);
        assert!(n >= last);
        last = n;
    }
}

#[test]
fn counts_clamp_into_bounds() {
    let tiny = area_scaled_count(Viewport::new(10, 10), 9_000.0, 30, 400);
    assert_eq!(tiny, 30);
    let huge = area_scaled_count(Viewport::new(10_000, 10_000), 1.0, 30, 400);
    assert_eq!(huge, 400);
}

#[test]
fn degenerate_viewports_get_zero_regardless_of_min() {
    assert_eq!(area_scaled_count(Viewport::new(0, 500), 100.0, 10, 50), 0);
    assert_eq!(min_dim_scaled_count(Viewport::new(500, 0), 10.0, 10, 50), 0);
}
