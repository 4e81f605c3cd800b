use super::*;

#[test]
fn degenerate_viewports_are_detected() {
    assert!(Viewport::new(0, 100).is_degenerate());
    assert!(Viewport::new(100, 0).is_degenerate());
    assert!(!Viewport::new(1, 1).is_degenerate());
}

#[test]
fn viewport_geometry_helpers() {
    let vp = Viewport::new(300, 400);
    assert_eq!(vp.area(), 120_000.0);
    assert_eq!(vp.min_dim(), 300.0);
    assert_eq!(vp.diagonal(), 500.0);
    let c = vp.center();
    assert_eq!((c.x, c.y), (150.0, 200.0));
}

#[test]
fn with_alpha_scales_and_clamps() {
    let c = Rgba8::new(10, 20, 30, 200);
    assert_eq!(c.with_alpha(0.5).a, 100);
    assert_eq!(c.with_alpha(2.0).a, 200);
    assert_eq!(c.with_alpha(-1.0).a, 0);
    assert_eq!(c.with_alpha(0.5).r, 10);
}

#[test]
fn hsla_hits_primary_hues() {
    let red = Rgba8::from_hsla(0.0, 1.0, 0.5, 1.0);
    assert_eq!((red.r, red.g, red.b, red.a), (255, 0, 0, 255));
    let green = Rgba8::from_hsla(120.0, 1.0, 0.5, 1.0);
    assert_eq!((green.r, green.g, green.b), (0, 255, 0));
    let blue = Rgba8::from_hsla(240.0, 1.0, 0.5, 0.5);
    assert_eq!((blue.r, blue.g, blue.b, blue.a), (0, 0, 255, 128));
}

#[test]
fn hsla_wraps_hue() {
    assert_eq!(
        Rgba8::from_hsla(360.0, 1.0, 0.5, 1.0),
        Rgba8::from_hsla(0.0, 1.0, 0.5, 1.0)
    );
    assert_eq!(
        Rgba8::from_hsla(-120.0, 1.0, 0.5, 1.0),
        Rgba8::from_hsla(240.0, 1.0, 0.5, 1.0)
    );
}
