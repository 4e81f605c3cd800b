use super::*;

#[test]
fn smoothstep_clamps_and_interpolates() {
    assert_eq!(smoothstep(0.0, 1.0, -0.5), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    // Monotone between the edges.
    assert!(smoothstep(0.0, 1.0, 0.3) < smoothstep(0.0, 1.0, 0.4));
}

#[test]
fn smoothstep_degenerate_edges_are_a_hard_step() {
    assert_eq!(smoothstep(0.5, 0.5, 0.4), 0.0);
    assert_eq!(smoothstep(0.5, 0.5, 0.6), 1.0);
}

#[test]
fn cubic_easing_endpoints() {
    for f in [ease_in, ease_out, ease_in_out] {
        assert_eq!(f(0.0), 0.0);
        assert_eq!(f(1.0), 1.0);
    }
    assert_eq!(ease_in(0.5), 0.125);
    assert_eq!(ease_out(0.5), 0.875);
    assert_eq!(ease_in_out(0.5), 0.5);
}

#[test]
fn fade_envelope_rises_holds_and_falls() {
    let k_in = 0.2;
    let k_out = 0.8;
    assert_eq!(fade_envelope(0.0, k_in, k_out), 0.0);
    assert_eq!(fade_envelope(1.0, k_in, k_out), 0.0);
    assert_eq!(fade_envelope(0.5, k_in, k_out), 1.0);
    assert!(fade_envelope(0.1, k_in, k_out) > 0.0);
    assert!(fade_envelope(0.1, k_in, k_out) < 1.0);
    assert!(fade_envelope(0.9, k_in, k_out) < 1.0);
}

#[test]
fn window_is_smoothstep_over_the_subrange() {
    assert_eq!(window(0.2, 0.4, 0.1), 0.0);
    assert_eq!(window(0.2, 0.4, 0.4), 1.0);
    assert!((window(0.2, 0.4, 0.3) - 0.5).abs() < 1e-12);
}
