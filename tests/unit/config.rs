use super::*;

#[test]
fn default_config_is_valid() {
    IntroConfig::default().validate().unwrap();
}

#[test]
fn zero_length_window_is_rejected() {
    let cfg = IntroConfig {
        eyepiece_ms: [5_000.0, 5_000.0],
        ..IntroConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn window_past_total_is_rejected() {
    let cfg = IntroConfig {
        cosmos_ms: [39_000.0, DEFAULT_TOTAL_MS + 1.0],
        ..IntroConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn inverted_fade_knees_are_rejected() {
    let cfg = IntroConfig {
        fade_knee_in: 0.8,
        fade_knee_out: 0.2,
        ..IntroConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn zero_period_is_rejected() {
    let cfg = IntroConfig {
        shockwave_period_ms: 0.0,
        ..IntroConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn from_json_validates_after_parsing() {
    let mut cfg = IntroConfig::default();
    cfg.eyepiece_ms = [9.0, 9.0];
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(IntroConfig::from_json(&json).is_err());
    assert!(IntroConfig::from_json("not json").is_err());

    let good = serde_json::to_string(&IntroConfig::default()).unwrap();
    let parsed = IntroConfig::from_json(&good).unwrap();
    assert_eq!(parsed.total_ms, DEFAULT_TOTAL_MS);
}

#[test]
fn config_round_trips_through_json() {
    let cfg = IntroConfig {
        total_ms: 32_000.0,
        seed: 7,
        ..IntroConfig::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let back: IntroConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.total_ms, 32_000.0);
    assert_eq!(back.seed, 7);
    assert_eq!(back.windows(), cfg.windows());
}

#[test]
fn windows_are_listed_back_to_front() {
    let cfg = IntroConfig::default();
    let windows = cfg.windows();
    assert_eq!(windows[0], cfg.orbit_lines_ms);
    assert_eq!(windows[6], cfg.cosmos_ms);
    // The default table overlaps at every seam.
    for pair in windows.windows(2) {
        assert!(pair[1][0] < pair[0][1], "adjacent windows must overlap");
    }
}
