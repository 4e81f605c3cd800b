/// Hermite smoothstep between `edge0` and `edge1`.
///
/// Returns 0 below `edge0`, 1 above `edge1`. Degenerate edges (`edge1 <=
/// edge0`) act as a hard step at `edge0`.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Cubic ease-in: `t^3`.
pub fn ease_in(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

/// Cubic ease-out: `1 - (1 - t)^3`.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Standard cubic ease-in/out.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
    }
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Fade envelope bounding a scene's visible alpha.
///
/// `fade_in = smoothstep(0, k_in, p)`, `fade_out = 1 - smoothstep(k_out, 1,
/// p)`; the product is the overall alpha. Scenes must paint nothing when the
/// envelope reaches zero; that early exit is what turns window overlap into
/// a cross-fade.
pub fn fade_envelope(progress: f64, k_in: f64, k_out: f64) -> f64 {
    smoothstep(0.0, k_in, progress) * (1.0 - smoothstep(k_out, 1.0, progress))
}

/// Progress of `x` through the sub-window `[from, to]`, smoothstepped.
///
/// Scenes derive every sub-effect activation from local progress through this
/// helper, never from wall-clock time.
pub fn window(from: f64, to: f64, x: f64) -> f64 {
    smoothstep(from, to, x)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
