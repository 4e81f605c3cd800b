use crate::foundation::error::{StarglassError, StarglassResult};
use serde::{Deserialize, Serialize};

/// Default total intro duration in milliseconds.
pub const DEFAULT_TOTAL_MS: f64 = 52_000.0;

/// Default phase windows, back-to-front, as `[start_ms, end_ms]`.
pub const DEFAULT_ORBIT_LINES_MS: [f64; 2] = [0.0, 9_000.0];
/// Observatory exterior window.
pub const DEFAULT_EXTERIOR_MS: [f64; 2] = [7_000.0, 17_000.0];
/// Observatory interior window.
pub const DEFAULT_INTERIOR_MS: [f64; 2] = [15_000.0, 25_000.0];
/// Eyepiece approach window.
pub const DEFAULT_EYEPIECE_MS: [f64; 2] = [23_000.0, 30_000.0];
/// Optical interior window.
pub const DEFAULT_OPTICS_MS: [f64; 2] = [28_000.0, 36_000.0];
/// Data-transform window.
pub const DEFAULT_DATA_TRANSFORM_MS: [f64; 2] = [34_000.0, 41_000.0];
/// Financial-cosmos window.
pub const DEFAULT_COSMOS_MS: [f64; 2] = [39_000.0, 52_000.0];

/// Default smoothstep knee ending each scene's fade-in, in local progress.
pub const DEFAULT_FADE_KNEE_IN: f64 = 0.15;
/// Default smoothstep knee starting each scene's fade-out, in local progress.
pub const DEFAULT_FADE_KNEE_OUT: f64 = 0.85;

/// Default period of the cosmos neural shockwave rings, absolute elapsed ms.
pub const DEFAULT_SHOCKWAVE_PERIOD_MS: f64 = 3_000.0;
/// Default period of the cosmos flash events, absolute elapsed ms.
pub const DEFAULT_FLASH_PERIOD_MS: f64 = 4_200.0;
/// Default period of the cosmos burst ripples, absolute elapsed ms.
pub const DEFAULT_RIPPLE_PERIOD_MS: f64 = 5_600.0;

/// Default delay before the hidden landing surface is torn down, giving the
/// host's reveal transition time to finish.
pub const DEFAULT_REVEAL_HIDE_DELAY_MS: f64 = 1_500.0;

/// Default base seed for all particle pools.
pub const DEFAULT_SEED: u64 = 0x5742_11;

/// Timing configuration for the intro sequence.
///
/// Every value here is a tunable constant, not a design invariant: hosts may
/// reshape the window table freely as long as each window keeps
/// `end_ms > start_ms` and the total covers the last window
/// ([`IntroConfig::validate`]).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntroConfig {
    /// Total intro duration in milliseconds.
    pub total_ms: f64,
    /// Orbit-lines window as `[start_ms, end_ms]`.
    pub orbit_lines_ms: [f64; 2],
    /// Observatory exterior window.
    pub exterior_ms: [f64; 2],
    /// Observatory interior window.
    pub interior_ms: [f64; 2],
    /// Eyepiece approach window.
    pub eyepiece_ms: [f64; 2],
    /// Optical interior window.
    pub optics_ms: [f64; 2],
    /// Data-transform window.
    pub data_transform_ms: [f64; 2],
    /// Financial-cosmos window.
    pub cosmos_ms: [f64; 2],
    /// Fade-in smoothstep knee in local progress.
    pub fade_knee_in: f64,
    /// Fade-out smoothstep knee in local progress.
    pub fade_knee_out: f64,
    /// Neural shockwave ring period, absolute elapsed ms.
    pub shockwave_period_ms: f64,
    /// Flash event period, absolute elapsed ms.
    pub flash_period_ms: f64,
    /// Burst ripple period, absolute elapsed ms.
    pub ripple_period_ms: f64,
    /// Delay before the landing surface is hidden after reveal.
    pub reveal_hide_delay_ms: f64,
    /// Base seed for particle pool generation.
    pub seed: u64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            total_ms: DEFAULT_TOTAL_MS,
            orbit_lines_ms: DEFAULT_ORBIT_LINES_MS,
            exterior_ms: DEFAULT_EXTERIOR_MS,
            interior_ms: DEFAULT_INTERIOR_MS,
            eyepiece_ms: DEFAULT_EYEPIECE_MS,
            optics_ms: DEFAULT_OPTICS_MS,
            data_transform_ms: DEFAULT_DATA_TRANSFORM_MS,
            cosmos_ms: DEFAULT_COSMOS_MS,
            fade_knee_in: DEFAULT_FADE_KNEE_IN,
            fade_knee_out: DEFAULT_FADE_KNEE_OUT,
            shockwave_period_ms: DEFAULT_SHOCKWAVE_PERIOD_MS,
            flash_period_ms: DEFAULT_FLASH_PERIOD_MS,
            ripple_period_ms: DEFAULT_RIPPLE_PERIOD_MS,
            reveal_hide_delay_ms: DEFAULT_REVEAL_HIDE_DELAY_MS,
            seed: DEFAULT_SEED,
        }
    }
}

impl IntroConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> StarglassResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            StarglassError::validation(format!("invalid intro config JSON: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Phase windows in back-to-front compositing order.
    pub fn windows(&self) -> [[f64; 2]; 7] {
        [
            self.orbit_lines_ms,
            self.exterior_ms,
            self.interior_ms,
            self.eyepiece_ms,
            self.optics_ms,
            self.data_transform_ms,
            self.cosmos_ms,
        ]
    }

    /// Validate window shape, fade knees and periods.
    pub fn validate(&self) -> StarglassResult<()> {
        for [start, end] in self.windows() {
            if !(end > start) {
                return Err(StarglassError::validation(
                    "phase window end_ms must be > start_ms",
                ));
            }
            if start < 0.0 {
                return Err(StarglassError::validation(
                    "phase window start_ms must be >= 0",
                ));
            }
            if end > self.total_ms {
                return Err(StarglassError::validation(
                    "phase window must end at or before total_ms",
                ));
            }
        }
        if !(self.total_ms > 0.0) {
            return Err(StarglassError::validation("total_ms must be > 0"));
        }
        if !(self.fade_knee_in > 0.0 && self.fade_knee_in < 1.0) {
            return Err(StarglassError::validation("fade_knee_in must be in (0, 1)"));
        }
        if !(self.fade_knee_out > 0.0 && self.fade_knee_out < 1.0) {
            return Err(StarglassError::validation("fade_knee_out must be in (0, 1)"));
        }
        if self.fade_knee_out <= self.fade_knee_in {
            return Err(StarglassError::validation(
                "fade_knee_out must be > fade_knee_in",
            ));
        }
        for period in [
            self.shockwave_period_ms,
            self.flash_period_ms,
            self.ripple_period_ms,
        ] {
            if !(period > 0.0) {
                return Err(StarglassError::validation(
                    "periodic effect periods must be > 0",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
