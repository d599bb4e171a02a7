//! Accelerometer sample math and shake detection
//!
//! Samples are 3-axis acceleration vectors in units of g (1.0 is the
//! reading of a device at rest). Detection is a debounce over a single
//! timestamp: the magnitude must exceed the threshold and the cooldown
//! must have elapsed, both strictly.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{SHAKE_COOLDOWN_MS, SHAKE_THRESHOLD};

/// Euclidean norm of an acceleration sample. NaN components propagate.
#[inline]
pub fn magnitude(sample: Vec3) -> f32 {
    sample.length()
}

/// Magnitude with the ambient gravity contribution removed.
///
/// A resting accelerometer reads about 1 g regardless of orientation;
/// subtracting the base isolates motion-induced acceleration. Free fall
/// reads below the base, so the result is an absolute deviation.
#[inline]
pub fn movement_magnitude(magnitude: f32, gravity_base: f32) -> f32 {
    (magnitude - gravity_base).abs()
}

/// Unit vector in the sample's direction, or `None` when the magnitude
/// is exactly zero.
pub fn normalize(sample: Vec3) -> Option<Vec3> {
    let m = magnitude(sample);
    if m == 0.0 { None } else { Some(sample / m) }
}

/// Standard dot product.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Shake gesture thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShakeConfig {
    /// Magnitude (g) a sample must strictly exceed
    pub threshold: f32,
    /// Minimum spacing between accepted shakes (ms)
    pub cooldown_ms: u64,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            threshold: SHAKE_THRESHOLD,
            cooldown_ms: SHAKE_COOLDOWN_MS,
        }
    }
}

/// Partial update for [`ShakeConfig`]; absent fields keep their value
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShakeConfigPatch {
    pub threshold: Option<f32>,
    pub cooldown_ms: Option<u64>,
}

impl ShakeConfig {
    /// Merge a partial update into this config.
    pub fn apply(&mut self, patch: ShakeConfigPatch) {
        if let Some(threshold) = patch.threshold {
            self.threshold = threshold;
        }
        if let Some(cooldown_ms) = patch.cooldown_ms {
            self.cooldown_ms = cooldown_ms;
        }
    }
}

/// Debounce memory: when the last shake was accepted.
///
/// `None` means no shake has fired yet, which satisfies the cooldown by
/// definition, so a fresh detector can fire on its very first sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShakeState {
    pub last_shake_ms: Option<u64>,
}

/// Advance the detector by one sample.
///
/// Fires iff the magnitude strictly exceeds the threshold AND strictly
/// more than the cooldown has elapsed since the last accepted shake.
/// Boundary-equal values do not fire. A NaN magnitude compares false
/// against any threshold, so malformed samples are inert.
pub fn shake_step(
    state: ShakeState,
    sample: Vec3,
    config: &ShakeConfig,
    now_ms: u64,
) -> (ShakeState, bool) {
    let over_threshold = magnitude(sample) > config.threshold;
    let cooled_down = match state.last_shake_ms {
        Some(last) => now_ms.saturating_sub(last) > config.cooldown_ms,
        None => true,
    };

    if over_threshold && cooled_down {
        (ShakeState { last_shake_ms: Some(now_ms) }, true)
    } else {
        (state, false)
    }
}

/// Stateful shake classifier: [`shake_step`] plus an owned config
#[derive(Debug, Clone)]
pub struct ShakeDetector {
    config: ShakeConfig,
    state: ShakeState,
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(ShakeConfig::default())
    }
}

impl ShakeDetector {
    pub fn new(config: ShakeConfig) -> Self {
        Self {
            config,
            state: ShakeState::default(),
        }
    }

    /// Classify one sample at `now_ms`. Returns true when a debounced
    /// shake fires; the cooldown timestamp updates only on fire.
    pub fn detect_shake(&mut self, sample: Vec3, now_ms: u64) -> bool {
        let (state, fired) = shake_step(self.state, sample, &self.config, now_ms);
        self.state = state;
        fired
    }

    /// Magnitude of a sample without touching detector state, safe to
    /// call every frame for display.
    pub fn current_magnitude(&self, sample: Vec3) -> f32 {
        magnitude(sample)
    }

    /// Merge a partial config update; it applies from the next
    /// [`detect_shake`](Self::detect_shake) call.
    pub fn update_config(&mut self, patch: ShakeConfigPatch) {
        self.config.apply(patch);
    }

    pub fn config(&self) -> ShakeConfig {
        self.config
    }

    /// Clear the cooldown memory, leaving the detector as if freshly
    /// constructed with the same config.
    pub fn reset(&mut self) {
        self.state = ShakeState::default();
    }
}
