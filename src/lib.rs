//! Shake Dice - shake your phone, roll a die
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion math, shake detection, roll state machine)
//! - `platform`: Accelerometer source abstraction
//! - `haptics`: Vibration feedback cues
//! - `settings`: Runtime configuration

pub mod haptics;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{DieKind, DieView, GameEvent, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Accelerometer sampling cadence
    pub const SAMPLE_INTERVAL_MS: u64 = 100;

    /// Magnitude above which a sample counts as a shake (units of g)
    pub const SHAKE_THRESHOLD: f32 = 1.8;
    /// Minimum spacing between two accepted shakes
    pub const SHAKE_COOLDOWN_MS: u64 = 500;
    /// Resting magnitude contributed by gravity (units of g)
    pub const GRAVITY_BASE: f32 = 1.0;

    /// Roll animation window for a six-sided die
    pub const D6_ROLL_DURATION_MS: u64 = 600;
    /// Roll animation window for a twenty-sided die
    pub const D20_ROLL_DURATION_MS: u64 = 800;
    /// Cadence of the cosmetic face-cycling stream while rolling
    pub const SPIN_INTERVAL_MS: u64 = 75;

    /// Haptic pulse length at roll start
    pub const ROLL_PULSE_MS: u32 = 100;
    /// Vibrate/pause haptic pattern for a min or max settle
    pub const EXTREMAL_PATTERN_MS: [u32; 3] = [60, 40, 120];
}
