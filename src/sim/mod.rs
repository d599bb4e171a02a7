//! Deterministic simulation module
//!
//! All game logic lives here. This module must be pure and deterministic:
//! - Caller-supplied clock only (milliseconds of session time)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod die;
pub mod faces;
pub mod motion;
pub mod state;
pub mod tick;

pub use die::{DieKind, DieState, is_valid_face, roll_face};
pub use faces::{FaceBand, band_color, dot_positions, face_band, face_rotation};
pub use motion::{
    ShakeConfig, ShakeConfigPatch, ShakeDetector, ShakeState, dot, magnitude, movement_magnitude,
    normalize, shake_step,
};
pub use state::{DieView, GameEvent, GameState, RngState, RollPhase};
pub use tick::{TickInput, tick};
