//! Die model: kinds, faces, and pure state transitions
//!
//! Faces are integers in `[1, N]`. Committed state changes only through
//! two transitions: [`DieState::rolled`] draws a fresh face and opens the
//! roll window, [`DieState::finished`] closes it without touching the face.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{D6_ROLL_DURATION_MS, D20_ROLL_DURATION_MS};

/// Supported die variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DieKind {
    #[default]
    D6,
    D20,
}

impl DieKind {
    pub const fn min_face(self) -> u8 {
        1
    }

    pub const fn max_face(self) -> u8 {
        match self {
            DieKind::D6 => 6,
            DieKind::D20 => 20,
        }
    }

    /// Roll animation window for this kind
    pub const fn roll_duration_ms(self) -> u64 {
        match self {
            DieKind::D6 => D6_ROLL_DURATION_MS,
            DieKind::D20 => D20_ROLL_DURATION_MS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DieKind::D6 => "d6",
            DieKind::D20 => "d20",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "d6" | "6" => Some(DieKind::D6),
            "d20" | "20" => Some(DieKind::D20),
            _ => None,
        }
    }
}

/// Uniform draw over the kind's full inclusive face range.
pub fn roll_face<R: Rng + ?Sized>(rng: &mut R, kind: DieKind) -> u8 {
    rng.random_range(kind.min_face()..=kind.max_face())
}

/// True iff `value` is a face within the kind's range.
///
/// Faces produced by [`roll_face`] are in range by construction; this
/// guards values arriving from outside (settings files, saved state).
pub fn is_valid_face(kind: DieKind, value: i64) -> bool {
    value >= kind.min_face() as i64 && value <= kind.max_face() as i64
}

/// A die's committed state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieState {
    /// Committed face, always within the kind's range
    pub face: u8,
    /// True while the roll window is open
    pub rolling: bool,
    /// Clock stamp (ms) of the last roll start, 0 before the first roll
    pub last_roll_ms: u64,
}

impl DieState {
    /// State at game start: minimum face up, not rolling, never rolled.
    pub fn initial(kind: DieKind) -> Self {
        Self::initial_with(kind, kind.min_face())
    }

    /// State at game start with a chosen resting face. Falls back to the
    /// minimum face when the requested one is out of range.
    pub fn initial_with(kind: DieKind, face: u8) -> Self {
        let face = if is_valid_face(kind, face as i64) {
            face
        } else {
            log::warn!(
                "initial face {} out of range for {}, using {}",
                face,
                kind.as_str(),
                kind.min_face()
            );
            kind.min_face()
        };
        Self {
            face,
            rolling: false,
            last_roll_ms: 0,
        }
    }

    /// Open a roll window: draw a fresh face and stamp the clock. The
    /// previous face is discarded, so repeats are possible.
    pub fn rolled<R: Rng + ?Sized>(kind: DieKind, rng: &mut R, now_ms: u64) -> Self {
        Self {
            face: roll_face(rng, kind),
            rolling: true,
            last_roll_ms: now_ms,
        }
    }

    /// Close the roll window. Face and stamp are untouched.
    pub fn finished(self) -> Self {
        Self {
            rolling: false,
            ..self
        }
    }
}
