//! Roll state machine and core game types
//!
//! `GameState` owns the die: every committed face change goes through the
//! transitions in [`crate::sim::die`], driven by [`crate::sim::tick::tick`].
//! Cosmetic spin candidates live beside the committed state and never
//! touch it.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::die::{DieKind, DieState};
use super::faces::{FaceBand, face_band};
use super::motion::{ShakeConfig, ShakeConfigPatch, ShakeDetector};
use crate::consts::SPIN_INTERVAL_MS;

/// Current phase of the roll pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollPhase {
    /// Waiting for a trigger
    Idle,
    /// Roll window open; further triggers are dropped until the settle
    Rolling,
}

/// Things that happened during a tick, in occurrence order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The detector accepted a shake gesture
    ShakeDetected { magnitude: f32 },
    /// A roll began; `face` is the committed result, hidden behind the
    /// spin stream while the window is open
    RollStarted { face: u8 },
    /// Cosmetic candidate face shown while rolling, never committed
    SpinFace { face: u8 },
    /// The roll window closed on the committed face
    RollSettled { face: u8, band: FaceBand },
}

/// Renderer-facing snapshot: which face to draw and whether to animate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieView {
    pub face: u8,
    pub rolling: bool,
    pub band: FaceBand,
}

/// Salt separating the cosmetic RNG stream from the committed one
const SPIN_STREAM_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seed wrapper: one run seed fans out into the committed and cosmetic
/// RNG streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Stream that decides committed faces
    pub fn committed_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }

    /// Stream for spin candidates, independent of the committed stream
    /// so committed results depend only on the seed and the roll count
    pub fn spin_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed ^ SPIN_STREAM_SALT)
    }
}

/// Complete state of one die game
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, kept for reproducibility
    pub seed: u64,
    /// Die variant in play
    pub kind: DieKind,
    /// Committed die state; mutated only by `tick`
    pub die: DieState,
    /// Debounced gesture classifier
    pub detector: ShakeDetector,
    /// Current phase
    pub phase: RollPhase,
    /// Session clock (ms), advanced by `tick`
    pub clock_ms: u64,
    /// Completed roll count
    pub rolls: u32,
    /// Magnitude of the most recent sample, for HUD display
    pub last_magnitude: f32,

    // Roll window bookkeeping; deadlines are absolute clock values
    pub(super) settle_at_ms: u64,
    pub(super) next_spin_at_ms: u64,
    pub(super) spin_face: Option<u8>,

    // Presentation tunables
    pub(super) roll_duration_ms: u64,
    pub(super) spin_interval_ms: u64,
    pub(super) spin_enabled: bool,

    // RNG streams
    pub(super) committed_rng: Pcg32,
    pub(super) spin_rng: Pcg32,
}

impl GameState {
    /// A fresh game: die resting on its minimum face, detector armed.
    pub fn new(kind: DieKind, shake: ShakeConfig, seed: u64) -> Self {
        let rng = RngState::new(seed);
        Self {
            seed,
            kind,
            die: DieState::initial(kind),
            detector: ShakeDetector::new(shake),
            phase: RollPhase::Idle,
            clock_ms: 0,
            rolls: 0,
            last_magnitude: 0.0,
            settle_at_ms: 0,
            next_spin_at_ms: 0,
            spin_face: None,
            roll_duration_ms: kind.roll_duration_ms(),
            spin_interval_ms: SPIN_INTERVAL_MS,
            spin_enabled: true,
            committed_rng: rng.committed_rng(),
            spin_rng: rng.spin_rng(),
        }
    }

    /// Snapshot for the renderer: the spin candidate while the window is
    /// open (and spin is enabled), the committed face otherwise.
    pub fn view(&self) -> DieView {
        let face = match (self.phase, self.spin_face) {
            (RollPhase::Rolling, Some(candidate)) => candidate,
            _ => self.die.face,
        };
        DieView {
            face,
            rolling: self.die.rolling,
            band: face_band(self.kind, face),
        }
    }

    /// Magnitude of the most recent sample.
    pub fn current_magnitude(&self) -> f32 {
        self.last_magnitude
    }

    /// Merge a partial shake-config update at runtime.
    pub fn update_shake_config(&mut self, patch: ShakeConfigPatch) {
        self.detector.update_config(patch);
    }

    /// Override the roll window length.
    pub fn set_roll_duration_ms(&mut self, duration_ms: u64) {
        self.roll_duration_ms = duration_ms;
    }

    /// Configure the cosmetic spin stream.
    pub fn set_spin(&mut self, interval_ms: u64, enabled: bool) {
        self.spin_interval_ms = interval_ms;
        self.spin_enabled = enabled;
    }

    /// Re-arm everything: die back to rest, detector cooldown cleared,
    /// pending settle and spin deadlines cancelled. Idempotent; the
    /// session clock and the RNG streams keep running.
    pub fn reset(&mut self) {
        self.die = DieState::initial(self.kind);
        self.detector.reset();
        self.phase = RollPhase::Idle;
        self.settle_at_ms = 0;
        self.next_spin_at_ms = 0;
        self.spin_face = None;
    }
}
