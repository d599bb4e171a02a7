//! Tick-driven roll pipeline
//!
//! One tick: advance the session clock, classify the sample (if any),
//! serialize shake and manual triggers into the roll state machine, then
//! service the settle and spin deadlines. Deadlines are plain clock
//! comparisons held in `GameState`, so a reset or dropped game can never
//! fire a stale timer.

use glam::Vec3;

use super::die::{DieState, roll_face};
use super::faces::face_band;
use super::motion::magnitude;
use super::state::{GameEvent, GameState, RollPhase};

/// External stimulus for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Accelerometer sample delivered since the last tick, if any
    pub sample: Option<Vec3>,
    /// Manual roll trigger (tap, keypress)
    pub roll: bool,
    /// Re-arm: die back to rest, detector cleared, deadlines cancelled
    pub reset: bool,
}

/// Advance the game by `dt_ms` of session time.
///
/// Returns the events that occurred, in order. At most one roll starts
/// and at most one roll settles per tick.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.clock_ms += dt_ms;
    let now = state.clock_ms;

    if input.reset {
        state.reset();
    }

    // Sample classification. The detector has no timer of its own; its
    // cooldown is checked lazily against the session clock.
    let mut trigger = input.roll;
    if let Some(sample) = input.sample {
        state.last_magnitude = magnitude(sample);
        if state.detector.detect_shake(sample, now) {
            events.push(GameEvent::ShakeDetected {
                magnitude: state.last_magnitude,
            });
            trigger = true;
        }
    }

    // Shake and manual triggers share one path. A trigger while Rolling
    // is dropped, not queued, and runs before the settle check so a
    // trigger landing on the settle tick cannot chain a second roll.
    if trigger {
        match state.phase {
            RollPhase::Idle => {
                state.die = DieState::rolled(state.kind, &mut state.committed_rng, now);
                state.phase = RollPhase::Rolling;
                state.settle_at_ms = now + state.roll_duration_ms;
                state.next_spin_at_ms = now + state.spin_interval_ms;
                state.spin_face = None;
                events.push(GameEvent::RollStarted {
                    face: state.die.face,
                });
                log::debug!(
                    "roll started, face {} settles at {}ms",
                    state.die.face,
                    state.settle_at_ms
                );
            }
            RollPhase::Rolling => {
                log::debug!("trigger ignored, roll in progress");
            }
        }
    }

    // Settle deadline
    if state.phase == RollPhase::Rolling && now >= state.settle_at_ms {
        state.die = state.die.finished();
        state.phase = RollPhase::Idle;
        state.spin_face = None;
        state.rolls += 1;
        let band = face_band(state.kind, state.die.face);
        events.push(GameEvent::RollSettled {
            face: state.die.face,
            band,
        });
        log::info!("rolled {} ({})", state.die.face, band.as_str());
    }

    // Cosmetic spin stream. Candidates come from their own RNG and never
    // touch the committed die state.
    if state.spin_enabled && state.phase == RollPhase::Rolling && now >= state.next_spin_at_ms {
        let candidate = roll_face(&mut state.spin_rng, state.kind);
        state.spin_face = Some(candidate);
        state.next_spin_at_ms = now + state.spin_interval_ms;
        events.push(GameEvent::SpinFace { face: candidate });
    }

    events
}
