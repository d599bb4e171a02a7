//! Haptic feedback driven by roll events
//!
//! The sink is fire-and-forget: the game never waits on a pulse. Cue
//! selection is a pure mapping from [`GameEvent`]s, so any backend (an OS
//! vibration API, a test recorder, nothing at all) can sit behind the
//! trait.

use crate::consts::{EXTREMAL_PATTERN_MS, ROLL_PULSE_MS};
use crate::sim::GameEvent;

/// Vibration sink.
///
/// `pattern` entries alternate vibrate/pause durations, starting with a
/// vibration.
pub trait Haptics {
    /// Single vibration pulse
    fn pulse(&mut self, duration_ms: u32);
    /// Alternating vibrate/pause sequence
    fn pattern(&mut self, durations_ms: &[u32]);
}

/// Haptic cues the game emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticCue {
    /// A roll just started
    RollStart,
    /// A roll settled on the minimum or maximum face
    ExtremalSettle,
}

/// Map one game event to its cue, if it has one. Interior settles and
/// cosmetic spin traffic are silent.
pub fn cue_for(event: &GameEvent) -> Option<HapticCue> {
    match event {
        GameEvent::RollStarted { .. } => Some(HapticCue::RollStart),
        GameEvent::RollSettled { band, .. } if band.is_extremal() => {
            Some(HapticCue::ExtremalSettle)
        }
        _ => None,
    }
}

/// Send the cues for a batch of tick events to a sink.
pub fn drive(haptics: &mut dyn Haptics, events: &[GameEvent]) {
    for event in events {
        match cue_for(event) {
            Some(HapticCue::RollStart) => haptics.pulse(ROLL_PULSE_MS),
            Some(HapticCue::ExtremalSettle) => haptics.pattern(&EXTREMAL_PATTERN_MS),
            None => {}
        }
    }
}

/// Discards every cue (sensor-less desktops, tests that don't care)
#[derive(Debug, Default)]
pub struct NullHaptics;

impl Haptics for NullHaptics {
    fn pulse(&mut self, _duration_ms: u32) {}
    fn pattern(&mut self, _durations_ms: &[u32]) {}
}

/// Logs each cue; the demo binary's stand-in for a vibration motor
#[derive(Debug, Default)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn pulse(&mut self, duration_ms: u32) {
        log::info!("haptic pulse {}ms", duration_ms);
    }

    fn pattern(&mut self, durations_ms: &[u32]) {
        log::info!("haptic pattern {:?}", durations_ms);
    }
}
