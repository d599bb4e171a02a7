//! Shake Dice entry point
//!
//! Headless demo: a scripted accelerometer feed stands in for a phone's
//! motion sensor and drives the shake/roll/settle pipeline over a virtual
//! timeline. Haptic cues are logged in place of a vibration motor and
//! settled d6 faces are printed as pip art.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec3;

use shake_dice::consts::GRAVITY_BASE;
use shake_dice::haptics::{self, Haptics, LogHaptics, NullHaptics};
use shake_dice::platform::{AccelSource, ScriptedAccel};
use shake_dice::sim::{dot_positions, movement_magnitude};
use shake_dice::{DieKind, GameEvent, Settings, TickInput, tick};

/// Demo loop step, finer than the sample cadence
const STEP_MS: u64 = 50;
/// Virtual time the demo covers
const TIMELINE_MS: u64 = 8_000;
/// When the demo fires its manual tap trigger
const TAP_AT_MS: u64 = 4_000;

fn main() {
    env_logger::init();

    let mut settings = Settings::load_from(Path::new("shake-dice.json"));
    if let Some(arg) = std::env::args().nth(1) {
        match DieKind::from_str(&arg) {
            Some(kind) => settings.die = kind,
            None => log::warn!(
                "unknown die kind '{}', keeping {}",
                arg,
                settings.die.as_str()
            ),
        }
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    let mut state = settings.new_game(seed);
    log::info!("Shake Dice: {} run with seed {}", state.kind.as_str(), seed);

    let mut source = ScriptedAccel::new(demo_script());
    if !source.is_available() {
        log::warn!("no accelerometer available; manual triggers only");
    }
    let latest: Rc<RefCell<Option<Vec3>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&latest);
    let subscription = source.subscribe(
        settings.sample_interval_ms,
        Box::new(move |sample| *slot.borrow_mut() = Some(sample)),
    );

    let mut motor: Box<dyn Haptics> = if settings.haptics_enabled {
        Box::new(LogHaptics)
    } else {
        Box::new(NullHaptics)
    };

    let mut now = 0;
    while now < TIMELINE_MS {
        source.pump(now);
        let input = TickInput {
            sample: latest.borrow_mut().take(),
            roll: now == TAP_AT_MS,
            ..TickInput::default()
        };
        let events = tick(&mut state, &input, STEP_MS);
        for event in &events {
            if let GameEvent::RollSettled { face, band } = event {
                println!("{}", face_art(*face));
                println!("  -> {} ({})\n", face, band.as_str());
            }
        }
        haptics::drive(motor.as_mut(), &events);
        if now % 1_000 == 0 {
            log::debug!(
                "t={}ms movement {:.2}g",
                now,
                movement_magnitude(state.current_magnitude(), GRAVITY_BASE)
            );
        }
        now += STEP_MS;
    }
    subscription.cancel();

    log::info!(
        "demo done: {} rolls, {} resting face up",
        state.rolls,
        state.view().face
    );
}

/// Eight seconds of simulated sensor data at the default sample interval:
/// resting noise around 1g with a shake burst at the two second mark and
/// a single sharp flick at six seconds.
fn demo_script() -> Vec<Vec3> {
    (0..80)
        .map(|i| match i {
            20..=22 => Vec3::new(2.4, -1.2, 0.8),
            60 => Vec3::new(-1.9, 0.6, 1.3),
            _ => Vec3::new(0.02, -0.99, 0.04),
        })
        .collect()
}

/// Text rendering of a settled face: a pip grid for d6 faces, the bare
/// number for anything else.
fn face_art(face: u8) -> String {
    let dots = match dot_positions(face) {
        Some(dots) => dots,
        None => return format!("[ {} ]", face),
    };
    let mut grid = [[' '; 3]; 3];
    for &(row, col) in dots {
        grid[row as usize][col as usize] = '*';
    }
    let mut art = String::from("+-------+\n");
    for row in grid {
        art.push_str(&format!("| {} {} {} |\n", row[0], row[1], row[2]));
    }
    art.push_str("+-------+");
    art
}
