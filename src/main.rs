//! Hazard Run headless driver
//!
//! Plays a session with a seeded random-walk input generator and logs what
//! happens. Useful for soak-testing level tables without a renderer.
//!
//! Usage: `hazard-run [seed] [ticks] [levels.json]`

use std::process::ExitCode;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use hazard_run::sim::{GameEvent, LevelData, TickInput};
use hazard_run::{AudioManager, ConfigError, GamePhase, Session, SimConfig, levels};

/// Ticks between input changes of the random walker
const HOLD_TICKS: u32 = 20;

fn load_levels(path: Option<&str>) -> Result<Vec<LevelData>, ConfigError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            levels::from_json(&json)
        }
        None => Ok(levels::builtin()),
    }
}

fn random_input(rng: &mut Pcg32) -> TickInput {
    TickInput {
        up: rng.random_bool(0.3),
        down: rng.random_bool(0.3),
        left: rng.random_bool(0.3),
        right: rng.random_bool(0.45),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let seed = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(12345u64);
    let ticks = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(60 * 60 * 5u64);

    let table = match load_levels(args.get(3).map(String::as_str)) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load levels: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = match Session::new(table, SimConfig::default(), AudioManager::new()) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid level table: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Hazard Run (headless) starting with seed {seed} for {ticks} ticks");
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut input = TickInput::default();
    let mut completions = 0u32;

    session.start_game();
    for t in 0..ticks {
        if t % u64::from(HOLD_TICKS) == 0 {
            input = random_input(&mut rng);
        }
        session.submit_input(input);
        if session.tick() == Some(GameEvent::LevelComplete) {
            completions += 1;
        }
        for cue in session.audio_mut().drain() {
            log::trace!("tick {t}: {cue:?}");
        }
        if session.phase() != GamePhase::Playing {
            log::info!("Session left Playing at tick {t}");
            break;
        }
    }

    println!(
        "level {}/{}, deaths {}, levels cleared {}, phase {:?}",
        session.level_index() + 1,
        session.level_count(),
        session.deaths(),
        completions,
        session.phase()
    );
    ExitCode::SUCCESS
}
