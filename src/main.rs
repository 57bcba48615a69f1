//! Block Rush entry point
//!
//! Headless driver: runs the simulation at the fixed timestep with the
//! autopilot steering, then reports the outcome and records the score.
//! The embedding loop (here, this binary) owns wall-clock time and input;
//! the sim crate owns all gameplay semantics.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use block_rush::consts::{MAX_SUBSTEPS, SIM_DT, TICKS_PER_SECOND};
use block_rush::highscores::HighScores;
use block_rush::sim::{GamePhase, GameState, TickInput, tick};
use block_rush::tuning::Tuning;

fn main() {
    env_logger::init();
    log::info!("Block Rush starting...");

    let tuning_path =
        std::env::var("BLOCK_RUSH_TUNING").unwrap_or_else(|_| "tuning.json".into());
    let tuning = match Tuning::load(&tuning_path) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("Tuning is unusable: {e}");
            std::process::exit(1);
        }
    };

    let seed = std::env::var("BLOCK_RUSH_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(now_millis);
    let demo_secs: f32 = env_or("BLOCK_RUSH_DEMO_SECS", 60.0);
    let realtime = std::env::var("BLOCK_RUSH_REALTIME").is_ok();

    let mut state = GameState::new(seed, &tuning);
    log::info!("Game initialized with seed: {seed}");

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let max_ticks = (demo_secs / SIM_DT).ceil() as u64;

    if realtime {
        run_realtime(&mut state, &input, &tuning, max_ticks);
    } else {
        run_fast(&mut state, &input, &tuning, max_ticks);
    }

    report(&state);
}

/// Step the simulation as fast as the CPU allows
fn run_fast(state: &mut GameState, input: &TickInput, tuning: &Tuning, max_ticks: u64) {
    while state.phase == GamePhase::Running && state.time_ticks < max_ticks {
        tick(state, input, tuning, SIM_DT);
        log_status(state, tuning);
    }
}

/// Pace the simulation against the wall clock with the accumulator loop
fn run_realtime(state: &mut GameState, input: &TickInput, tuning: &Tuning, max_ticks: u64) {
    let mut last = Instant::now();
    let mut accumulator = 0.0f32;

    while state.phase == GamePhase::Running && state.time_ticks < max_ticks {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32().min(0.1);
        last = now;
        accumulator += dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, input, tuning, SIM_DT);
            log_status(state, tuning);
            accumulator -= SIM_DT;
            substeps += 1;
        }

        std::thread::sleep(Duration::from_millis(4));
    }
}

/// Periodic HUD line, once per five simulated seconds
fn log_status(state: &GameState, tuning: &Tuning) {
    if state.time_ticks > 0 && state.time_ticks.is_multiple_of(5 * TICKS_PER_SECOND) {
        log::info!(
            "t={:.0}s speed={:.2} spawn_rate={:.2}/s blocks={} score={}",
            state.survived_secs(),
            state.current_speed(tuning),
            state.spawn_rate(tuning),
            state.active_block_count(),
            state.score
        );
    }
}

/// Final outcome plus leaderboard bookkeeping
fn report(state: &GameState) {
    match state.phase {
        GamePhase::GameOver => log::info!(
            "Run over after {:.1}s: score {}, {} blocks dodged",
            state.survived_secs(),
            state.score,
            state.blocks_dodged
        ),
        _ => log::info!(
            "Demo finished upright after {:.1}s: score {}, {} blocks dodged, {} on screen",
            state.survived_secs(),
            state.score,
            state.blocks_dodged,
            state.active_block_count()
        ),
    }

    let scores_path =
        std::env::var("BLOCK_RUSH_SCORES").unwrap_or_else(|_| "highscores.json".into());
    let mut scores = HighScores::load(&scores_path);
    match scores.add_score(
        state.score,
        state.blocks_dodged,
        state.survived_secs(),
        now_millis() / 1000,
    ) {
        Some(rank) => {
            log::info!("New high score, rank {rank}");
            scores.save(&scores_path);
        }
        None => log::info!("Score did not make the leaderboard"),
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
