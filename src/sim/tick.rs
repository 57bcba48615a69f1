//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Per tick:
//! collision check first (a hit freezes the world in place), then time and
//! difficulty, steering, block advance, floor scroll, spawning, cleanup.

use crate::consts::*;
use crate::tuning::Tuning;

use super::collision::rig_hits_any;
use super::difficulty;
use super::spawner;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Steering axis in [-1, 1]; arrow keys map to the endpoints
    pub steer: f32,
    /// Pause toggle (edge-triggered)
    pub pause: bool,
    /// Restart after game over (edge-triggered)
    pub restart: bool,
    /// Demo mode - the autopilot steers instead of `steer`
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Running,
            GamePhase::GameOver => {}
        }
    }

    match state.phase {
        GamePhase::Paused => return,
        GamePhase::GameOver => {
            if input.restart {
                state.reset(tuning);
                log::info!("Run restarted (seed {})", state.seed);
            }
            return;
        }
        GamePhase::Running => {}
    }

    let steer = if input.autopilot {
        autopilot_steer(state, tuning)
    } else {
        input.steer
    };

    // Collision check before anything moves, so a hit freezes the world
    // in the configuration the player saw.
    let body = state.rig.body_aabb(tuning);
    if let Some(id) = rig_hits_any(&body, &state.blocks) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: rig hit block {} after {:.1}s (score {})",
            id,
            state.game_time,
            state.score
        );
        return;
    }

    let dt = dt.max(0.0);
    state.time_ticks += 1;
    state.game_time += dt;

    // Survival score accrues once per simulated second
    if state.time_ticks.is_multiple_of(TICKS_PER_SECOND) {
        state.score += SURVIVAL_SCORE_PER_SEC;
    }

    // Difficulty is re-derived from total play time each tick
    let speed = difficulty::speed_at(tuning, state.game_time);
    let interval = difficulty::interval_at(tuning, state.game_time);

    // Steer the rig within the lane boundaries
    state.rig.steer(
        steer,
        tuning.move_speed,
        dt,
        tuning.left_boundary,
        tuning.right_boundary,
    );

    // Move all active blocks toward the rig
    for block in &mut state.blocks {
        block.advance(speed, dt);
    }

    // Scroll the floor texture in lockstep with block speed
    state.floor.update(speed, state.game_time);

    // Spawn one block per timer expiry, at a row picked by the seeded RNG
    let expiries = state.spawn_timer.advance(dt, interval);
    for _ in 0..expiries {
        let row = spawner::pick_row(&mut state.rng);
        let pos = tuning.spawn_rows[row];
        let id = state.spawn_block(pos, tuning.block_half_extents);
        log::debug!("Spawned block {} in row {} at z {:.1}", id, row, pos.z);
    }

    // Drop blocks that scrolled past the delete plane behind the rig
    let rig_z = state.rig.pos.z;
    let before = state.blocks.len();
    state
        .blocks
        .retain(|b| !b.is_behind(rig_z, tuning.delete_distance));
    let dodged = (before - state.blocks.len()) as u32;
    if dodged > 0 {
        state.blocks_dodged += dodged;
        state.score += u64::from(dodged) * BLOCK_DODGE_SCORE;
    }
}

/// Demo-mode steering: head for the row whose nearest oncoming block is
/// farthest away (an empty row wins outright).
fn autopilot_steer(state: &GameState, tuning: &Tuning) -> f32 {
    let mut best_x = state.rig.pos.x;
    let mut best_clearance = f32::NEG_INFINITY;

    for row in &tuning.spawn_rows {
        let clearance = state
            .blocks
            .iter()
            .filter(|b| {
                (b.pos.x - row.x).abs() <= b.half_extents.x + tuning.body_half_extents.x
            })
            .map(|b| b.pos.z - state.rig.pos.z)
            .filter(|&d| d > 0.0)
            .fold(f32::INFINITY, f32::min);
        if clearance > best_clearance {
            best_clearance = clearance;
            best_x = row.x;
        }
    }

    let target = best_x.clamp(tuning.left_boundary, tuning.right_boundary);
    crate::steer_toward(state.rig.pos.x, target, AUTOPILOT_DEADZONE)
}
