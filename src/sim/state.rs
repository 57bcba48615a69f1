//! Game state and core simulation types
//!
//! All state that must be persisted for resume/determinism lives here.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::difficulty;
use super::spawner::SpawnTimer;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay; the run starts here
    Running,
    /// Game is paused
    Paused,
    /// Run ended on a collision
    GameOver,
}

/// The player rig: camera plus collision body, constrained to the lane axis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rig {
    /// World position; steering moves only the X component
    pub pos: Vec3,
    /// Horizontal velocity actually applied last tick (clamping included)
    pub vel_x: f32,
}

impl Rig {
    /// Steer along X by a [-1, 1] axis, clamped to the lane boundaries
    pub fn steer(&mut self, axis: f32, move_speed: f32, dt: f32, left: f32, right: f32) {
        let axis = axis.clamp(-1.0, 1.0);
        let new_x = (self.pos.x + axis * move_speed * dt).clamp(left, right);
        self.vel_x = if dt > 0.0 { (new_x - self.pos.x) / dt } else { 0.0 };
        self.pos.x = new_x;
    }

    /// Collision body volume, offset from the rig origin
    pub fn body_aabb(&self, tuning: &Tuning) -> Aabb {
        Aabb::new(self.pos + tuning.body_offset, tuning.body_half_extents)
    }
}

/// A transient obstacle block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub pos: Vec3,
    pub half_extents: Vec3,
}

impl Block {
    /// Translate toward the rig (negative Z) at the given speed
    pub fn advance(&mut self, speed: f32, dt: f32) {
        self.pos.z -= speed * dt;
    }

    /// Collision volume
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.half_extents)
    }

    /// True once the block has scrolled past the delete plane behind the rig.
    /// `delete_distance` is negative (distance behind the rig).
    pub fn is_behind(&self, rig_z: f32, delete_distance: f32) -> bool {
        self.pos.z < rig_z + delete_distance
    }
}

/// Scrolling floor texture offset, kept in lockstep with block speed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloorScroll {
    pub offset: Vec2,
}

impl FloorScroll {
    /// Offset is derived from total elapsed time, not integrated, so it
    /// tracks `speed * elapsed` exactly as the speed ramps.
    pub fn update(&mut self, speed: f32, elapsed: f32) {
        self.offset = Vec2::new(0.0, -FLOOR_SCROLL_FACTOR * speed * elapsed);
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; advances one draw per spawn
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds of active play (drives the difficulty ramp)
    pub game_time: f32,
    /// Player rig
    pub rig: Rig,
    /// Active blocks (sorted by id for determinism)
    pub blocks: Vec<Block>,
    /// Spawn countdown
    pub spawn_timer: SpawnTimer,
    /// Floor texture scroll
    pub floor: FloorScroll,
    /// Score
    pub score: u64,
    /// Blocks that scrolled safely past the rig
    pub blocks_dodged: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new run with the given seed. The spawn timer starts armed
    /// with the initial interval, so the first block appears one full
    /// interval in.
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            time_ticks: 0,
            game_time: 0.0,
            rig: Rig::default(),
            blocks: Vec::new(),
            spawn_timer: SpawnTimer::armed(difficulty::interval_at(tuning, 0.0)),
            floor: FloorScroll::default(),
            score: 0,
            blocks_dodged: 0,
            next_id: 1,
        }
    }

    /// Reset the run in place: clear all blocks, rewind the difficulty
    /// ramp and score, re-arm the spawn timer. The rig stays where it is.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.blocks.clear();
        self.time_ticks = 0;
        self.game_time = 0.0;
        self.spawn_timer = SpawnTimer::armed(difficulty::interval_at(tuning, 0.0));
        self.floor = FloorScroll::default();
        self.score = 0;
        self.blocks_dodged = 0;
        self.phase = GamePhase::Running;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a block at a row position; returns its id
    pub fn spawn_block(&mut self, pos: Vec3, half_extents: Vec3) -> u32 {
        let id = self.next_entity_id();
        self.blocks.push(Block {
            id,
            pos,
            half_extents,
        });
        id
    }

    /// Current ramped block speed (for HUD display)
    pub fn current_speed(&self, tuning: &Tuning) -> f32 {
        difficulty::speed_at(tuning, self.game_time)
    }

    /// Current spawn rate in blocks per second (for HUD display)
    pub fn spawn_rate(&self, tuning: &Tuning) -> f32 {
        1.0 / difficulty::interval_at(tuning, self.game_time)
    }

    /// Number of live blocks
    pub fn active_block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Seconds survived this run
    pub fn survived_secs(&self) -> f32 {
        self.game_time
    }
}
