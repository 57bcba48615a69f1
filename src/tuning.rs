//! Designer-tunable gameplay parameters
//!
//! Everything a designer would tweak lives here: lane boundaries, spawn
//! rows, ramp rates, collision volumes. Persisted as JSON next to the
//! binary; a missing file means defaults.

use std::fs;
use std::io;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::REQUIRED_SPAWN_ROWS;

/// A tuning file that cannot be used
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("expected exactly {expected} spawn rows, got {got}")]
    SpawnRowCount { expected: usize, got: usize },
    #[error("block half extents must be positive on every axis, got {0}")]
    InvalidBlockExtents(Vec3),
    #[error("rig body half extents must be positive on every axis, got {0}")]
    InvalidBodyExtents(Vec3),
    #[error("left boundary {left} must be less than right boundary {right}")]
    InvalidBoundaries { left: f32, right: f32 },
    #[error("minimum spawn interval must be positive, got {0}")]
    InvalidMinInterval(f32),
    #[error("failed to read tuning file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Gameplay tuning parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement ===
    /// Rig steering speed (units per second)
    pub move_speed: f32,
    /// Left edge of the lane
    pub left_boundary: f32,
    /// Right edge of the lane
    pub right_boundary: f32,

    // === Spawning ===
    /// The three row positions blocks spawn at
    pub spawn_rows: Vec<Vec3>,
    /// Block speed at the start of a run
    pub initial_move_speed: f32,
    /// Seconds between spawns at the start of a run
    pub initial_spawn_interval: f32,
    /// Block speed gained per second of play
    pub speed_increase_rate: f32,
    /// Seconds shaved off the spawn interval per second of play
    pub spawn_rate_increase_rate: f32,
    /// Floor for the spawn interval
    pub min_spawn_interval: f32,

    // === Cleanup ===
    /// Distance behind the rig at which blocks are deleted (negative)
    pub delete_distance: f32,

    // === Collision volumes ===
    /// Half extents of a spawned block
    pub block_half_extents: Vec3,
    /// Collision body offset from the rig origin
    pub body_offset: Vec3,
    /// Half extents of the rig collision body
    pub body_half_extents: Vec3,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            left_boundary: -5.0,
            right_boundary: 5.0,

            spawn_rows: vec![
                Vec3::new(-3.0, 0.5, 30.0),
                Vec3::new(0.0, 0.5, 30.0),
                Vec3::new(3.0, 0.5, 30.0),
            ],
            initial_move_speed: 5.0,
            initial_spawn_interval: 2.0,
            speed_increase_rate: 0.1,
            spawn_rate_increase_rate: 0.05,
            min_spawn_interval: 0.3,

            delete_distance: -10.0,

            block_half_extents: Vec3::splat(0.5),
            body_offset: Vec3::ZERO,
            body_half_extents: Vec3::new(0.5, 1.0, 0.5),
        }
    }
}

impl Tuning {
    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.spawn_rows.len() != REQUIRED_SPAWN_ROWS {
            return Err(TuningError::SpawnRowCount {
                expected: REQUIRED_SPAWN_ROWS,
                got: self.spawn_rows.len(),
            });
        }
        if self.block_half_extents.min_element() <= 0.0 {
            return Err(TuningError::InvalidBlockExtents(self.block_half_extents));
        }
        if self.body_half_extents.min_element() <= 0.0 {
            return Err(TuningError::InvalidBodyExtents(self.body_half_extents));
        }
        if self.left_boundary >= self.right_boundary {
            return Err(TuningError::InvalidBoundaries {
                left: self.left_boundary,
                right: self.right_boundary,
            });
        }
        if self.min_spawn_interval <= 0.0 {
            return Err(TuningError::InvalidMinInterval(self.min_spawn_interval));
        }
        Ok(())
    }

    /// Load and validate tuning from a JSON file. A missing file falls back
    /// to defaults; a malformed or invalid file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No tuning file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let tuning: Self = serde_json::from_str(&json)?;
        tuning.validate()?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Write tuning to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TuningError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Tuning saved to {}", path.display());
        Ok(())
    }
}
