//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, rig_hits_any};
pub use difficulty::{interval_at, speed_at};
pub use spawner::SpawnTimer;
pub use state::{Block, FloorScroll, GamePhase, GameState, Rig};
pub use tick::{TickInput, tick};
