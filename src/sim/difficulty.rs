//! Difficulty ramp
//!
//! Both curves are re-derived from total game time every tick rather than
//! integrated, so they are exact regardless of tick jitter.

use crate::tuning::Tuning;

/// Block speed after `t` seconds of play
#[inline]
pub fn speed_at(tuning: &Tuning, t: f32) -> f32 {
    tuning.initial_move_speed + t * tuning.speed_increase_rate
}

/// Spawn interval after `t` seconds of play, clamped to the minimum
#[inline]
pub fn interval_at(tuning: &Tuning, t: f32) -> f32 {
    (tuning.initial_spawn_interval - t * tuning.spawn_rate_increase_rate)
        .max(tuning.min_spawn_interval)
}
