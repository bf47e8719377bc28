//! Difficulty tuning table.

use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;
use crate::enums::DifficultyTier;

/// Tuning parameters for one difficulty tier. Selected once at game
/// start and read-only for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub tier: DifficultyTier,
    /// Seconds between asteroid spawns.
    pub spawn_interval_secs: f64,
    /// Asteroid body edge length in points.
    pub asteroid_size: f64,
    /// Upper bound on the random part of the spawn impulse.
    pub speed_scale: f64,
}

impl DifficultyProfile {
    /// Total pure lookup over the three tiers.
    pub fn for_tier(tier: DifficultyTier) -> Self {
        match tier {
            DifficultyTier::Easy => Self {
                tier,
                spawn_interval_secs: 0.8,
                asteroid_size: 60.0,
                speed_scale: 1.0,
            },
            DifficultyTier::Medium => Self {
                tier,
                spawn_interval_secs: 0.5,
                asteroid_size: 60.0,
                speed_scale: 1.1,
            },
            DifficultyTier::Hard => Self {
                tier,
                spawn_interval_secs: 0.25,
                asteroid_size: 40.0,
                speed_scale: 1.5,
            },
        }
    }

    /// Spawn interval in whole ticks.
    pub fn spawn_interval_ticks(&self) -> u64 {
        (self.spawn_interval_secs * TICK_RATE as f64).round() as u64
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::for_tier(DifficultyTier::Easy)
    }
}
