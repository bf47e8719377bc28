//! Game state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::components::BodySize;
use crate::enums::{DifficultyTier, GamePhase};
use crate::events::FeedbackEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state handed to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub difficulty: DifficultyTier,
    pub score: u32,
    /// Remaining countdown value, present only in the Countdown phase.
    pub countdown: Option<u8>,
    /// The player's ship, present from Countdown through Playing/Paused.
    pub ship: Option<ShipView>,
    pub asteroids: Vec<BodyView>,
    pub lasers: Vec<BodyView>,
    /// Decorative drifters on the main menu.
    pub menu_drifters: Vec<BodyView>,
    pub events: Vec<FeedbackEvent>,
}

/// The ship for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    /// Whether the player is dragging (selects the exhaust-flame sprite).
    pub thrusting: bool,
}

/// A moving body for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyView {
    /// Stable id for render-side interpolation.
    pub id: u64,
    pub position: Position,
    pub velocity: Velocity,
    pub size: BodySize,
}
