//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Difficulty tier selected on the main menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// What a collidable body is. Carried as a component on every spawned
/// body so contact resolution can switch on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The player's ship. Exactly one exists while a session is active.
    Ship,
    /// A falling asteroid.
    Asteroid,
    /// A fired laser bolt.
    Laser,
}

/// Game phase (top-level state).
///
/// `Menu -> Countdown -> Playing <-> Paused`; any ship contact moves
/// `Playing -> GameOver`, which exits via restart (fresh Countdown) or
/// quit (back to Menu).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Countdown,
    Playing,
    Paused,
    GameOver,
}

/// Which arena edge a body touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArenaEdge {
    Left,
    Right,
    Top,
    Bottom,
}
