//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. A
//! command that is not legal in the current game phase is ignored.

use serde::{Deserialize, Serialize};

use crate::enums::DifficultyTier;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Pick a difficulty tier on the main menu.
    SelectDifficulty { tier: DifficultyTier },
    /// Leave the menu and start the pre-game countdown.
    StartGame,
    /// Pause a running game.
    Pause,
    /// Resume a paused game.
    Resume,
    /// From game-over or the pause menu: tear down and start a fresh
    /// countdown with the same difficulty.
    Restart,
    /// From game-over or the pause menu: back to the main menu.
    QuitToMenu,
    /// A touch sample while dragging: finger position and pressure.
    /// Only samples landing inside the ship's rectangle move the ship
    /// or feed the firing trigger.
    DragShip { x: f64, y: f64, force: f64 },
    /// The finger lifted; resets the firing trigger.
    EndDrag,
}
