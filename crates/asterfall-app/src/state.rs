//! Shared state between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use asterfall_core::commands::PlayerCommand;
use asterfall_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the game loop, for synchronous polling.
/// `None` until the first tick completes.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// Convenience for the driver side of the command channel.
pub fn send_player_command(
    tx: &mpsc::Sender<GameLoopCommand>,
    command: PlayerCommand,
) -> Result<(), mpsc::SendError<GameLoopCommand>> {
    tx.send(GameLoopCommand::PlayerCommand(command))
}
