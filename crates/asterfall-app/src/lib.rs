//! ASTERFALL runtime driver.
//!
//! Wires the simulation engine to a fixed-rate game-loop thread, stores
//! the one-boolean preference, and ships a scripted pilot so the binary
//! can play a full session headless.

pub mod game_loop;
pub mod pilot;
pub mod prefs;
pub mod state;

pub use asterfall_core as core;
