//! Simulation engine for ASTERFALL.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod arena_setup;
pub mod engine;
pub mod session;
pub mod systems;

pub use asterfall_core as core;
pub use engine::SimulationEngine;

#[cfg(test)]
mod tests;
