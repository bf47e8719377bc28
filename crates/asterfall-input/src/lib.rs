//! Pressure-trigger logic for ASTERFALL.
//!
//! Pure functions that turn a continuous touch-pressure series into
//! discrete fire decisions. No ECS dependency — operates on plain data.

pub mod trigger;

pub use trigger::{FireDecision, TriggerPhase, TriggerState};
