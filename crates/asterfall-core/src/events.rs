//! Events emitted by the simulation for haptic/audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Feedback events for the frontend, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedbackEvent {
    /// One step of the pre-game countdown (3, 2, 1).
    CountdownStep { value: u8 },
    /// The countdown finished; asteroids are falling.
    GameStarted,
    /// A laser bolt left the ship.
    LaserFired { x: f64, y: f64 },
    /// A bolt destroyed an asteroid.
    AsteroidShot { x: f64, y: f64 },
    /// An asteroid fell past the bottom of the arena uncontested.
    AsteroidDodged,
    /// The ship was hit; the session is over. Cue the vibration.
    ShipDestroyed { score: u32 },
}
