//! Spawn scheduler — one asteroid per period while the game runs.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use asterfall_core::constants::*;
use asterfall_core::difficulty::DifficultyProfile;

use crate::arena_setup;
use crate::session::GameSession;

/// Initial placement and push for one asteroid.
#[derive(Debug, Clone, Copy)]
pub struct AsteroidRoll {
    /// Left edge of the body, uniform across the screen width.
    pub x: f64,
    /// Launch angle in radians: straight down ±22.5°, quantized.
    pub angle: f64,
    /// Impulse magnitude in `[0.5, speed_scale + 0.5)`, in hundredths.
    pub magnitude: f64,
}

/// Roll placement and push for the next asteroid.
pub fn roll(rng: &mut ChaCha8Rng, profile: &DifficultyProfile) -> AsteroidRoll {
    let x = rng.gen_range(0.0..SCREEN_WIDTH);
    let angle_step = rng.gen_range(0..64i32) - 32;
    let angle = SPAWN_ANGLE_BASE + angle_step as f64 * (SPAWN_ANGLE_SPREAD / 32.0);
    let magnitude = (rng.gen_range(0..(profile.speed_scale * 100.0) as u32) + 50) as f64 / 100.0;
    AsteroidRoll { x, angle, magnitude }
}

/// Advance the spawn clock; on expiry, spawn one asteroid and re-arm.
/// Only called while the session is Playing; Pause leaves the clock
/// untouched and Resume re-arms it for a full period.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, session: &mut GameSession) {
    debug_assert!(session.spawn_ticks > 0, "spawner ran without being armed");
    session.spawn_ticks = session.spawn_ticks.saturating_sub(1);
    if session.spawn_ticks == 0 {
        let roll = roll(rng, &session.difficulty);
        arena_setup::spawn_asteroid(world, &roll, session.difficulty.asteroid_size);
        session.arm_spawner();
    }
}
