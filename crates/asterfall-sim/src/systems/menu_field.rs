//! Decorative menu asteroid field.
//!
//! Runs only in the Menu phase, on its own half-second cadence,
//! independent of the in-game spawn scheduler. Drifters cross the
//! screen after a short randomized delay and are swept up by the
//! cleanup system once they leave the arena.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use asterfall_core::components::MenuDrift;
use asterfall_core::constants::MENU_SPAWN_INTERVAL_TICKS;
use asterfall_core::types::Velocity;

use crate::arena_setup;
use crate::session::GameSession;

/// Throw drifters on cadence and release the ones whose delay expired.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, session: &mut GameSession) {
    session.menu_ticks = session.menu_ticks.saturating_sub(1);
    if session.menu_ticks == 0 {
        arena_setup::throw_menu_drifter(world, rng);
        session.menu_ticks = MENU_SPAWN_INTERVAL_TICKS;
    }

    for (_entity, (drift, vel)) in world.query_mut::<(&mut MenuDrift, &mut Velocity)>() {
        if drift.delay_ticks > 0 {
            drift.delay_ticks -= 1;
            if drift.delay_ticks == 0 {
                *vel = drift.cruise;
            }
        }
    }
}
