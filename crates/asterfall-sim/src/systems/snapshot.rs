//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use asterfall_core::components::{BodySize, Collider, MenuDrift};
use asterfall_core::enums::{EntityKind, GamePhase};
use asterfall_core::events::FeedbackEvent;
use asterfall_core::state::{BodyView, GameStateSnapshot, ShipView};
use asterfall_core::types::{Position, SimTime, Velocity};

use crate::session::GameSession;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    session: &GameSession,
    events: Vec<FeedbackEvent>,
) -> GameStateSnapshot {
    let mut ship = None;
    let mut asteroids = Vec::new();
    let mut lasers = Vec::new();

    for (entity, (collider, pos, vel, size)) in world
        .query::<(&Collider, &Position, &Velocity, &BodySize)>()
        .iter()
    {
        match collider.kind {
            EntityKind::Ship => {
                ship = Some(ShipView {
                    position: *pos,
                    thrusting: session.dragging,
                });
            }
            EntityKind::Asteroid => asteroids.push(body_view(entity, pos, vel, size)),
            EntityKind::Laser => lasers.push(body_view(entity, pos, vel, size)),
        }
    }

    let mut menu_drifters: Vec<BodyView> = world
        .query::<(&MenuDrift, &Position, &Velocity, &BodySize)>()
        .iter()
        .map(|(entity, (_, pos, vel, size))| body_view(entity, pos, vel, size))
        .collect();

    asteroids.sort_by_key(|b| b.id);
    lasers.sort_by_key(|b| b.id);
    menu_drifters.sort_by_key(|b| b.id);

    GameStateSnapshot {
        time: *time,
        phase: session.phase,
        difficulty: session.difficulty.tier,
        score: session.score,
        countdown: (session.phase == GamePhase::Countdown).then_some(session.countdown),
        ship,
        asteroids,
        lasers,
        menu_drifters,
        events,
    }
}

fn body_view(entity: hecs::Entity, pos: &Position, vel: &Velocity, size: &BodySize) -> BodyView {
    BodyView {
        id: entity.to_bits().get(),
        position: *pos,
        velocity: *vel,
        size: *size,
    }
}
