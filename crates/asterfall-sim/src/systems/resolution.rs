//! Contact resolution policy — what a contact means for the game.
//!
//! Consumes the arena layer's contact events in order. Participants
//! are despawned before any further logic runs, so a duplicate or
//! stale event referencing a removed entity is a no-op, never an
//! error, and nothing can be scored twice.

use hecs::World;

use asterfall_core::components::Collider;
use asterfall_core::constants::{BOTTOM_DODGE_MARGIN, SCREEN_HEIGHT};
use asterfall_core::enums::{ArenaEdge, EntityKind, GamePhase};
use asterfall_core::events::FeedbackEvent;

use crate::session::GameSession;
use crate::systems::contact::ContactEvent;

/// Apply the resolution policy to one tick's contact batch.
pub fn run(
    world: &mut World,
    session: &mut GameSession,
    contacts: Vec<ContactEvent>,
    events: &mut Vec<FeedbackEvent>,
) {
    for contact in contacts {
        // A ship hit ends the session mid-batch; everything after is moot.
        if session.phase != GamePhase::Playing {
            return;
        }

        match contact {
            ContactEvent::Bodies {
                a,
                a_kind,
                b,
                b_kind,
                at,
            } => {
                if !world.contains(a) || !world.contains(b) {
                    continue;
                }

                if a_kind == EntityKind::Ship || b_kind == EntityKind::Ship {
                    game_over(world, session, events);
                    continue;
                }

                let shot = matches!(
                    (a_kind, b_kind),
                    (EntityKind::Laser, EntityKind::Asteroid)
                        | (EntityKind::Asteroid, EntityKind::Laser)
                );
                if shot {
                    let _ = world.despawn(a);
                    let _ = world.despawn(b);
                    session.score += 1;
                    events.push(FeedbackEvent::AsteroidShot { x: at.x, y: at.y });
                }
                // Asteroid-asteroid: physical response only, handled by
                // the arena layer.
            }
            ContactEvent::Boundary {
                body,
                kind,
                edge,
                at,
            } => {
                if !world.contains(body) {
                    continue;
                }

                match kind {
                    // A bolt dies on any edge.
                    EntityKind::Laser => {
                        let _ = world.despawn(body);
                    }
                    // An asteroid clearing the bottom margin was dodged.
                    EntityKind::Asteroid
                        if edge == ArenaEdge::Bottom
                            && at.y >= SCREEN_HEIGHT + BOTTOM_DODGE_MARGIN =>
                    {
                        let _ = world.despawn(body);
                        session.score += 1;
                        events.push(FeedbackEvent::AsteroidDodged);
                    }
                    // Side and top contacts reflect; the ship never
                    // reaches an edge (it is confined to the screen).
                    _ => {}
                }
            }
        }
    }
}

/// Terminal transition: clear the arena and record the final score.
fn game_over(world: &mut World, session: &mut GameSession, events: &mut Vec<FeedbackEvent>) {
    session.phase = GamePhase::GameOver;
    events.push(FeedbackEvent::ShipDestroyed {
        score: session.score,
    });

    let doomed: Vec<hecs::Entity> = {
        let mut query = world.query::<&Collider>();
        query.iter().map(|(entity, _)| entity).collect()
    };
    for entity in doomed {
        let _ = world.despawn(entity);
    }
}
