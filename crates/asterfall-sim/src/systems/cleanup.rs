//! Cleanup system: removes bodies that have left the arena entirely.
//!
//! The resolution policy removes everything it has an opinion about;
//! this sweep catches the rest — menu drifters finishing their
//! crossing and any stray body the reflection response let slip.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use asterfall_core::components::BodySize;
use asterfall_core::types::{Position, Rect};

use crate::arena_setup;

/// Despawn every body whose rectangle no longer intersects the arena.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let arena = arena_setup::arena_rect();
    for (entity, (pos, size)) in world.query_mut::<(&Position, &BodySize)>() {
        let rect = Rect::from_center(*pos, size.width, size.height);
        if !rect.intersects(&arena) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
