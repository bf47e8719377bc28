//! Contact detection — the arena's dynamics layer.
//!
//! Finds body-body overlaps and arena-edge touches, emits one event
//! per contact onset, and applies the physical response (elastic
//! exchange between bodies, reflection off edges). What a contact
//! *means* is decided downstream by the resolution policy; this layer
//! is deliberately ignorant of scoring and game state.

use std::collections::HashSet;

use hecs::{Entity, World};

use asterfall_core::components::{BodySize, Collider};
use asterfall_core::enums::{ArenaEdge, EntityKind};
use asterfall_core::types::{Position, Rect, Velocity};

use crate::arena_setup;

/// A contact noticed this tick, carrying participant identity and the
/// contact point.
#[derive(Debug, Clone, Copy)]
pub enum ContactEvent {
    Bodies {
        a: Entity,
        a_kind: EntityKind,
        b: Entity,
        b_kind: EntityKind,
        at: Position,
    },
    Boundary {
        body: Entity,
        kind: EntityKind,
        edge: ArenaEdge,
        at: Position,
    },
}

/// Tracks which overlaps were already reported, so a contact is
/// emitted once at onset rather than on every tick of overlap.
#[derive(Debug, Default)]
pub struct ContactLedger {
    touching_pairs: HashSet<(u64, u64)>,
    touching_edges: HashSet<(u64, ArenaEdge)>,
}

impl ContactLedger {
    pub fn clear(&mut self) {
        self.touching_pairs.clear();
        self.touching_edges.clear();
    }
}

fn pair_key(a: Entity, b: Entity) -> (u64, u64) {
    let a = a.to_bits().get();
    let b = b.to_bits().get();
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Detect contacts for all collidable bodies and apply responses.
/// Returns the onset events in a deterministic order.
pub fn run(world: &mut World, ledger: &mut ContactLedger) -> Vec<ContactEvent> {
    let arena = arena_setup::arena_rect();

    let bodies: Vec<(Entity, EntityKind, Rect)> = {
        let mut query = world.query::<(&Collider, &Position, &BodySize)>();
        query
            .iter()
            .map(|(entity, (collider, pos, size))| {
                (
                    entity,
                    collider.kind,
                    Rect::from_center(*pos, size.width, size.height),
                )
            })
            .collect()
    };

    let mut events = Vec::new();

    // Body-body overlaps.
    let mut overlapping = HashSet::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, a_kind, a_rect) = bodies[i];
            let (b, b_kind, b_rect) = bodies[j];
            if !a_rect.intersects(&b_rect) {
                continue;
            }
            let key = pair_key(a, b);
            overlapping.insert(key);
            if ledger.touching_pairs.insert(key) {
                events.push(ContactEvent::Bodies {
                    a,
                    a_kind,
                    b,
                    b_kind,
                    at: overlap_center(&a_rect, &b_rect),
                });
                bounce(world, a, b, &a_rect, &b_rect);
            }
        }
    }
    ledger.touching_pairs.retain(|key| overlapping.contains(key));

    // Arena-edge touches.
    let mut at_edges = HashSet::new();
    for &(entity, kind, rect) in &bodies {
        for edge in touched_edges(&rect, &arena) {
            let key = (entity.to_bits().get(), edge);
            at_edges.insert(key);
            if ledger.touching_edges.insert(key) {
                events.push(ContactEvent::Boundary {
                    body: entity,
                    kind,
                    edge,
                    at: edge_point(&rect, &arena, edge),
                });
                reflect(world, entity, edge);
            }
        }
    }
    ledger.touching_edges.retain(|key| at_edges.contains(key));

    events
}

/// Center of the overlap region between two rectangles.
fn overlap_center(a: &Rect, b: &Rect) -> Position {
    Rect::new(
        a.min_x.max(b.min_x),
        a.min_y.max(b.min_y),
        a.max_x.min(b.max_x),
        a.max_y.min(b.max_y),
    )
    .center()
}

/// Which arena edges a body rectangle currently touches or crosses.
fn touched_edges(rect: &Rect, arena: &Rect) -> Vec<ArenaEdge> {
    let mut edges = Vec::new();
    if rect.min_x <= arena.min_x {
        edges.push(ArenaEdge::Left);
    }
    if rect.max_x >= arena.max_x {
        edges.push(ArenaEdge::Right);
    }
    if rect.min_y <= arena.min_y {
        edges.push(ArenaEdge::Top);
    }
    if rect.max_y >= arena.max_y {
        edges.push(ArenaEdge::Bottom);
    }
    edges
}

/// Point on the touched edge nearest the body center.
fn edge_point(rect: &Rect, arena: &Rect, edge: ArenaEdge) -> Position {
    let center = rect.center();
    match edge {
        ArenaEdge::Left => Position::new(arena.min_x, center.y),
        ArenaEdge::Right => Position::new(arena.max_x, center.y),
        ArenaEdge::Top => Position::new(center.x, arena.min_y),
        ArenaEdge::Bottom => Position::new(center.x, arena.max_y),
    }
}

/// Equal-mass elastic exchange along the center-to-center normal.
/// Only approaching pairs are resolved.
fn bounce(world: &mut World, a: Entity, b: Entity, a_rect: &Rect, b_rect: &Rect) {
    let ca = a_rect.center();
    let cb = b_rect.center();
    let dist = ca.distance_to(&cb);
    if dist < 1e-9 {
        return;
    }
    let dx = cb.x - ca.x;
    let dy = cb.y - ca.y;
    let nx = dx / dist;
    let ny = dy / dist;

    let va = match world.get::<&Velocity>(a) {
        Ok(v) => *v,
        Err(_) => return,
    };
    let vb = match world.get::<&Velocity>(b) {
        Ok(v) => *v,
        Err(_) => return,
    };

    let closing = (va.x - vb.x) * nx + (va.y - vb.y) * ny;
    if closing <= 0.0 {
        return;
    }

    if let Ok(mut vel) = world.get::<&mut Velocity>(a) {
        vel.x -= closing * nx;
        vel.y -= closing * ny;
    }
    if let Ok(mut vel) = world.get::<&mut Velocity>(b) {
        vel.x += closing * nx;
        vel.y += closing * ny;
    }
}

/// Reflect the velocity component pointing out of the arena.
fn reflect(world: &mut World, entity: Entity, edge: ArenaEdge) {
    if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
        match edge {
            ArenaEdge::Left if vel.x < 0.0 => vel.x = -vel.x,
            ArenaEdge::Right if vel.x > 0.0 => vel.x = -vel.x,
            ArenaEdge::Top if vel.y < 0.0 => vel.y = -vel.y,
            ArenaEdge::Bottom if vel.y > 0.0 => vel.y = -vel.y,
            _ => {}
        }
    }
}
