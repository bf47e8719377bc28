//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.

use hecs::World;

use asterfall_core::constants::DT;
use asterfall_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }
}
