//! Entity spawn factories for populating the arena.
//!
//! Creates the ship, asteroids, laser bolts, and decorative menu
//! drifters with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use asterfall_core::components::{BodySize, Collider, MenuDrift};
use asterfall_core::constants::*;
use asterfall_core::enums::EntityKind;
use asterfall_core::types::{Position, Rect, Velocity};

use crate::systems::spawner::AsteroidRoll;

/// The arena: the visible screen inflated by the margin on every side.
pub fn arena_rect() -> Rect {
    Rect::new(
        -ARENA_MARGIN,
        -ARENA_MARGIN,
        SCREEN_WIDTH + ARENA_MARGIN,
        SCREEN_HEIGHT + ARENA_MARGIN,
    )
}

/// The visible screen. The ship is confined to it.
pub fn screen_rect() -> Rect {
    Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// Convert an instantaneous push into a velocity. The push scales
/// inversely with body mass, which scales with area — a tiny laser
/// bolt streaks while a full-size asteroid ambles.
pub fn impulse_velocity(angle: f64, magnitude: f64, size: &BodySize) -> Velocity {
    let mass = (size.width * size.height) / REFERENCE_BODY_AREA;
    Velocity::from_angle(angle, magnitude / mass * IMPULSE_SPEED_SCALE)
}

/// Spawn the player's ship at its staging position.
pub fn spawn_ship(world: &mut World) -> hecs::Entity {
    world.spawn((
        Collider {
            kind: EntityKind::Ship,
        },
        Position::new(SHIP_STAGE_X, SHIP_STAGE_Y),
        Velocity::default(),
        BodySize {
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
        },
    ))
}

/// Spawn one asteroid from a scheduler roll. `roll.x` is the body's
/// left edge; it enters 20 points below the arena's top edge.
pub fn spawn_asteroid(world: &mut World, roll: &AsteroidRoll, size: f64) -> hecs::Entity {
    let body = BodySize {
        width: size,
        height: size,
    };
    let position = Position::new(
        roll.x + size / 2.0,
        -ARENA_MARGIN + SPAWN_EDGE_INSET + size / 2.0,
    );
    let velocity = impulse_velocity(roll.angle, roll.magnitude, &body);

    world.spawn((
        Collider {
            kind: EntityKind::Asteroid,
        },
        position,
        velocity,
        body,
    ))
}

/// Spawn a laser bolt directly above the ship, pushed straight up.
pub fn spawn_laser(world: &mut World, ship_center: Position) -> hecs::Entity {
    let body = BodySize {
        width: LASER_WIDTH,
        height: LASER_HEIGHT,
    };
    let position = Position::new(ship_center.x, ship_center.y - LASER_MUZZLE_OFFSET);
    let velocity = impulse_velocity(LASER_ANGLE, LASER_IMPULSE_MAGNITUDE, &body);

    world.spawn((
        Collider {
            kind: EntityKind::Laser,
        },
        position,
        velocity,
        body,
    ))
}

/// Throw one decorative drifter from the left, right, or top screen
/// edge toward the far side. Drifters never take part in contact
/// evaluation and despawn once they leave the arena.
pub fn throw_menu_drifter(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let size = MENU_ASTEROID_SIZE;
    let side = rng.gen_range(0..3u32);
    let vertical_scale = (rng.gen_range(0..151u32) + 50) as f64 / 100.0;
    let crossing_secs = rng.gen_range(1..4u32) as f64;
    let delay_secs = rng.gen_range(1..20u32) as f64 / 10.0;

    let (position, travel_x, travel_y) = match side {
        // Left edge, crossing rightward.
        0 => {
            let y = rng.gen_range(0.0..SCREEN_HEIGHT + 2.0 * size) - size;
            let toward = if y < SCREEN_HEIGHT / 2.0 {
                SCREEN_HEIGHT - y
            } else {
                -y
            };
            (
                Position::new(-size / 2.0, y),
                SCREEN_WIDTH + 2.0 * size,
                toward * vertical_scale,
            )
        }
        // Right edge, crossing leftward.
        1 => {
            let y = rng.gen_range(0.0..SCREEN_HEIGHT + 2.0 * size) - size;
            let toward = if y < SCREEN_HEIGHT / 2.0 {
                SCREEN_HEIGHT - y
            } else {
                -y
            };
            (
                Position::new(SCREEN_WIDTH + size / 2.0, y),
                -SCREEN_WIDTH - 2.0 * size,
                toward * vertical_scale,
            )
        }
        // Top edge, crossing downward.
        _ => {
            let x = rng.gen_range(0.0..SCREEN_WIDTH + 2.0 * size) - size;
            let toward = if x < SCREEN_WIDTH / 2.0 {
                SCREEN_WIDTH - x
            } else {
                -x
            };
            (
                Position::new(x, -size / 2.0),
                toward * vertical_scale,
                SCREEN_HEIGHT + 2.0 * size,
            )
        }
    };

    let cruise = Velocity::new(travel_x / crossing_secs, travel_y / crossing_secs);
    let delay_ticks = (delay_secs * TICK_RATE as f64) as u32;

    world.spawn((
        MenuDrift {
            delay_ticks,
            cruise,
        },
        position,
        Velocity::default(),
        BodySize {
            width: size,
            height: size,
        },
    ))
}
