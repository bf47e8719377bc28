//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components
//! or on the `GameSession`.

pub mod cleanup;
pub mod contact;
pub mod countdown;
pub mod menu_field;
pub mod movement;
pub mod resolution;
pub mod snapshot;
pub mod spawner;
