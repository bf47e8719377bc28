//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::types::Velocity;

/// Participation in contact evaluation, with the explicit kind tag
/// resolution switches on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub kind: EntityKind,
}

/// Body extent in points (axis-aligned).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodySize {
    pub width: f64,
    pub height: f64,
}

/// Decorative menu drifter. Entities with this component never take
/// part in contact evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MenuDrift {
    /// Ticks to wait before the drifter starts moving.
    pub delay_ticks: u32,
    /// Crossing velocity applied once the delay expires.
    pub cruise: Velocity,
}
