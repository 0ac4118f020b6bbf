//! Collision and display-bounds tests
//!
//! Collisions are circle vs circle on the collision radius. Display tests
//! use the sprite rectangle (centred origin).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::consts::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FAN_SPAWN};

/// Which edges `Display::is_leaving` checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Any,
    Vertical,
}

/// The visible play area, origin top-left, y down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Display {
    pub width: f32,
    pub height: f32,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        }
    }
}

impl Display {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Fan start position scaled to this display
    pub fn fan_spawn(&self) -> Vec2 {
        Vec2::new(
            self.width - (DISPLAY_WIDTH - FAN_SPAWN.x),
            FAN_SPAWN.y * self.height / DISPLAY_HEIGHT,
        )
    }

    /// True when the entity's sprite is past an edge and still moving outward
    pub fn is_leaving(&self, entity: &Entity, axis: Axis) -> bool {
        let half = entity.sprite.half_extent();
        let min = entity.pos - half;
        let max = entity.pos + half;
        let vel = entity.velocity;

        if axis == Axis::Any {
            if min.x < 0.0 && vel.x < 0.0 {
                return true;
            }
            if max.x > self.width && vel.x > 0.0 {
                return true;
            }
        }

        (min.y < 0.0 && vel.y < 0.0) || (max.y > self.height && vel.y > 0.0)
    }

    /// True when any part of the entity's sprite overlaps the display
    pub fn is_visible(&self, entity: &Entity) -> bool {
        let half = entity.sprite.half_extent();
        let min = entity.pos - half;
        let max = entity.pos + half;
        max.x > 0.0 && min.x < self.width && max.y > 0.0 && min.y < self.height
    }
}

/// Radius-based overlap test
#[inline]
pub fn intersects(a: &Entity, b: &Entity) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}
