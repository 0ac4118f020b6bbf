//! Entity types
//!
//! Every simulated object shares one shape: position, motion, rotation,
//! animation and a category tag that selects which update pass owns it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable entity handle, valid until the store sweeps the entity away
pub type EntityId = u32;

/// Closed set of entity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Agent8, exactly one
    Player,
    /// The fan, exactly one
    Spawner,
    /// Falling tools
    Hazard,
    /// Coins
    Collectible,
    /// Stars burst from a collected coin (cosmetic)
    Reward,
    /// Lasers
    Projectile,
    /// Soft-deleted, fading out
    Destroyed,
}

/// Visual kind: which sprite strip an entity draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Agent8,
    Agent8Fall,
    Agent8Climb,
    Agent8Halt,
    Agent8Hang,
    Fan,
    Driver,
    Spanner,
    Coin,
    Star,
    Laser,
}

impl Sprite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sprite::Agent8 => "agent8",
            Sprite::Agent8Fall => "agent8_fall",
            Sprite::Agent8Climb => "agent8_climb",
            Sprite::Agent8Halt => "agent8_halt",
            Sprite::Agent8Hang => "agent8_hang",
            Sprite::Fan => "fan",
            Sprite::Driver => "driver",
            Sprite::Spanner => "spanner",
            Sprite::Coin => "coin",
            Sprite::Star => "star",
            Sprite::Laser => "laser",
        }
    }

    /// Number of frames in the sprite strip
    pub fn frame_count(&self) -> u32 {
        match self {
            Sprite::Agent8 => 1,
            Sprite::Agent8Fall => 1,
            Sprite::Agent8Climb => 5,
            Sprite::Agent8Halt => 6,
            Sprite::Agent8Hang => 4,
            Sprite::Fan => 8,
            Sprite::Driver => 1,
            Sprite::Spanner => 1,
            Sprite::Coin => 1,
            Sprite::Star => 1,
            Sprite::Laser => 1,
        }
    }

    /// Half of the frame's width and height (origins are centred)
    pub fn half_extent(&self) -> Vec2 {
        match self {
            Sprite::Agent8
            | Sprite::Agent8Fall
            | Sprite::Agent8Climb
            | Sprite::Agent8Halt
            | Sprite::Agent8Hang => Vec2::new(64.0, 64.0),
            Sprite::Fan => Vec2::new(64.0, 100.0),
            Sprite::Driver => Vec2::new(64.0, 24.0),
            Sprite::Spanner => Vec2::new(96.0, 96.0),
            Sprite::Coin => Vec2::new(40.0, 40.0),
            Sprite::Star => Vec2::new(20.0, 20.0),
            Sprite::Laser => Vec2::new(48.0, 8.0),
        }
    }
}

/// A simulated object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub category: Category,
    pub pos: Vec2,
    /// Position before the last `advance`, used to undo boundary exits
    pub old_pos: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Collision radius
    pub radius: f32,
    pub sprite: Sprite,
    /// Monotonic animation frame index
    pub frame: u32,
    /// Fractional progress toward the next frame
    pub frame_pos: f32,
    pub anim_speed: f32,
}

impl Entity {
    pub fn new(id: EntityId, category: Category, pos: Vec2, radius: f32, sprite: Sprite) -> Self {
        Self {
            id,
            category,
            pos,
            old_pos: pos,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            rotation: 0.0,
            rotation_speed: 0.0,
            radius,
            sprite,
            frame: 0,
            frame_pos: 0.0,
            anim_speed: 0.0,
        }
    }

    /// Integrate one frame of motion, rotation and animation
    pub fn advance(&mut self) {
        self.old_pos = self.pos;
        self.velocity += self.acceleration;
        self.pos += self.velocity;
        self.rotation += self.rotation_speed;
        self.frame_pos += self.anim_speed;
        if self.frame_pos > 1.0 {
            self.frame = self.frame.wrapping_add(1);
            self.frame_pos -= 1.0;
        }
    }

    /// Switch sprite strip; the animation restarts only if the strip changes
    pub fn set_sprite(&mut self, sprite: Sprite, anim_speed: f32) {
        if self.sprite != sprite {
            self.frame = 0;
            self.frame_pos = 0.0;
        }
        self.sprite = sprite;
        self.anim_speed = anim_speed;
    }

    /// True on the last frame of the current strip
    pub fn is_animation_complete(&self) -> bool {
        let count = self.sprite.frame_count();
        self.frame % count == count - 1
    }

    /// Bounce back off a boundary: undo the last step and flip vertical motion
    pub fn bounce_vertical(&mut self) {
        self.pos = self.old_pos;
        self.velocity.y = -self.velocity.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_integrates_acceleration_first() {
        let mut e = Entity::new(1, Category::Reward, Vec2::ZERO, 0.0, Sprite::Star);
        e.velocity = Vec2::new(1.0, 0.0);
        e.acceleration = Vec2::new(0.0, 0.5);
        e.advance();
        assert_eq!(e.old_pos, Vec2::ZERO);
        assert_eq!(e.velocity, Vec2::new(1.0, 0.5));
        assert_eq!(e.pos, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn test_animation_steps_frames() {
        let mut e = Entity::new(1, Category::Spawner, Vec2::ZERO, 0.0, Sprite::Fan);
        e.anim_speed = 0.5;
        for _ in 0..3 {
            e.advance();
        }
        // 0.5, 1.0 (not > 1), 1.5 -> one frame
        assert_eq!(e.frame, 1);
    }

    #[test]
    fn test_frame_counter_wraps() {
        let mut e = Entity::new(1, Category::Spawner, Vec2::ZERO, 0.0, Sprite::Fan);
        e.frame = u32::MAX;
        e.anim_speed = 1.5;
        e.advance();
        assert_eq!(e.frame, 0);
    }

    #[test]
    fn test_set_sprite_resets_only_on_change() {
        let mut e = Entity::new(1, Category::Player, Vec2::ZERO, 50.0, Sprite::Agent8Hang);
        e.frame = 3;
        e.set_sprite(Sprite::Agent8Hang, 0.02);
        assert_eq!(e.frame, 3);
        e.set_sprite(Sprite::Agent8Halt, 0.333);
        assert_eq!(e.frame, 0);
        assert_eq!(e.anim_speed, 0.333);
    }

    #[test]
    fn test_animation_complete_on_last_frame() {
        let mut e = Entity::new(1, Category::Player, Vec2::ZERO, 50.0, Sprite::Agent8Halt);
        assert!(!e.is_animation_complete());
        e.frame = Sprite::Agent8Halt.frame_count() - 1;
        assert!(e.is_animation_complete());
    }

    #[test]
    fn test_bounce_vertical() {
        let mut e = Entity::new(1, Category::Hazard, Vec2::new(10.0, 10.0), 50.0, Sprite::Driver);
        e.velocity = Vec2::new(-8.0, 6.0);
        e.advance();
        e.bounce_vertical();
        assert_eq!(e.pos, Vec2::new(10.0, 10.0));
        assert_eq!(e.velocity, Vec2::new(-8.0, -6.0));
    }
}
