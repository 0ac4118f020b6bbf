//! Agent8 - a side-scrolling arcade dodger
//!
//! Core modules:
//! - `sim`: Deterministic frame-stepped simulation (entities, player FSM, scoring)
//! - `renderer`: Draw-list consumers
//! - `audio`: Audio cue playback
//! - `input`: Keyboard tracking and edge detection
//! - `settings`: Startup configuration
//! - `demo`: Autopilot for attract mode

pub mod audio;
pub mod demo;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Default display dimensions
    pub const DISPLAY_WIDTH: f32 = 1280.0;
    pub const DISPLAY_HEIGHT: f32 = 720.0;

    /// Frames per second the external driver runs at
    pub const FRAME_RATE: u32 = 60;

    /// Player (Agent8) spawn and collision
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(115.0, 0.0);
    pub const PLAYER_RADIUS: f32 = 50.0;
    /// Controlled fall while appearing
    pub const APPEAR_VELOCITY: Vec2 = Vec2::new(0.0, 12.0);
    pub const APPEAR_ACCELERATION: Vec2 = Vec2::new(0.0, 0.5);
    /// Climb (up key)
    pub const CLIMB_VELOCITY: Vec2 = Vec2::new(0.0, -4.0);
    pub const CLIMB_ANIM_SPEED: f32 = 0.25;
    /// Fall (down key)
    pub const FALL_ACCELERATION: Vec2 = Vec2::new(0.0, 1.0);
    /// Downward speed above which releasing the keys triggers a halt
    pub const HALT_THRESHOLD: f32 = 5.0;
    pub const HALT_ANIM_SPEED: f32 = 0.333;
    pub const HALT_DAMPING: f32 = 0.9;
    pub const HANG_ANIM_SPEED: f32 = 0.02;
    pub const HANG_DAMPING: f32 = 0.5;
    /// Death spin
    pub const DEAD_ACCELERATION: Vec2 = Vec2::new(-0.3, 0.5);
    pub const DEAD_SPIN: f32 = 0.25;

    /// Spawner (fan), start position on the default display. Other display
    /// sizes keep its margin from the right edge and its relative height.
    pub const FAN_SPAWN: Vec2 = Vec2::new(1140.0, 217.0);
    pub const FAN_VELOCITY: Vec2 = Vec2::new(0.0, 3.0);
    pub const FAN_ANIM_SPEED: f32 = 1.0;
    /// 1-in-N chance per frame
    pub const HAZARD_SPAWN_ODDS: u32 = 50;
    pub const HEAVY_HAZARD_ODDS: u32 = 2;
    pub const COLLECTIBLE_SPAWN_ODDS: u32 = 150;

    /// Hazards (screwdriver / spanner)
    pub const HAZARD_RADIUS: f32 = 50.0;
    pub const HAZARD_SPEED_X: f32 = -8.0;
    pub const HAZARD_SPEED_Y_STEP: f32 = 6.0;
    pub const HEAVY_HAZARD_RADIUS: f32 = 100.0;
    pub const HEAVY_HAZARD_SPEED_X: f32 = -4.0;
    pub const HEAVY_HAZARD_SPIN: f32 = 0.1;

    /// Collectibles (coins)
    pub const COLLECTIBLE_RADIUS: f32 = 40.0;
    pub const COLLECTIBLE_VELOCITY: Vec2 = Vec2::new(-3.0, 0.0);
    pub const COLLECTIBLE_SPIN: f32 = 0.1;

    /// Reward burst (stars)
    pub const REWARD_SPEED: f32 = 16.0;
    pub const REWARD_GRAVITY: Vec2 = Vec2::new(0.0, 0.5);
    pub const REWARD_SPIN: f32 = 0.1;
    /// Burst angles in half-turns: start, step, stop (exclusive)
    pub const REWARD_ANGLE_START: f32 = 0.25;
    pub const REWARD_ANGLE_STEP: f32 = 0.5;
    pub const REWARD_ANGLE_END: f32 = 2.0;

    /// Projectiles (lasers)
    pub const PROJECTILE_OFFSET: Vec2 = Vec2::new(155.0, -75.0);
    pub const PROJECTILE_RADIUS: f32 = 30.0;
    pub const PROJECTILE_VELOCITY: Vec2 = Vec2::new(32.0, 0.0);

    /// Scoring
    pub const COLLECT_SCORE: i64 = 500;
    pub const HAZARD_SHOT_SCORE: i64 = 100;
    pub const COLLECTIBLE_SHOT_PENALTY: i64 = 300;

    /// Destroyed-entity fade-out
    pub const FADE_ANIM_SPEED: f32 = 0.2;
    pub const FADE_FRAMES: u32 = 10;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_polar_to_cartesian() {
        let v = polar_to_cartesian(16.0, 0.5 * PI);
        assert!(v.x.abs() < 0.001);
        assert!((v.y - 16.0).abs() < 0.001);
    }
}
