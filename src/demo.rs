//! Attract-mode autopilot
//!
//! A very plain bot: dodge the nearest incoming tool, shoot tools that
//! line up with the laser lane, never shoot coins, restart when dead.

use crate::consts::{PROJECTILE_OFFSET, PROJECTILE_RADIUS};
use crate::sim::{Category, PlayerState, Roll, Session, TickInput};

/// How far ahead of the player hazards are considered
const LOOKAHEAD: f32 = 420.0;
/// Extra vertical clearance when dodging
const DODGE_MARGIN: f32 = 30.0;
/// Frames between shots
const FIRE_COOLDOWN: u32 = 12;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    cooldown: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input<R: Roll>(&mut self, session: &Session<R>) -> TickInput {
        self.cooldown = self.cooldown.saturating_sub(1);
        let mut input = TickInput::default();

        match session.player_state() {
            PlayerState::Dead => {
                input.fire = true;
                return input;
            }
            PlayerState::Playing => {}
            PlayerState::Appearing | PlayerState::Halting => return input,
        }

        let Some(player) = session.entities.singleton(Category::Player) else {
            return input;
        };

        // Closest hazard that is ahead and on a collision course
        let threat = session
            .entities
            .iter()
            .filter(|e| e.category == Category::Hazard)
            .filter(|e| e.pos.x > player.pos.x - player.radius && e.pos.x - player.pos.x < LOOKAHEAD)
            .filter(|e| (e.pos.y - player.pos.y).abs() < e.radius + player.radius + DODGE_MARGIN)
            .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

        if let Some(threat) = threat {
            if threat.pos.y >= player.pos.y {
                input.up = true;
            } else {
                input.down = true;
            }
        }

        let lane_y = player.pos.y + PROJECTILE_OFFSET.y;
        let in_lane = |category: Category| {
            session.entities.iter().any(|e| {
                e.category == category
                    && e.pos.x > player.pos.x
                    && (e.pos.y - lane_y).abs() < e.radius + PROJECTILE_RADIUS
            })
        };

        if self.cooldown == 0 && in_lane(Category::Hazard) && !in_lane(Category::Collectible) {
            input.fire = true;
            self.cooldown = FIRE_COOLDOWN;
        }

        input
    }
}
