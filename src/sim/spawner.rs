//! The fan: patrols the right edge and throws tools and coins

use glam::Vec2;

use super::bounds::Axis;
use super::entity::{Category, Sprite};
use super::frame::{Frame, SoundEffect};
use super::rng::Roll;
use super::state::Session;
use crate::consts::*;

pub fn update<R: Roll>(session: &mut Session<R>, frame: &mut Frame) {
    let Some(fan_pos) = session.entities.singleton(Category::Spawner).map(|f| f.pos) else {
        log::warn!("No spawner entity to update");
        return;
    };

    if session.dice.roll(HAZARD_SPAWN_ODDS) == 1 {
        spawn_hazard(session, fan_pos, frame);
    }

    if session.dice.roll(COLLECTIBLE_SPAWN_ODDS) == 1 {
        let id = session
            .entities
            .create(Category::Collectible, fan_pos, COLLECTIBLE_RADIUS, Sprite::Coin);
        if let Some(coin) = session.entities.get_mut(id) {
            coin.velocity = COLLECTIBLE_VELOCITY;
            coin.rotation_speed = COLLECTIBLE_SPIN;
        }
        log::debug!("Spawned collectible {} at {:?}", id, fan_pos);
    }

    let Some(fan) = session.entities.singleton_mut(Category::Spawner) else {
        return;
    };
    fan.advance();
    if session.display.is_leaving(fan, Axis::Any) {
        fan.bounce_vertical();
    }
    frame.draw(fan);
}

fn spawn_hazard<R: Roll>(session: &mut Session<R>, pos: Vec2, frame: &mut Frame) {
    // Straight across, or angled up or down
    let vy = session.dice.roll_range(-1, 1) as f32 * HAZARD_SPEED_Y_STEP;
    let heavy = session.dice.roll(HEAVY_HAZARD_ODDS) == 1;

    let id = session
        .entities
        .create(Category::Hazard, pos, HAZARD_RADIUS, Sprite::Driver);
    if let Some(tool) = session.entities.get_mut(id) {
        tool.velocity = Vec2::new(HAZARD_SPEED_X, vy);
        if heavy {
            tool.set_sprite(Sprite::Spanner, 0.0);
            tool.radius = HEAVY_HAZARD_RADIUS;
            tool.velocity.x = HEAVY_HAZARD_SPEED_X;
            tool.rotation_speed = HEAVY_HAZARD_SPIN;
        }
    }
    log::debug!("Spawned {} hazard {}", if heavy { "heavy" } else { "light" }, id);

    frame.play(SoundEffect::Tool);
}
