//! Coins and the star burst they leave behind

use std::f32::consts::PI;

use glam::Vec2;

use super::bounds::intersects;
use super::entity::{Category, Sprite};
use super::frame::{Frame, SoundEffect};
use super::rng::Roll;
use super::state::Session;
use super::world::EntityStore;
use crate::consts::*;
use crate::polar_to_cartesian;

/// Burst directions in radians: a half-turn stepped evenly, starting off-axis
pub fn reward_angles() -> impl Iterator<Item = f32> {
    std::iter::successors(Some(REWARD_ANGLE_START), |a| Some(a + REWARD_ANGLE_STEP))
        .take_while(|a| *a < REWARD_ANGLE_END)
        .map(|a| a * PI)
}

pub fn update<R: Roll>(session: &mut Session<R>, frame: &mut Frame) {
    let Some(player) = session.entities.singleton(Category::Player).cloned() else {
        log::warn!("No player entity for collectible checks");
        return;
    };

    for id in session.entities.collect_ids(Category::Collectible) {
        let collected = session
            .entities
            .get(id)
            .is_some_and(|coin| intersects(coin, &player));

        if collected {
            spawn_rewards(&mut session.entities, player.pos);
            session.state.apply_score_delta(COLLECT_SCORE);
            frame.play(SoundEffect::Collect);
            log::debug!("Collected coin {}, score {}", id, session.state.score);
        }

        let Some(coin) = session.entities.get_mut(id) else {
            continue;
        };
        coin.advance();
        frame.draw_rotated(coin);

        if collected || !session.display.is_visible(coin) {
            session.entities.destroy(id);
        }
    }
    session.entities.sweep();

    for id in session.entities.collect_ids(Category::Reward) {
        let Some(star) = session.entities.get_mut(id) else {
            continue;
        };
        star.advance();
        frame.draw_rotated(star);

        if !session.display.is_visible(star) {
            session.entities.destroy(id);
        }
    }
    session.entities.sweep();
}

fn spawn_rewards(entities: &mut EntityStore, origin: Vec2) {
    for angle in reward_angles() {
        let id = entities.create(Category::Reward, origin, 0.0, Sprite::Star);
        if let Some(star) = entities.get_mut(id) {
            star.rotation_speed = REWARD_SPIN;
            star.acceleration = REWARD_GRAVITY;
            star.velocity = polar_to_cartesian(REWARD_SPEED, angle);
        }
    }
}
