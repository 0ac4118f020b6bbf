//! Lasers: shoot tools for points, shoot coins and lose them
//!
//! Every laser is tested against every tool and every coin. A laser that
//! hits several things scores each of them. Targets are retagged to
//! Destroyed straight away so they fade out, the laser itself is removed.
//! A target already shot by an earlier laser this frame scores nothing.

use super::bounds::intersects;
use super::entity::Category;
use super::frame::{Frame, SoundEffect};
use super::rng::Roll;
use super::state::Session;
use crate::consts::*;

pub fn update<R: Roll>(session: &mut Session<R>, frame: &mut Frame) {
    let lasers = session.entities.collect_ids(Category::Projectile);
    let tools = session.entities.collect_ids(Category::Hazard);
    let coins = session.entities.collect_ids(Category::Collectible);

    for id in lasers {
        let Some(laser) = session.entities.get(id).cloned() else {
            continue;
        };
        let mut collided = false;
        let mut delta = 0i64;

        for &tool_id in &tools {
            let hit = session
                .entities
                .get(tool_id)
                .is_some_and(|tool| intersects(&laser, tool));
            if hit {
                collided = true;
                if session.entities.retag(tool_id, Category::Destroyed) {
                    delta += HAZARD_SHOT_SCORE;
                    log::debug!("Laser {} hit hazard {}", id, tool_id);
                }
            }
        }

        for &coin_id in &coins {
            let hit = session
                .entities
                .get(coin_id)
                .is_some_and(|coin| intersects(&laser, coin));
            if hit {
                collided = true;
                if session.entities.retag(coin_id, Category::Destroyed) {
                    frame.play(SoundEffect::Error);
                    delta -= COLLECTIBLE_SHOT_PENALTY;
                    log::debug!("Laser {} hit collectible {}", id, coin_id);
                }
            }
        }

        session.state.apply_score_delta(delta);

        let Some(laser) = session.entities.get_mut(id) else {
            continue;
        };
        laser.advance();
        frame.draw(laser);

        if collided || !session.display.is_visible(laser) {
            session.entities.destroy(id);
        }
    }

    session.entities.sweep();
}
