//! Tools thrown by the fan. Touching one kills Agent8.

use super::bounds::{Axis, intersects};
use super::entity::Category;
use super::frame::{Frame, MusicTrack, SoundEffect};
use super::rng::Roll;
use super::state::{PlayerState, Session};

pub fn update<R: Roll>(session: &mut Session<R>, frame: &mut Frame) {
    let Some(player) = session.entities.singleton(Category::Player).cloned() else {
        log::warn!("No player entity for hazard checks");
        return;
    };

    for id in session.entities.collect_ids(Category::Hazard) {
        let Some(tool) = session.entities.get_mut(id) else {
            continue;
        };

        if !session.state.is_dead() && intersects(tool, &player) {
            frame.stop_loop(MusicTrack::Music);
            frame.play(SoundEffect::Die);
            session.state.transition(PlayerState::Dead);
            log::info!("Agent8 hit by hazard {}, score {}", id, session.state.score);
        }

        tool.advance();
        if session.display.is_leaving(tool, Axis::Vertical) {
            tool.bounce_vertical();
        }
        frame.draw_rotated(tool);

        if !session.display.is_visible(tool) {
            session.entities.destroy(id);
        }
    }

    session.entities.sweep();
}
