//! Fixed-cadence simulation tick
//!
//! Runs one frame: background, then each category pass in a fixed order,
//! then the HUD. Called once per displayed frame by the outer loop.

use glam::Vec2;

use super::frame::{Frame, MusicTrack, TextAlign};
use super::rng::Roll;
use super::state::Session;
use super::{collectible, fade, hazard, player, projectile, spawner};

pub const HINT_TEXT: &str = "ARROW KEYS MOVE UP AND DOWN, SPACE TO FIRE";
pub const HINT_FONT: &str = "64px";
pub const SCORE_FONT: &str = "132px";

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Climb (held)
    pub up: bool,
    /// Drop (held)
    pub down: bool,
    /// Fire, or restart when dead (pressed this frame only)
    pub fire: bool,
    /// Leave the game
    pub quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    Quit,
}

/// Advance the session by one frame, writing draw and audio requests to `frame`
pub fn tick<R: Roll>(session: &mut Session<R>, input: &TickInput, frame: &mut Frame) -> TickStatus {
    frame.clear();

    if session.time_ticks == 0 {
        log::info!("Session started");
        frame.start_loop(MusicTrack::Music);
    }
    session.time_ticks += 1;

    frame.draw_background();

    player::update(session, input, frame);
    spawner::update(session, frame);
    hazard::update(session, frame);
    collectible::update(session, frame);
    projectile::update(session, frame);
    fade::update(session, frame);

    let display = session.display;
    frame.draw_text(
        HINT_FONT,
        HINT_TEXT,
        Vec2::new(display.width / 2.0, display.height - 30.0),
        TextAlign::Centre,
    );
    frame.draw_text(
        SCORE_FONT,
        format!("SCORE: {}", session.state.score),
        Vec2::new(display.width / 2.0, 50.0),
        TextAlign::Centre,
    );

    if input.quit {
        log::info!("Quit requested at tick {}, score {}", session.time_ticks, session.state.score);
        return TickStatus::Quit;
    }
    TickStatus::Running
}
