//! Agent8: player state machine and controls
//!
//! One handler per state. A handler mutates the player (and, for Dead,
//! the rest of the world on restart) and returns the state to move to, if
//! any. The driver applies the move through `GameState::transition`.

use glam::Vec2;

use super::bounds::{Axis, Display};
use super::entity::{Category, EntityId, Sprite};
use super::frame::{Color, Frame, MusicTrack, SoundEffect};
use super::rng::Roll;
use super::state::{GameState, PlayerState, Session};
use super::tick::TickInput;
use super::world::EntityStore;
use crate::consts::*;

/// Run the state machine, integrate, keep on screen, draw
pub fn update<R: Roll>(session: &mut Session<R>, input: &TickInput, frame: &mut Frame) {
    let Some(id) = session.entities.singleton(Category::Player).map(|p| p.id) else {
        log::warn!("No player entity to update");
        return;
    };

    let entities = &mut session.entities;
    let state = &mut session.state;

    let next = match state.player_state() {
        PlayerState::Appearing => appearing(entities, id, &session.display),
        PlayerState::Halting => halting(entities, id),
        PlayerState::Playing => handle_controls(entities, id, input, frame),
        PlayerState::Dead => dead(entities, state, id, input, frame),
    };
    if let Some(next) = next {
        state.transition(next);
    }

    let dead = state.is_dead();
    let Some(player) = entities.get_mut(id) else {
        return;
    };
    player.advance();

    // The death spin is allowed to leave the screen
    if !dead && session.display.is_leaving(player, Axis::Any) {
        player.pos = player.old_pos;
    }

    frame.draw_line(Vec2::new(player.pos.x, 0.0), player.pos, Color::WHITE);
    frame.draw_rotated(player);
}

/// Controlled fall from the top until a third of the way down
fn appearing(entities: &mut EntityStore, id: EntityId, display: &Display) -> Option<PlayerState> {
    let player = entities.get_mut(id)?;
    player.velocity = APPEAR_VELOCITY;
    player.acceleration = APPEAR_ACCELERATION;
    player.set_sprite(Sprite::Agent8Fall, 0.0);
    player.rotation = 0.0;

    (player.pos.y >= display.height / 3.0).then_some(PlayerState::Playing)
}

/// Brake until the halt animation has played through
fn halting(entities: &mut EntityStore, id: EntityId) -> Option<PlayerState> {
    let player = entities.get_mut(id)?;
    player.velocity *= HALT_DAMPING;

    player.is_animation_complete().then_some(PlayerState::Playing)
}

/// Keyboard control while Playing
fn handle_controls(
    entities: &mut EntityStore,
    id: EntityId,
    input: &TickInput,
    frame: &mut Frame,
) -> Option<PlayerState> {
    let player = entities.get_mut(id)?;
    let mut next = None;

    if input.up {
        player.velocity = CLIMB_VELOCITY;
        player.set_sprite(Sprite::Agent8Climb, CLIMB_ANIM_SPEED);
    } else if input.down {
        player.acceleration = FALL_ACCELERATION;
        player.set_sprite(Sprite::Agent8Fall, 0.0);
    } else if player.velocity.y > HALT_THRESHOLD {
        next = Some(PlayerState::Halting);
        player.set_sprite(Sprite::Agent8Halt, HALT_ANIM_SPEED);
        player.acceleration = Vec2::ZERO;
    } else {
        player.set_sprite(Sprite::Agent8Hang, HANG_ANIM_SPEED);
        player.velocity *= HANG_DAMPING;
        player.acceleration = Vec2::ZERO;
    }

    if input.fire {
        let fire_pos = player.pos + PROJECTILE_OFFSET;
        let laser = entities.create(Category::Projectile, fire_pos, PROJECTILE_RADIUS, Sprite::Laser);
        if let Some(laser) = entities.get_mut(laser) {
            laser.velocity = PROJECTILE_VELOCITY;
        }
        frame.play(SoundEffect::Shoot);
    }

    next
}

/// Spin away; fire restarts the run
fn dead(
    entities: &mut EntityStore,
    state: &mut GameState,
    id: EntityId,
    input: &TickInput,
    frame: &mut Frame,
) -> Option<PlayerState> {
    let player = entities.get_mut(id)?;
    player.acceleration = DEAD_ACCELERATION;
    player.rotation += DEAD_SPIN;

    if !input.fire {
        return None;
    }

    player.pos = PLAYER_SPAWN;
    player.old_pos = PLAYER_SPAWN;
    player.velocity = Vec2::ZERO;
    player.acceleration = Vec2::ZERO;
    player.frame = 0;
    player.frame_pos = 0.0;

    frame.start_loop(MusicTrack::Music);
    log::info!("Restarting, final score {}", state.score);
    state.score = 0;

    // Clear the field through the fade-out rather than popping things away
    for category in [Category::Hazard, Category::Collectible] {
        for other in entities.collect_ids(category) {
            entities.retag(other, Category::Destroyed);
        }
    }

    Some(PlayerState::Appearing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::scripted::Scripted;

    fn session() -> Session<Scripted> {
        Session::with_dice(Scripted::quiet(), Display::default())
    }

    fn playing_session() -> Session<Scripted> {
        let mut session = session();
        assert!(session.state.transition(PlayerState::Playing));
        if let Some(player) = session.entities.singleton_mut(Category::Player) {
            player.pos = Vec2::new(115.0, 400.0);
        }
        session
    }

    fn player_id<R: Roll>(session: &Session<R>) -> EntityId {
        session.entities.singleton(Category::Player).unwrap().id
    }

    #[test]
    fn test_appearing_falls_then_plays() {
        let mut session = session();
        let mut frame = Frame::new();
        let input = TickInput::default();

        let mut ticks = 0;
        while session.player_state() == PlayerState::Appearing {
            update(&mut session, &input, &mut frame);
            ticks += 1;
            assert!(ticks < 100, "never left Appearing");
        }
        assert_eq!(session.player_state(), PlayerState::Playing);
        let player = session.entities.get(player_id(&session)).unwrap();
        assert!(player.pos.y >= session.display.height / 3.0);
        assert_eq!(player.sprite, Sprite::Agent8Fall);
    }

    #[test]
    fn test_fast_fall_without_input_halts() {
        let mut session = playing_session();
        let id = player_id(&session);
        session.entities.get_mut(id).unwrap().velocity = Vec2::new(0.0, 6.0);

        let mut frame = Frame::new();
        update(&mut session, &TickInput::default(), &mut frame);

        assert_eq!(session.player_state(), PlayerState::Halting);
        let player = session.entities.get(id).unwrap();
        assert_eq!(player.sprite, Sprite::Agent8Halt);
        assert_eq!(player.acceleration, Vec2::ZERO);
    }

    #[test]
    fn test_slow_drift_hangs() {
        let mut session = playing_session();
        let id = player_id(&session);
        session.entities.get_mut(id).unwrap().velocity = Vec2::new(0.0, 4.0);

        let mut frame = Frame::new();
        update(&mut session, &TickInput::default(), &mut frame);

        assert_eq!(session.player_state(), PlayerState::Playing);
        let player = session.entities.get(id).unwrap();
        assert_eq!(player.sprite, Sprite::Agent8Hang);
        assert_eq!(player.velocity, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_halting_returns_to_playing() {
        let mut session = playing_session();
        let id = player_id(&session);
        session.entities.get_mut(id).unwrap().velocity = Vec2::new(0.0, 10.0);

        let mut frame = Frame::new();
        update(&mut session, &TickInput::default(), &mut frame);
        assert_eq!(session.player_state(), PlayerState::Halting);

        let mut ticks = 0;
        while session.player_state() == PlayerState::Halting {
            let vy = session.entities.get(id).unwrap().velocity.y;
            update(&mut session, &TickInput::default(), &mut frame);
            if session.player_state() == PlayerState::Halting {
                assert!(session.entities.get(id).unwrap().velocity.y < vy);
            }
            ticks += 1;
            assert!(ticks < 200, "never finished halting");
        }
        assert_eq!(session.player_state(), PlayerState::Playing);
    }

    #[test]
    fn test_up_climbs() {
        let mut session = playing_session();
        let id = player_id(&session);
        let before = session.entities.get(id).unwrap().pos;

        let input = TickInput {
            up: true,
            ..Default::default()
        };
        let mut frame = Frame::new();
        update(&mut session, &input, &mut frame);

        let player = session.entities.get(id).unwrap();
        assert_eq!(player.velocity, CLIMB_VELOCITY);
        assert_eq!(player.sprite, Sprite::Agent8Climb);
        assert!(player.pos.y < before.y);
    }

    #[test]
    fn test_down_accelerates() {
        let mut session = playing_session();
        let id = player_id(&session);

        let input = TickInput {
            down: true,
            ..Default::default()
        };
        let mut frame = Frame::new();
        update(&mut session, &input, &mut frame);
        update(&mut session, &input, &mut frame);

        let player = session.entities.get(id).unwrap();
        assert_eq!(player.acceleration, FALL_ACCELERATION);
        assert_eq!(player.velocity, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_fire_spawns_one_laser() {
        let mut session = playing_session();
        let player_pos = session.entities.singleton(Category::Player).unwrap().pos;

        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        let mut frame = Frame::new();
        update(&mut session, &input, &mut frame);

        let lasers = session.entities.collect_ids(Category::Projectile);
        assert_eq!(lasers.len(), 1);
        let laser = session.entities.get(lasers[0]).unwrap();
        assert_eq!(laser.pos, player_pos + PROJECTILE_OFFSET);
        assert_eq!(laser.velocity, PROJECTILE_VELOCITY);
        assert_eq!(frame.count_played(SoundEffect::Shoot), 1);

        // No edge, no laser
        update(&mut session, &TickInput::default(), &mut frame);
        assert_eq!(session.entities.count(Category::Projectile), 1);
    }

    #[test]
    fn test_playing_player_stays_on_screen() {
        let mut session = playing_session();
        let id = player_id(&session);
        session.entities.get_mut(id).unwrap().pos = Vec2::new(115.0, 66.0);

        let input = TickInput {
            up: true,
            ..Default::default()
        };
        let mut frame = Frame::new();
        for _ in 0..10 {
            update(&mut session, &input, &mut frame);
        }
        let player = session.entities.get(id).unwrap();
        assert!(player.pos.y - player.sprite.half_extent().y >= -4.0);
    }

    #[test]
    fn test_dead_spins_off_screen() {
        let mut session = playing_session();
        assert!(session.state.transition(PlayerState::Dead));
        let id = player_id(&session);
        session.entities.get_mut(id).unwrap().pos = Vec2::new(60.0, 400.0);

        let mut frame = Frame::new();
        for _ in 0..60 {
            update(&mut session, &TickInput::default(), &mut frame);
        }
        let player = session.entities.get(id).unwrap();
        assert_eq!(player.acceleration, DEAD_ACCELERATION);
        assert!((player.rotation - 60.0 * DEAD_SPIN).abs() < 0.001);
        assert!(!session.display.is_visible(player));
    }

    #[test]
    fn test_restart_from_dead() {
        let mut session = playing_session();
        for _ in 0..3 {
            session.entities.create(Category::Hazard, Vec2::new(600.0, 300.0), 50.0, Sprite::Driver);
        }
        for _ in 0..2 {
            session.entities.create(Category::Collectible, Vec2::new(700.0, 300.0), 40.0, Sprite::Coin);
        }
        session.state.score = 1200;
        assert!(session.state.transition(PlayerState::Dead));
        let id = player_id(&session);
        session.entities.get_mut(id).unwrap().velocity = Vec2::new(-5.0, 9.0);

        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        let mut frame = Frame::new();
        update(&mut session, &input, &mut frame);

        assert_eq!(session.player_state(), PlayerState::Appearing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.entities.count(Category::Destroyed), 5);
        assert_eq!(session.entities.count(Category::Hazard), 0);
        assert_eq!(session.entities.count(Category::Collectible), 0);
        assert_eq!(session.entities.count(Category::Player), 1);
        assert_eq!(session.entities.count(Category::Projectile), 0);

        let player = session.entities.get(id).unwrap();
        assert_eq!(player.pos, PLAYER_SPAWN);
        assert_eq!(player.velocity, Vec2::ZERO);
        assert!(
            frame
                .audio
                .contains(&crate::sim::frame::AudioCue::StartLoop(MusicTrack::Music))
        );
    }

    #[test]
    fn test_draws_guide_line_then_player() {
        let mut session = playing_session();
        let mut frame = Frame::new();
        update(&mut session, &TickInput::default(), &mut frame);

        use crate::sim::frame::DrawCommand;
        assert!(matches!(frame.draws[0], DrawCommand::Line { from, .. } if from.y == 0.0));
        assert!(matches!(
            frame.draws[1],
            DrawCommand::Sprite { rotation: Some(_), .. }
        ));
    }
}
