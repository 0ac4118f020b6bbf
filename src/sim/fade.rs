//! Fade-out for soft-deleted entities
//!
//! Destroyed entities keep drifting, slow their animation clock right
//! down, and flicker on odd frames with falling opacity until the clock
//! reaches `FADE_FRAMES` or they drift off screen.

use super::entity::Category;
use super::frame::Frame;
use super::rng::Roll;
use super::state::Session;
use crate::consts::*;

/// Opacity for a fading entity on a given animation frame
pub fn fade_opacity(frame_index: u32) -> f32 {
    (FADE_FRAMES as f32 - frame_index as f32) / FADE_FRAMES as f32
}

pub fn update<R: Roll>(session: &mut Session<R>, frame: &mut Frame) {
    for id in session.entities.collect_ids(Category::Destroyed) {
        let Some(dead) = session.entities.get_mut(id) else {
            continue;
        };
        dead.anim_speed = FADE_ANIM_SPEED;
        dead.advance();

        if dead.frame % 2 == 1 {
            frame.draw_rotated_faded(dead, fade_opacity(dead.frame));
        }

        if !session.display.is_visible(dead) || dead.frame >= FADE_FRAMES {
            session.entities.destroy(id);
        }
    }

    session.entities.sweep();
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::bounds::Display;
    use crate::sim::entity::Sprite;
    use crate::sim::frame::DrawCommand;
    use crate::sim::rng::scripted::Scripted;

    fn session() -> Session<Scripted> {
        Session::with_dice(Scripted::quiet(), Display::default())
    }

    #[test]
    fn test_opacity() {
        assert_eq!(fade_opacity(0), 1.0);
        assert!((fade_opacity(3) - 0.7).abs() < 1e-6);
        assert_eq!(fade_opacity(10), 0.0);
    }

    #[test]
    fn test_flickers_on_odd_frames_and_expires() {
        let mut session = session();
        let id = session
            .entities
            .create(Category::Hazard, Vec2::new(600.0, 300.0), 50.0, Sprite::Driver);
        assert!(session.entities.retag(id, Category::Destroyed));

        let mut ticks = 0;
        while session.entities.get(id).is_some() {
            let mut frame = Frame::new();
            update(&mut session, &mut frame);
            ticks += 1;

            let drawn = frame.draws.iter().find_map(|d| match d {
                DrawCommand::Sprite { frame, opacity, .. } => Some((*frame, *opacity)),
                _ => None,
            });
            match session.entities.get(id) {
                Some(e) => {
                    if e.frame % 2 == 1 {
                        let (f, opacity) = drawn.expect("odd frame must draw");
                        assert_eq!(f, e.frame);
                        assert_eq!(opacity, fade_opacity(e.frame));
                    } else {
                        assert!(drawn.is_none());
                    }
                }
                None => break,
            }
            assert!(ticks < 100, "never expired");
        }
        // 0.2 per tick, strictly past 1.0 to step: ten frames in about sixty ticks
        assert!(ticks <= 70);
    }

    #[test]
    fn test_removed_when_off_screen() {
        let mut session = session();
        let id = session
            .entities
            .create(Category::Hazard, Vec2::new(-60.0, 300.0), 50.0, Sprite::Driver);
        session.entities.get_mut(id).unwrap().velocity = Vec2::new(-8.0, 0.0);
        session.entities.retag(id, Category::Destroyed);

        let mut frame = Frame::new();
        update(&mut session, &mut frame);
        assert!(session.entities.get(id).is_none());
    }

    #[test]
    fn test_already_late_frame_expires_at_once() {
        let mut session = session();
        let id = session
            .entities
            .create(Category::Collectible, Vec2::new(600.0, 300.0), 40.0, Sprite::Coin);
        session.entities.get_mut(id).unwrap().frame = 12;
        session.entities.retag(id, Category::Destroyed);

        let mut frame = Frame::new();
        update(&mut session, &mut frame);
        assert!(session.entities.get(id).is_none());
    }
}
