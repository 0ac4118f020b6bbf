//! Agent8 entry point
//!
//! Headless driver: loads settings, runs the simulation one tick per frame
//! and feeds the output to the audio manager and renderer. Without a
//! platform window, keys come from the scripted presses in the settings.
//! With the autopilot on it steers and shoots, and scripted Escape still quits.

use std::path::PathBuf;

use agent8::audio::AudioManager;
use agent8::consts::FRAME_RATE;
use agent8::demo::Autopilot;
use agent8::input::Keyboard;
use agent8::renderer::{Renderer, StatsRenderer};
use agent8::sim::{Dice, Frame, Session, TickInput, TickStatus, tick};
use agent8::Settings;

/// One minute of play when no frame limit is configured
const DEFAULT_FRAMES: u64 = FRAME_RATE as u64 * 60;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    let dice = Dice::new(settings.resolve_seed());
    log::info!("Agent8 starting, seed {}", dice.seed());

    let mut session = Session::with_dice(dice, settings.display());
    let mut audio: AudioManager = AudioManager::default();
    audio.apply_settings(&settings);
    let mut renderer = StatsRenderer::new();
    let mut keyboard = Keyboard::new();
    let mut pilot = settings.autopilot.then(Autopilot::new);
    let mut frame = Frame::new();

    let max_frames = settings.max_frames.unwrap_or(DEFAULT_FRAMES);
    let mut best = 0;

    for n in 0..max_frames {
        keyboard.update(settings.keys_down(n));
        let keys = keyboard.tick_input();
        let input = match pilot.as_mut() {
            Some(pilot) => TickInput {
                quit: keys.quit,
                ..pilot.input(&session)
            },
            None => keys,
        };

        let status = tick(&mut session, &input, &mut frame);
        audio.handle(&frame.audio);
        renderer.render(&frame);

        best = best.max(session.score());
        if n % (FRAME_RATE as u64 * 10) == 0 {
            let stats = renderer.last_frame();
            log::info!(
                "frame {}: {:?}, score {}, {} entities, {} sprites drawn",
                n,
                session.player_state(),
                session.score(),
                session.entities.len(),
                stats.sprites
            );
        }

        if status == TickStatus::Quit {
            break;
        }
    }

    audio.shutdown();
    log::info!(
        "Done after {} frames: score {}, best {}",
        renderer.frames_presented(),
        session.score(),
        best
    );
}
