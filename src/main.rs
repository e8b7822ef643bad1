//! Box Dash entry point
//!
//! Headless demo run: a naive autopilot plays the game through the public
//! session surface and logs what happens. Handy for smoke-testing tuning
//! changes without a renderer.

use std::path::Path;

use box_dash::{GamePhase, JsonFileHighScores, Session, Tuning};

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(42);
    let max_frames: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(3600);

    log::info!("Box Dash (headless) starting, seed {seed}");

    let tuning = Tuning::load_or_default(Path::new("tuning.json"));
    let store = JsonFileHighScores::new("highscore.json");
    let mut session = Session::new(seed, tuning, Box::new(store));

    for frame in 0..max_frames {
        if should_jump(&session) {
            session.request_jump();
        }

        let outcome = session.advance_frame(FRAME_DT);
        for event in &outcome.events {
            log::debug!("[{frame}] {}", event.as_str());
        }

        if outcome.game_over {
            log::info!(
                "Game over on frame {frame}: score {}, high score {}",
                outcome.score as u32,
                session.high_score()
            );
            break;
        }
    }

    if session.phase() == GamePhase::Playing {
        log::info!(
            "Survived {max_frames} frames; score {}",
            session.score() as u32
        );
    }

    println!("score: {}", session.score() as u32);
    println!("high:  {}", session.high_score());
}

/// Hop when the nearest box ahead gets close. Deliberately naive, and it
/// only sees what a renderer would see.
fn should_jump(session: &Session) -> bool {
    let state = session.state();
    let player = &state.player;
    if player.is_airborne() {
        return false;
    }
    state.obstacles.iter().any(|o| {
        let ahead = o.pos.x - player.pos.x;
        (0.0..150.0).contains(&ahead)
    })
}
