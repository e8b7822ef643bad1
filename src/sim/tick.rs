//! Per-frame simulation step
//!
//! Advances the whole world by one host-supplied time delta, in a fixed
//! order: player, obstacles, spawner, collision, purge, score, ramp. The
//! first detected hit ends the run; a game-over state ignores everything
//! except reset.

use super::state::{GameEvent, GamePhase, GameState};

/// Input latched for a single frame (one-shot, cleared by the caller)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump attempt; the player's state guard decides whether it applies
    pub jump: bool,
}

/// What a frame produced, for the shell to render and sonify
#[derive(Debug, Clone)]
pub struct FrameOutcome {
    /// Score after this frame (continuous; floor for display)
    pub score: f64,
    /// True only on the frame the run ended
    pub game_over: bool,
    /// Side effects emitted this frame, in order
    pub events: Vec<GameEvent>,
}

/// Advance the game by `dt` seconds.
///
/// A negative or non-finite `dt` is a caller contract violation; the frame
/// degrades to a no-op rather than corrupting state.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> FrameOutcome {
    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("invalid frame delta {dt}; treating as 0");
        0.0
    };

    if state.phase == GamePhase::GameOver {
        return FrameOutcome {
            score: state.score,
            game_over: false,
            events: Vec::new(),
        };
    }

    let mut events = Vec::new();
    let gravity = state.tuning.gravity;
    let rest_y = state.tuning.rest_y();

    // Latched jump attempt; silently ignored while dead or airborne
    if input.jump && state.player.jump(state.tuning.jump_impulse) {
        events.push(GameEvent::Jumped);
    }

    if let Some(event) = state.player.update(gravity, rest_y, dt) {
        events.push(event);
    }

    let offscreen_x = state.tuning.offscreen_x;
    for obstacle in &mut state.obstacles {
        obstacle.update(gravity, rest_y, offscreen_x, dt);
    }

    // New boxes take the ramp's current speed; they first move next frame
    if let Some(obstacle) =
        state
            .spawner
            .advance(dt, &mut state.rng, &state.tuning, state.ramp.current())
    {
        state.obstacles.push(obstacle);
    }

    // Shrunk player box against every live full-size box; the first hit is
    // decisive
    let size = state.tuning.entity_size();
    let player_box = state.player.collision_box(size, state.tuning.hitbox_shrink);
    let hit = state
        .obstacles
        .iter()
        .filter(|o| !o.is_removed())
        .any(|o| player_box.intersects(&o.collision_box(size)));

    let game_over = hit;
    if hit {
        state.phase = GamePhase::GameOver;
        state.player.set_dead();
        events.push(GameEvent::Collided);
    }

    // Purge scrolled-off boxes; retain keeps spawn order for the survivors
    state.obstacles.retain(|o| !o.is_removed());

    // Scoring and ramp are skipped on the game-over frame so the captured
    // score is final
    if !game_over {
        state.score += f64::from(state.tuning.score_rate) * f64::from(dt);
        let display = state.display_score();
        if display > state.high_score {
            state.high_score = display;
        }
        state.ramp.advance(dt);
    }

    FrameOutcome {
        score: state.score,
        game_over,
        events,
    }
}
