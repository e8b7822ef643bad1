//! Session shell around the simulation
//!
//! Owns the game state, the injected high-score store, and the one-shot
//! input latch. The shell is the only place persistence happens; the sim
//! itself stays pure.

use crate::highscores::HighScoreStore;
use crate::sim::{FrameOutcome, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// One continuous play-through from start/reset to game over.
pub struct Session {
    state: GameState,
    store: Box<dyn HighScoreStore>,
    pending_jump: bool,
}

impl Session {
    /// Start a session. The store is read once for the initial high score.
    pub fn new(seed: u64, tuning: Tuning, store: Box<dyn HighScoreStore>) -> Self {
        let high_score = store.load();
        Self {
            state: GameState::new(seed, tuning, high_score),
            store,
            pending_jump: false,
        }
    }

    /// Advance one frame. Drains the jump latch; on the frame the run ends,
    /// re-reads the store and records the final score iff it beats it.
    pub fn advance_frame(&mut self, dt: f32) -> FrameOutcome {
        let input = TickInput {
            jump: self.pending_jump,
        };
        self.pending_jump = false;

        let outcome = tick(&mut self.state, &input, dt);

        if outcome.game_over {
            let final_score = self.state.display_score();
            let stored = self.store.load();
            if final_score > stored {
                log::info!("New high score: {final_score} (was {stored})");
                self.store.record(final_score);
            }
            // Keep the render cache in step with the store
            self.state.high_score = self.state.high_score.max(stored);
        }

        outcome
    }

    /// Latch a jump attempt for the next frame. Guard rules (alive, on the
    /// ground) are the player's; a doomed attempt is silently dropped there.
    pub fn request_jump(&mut self) {
        self.pending_jump = true;
    }

    /// GameOver → Playing with a fresh world and a re-read high score.
    pub fn reset_session(&mut self) {
        self.pending_jump = false;
        self.state.reset(self.store.load());
    }

    /// Read-only view for renderers; nothing reachable from here mutates.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> f64 {
        self.state.score
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryHighScores;
    use crate::sim::{GameEvent, Obstacle};

    const DT: f32 = 1.0 / 60.0;

    fn session_with_best(best: u32) -> Session {
        Session::new(
            11,
            Tuning::default(),
            Box::new(MemoryHighScores::with_best(best)),
        )
    }

    fn force_game_over(session: &mut Session) -> FrameOutcome {
        let pos = session.state().player.pos;
        session.state.obstacles.push(Obstacle::new(pos, 0.0));
        session.advance_frame(DT)
    }

    #[test]
    fn test_jump_latch_is_consumed_once() {
        let mut session = session_with_best(0);
        session.request_jump();

        let outcome = session.advance_frame(DT);
        assert!(outcome.events.contains(&GameEvent::Jumped));

        // The latch does not stick
        let outcome = session.advance_frame(DT);
        assert!(!outcome.events.contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_high_score_written_only_when_beaten() {
        let mut session = session_with_best(1000);
        assert_eq!(session.high_score(), 1000);

        // A short run cannot beat 1000 points
        for _ in 0..30 {
            session.advance_frame(DT);
        }
        let outcome = force_game_over(&mut session);
        assert!(outcome.game_over);
        assert_eq!(session.store.load(), 1000);
    }

    #[test]
    fn test_high_score_recorded_on_game_over() {
        let mut session = session_with_best(2);

        // Survive ~1 second: 10 points, beating the stored 2
        for _ in 0..60 {
            let outcome = session.advance_frame(DT);
            assert!(!outcome.game_over, "unexpected early game over");
        }
        force_game_over(&mut session);
        assert_eq!(session.store.load(), 10);
    }

    #[test]
    fn test_reset_restores_playing_and_rereads_store() {
        let mut session = session_with_best(0);
        for _ in 0..60 {
            session.advance_frame(DT);
        }
        force_game_over(&mut session);
        assert_eq!(session.phase(), GamePhase::GameOver);

        // Frames while game over change nothing
        let frozen = session.score();
        session.request_jump();
        session.advance_frame(DT);
        assert_eq!(session.score(), frozen);

        session.reset_session();
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.score(), 0.0);
        assert!(session.state().obstacles.is_empty());
        // The score recorded at game over is now the session high score
        assert_eq!(session.high_score(), 10);
        assert!(!session.state().player.is_dead());
    }

    #[test]
    fn test_render_accessors_expose_entity_state() {
        let mut session = session_with_best(0);
        session.request_jump();
        session.advance_frame(DT);

        let player = &session.state().player;
        assert!(player.is_airborne());
        assert!(!player.is_dead());
        assert!(player.pos.y < session.state().tuning.rest_y());

        for obstacle in &session.state().obstacles {
            let _ = obstacle.has_landed();
        }
    }
}
