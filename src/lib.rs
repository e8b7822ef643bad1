//! Box Dash - an endless-runner arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `session`: Outer shell wiring input, the sim, and persistence
//! - `highscores`: Injected high-score persistence collaborator
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input devices, and audio live outside this crate; they drive
//! the session through `request_jump`/`advance_frame` and consume the
//! returned `FrameOutcome` plus the read-only state accessors.

pub mod highscores;
pub mod session;
pub mod sim;
pub mod tuning;

pub use highscores::{HighScoreStore, JsonFileHighScores, MemoryHighScores};
pub use session::Session;
pub use sim::{FrameOutcome, GameEvent, GamePhase, TickInput};
pub use tuning::{Tuning, TuningError};
