//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-supplied time deltas only
//! - Seeded RNG only
//! - Stable obstacle order (spawn order)
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod kinematics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use kinematics::{Contact, FallStep, fall_step};
pub use spawner::{Spawner, SpeedRamp};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Player};
pub use tick::{FrameOutcome, TickInput, tick};
