//! Game state and core simulation types
//!
//! All per-session state lives on `GameState`; the tick is the sole mutator.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::kinematics::{self, Contact};
use super::spawner::{Spawner, SpeedRamp};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only `reset` leaves this phase
    GameOver,
}

/// Side effects emitted by a frame, consumed by the shell (sound, UI).
/// The core never calls outward into presentation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    Landed,
    Collided,
}

impl GameEvent {
    /// Wire name, matching the shell's sound/notification keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Jumped => "jumped",
            GameEvent::Landed => "landed",
            GameEvent::Collided => "collided",
        }
    }
}

/// The runner. Fixed x; gravity and jumps move it vertically.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel_y: f32,
    on_ground: bool,
    dead: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            on_ground: true,
            dead: false,
        }
    }

    /// One frame of gravity + ground clamp. Returns the landing side effect
    /// when the fall ends this frame. Grounded/airborne is re-derived from
    /// the clamp outcome every frame, not latched.
    pub fn update(&mut self, gravity: f32, rest_y: f32, dt: f32) -> Option<GameEvent> {
        if self.dead {
            return None;
        }

        let step = kinematics::fall_step(self.pos.y, self.vel_y, self.on_ground, gravity, rest_y, dt);
        self.pos.y = step.y;
        self.vel_y = step.vel;
        self.on_ground = step.contact != Contact::Airborne;

        (step.contact == Contact::JustLanded).then_some(GameEvent::Landed)
    }

    /// Attempt a jump. Silently ignored while dead or airborne (no double
    /// jump); returns whether the impulse was applied.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.dead || !self.on_ground {
            return false;
        }
        self.vel_y = impulse;
        self.on_ground = false;
        true
    }

    /// Hitbox: uniformly shrunk so rendering-size overlap noise does not
    /// register as a hit.
    pub fn collision_box(&self, size: Vec2, shrink: f32) -> Aabb {
        Aabb::from_center(self.pos, size * shrink)
    }

    /// Idempotent; only `reset` revives.
    pub fn set_dead(&mut self) {
        self.dead = true;
    }

    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel_y = 0.0;
        self.on_ground = true;
        self.dead = false;
    }

    pub fn is_airborne(&self) -> bool {
        !self.on_ground
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }
}

/// A falling box. Horizontal speed is captured at spawn and never re-read
/// from the ramp; vertical motion freezes permanently on landing.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pos: Vec2,
    pub vel: Vec2,
    landed: bool,
    removed: bool,
}

impl Obstacle {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(-speed, 0.0),
            landed: false,
            removed: false,
        }
    }

    /// Fall until landed (sticky, unlike the player's per-frame contact),
    /// scroll left regardless, and mark for removal past the left edge.
    pub fn update(&mut self, gravity: f32, rest_y: f32, offscreen_x: f32, dt: f32) {
        if !self.landed {
            let step = kinematics::fall_step(self.pos.y, self.vel.y, false, gravity, rest_y, dt);
            self.pos.y = step.y;
            self.vel.y = step.vel;
            if step.contact == Contact::JustLanded {
                self.landed = true;
            }
        }

        self.pos.x += self.vel.x * dt;
        if self.pos.x < offscreen_x {
            self.removed = true;
        }
    }

    /// Full visual-size hitbox, unlike the player's shrunk one.
    pub fn collision_box(&self, size: Vec2) -> Aabb {
        Aabb::from_center(self.pos, size)
    }

    pub fn has_landed(&self) -> bool {
        self.landed
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }
}

/// Complete session state (deterministic given the seed and the inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// World constants, immutable for the session
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    /// The only randomness source in the simulation
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Continuous score; floor it for display
    pub score: f64,
    /// Best score seen so far (session-start value, then live-updated)
    pub high_score: u32,
    pub ramp: SpeedRamp,
    pub spawner: Spawner,
    pub player: Player,
    /// Live boxes in spawn order
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    pub fn new(seed: u64, tuning: Tuning, high_score: u32) -> Self {
        let player = Player::new(tuning.player_start());
        let ramp = SpeedRamp::new(&tuning);
        let spawner = Spawner::new(&tuning);
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            tuning,
            phase: GamePhase::Playing,
            score: 0.0,
            high_score,
            ramp,
            spawner,
            player,
            obstacles: Vec::new(),
        }
    }

    /// GameOver → Playing. Clears the boxes and restores initial values;
    /// the tuning and the RNG stream are kept.
    pub fn reset(&mut self, high_score: u32) {
        self.obstacles.clear();
        self.player.reset(self.tuning.player_start());
        self.ramp.reset();
        self.spawner.reset(&self.tuning);
        self.score = 0.0;
        self.high_score = high_score;
        self.phase = GamePhase::Playing;
    }

    /// Score as shown to the player.
    pub fn display_score(&self) -> u32 {
        self.score as u32
    }
}
