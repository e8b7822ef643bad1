//! Obstacle spawning and the difficulty ramp
//!
//! A timer accumulator drives spawns; each spawn re-draws the next interval
//! and a start height from the session RNG. New boxes take the ramp's
//! current speed; boxes already in flight are never touched by the ramp.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Monotone obstacle-speed scalar: grows by `rate` per second while the run
/// lasts, clamped to `max`, back to `base` on restart.
#[derive(Debug, Clone)]
pub struct SpeedRamp {
    base: f32,
    rate: f32,
    max: f32,
    current: f32,
}

impl SpeedRamp {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            base: tuning.base_speed,
            rate: tuning.speed_increase,
            max: tuning.max_speed,
            current: tuning.base_speed,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.current = (self.current + self.rate * dt).min(self.max);
    }

    pub fn reset(&mut self) {
        self.current = self.base;
    }

    pub fn current(&self) -> f32 {
        self.current
    }
}

/// Timer-accumulator spawner. At most one box per frame.
#[derive(Debug, Clone)]
pub struct Spawner {
    timer: f32,
    interval: f32,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            timer: 0.0,
            interval: tuning.spawn_interval_initial,
        }
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        self.timer = 0.0;
        self.interval = tuning.spawn_interval_initial;
    }

    /// Accumulate `dt`; on expiry, zero the accumulator, draw the next
    /// interval uniformly from the configured range, and emit one box just
    /// past the right edge at a staggered height above the scene, moving
    /// left at `speed`.
    pub fn advance(
        &mut self,
        dt: f32,
        rng: &mut Pcg32,
        tuning: &Tuning,
        speed: f32,
    ) -> Option<Obstacle> {
        self.timer += dt;
        if self.timer < self.interval {
            return None;
        }

        self.timer = 0.0;
        self.interval = rng.random_range(tuning.spawn_interval_min..=tuning.spawn_interval_max);

        let y = rng.random_range(tuning.fall_start_y - tuning.fall_band..=tuning.fall_start_y);
        Some(Obstacle::new(Vec2::new(tuning.spawn_x(), y), speed))
    }

    /// Seconds until the next spawn at the current accumulator value.
    pub fn time_to_spawn(&self) -> f32 {
        (self.interval - self.timer).max(0.0)
    }
}
