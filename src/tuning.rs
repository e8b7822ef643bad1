//! Data-driven game balance
//!
//! Every world constant lives in one serializable struct so a session can be
//! configuration-loaded and tests can run scaled-down worlds. Defaults match
//! the shipped game. Units are pixels and seconds; y grows downward, so
//! gravity is positive and the jump impulse negative.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// World constants, immutable for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Scene width in pixels (the visible scroll area)
    pub scene_width: f32,
    /// Vertical coordinate where falling entities come to rest
    pub ground_line_y: f32,
    /// Downward acceleration, px/s²
    pub gravity: f32,
    /// Vertical velocity applied by a jump, px/s (negative = up)
    pub jump_impulse: f32,
    /// Entity width and height (player and boxes share one size)
    pub sprite_size: f32,
    /// Obstacle speed at session start, px/s
    pub base_speed: f32,
    /// Ramp rate: obstacle speed gained per second, px/s²
    pub speed_increase: f32,
    /// Ramp ceiling, px/s
    pub max_speed: f32,
    /// Spawn interval before the first re-draw, seconds
    pub spawn_interval_initial: f32,
    /// Lower bound of the re-drawn spawn interval, seconds
    pub spawn_interval_min: f32,
    /// Upper bound of the re-drawn spawn interval, seconds
    pub spawn_interval_max: f32,
    /// Boxes spawn this far past the right edge
    pub spawn_margin_x: f32,
    /// Top of the spawn band (above the visible area, so negative)
    pub fall_start_y: f32,
    /// Height of the band above `fall_start_y` spawns are staggered over
    pub fall_band: f32,
    /// Boxes scrolled left of this x are removed
    pub offscreen_x: f32,
    /// Player x as a fraction of the scene width
    pub player_x_frac: f32,
    /// Score gained per second survived
    pub score_rate: f32,
    /// Uniform shrink applied to the player's hitbox vs its visual size
    pub hitbox_shrink: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scene_width: 900.0,
            ground_line_y: 500.0,
            gravity: 1800.0,
            jump_impulse: -680.0,
            sprite_size: 64.0,
            base_speed: 280.0,
            speed_increase: 8.0,
            max_speed: 700.0,
            spawn_interval_initial: 1.2,
            spawn_interval_min: 0.8,
            spawn_interval_max: 2.0,
            spawn_margin_x: 60.0,
            fall_start_y: -80.0,
            fall_band: 100.0,
            offscreen_x: -100.0,
            player_x_frac: 0.18,
            score_rate: 10.0,
            hitbox_shrink: 0.5,
        }
    }
}

impl Tuning {
    /// Parse from JSON and validate.
    pub fn from_json(s: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(s)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.gravity > 0.0) {
            return Err(TuningError::Invalid("gravity must be positive"));
        }
        if !(self.jump_impulse < 0.0) {
            return Err(TuningError::Invalid("jump_impulse must be negative (up)"));
        }
        if !(self.sprite_size > 0.0) {
            return Err(TuningError::Invalid("sprite_size must be positive"));
        }
        if !(self.base_speed > 0.0) || self.base_speed > self.max_speed {
            return Err(TuningError::Invalid("speed bounds must satisfy 0 < base <= max"));
        }
        if self.speed_increase < 0.0 {
            return Err(TuningError::Invalid("speed_increase must be non-negative"));
        }
        if !(self.spawn_interval_min > 0.0)
            || self.spawn_interval_min > self.spawn_interval_max
            || !(self.spawn_interval_initial > 0.0)
        {
            return Err(TuningError::Invalid("spawn intervals must be positive, min <= max"));
        }
        if self.fall_band < 0.0 {
            return Err(TuningError::Invalid("fall_band must be non-negative"));
        }
        if self.score_rate < 0.0 {
            return Err(TuningError::Invalid("score_rate must be non-negative"));
        }
        if !(self.hitbox_shrink > 0.0 && self.hitbox_shrink <= 1.0) {
            return Err(TuningError::Invalid("hitbox_shrink must be in (0, 1]"));
        }
        Ok(())
    }

    /// Entity width/height as a vector.
    pub fn entity_size(&self) -> Vec2 {
        Vec2::splat(self.sprite_size)
    }

    /// Y at which an entity center rests on the ground line.
    pub fn rest_y(&self) -> f32 {
        self.ground_line_y - self.sprite_size / 2.0
    }

    /// Player's fixed position at session start.
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.scene_width * self.player_x_frac, self.rest_y())
    }

    /// X just past the right edge where boxes spawn.
    pub fn spawn_x(&self) -> f32 {
        self.scene_width + self.spawn_margin_x
    }
}

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("parse error")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}
