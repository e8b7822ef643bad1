//! High score persistence
//!
//! The simulation never touches storage. A store is injected into the
//! session and consulted at session start, on game over, and on reset; a
//! failing store is logged and otherwise ignored.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Injected persistence collaborator for the single high-score scalar.
pub trait HighScoreStore {
    /// Best recorded score, 0 if none.
    fn load(&self) -> u32;
    /// Persist a new best. Fire-and-forget; failures must not surface into
    /// the simulation.
    fn record(&mut self, score: u32);
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryHighScores {
    best: u32,
}

impl MemoryHighScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best }
    }
}

impl HighScoreStore for MemoryHighScores {
    fn load(&self) -> u32 {
        self.best
    }

    fn record(&mut self, score: u32) {
        self.best = score;
    }
}

/// On-disk envelope
#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// JSON-file-backed store. A missing or corrupt file loads as 0.
#[derive(Debug, Clone)]
pub struct JsonFileHighScores {
    path: PathBuf,
}

impl JsonFileHighScores {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for JsonFileHighScores {
    fn load(&self) -> u32 {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<HighScoreFile>(&json) {
                Ok(file) => {
                    log::info!("Loaded high score {}", file.high_score);
                    file.high_score
                }
                Err(e) => {
                    log::warn!("Corrupt high-score file {}: {e}", self.path.display());
                    0
                }
            },
            Err(_) => {
                log::info!("No high-score file at {}; starting fresh", self.path.display());
                0
            }
        }
    }

    fn record(&mut self, score: u32) {
        if let Ok(json) = serde_json::to_string(&HighScoreFile { high_score: score }) {
            match std::fs::write(&self.path, json) {
                Ok(()) => log::info!("High score {score} saved"),
                Err(e) => log::warn!("Failed to save high score: {e}"),
            }
        }
    }
}
