use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::game::ScoreStore;

#[derive(Serialize, Deserialize, Clone, Debug)]
struct ScoreEntry {
    score: u32,
    achieved_at: DateTime<Local>,
}

/// High-score persistence backed by a small JSON file.
///
/// A missing or unreadable file reads as zero; writes are best-effort and
/// only logged on failure, so a read-only disk never interrupts play.
pub struct JsonScoreFile {
    path: PathBuf,
    best: Option<ScoreEntry>,
}

impl JsonScoreFile {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => None,
        };
        Self { path, best }
    }

    fn save(&self) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.best)?;
        fs::write(&self.path, json)
    }
}

impl ScoreStore for JsonScoreFile {
    fn high_score(&self) -> u32 {
        self.best.as_ref().map(|entry| entry.score).unwrap_or(0)
    }

    fn set_high_score(&mut self, score: u32) {
        self.best = Some(ScoreEntry {
            score,
            achieved_at: Local::now(),
        });
        if let Err(e) = self.save() {
            warn!("failed to save high score to {}: {e}", self.path.display());
        }
    }
}
