//! Progress persistence
//!
//! The learning core keeps bookmarks and completion in memory only. This store
//! snapshots one tracker per pillar so the CLI can carry them across runs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Config;
use crate::learning::ProgressTracker;

/// Trackers per pillar, keyed by pillar id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStore {
    pub pillars: HashMap<u32, ProgressTracker>,
}

impl ProgressStore {
    /// Load progress from disk
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::progress_path()?)
    }

    /// Load progress from a specific path, empty if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read progress from {:?}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse progress.json")
        } else {
            Ok(Self::default())
        }
    }

    /// Save progress to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::progress_path()?)
    }

    /// Save progress to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize progress")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write progress to {:?}", path))?;

        Ok(())
    }

    /// Get progress path
    pub fn progress_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("progress.json"))
    }

    /// Tracker for a pillar, if any progress was recorded
    pub fn tracker(&self, pillar_id: u32) -> Option<&ProgressTracker> {
        self.pillars.get(&pillar_id)
    }

    /// Get or create the tracker for a pillar
    pub fn tracker_mut(&mut self, pillar_id: u32) -> &mut ProgressTracker {
        self.pillars.entry(pillar_id).or_default()
    }
}
