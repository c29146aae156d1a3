//! Curriculum loading
//!
//! Pillar descriptors are static page configuration. They come from a JSON
//! file chosen in the config, or from the sample curriculum compiled into the
//! binary.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::Curriculum;

/// Sample curriculum shipped with the binary
const BUILTIN_CURRICULUM: &str = include_str!("../../data/curriculum.json");

impl Curriculum {
    /// Load a curriculum from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read curriculum from {:?}", path))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to load curriculum from {:?}", path))
    }

    /// The built-in sample curriculum
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CURRICULUM).context("Built-in curriculum is invalid")
    }

    /// Load from the given path if any, otherwise fall back to the built-in curriculum
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::builtin(),
        }
    }

    /// Parse and validate a curriculum
    pub fn from_json(json: &str) -> Result<Self> {
        let curriculum: Curriculum =
            serde_json::from_str(json).context("Failed to parse curriculum JSON")?;
        curriculum.validate()?;
        Ok(curriculum)
    }

    /// Pillar ids and section ids within a pillar must be unique
    fn validate(&self) -> Result<()> {
        let mut pillar_ids = HashSet::new();
        for pillar in &self.pillars {
            if !pillar_ids.insert(pillar.id) {
                bail!("Duplicate pillar id {}", pillar.id);
            }

            let mut section_ids = HashSet::new();
            for section in &pillar.sections {
                if !section_ids.insert(section.id.as_str()) {
                    bail!("Duplicate section id '{}' in pillar {}", section.id, pillar.id);
                }
            }
        }
        Ok(())
    }
}
