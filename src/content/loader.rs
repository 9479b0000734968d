//! Loader for the RON tuning file and the level grid at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::DuelTuning;
use super::level::LevelLayout;

/// Default location of the tuning file.
pub const TUNING_PATH: &str = "assets/data/duel.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse tuning from RON text.
pub fn parse_tuning(contents: &str, file: &str) -> Result<DuelTuning, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn load_tuning(path: &Path) -> Result<DuelTuning, ContentLoadError> {
    let contents = read_file(path)?;
    parse_tuning(&contents, &path.display().to_string())
}

/// Tuning is optional: a missing or broken file falls back to defaults.
pub fn load_tuning_or_default(path: &Path) -> DuelTuning {
    match load_tuning(path) {
        Ok(tuning) => {
            info!("Loaded duel tuning from {}", path.display());
            tuning
        }
        Err(e) => {
            warn!("{}; using built-in tuning", e);
            DuelTuning::default()
        }
    }
}

/// The level grid is required; callers treat an error as fatal.
pub fn load_level(tuning: &DuelTuning) -> Result<LevelLayout, ContentLoadError> {
    let contents = read_file(Path::new(&tuning.arena.level_path))?;
    Ok(LevelLayout::parse(&contents, &tuning.arena))
}
