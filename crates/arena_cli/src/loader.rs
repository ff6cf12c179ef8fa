//! Roster and configuration file loading.
//!
//! Roster files ending in `.ron` are read as [`RosterFile`] documents; any
//! other extension is read as the plain `name species x y` text format.
//!
//! [`RosterFile`]: arena_core::roster::RosterFile

use std::fs;
use std::path::Path;

use arena_core::config::FightConfig;
use arena_core::error::ArenaError;
use arena_core::roster::{self, RosterRecord};
use thiserror::Error;

/// Errors raised while reading input files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file.
    #[error("IO error reading '{path}': {source}")]
    Io {
        /// File that could not be read.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// File was read but its contents are invalid.
    #[error(transparent)]
    Invalid(#[from] ArenaError),
}

/// Records read from a roster file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedRoster {
    /// Records in file order. Unknown species are still present here.
    pub records: Vec<RosterRecord>,
    /// Lines or records that could not be parsed at all.
    pub skipped_lines: usize,
}

impl LoadedRoster {
    /// Records whose species tag is recognised.
    #[must_use]
    pub fn known_species(&self) -> usize {
        self.records.iter().filter(|r| r.species().is_ok()).count()
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load a roster file.
pub fn load_roster(path: &Path) -> Result<LoadedRoster, LoadError> {
    let content = read(path)?;

    let parsed = if path.extension().is_some_and(|ext| ext == "ron") {
        roster::parse_ron(&path.display().to_string(), &content)?
    } else {
        roster::parse_text(&content)
    };
    let loaded = LoadedRoster {
        records: parsed.records,
        skipped_lines: parsed.skipped.len(),
    };

    tracing::debug!(
        path = %path.display(),
        records = loaded.records.len(),
        skipped = loaded.skipped_lines,
        "Roster file read"
    );
    Ok(loaded)
}

/// Load and validate a RON fight configuration.
pub fn load_config(path: &Path) -> Result<FightConfig, LoadError> {
    let content = read(path)?;
    Ok(FightConfig::from_ron(&path.display().to_string(), &content)?)
}
