//! Roster record parsing.
//!
//! Records are the boundary between roster sources and the core. They keep
//! the species as raw text: deciding that an unknown tag means "skip" is
//! the scheduler's job (see [`crate::fight::FightScheduler::load_records`]).
//!
//! Two source formats are understood:
//!
//! - Plain text, one `name species x y` record per line. Blank lines and
//!   lines starting with `#` are ignored.
//! - RON, `(npcs: [(name: "Grizzly", species: "Bear", x: 0.0, y: 0.0)])`.
//!
//! **Note:** This module contains no IO - it only parses text. File loading
//! is handled by `arena_cli`.

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};
use crate::position::Position;
use crate::species::Species;

/// One NPC description from a roster source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRecord {
    /// Display name.
    pub name: String,
    /// Species tag, e.g. `"Elf"`.
    pub species: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl RosterRecord {
    /// Create a record.
    #[must_use]
    pub fn new(name: impl Into<String>, species: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            x,
            y,
        }
    }

    /// Parse the species tag.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::UnknownSpecies`] for tags outside the closed set.
    pub fn species(&self) -> Result<Species> {
        self.species.parse()
    }

    /// Position described by the record.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// RON roster document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterFile {
    /// Records in fight order.
    pub npcs: Vec<RosterRecord>,
}

/// A roster entry that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number for text rosters, 1-based record number for RON.
    pub line: usize,
    /// Why the line was skipped.
    pub reason: String,
}

/// Result of parsing a roster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRoster {
    /// Well-formed records, in source order.
    pub records: Vec<RosterRecord>,
    /// Malformed entries.
    pub skipped: Vec<SkippedLine>,
}

/// Parse a whitespace separated text roster.
///
/// Never fails: malformed lines are reported in [`ParsedRoster::skipped`]
/// and logged at `warn`.
#[must_use]
pub fn parse_text(text: &str) -> ParsedRoster {
    let mut parsed = ParsedRoster::default();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_line(trimmed) {
            Ok(record) => parsed.records.push(record),
            Err(reason) => {
                tracing::warn!(line = line_number, %reason, "Skipping roster line");
                parsed.skipped.push(SkippedLine {
                    line: line_number,
                    reason,
                });
            }
        }
    }

    parsed
}

fn parse_line(line: &str) -> std::result::Result<RosterRecord, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [name, species, x, y] = fields.as_slice() else {
        return Err(format!("expected 4 fields, found {}", fields.len()));
    };

    let x = parse_coordinate(x)?;
    let y = parse_coordinate(y)?;
    Ok(RosterRecord::new(*name, *species, x, y))
}

fn parse_coordinate(field: &str) -> std::result::Result<f64, String> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(value) => Err(format!("coordinate must be finite, got {value}")),
        Err(e) => Err(format!("invalid coordinate '{field}': {e}")),
    }
}

/// Parse a RON roster document.
///
/// Records with a NaN or infinite coordinate are skipped like malformed
/// text lines. Species tags are not checked here.
///
/// # Errors
///
/// Returns [`ArenaError::DataParseError`] if the document does not match
/// [`RosterFile`].
pub fn parse_ron(source_name: &str, text: &str) -> Result<ParsedRoster> {
    let file: RosterFile = ron::from_str(text).map_err(|e| ArenaError::DataParseError {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })?;

    let mut parsed = ParsedRoster::default();
    for (index, record) in file.npcs.into_iter().enumerate() {
        if record.position().is_finite() {
            parsed.records.push(record);
            continue;
        }

        let reason = format!("coordinates must be finite, got {}", record.position());
        tracing::warn!(record = index + 1, name = %record.name, %reason, "Skipping roster record");
        parsed.skipped.push(SkippedLine {
            line: index + 1,
            reason,
        });
    }

    Ok(parsed)
}
