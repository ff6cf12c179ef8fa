//! Error types for the fight core.

use thiserror::Error;

use crate::position::Position;

/// Result type alias using [`ArenaError`].
pub type Result<T> = std::result::Result<T, ArenaError>;

/// Top-level error type for the fight core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArenaError {
    /// A fight configuration value is out of range.
    #[error("Invalid configuration for '{field}': {message}")]
    ConfigurationError {
        /// Name of the offending field.
        field: &'static str,
        /// Error message.
        message: String,
    },

    /// Combatant names must contain at least one non-whitespace character.
    #[error("Combatant name must not be empty")]
    InvalidName,

    /// Combatant positions must have finite coordinates.
    #[error("Combatant '{name}' has a non-finite position {position}")]
    InvalidPosition {
        /// Name of the rejected combatant.
        name: String,
        /// The offending position.
        position: Position,
    },

    /// Species tag not in the closed species set.
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    /// Data parsing error.
    #[error("Failed to parse '{source_name}': {message}")]
    DataParseError {
        /// Name of the input that failed to parse (file path or label).
        source_name: String,
        /// Error message.
        message: String,
    },
}
