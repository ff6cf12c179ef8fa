//! Fight configuration.
//!
//! Configuration is plain data, deserialized from RON by the CLI:
//!
//! ```ron
//! (
//!     max_distance: 500.0,
//!     round_limit: Some(1000),
//! )
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};

/// Engagement range used when none is configured.
pub const DEFAULT_MAX_DISTANCE: f64 = 500.0;

/// Parameters of a single fight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FightConfig {
    /// Two living combatants at most this far apart engage each other.
    pub max_distance: f64,
    /// Stop after this many rounds even if combatants are still engaged.
    ///
    /// `None` runs the loop until no pair is in range, which never happens
    /// for a roster holding two in-range combatants whose matchup is
    /// `NoEffect` (two elves, for example).
    pub round_limit: Option<u32>,
}

impl Default for FightConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            round_limit: None,
        }
    }
}

impl FightConfig {
    /// Create a configuration with the given range and no round limit.
    #[must_use]
    pub const fn new(max_distance: f64) -> Self {
        Self {
            max_distance,
            round_limit: None,
        }
    }

    /// Builder method to set the round limit.
    #[must_use]
    pub const fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = Some(limit);
        self
    }

    /// Parse a configuration from RON text.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::DataParseError`] if the text is not a valid
    /// configuration, or a [`ArenaError::ConfigurationError`] if it parses
    /// but fails [`FightConfig::validate`].
    pub fn from_ron(source_name: &str, text: &str) -> Result<Self> {
        let config: Self = ron::from_str(text).map_err(|e| ArenaError::DataParseError {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::ConfigurationError`] if `max_distance` is
    /// negative or not finite, or if `round_limit` is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.max_distance.is_finite() {
            return Err(ArenaError::ConfigurationError {
                field: "max_distance",
                message: format!("must be finite, got {}", self.max_distance),
            });
        }
        if self.max_distance < 0.0 {
            return Err(ArenaError::ConfigurationError {
                field: "max_distance",
                message: format!("must be >= 0, got {}", self.max_distance),
            });
        }
        if self.round_limit == Some(0) {
            return Err(ArenaError::ConfigurationError {
                field: "round_limit",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FightConfig::default();
        assert_eq!(config.max_distance, DEFAULT_MAX_DISTANCE);
        assert_eq!(config.round_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_distance_is_valid() {
        assert!(FightConfig::new(0.0).validate().is_ok());
    }

    #[test]
    fn test_negative_distance_rejected() {
        let err = FightConfig::new(-1.0).validate().unwrap_err();
        assert!(matches!(
            err,
            ArenaError::ConfigurationError {
                field: "max_distance",
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_distance_rejected() {
        assert!(FightConfig::new(f64::NAN).validate().is_err());
        assert!(FightConfig::new(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_zero_round_limit_rejected() {
        let err = FightConfig::new(5.0)
            .with_round_limit(0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ArenaError::ConfigurationError {
                field: "round_limit",
                ..
            }
        ));
    }

    #[test]
    fn test_from_ron() {
        let config =
            FightConfig::from_ron("inline", "(max_distance: 42.5, round_limit: Some(10))").unwrap();
        assert_eq!(config, FightConfig::new(42.5).with_round_limit(10));

        // Missing fields fall back to defaults
        let config = FightConfig::from_ron("inline", "(round_limit: Some(3))").unwrap();
        assert_eq!(config.max_distance, DEFAULT_MAX_DISTANCE);
    }

    #[test]
    fn test_from_ron_errors() {
        assert!(matches!(
            FightConfig::from_ron("bad.ron", "(max_distance: \"far\")"),
            Err(ArenaError::DataParseError { .. })
        ));
        assert!(matches!(
            FightConfig::from_ron("neg.ron", "(max_distance: -3.0)"),
            Err(ArenaError::ConfigurationError { .. })
        ));
    }
}
