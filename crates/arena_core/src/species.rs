//! Species tags and their fixed stats.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;

/// The closed set of NPC species.
///
/// Health and damage are pure functions of the species, so a
/// combatant's damage can never drift from its species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Heavy hitter with a large health pool.
    Bear,
    /// Fragile but preys on bandits.
    Elf,
    /// Fights other bandits on sight.
    Bandit,
}

impl Species {
    /// Every species, in declaration order.
    pub const ALL: [Self; 3] = [Self::Bear, Self::Elf, Self::Bandit];

    /// Starting health for a freshly created combatant.
    #[must_use]
    pub const fn base_health(self) -> i32 {
        match self {
            Self::Bear => 300,
            Self::Elf => 100,
            Self::Bandit => 120,
        }
    }

    /// Damage dealt per successful strike.
    #[must_use]
    pub const fn damage(self) -> i32 {
        match self {
            Self::Bear => 100,
            Self::Elf => 30,
            Self::Bandit => 20,
        }
    }

    /// Tag used in roster files and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bear => "Bear",
            Self::Elf => "Elf",
            Self::Bandit => "Bandit",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Species {
    type Err = ArenaError;

    /// Roster tags are case-sensitive, matching the roster file format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bear" => Ok(Self::Bear),
            "Elf" => Ok(Self::Elf),
            "Bandit" => Ok(Self::Bandit),
            other => Err(ArenaError::UnknownSpecies(other.to_string())),
        }
    }
}
