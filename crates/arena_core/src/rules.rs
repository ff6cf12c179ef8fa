//! Species matchup rule engine.
//!
//! The rule table is intentionally non-reciprocal: only the side the
//! scheduler designates as attacker selects the row. An elf attacking a
//! bear does nothing, even though a bear attacking an elf kills it.
//!
//! | Attacker | Defender | Outcome        |
//! |----------|----------|----------------|
//! | Bear     | Elf      | `AttackerWins` |
//! | Elf      | Bandit   | `AttackerWins` |
//! | Bandit   | Bandit   | `MutualDamage` |
//! | other    | other    | `NoEffect`     |

use serde::{Deserialize, Serialize};

use crate::species::Species;

/// Result of matching an attacker species against a defender species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nothing happens.
    NoEffect,
    /// The defender takes the attacker's damage.
    AttackerWins,
    /// The attacker takes the defender's damage. No table row produces
    /// this today; the scheduler still applies it.
    DefenderWins,
    /// Both sides take each other's damage.
    MutualDamage,
}

impl Outcome {
    /// Whether the defender loses health under this outcome.
    #[must_use]
    pub const fn damages_defender(self) -> bool {
        matches!(self, Self::AttackerWins | Self::MutualDamage)
    }

    /// Whether the attacker loses health under this outcome.
    #[must_use]
    pub const fn damages_attacker(self) -> bool {
        matches!(self, Self::DefenderWins | Self::MutualDamage)
    }
}

/// Look up the outcome for an attacker/defender species pair.
///
/// Total over every pair and free of side effects.
#[must_use]
pub const fn resolve(attacker: Species, defender: Species) -> Outcome {
    match (attacker, defender) {
        (Species::Bear, Species::Elf) => Outcome::AttackerWins,
        (Species::Elf, Species::Bandit) => Outcome::AttackerWins,
        (Species::Bandit, Species::Bandit) => Outcome::MutualDamage,

        (Species::Bear, Species::Bear | Species::Bandit)
        | (Species::Elf, Species::Bear | Species::Elf)
        | (Species::Bandit, Species::Bear | Species::Elf) => Outcome::NoEffect,
    }
}
