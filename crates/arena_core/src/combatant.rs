//! NPC combatants and the species factories.
//!
//! Combatants can only be created through [`Combatant::spawn`] or one of
//! the per-species shorthands. Every creation publishes a
//! [`FightEvent::Created`] through the dispatcher it is given; no other
//! code path emits that event.

use serde::Serialize;

use crate::error::{ArenaError, Result};
use crate::events::EventDispatcher;
use crate::position::Position;
use crate::species::Species;

/// An NPC taking part in a fight.
///
/// Species, name and position are fixed at creation. Health is the only
/// mutable state and may drop below zero: damage is never clamped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combatant {
    species: Species,
    name: String,
    position: Position,
    health: i32,
}

impl Combatant {
    /// Create a combatant of the given species and announce it.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidName`] if `name` is empty or only
    /// whitespace, and [`ArenaError::InvalidPosition`] if a coordinate is
    /// NaN or infinite. Nothing is published in either case.
    pub fn spawn(
        species: Species,
        name: impl Into<String>,
        position: Position,
        events: &mut EventDispatcher<'_>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ArenaError::InvalidName);
        }
        if !position.is_finite() {
            return Err(ArenaError::InvalidPosition { name, position });
        }

        let npc = Self {
            species,
            name,
            position,
            health: species.base_health(),
        };
        tracing::trace!(name = %npc.name, species = %species, position = %position, "NPC created");
        events.npc_created(&npc);
        Ok(npc)
    }

    /// Create a bear.
    pub fn bear(
        name: impl Into<String>,
        position: Position,
        events: &mut EventDispatcher<'_>,
    ) -> Result<Self> {
        Self::spawn(Species::Bear, name, position, events)
    }

    /// Create an elf.
    pub fn elf(
        name: impl Into<String>,
        position: Position,
        events: &mut EventDispatcher<'_>,
    ) -> Result<Self> {
        Self::spawn(Species::Elf, name, position, events)
    }

    /// Create a bandit.
    pub fn bandit(
        name: impl Into<String>,
        position: Position,
        events: &mut EventDispatcher<'_>,
    ) -> Result<Self> {
        Self::spawn(Species::Bandit, name, position, events)
    }

    /// Species tag.
    #[must_use]
    pub const fn species(&self) -> Species {
        self.species
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed position on the plane.
    #[must_use]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    /// Current health. Zero or below means dead.
    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Damage per strike, derived from the species.
    #[must_use]
    pub const fn damage(&self) -> i32 {
        self.species.damage()
    }

    /// Whether the combatant still has positive health.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Distance between two combatants.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.position.distance(&other.position)
    }

    /// Apply one strike of `amount` damage.
    pub(crate) fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }
}
