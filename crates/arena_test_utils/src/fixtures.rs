//! Test fixtures and helpers.
//!
//! Pre-built combatants and rosters for consistent testing. Everything is
//! created through the species factories with a throwaway dispatcher, so
//! no observer sees the creation events.

use arena_core::combatant::Combatant;
use arena_core::events::EventDispatcher;
use arena_core::position::Position;
use arena_core::species::Species;

/// Create a combatant without announcing it to anyone.
///
/// # Panics
///
/// Panics if `name` is empty.
#[must_use]
pub fn npc(species: Species, name: &str, x: f64, y: f64) -> Combatant {
    let mut events = EventDispatcher::new();
    Combatant::spawn(species, name, Position::new(x, y), &mut events)
        .expect("fixture names are never empty")
}

/// Bear at `(x, y)`.
#[must_use]
pub fn bear(name: &str, x: f64, y: f64) -> Combatant {
    npc(Species::Bear, name, x, y)
}

/// Elf at `(x, y)`.
#[must_use]
pub fn elf(name: &str, x: f64, y: f64) -> Combatant {
    npc(Species::Elf, name, x, y)
}

/// Bandit at `(x, y)`.
#[must_use]
pub fn bandit(name: &str, x: f64, y: f64) -> Combatant {
    npc(Species::Bandit, name, x, y)
}

/// A mixed roster spread along a line, `spacing` apart.
///
/// Species cycle Bear, Elf, Bandit; names are `npc-0`, `npc-1`, ...
#[must_use]
pub fn line_roster(count: usize, spacing: f64) -> Vec<Combatant> {
    (0..count)
        .map(|i| {
            let species = Species::ALL[i % Species::ALL.len()];
            npc(species, &format!("npc-{i}"), i as f64 * spacing, 0.0)
        })
        .collect()
}

/// Text roster matching [`line_roster`] for loader tests.
#[must_use]
pub fn line_roster_text(count: usize, spacing: f64) -> String {
    (0..count)
        .map(|i| {
            let species = Species::ALL[i % Species::ALL.len()];
            format!("npc-{i} {species} {} 0\n", i as f64 * spacing)
        })
        .collect()
}
