//! Roster reports printed before and after a fight.

use std::fmt;

use arena_core::combatant::Combatant;
use arena_core::fight::FightReport;
use serde::Serialize;

/// One line per combatant: name, species, coordinates, health.
#[derive(Debug, Clone, Copy)]
pub struct RosterTable<'a>(pub &'a [Combatant]);

impl fmt::Display for RosterTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for npc in self.0 {
            writeln!(
                f,
                "NPC: {}, Type: {}, Coords: {}, Health: {}",
                npc.name(),
                npc.species(),
                npc.position(),
                npc.health()
            )?;
        }
        Ok(())
    }
}

/// Machine-readable fight result for `--json`.
#[derive(Debug, Serialize)]
pub struct FightSummary<'a> {
    /// Loop statistics.
    pub report: FightReport,
    /// Combatants left standing.
    pub survivors: &'a [Combatant],
}
