//! Proptest strategies for arena types.

use arena_core::combatant::Combatant;
use arena_core::position::Position;
use arena_core::species::Species;
use proptest::prelude::*;

use crate::fixtures::npc;

/// Any species.
pub fn arb_species() -> impl Strategy<Value = Species> {
    prop::sample::select(Species::ALL.to_vec())
}

/// Positions with coordinates in `-1000..1000`.
pub fn arb_position() -> impl Strategy<Value = Position> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Position::new(x, y))
}

/// Rosters of up to `max_len` combatants with unique names.
///
/// These rosters can hold in-range pairs that never damage each other, so
/// fights over them should set a round limit.
pub fn arb_roster(max_len: usize) -> impl Strategy<Value = Vec<Combatant>> {
    prop::collection::vec((arb_species(), arb_position()), 0..max_len).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (species, pos))| npc(species, &format!("npc-{i}"), pos.x(), pos.y()))
            .collect()
    })
}
