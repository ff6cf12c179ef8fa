//! Recording observer.
//!
//! Captures every event as an owned [`Recorded`] value so tests can
//! compare whole event streams after the dispatcher is gone.

use arena_core::events::{FightEvent, FightObserver};

/// Owned copy of a [`FightEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    /// A combatant was created.
    Created {
        /// Combatant name.
        name: String,
    },
    /// Round started.
    RoundStart(u64),
    /// Round ended.
    RoundEnd(u64),
    /// An attack landed.
    Attack {
        /// Attacker name.
        attacker: String,
        /// Target name.
        target: String,
        /// Target health right after the strike.
        target_health: i32,
    },
    /// A combatant died.
    Death {
        /// Victim name.
        victim: String,
        /// Killer name.
        killer: String,
    },
}

impl Recorded {
    /// Shorthand for an attack record.
    #[must_use]
    pub fn attack(attacker: &str, target: &str, target_health: i32) -> Self {
        Self::Attack {
            attacker: attacker.to_string(),
            target: target.to_string(),
            target_health,
        }
    }

    /// Shorthand for a death record.
    #[must_use]
    pub fn death(victim: &str, killer: &str) -> Self {
        Self::Death {
            victim: victim.to_string(),
            killer: killer.to_string(),
        }
    }
}

/// Observer that stores every event it sees.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    /// Events in delivery order.
    pub events: Vec<Recorded>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Round numbers of every `RoundStart`, in order.
    #[must_use]
    pub fn round_starts(&self) -> Vec<u64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Recorded::RoundStart(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    /// Every `Death` record, in order.
    #[must_use]
    pub fn deaths(&self) -> Vec<&Recorded> {
        self.events
            .iter()
            .filter(|e| matches!(e, Recorded::Death { .. }))
            .collect()
    }

    /// Every `Attack` record, in order.
    #[must_use]
    pub fn attacks(&self) -> Vec<&Recorded> {
        self.events
            .iter()
            .filter(|e| matches!(e, Recorded::Attack { .. }))
            .collect()
    }
}

impl FightObserver for RecordingObserver {
    fn on_event(&mut self, event: &FightEvent<'_>) {
        let recorded = match *event {
            FightEvent::Created { npc } => Recorded::Created {
                name: npc.name().to_string(),
            },
            FightEvent::RoundStart { round } => Recorded::RoundStart(round),
            FightEvent::RoundEnd { round } => Recorded::RoundEnd(round),
            FightEvent::Attack { attacker, target } => {
                Recorded::attack(attacker.name(), target.name(), target.health())
            }
            FightEvent::Death { victim, killer } => Recorded::death(victim.name(), killer.name()),
        };
        self.events.push(recorded);
    }
}
