//! Round-based fight scheduler.
//!
//! Each round scans every pair of living combatants `(i, j)` with `i < j`
//! in roster order. Roster position alone decides roles: the lower index is
//! always the attacker, and the higher index only strikes back when the
//! matchup is [`Outcome::MutualDamage`](crate::rules::Outcome::MutualDamage) (or `DefenderWins`).
//!
//! The loop keeps going while any pair was within range during the round.
//! Engagement is decided by distance, not by effect, so two in-range
//! combatants whose matchup is [`Outcome::NoEffect`](crate::rules::Outcome::NoEffect) keep the loop alive
//! forever. [`FightConfig::round_limit`] is the opt-in way out.
//!
//! # Example
//!
//! ```
//! use arena_core::prelude::*;
//!
//! let mut scheduler = FightScheduler::new();
//! scheduler.spawn(Species::Bear, "Grizzly", Position::new(0.0, 0.0)).unwrap();
//! scheduler.spawn(Species::Elf, "Legolas", Position::new(3.0, 4.0)).unwrap();
//!
//! let report = scheduler.run(&FightConfig::new(5.0)).unwrap();
//!
//! assert_eq!(report.deaths, 1);
//! assert_eq!(scheduler.roster().len(), 1);
//! assert_eq!(scheduler.roster()[0].name(), "Grizzly");
//! ```

use serde::{Deserialize, Serialize};

use crate::combatant::Combatant;
use crate::config::FightConfig;
use crate::error::Result;
use crate::events::{EventDispatcher, FightObserver, ObserverId};
use crate::position::Position;
use crate::roster::RosterRecord;
use crate::rules::resolve;
use crate::species::Species;

/// Summary of a completed fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FightReport {
    /// Rounds started, including the final round in which nobody engaged.
    pub rounds: u64,
    /// Death events emitted.
    pub deaths: u32,
    /// Combatants left after the dead were purged.
    pub survivors: usize,
    /// Whether the fight stopped because of [`FightConfig::round_limit`].
    pub round_limit_reached: bool,
}

/// Run a fight over `roster` and return the survivors.
///
/// Dead combatants stay in place while the fight runs and are removed in a
/// single pass once the loop exits, keeping the survivors' relative order.
///
/// # Errors
///
/// Returns [`crate::error::ArenaError::ConfigurationError`] if `config`
/// fails validation. No events are published in that case.
pub fn run_fight(
    mut roster: Vec<Combatant>,
    config: &FightConfig,
    events: &mut EventDispatcher<'_>,
) -> Result<(Vec<Combatant>, FightReport)> {
    config.validate()?;

    let mut report = FightReport::default();
    let mut round: u64 = 1;

    loop {
        tracing::debug!(round, "Round started");
        events.round_start(round);
        report.rounds = round;

        let engaged = run_round(&mut roster, config.max_distance, events, &mut report);

        events.round_end(round);
        tracing::debug!(round, engaged, "Round ended");

        if !engaged {
            break;
        }
        if config.round_limit.is_some_and(|limit| round >= u64::from(limit)) {
            tracing::warn!(round, "Round limit reached with combatants still engaged");
            report.round_limit_reached = true;
            break;
        }
        round += 1;
    }

    roster.retain(Combatant::is_alive);
    report.survivors = roster.len();

    tracing::info!(
        rounds = report.rounds,
        deaths = report.deaths,
        survivors = report.survivors,
        "Fight finished"
    );

    Ok((roster, report))
}

/// Evaluate every eligible pair once. Returns whether any pair was in range.
fn run_round(
    roster: &mut [Combatant],
    max_distance: f64,
    events: &mut EventDispatcher<'_>,
    report: &mut FightReport,
) -> bool {
    let mut engaged = false;

    for i in 0..roster.len() {
        if !roster[i].is_alive() {
            continue;
        }

        for j in (i + 1)..roster.len() {
            if !roster[j].is_alive() {
                continue;
            }

            if !in_range(roster[i].position(), roster[j].position(), max_distance) {
                continue;
            }
            engaged = true;

            clash(roster, i, j, events);

            if !roster[j].is_alive() {
                report.deaths += 1;
                events.death(&roster[j], &roster[i]);
            }

            // A dead attacker cannot keep attacking this round
            if !roster[i].is_alive() {
                report.deaths += 1;
                events.death(&roster[i], &roster[j]);
                break;
            }
        }
    }

    engaged
}

/// Whether two positions are close enough to engage. A NaN distance is
/// never in range.
fn in_range(a: &Position, b: &Position, max_distance: f64) -> bool {
    a.distance(b) <= max_distance
}

/// Resolve one engagement with `roster[i]` attacking `roster[j]`.
fn clash(roster: &mut [Combatant], i: usize, j: usize, events: &mut EventDispatcher<'_>) {
    let (attacker, defender) = pair_mut(roster, i, j);
    let outcome = resolve(attacker.species(), defender.species());

    tracing::trace!(
        attacker = attacker.name(),
        defender = defender.name(),
        ?outcome,
        "Engagement"
    );

    if outcome.damages_defender() {
        defender.take_damage(attacker.damage());
        events.attack(attacker, defender);
    }
    if outcome.damages_attacker() {
        attacker.take_damage(defender.damage());
        events.attack(defender, attacker);
    }
}

/// Borrow two distinct roster entries mutably, `i < j`.
fn pair_mut(roster: &mut [Combatant], i: usize, j: usize) -> (&mut Combatant, &mut Combatant) {
    debug_assert!(i < j);
    let (head, tail) = roster.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Owns the roster and the event dispatcher for one fight.
///
/// This is the wiring point the CLI uses: subscribe observers, load the
/// roster through the species factories, then [`FightScheduler::run`].
#[derive(Debug, Default)]
pub struct FightScheduler<'o> {
    roster: Vec<Combatant>,
    events: EventDispatcher<'o>,
}

impl<'o> FightScheduler<'o> {
    /// Create a scheduler with an empty roster and no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roster: Vec::new(),
            events: EventDispatcher::new(),
        }
    }

    /// Register an observer for every later event, creations included.
    pub fn subscribe(&mut self, observer: &'o mut dyn FightObserver) -> ObserverId {
        self.events.subscribe(observer)
    }

    /// Remove an observer.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Create a combatant through its species factory and append it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ArenaError::InvalidName`] for an empty name.
    pub fn spawn(
        &mut self,
        species: Species,
        name: impl Into<String>,
        position: Position,
    ) -> Result<&Combatant> {
        let npc = Combatant::spawn(species, name, position, &mut self.events)?;
        self.roster.push(npc);
        Ok(&self.roster[self.roster.len() - 1])
    }

    /// Create combatants from roster records, in order.
    ///
    /// Records with an unknown species, an empty name or a non-finite
    /// coordinate are skipped with a warning. Returns how many combatants were added.
    pub fn load_records<'r>(&mut self, records: impl IntoIterator<Item = &'r RosterRecord>) -> usize {
        let mut loaded = 0;

        for record in records {
            let species = match record.species() {
                Ok(species) => species,
                Err(e) => {
                    tracing::warn!(name = %record.name, "Skipping roster record: {e}");
                    continue;
                }
            };

            match self.spawn(species, record.name.as_str(), record.position()) {
                Ok(_) => loaded += 1,
                Err(e) => tracing::warn!(species = %species, "Skipping roster record: {e}"),
            }
        }

        loaded
    }

    /// Current roster, in fight order.
    #[must_use]
    pub fn roster(&self) -> &[Combatant] {
        &self.roster
    }

    /// Number of combatants in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Run a fight over the owned roster, leaving only survivors in it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ArenaError::ConfigurationError`] if `config`
    /// fails validation; the roster is left untouched in that case.
    pub fn run(&mut self, config: &FightConfig) -> Result<FightReport> {
        config.validate()?;
        let roster = std::mem::take(&mut self.roster);
        let (survivors, report) = run_fight(roster, config, &mut self.events)?;
        self.roster = survivors;
        Ok(report)
    }
}
