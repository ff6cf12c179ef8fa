//! # Arena Core
//!
//! Deterministic fight core for the NPC arena.
//!
//! This crate contains **only** deterministic logic:
//! - No rendering
//! - No IO
//! - No randomness
//!
//! Roster files, console output and log files live in `arena_cli`;
//! the core only sees them through [`roster::RosterRecord`] and the
//! [`events::FightObserver`] trait.
//!
//! ## Crate Structure
//!
//! - [`position`] - 2D coordinates and distance
//! - [`species`] - Species tags and their fixed stats
//! - [`combatant`] - NPC entities and the species factories
//! - [`rules`] - Species matchup rule engine
//! - [`events`] - Fight lifecycle events and the observer dispatcher
//! - [`fight`] - Round-based fight scheduler
//! - [`config`] - Fight configuration
//! - [`roster`] - Roster record parsing

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod combatant;
pub mod config;
pub mod error;
pub mod events;
pub mod fight;
pub mod position;
pub mod roster;
pub mod rules;
pub mod species;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::combatant::Combatant;
    pub use crate::config::FightConfig;
    pub use crate::error::{ArenaError, Result};
    pub use crate::events::{EventDispatcher, FightEvent, FightObserver, ObserverId};
    pub use crate::fight::{run_fight, FightReport, FightScheduler};
    pub use crate::position::Position;
    pub use crate::roster::RosterRecord;
    pub use crate::rules::{resolve, Outcome};
    pub use crate::species::Species;
}
