//! # Arena CLI
//!
//! Everything around the fight core that touches the outside world:
//! - Roster and config file loading
//! - Console and log-file observers
//! - Roster reports
//!
//! The `arena` binary wires these together.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod loader;
pub mod observers;
pub mod report;

pub use loader::{load_config, load_roster, LoadError, LoadedRoster};
pub use observers::{ConsoleObserver, FileObserver};
pub use report::{FightSummary, RosterTable};
