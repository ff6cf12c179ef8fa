//! # Arena Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Fixture rosters and combatant builders
//! - A recording observer for asserting event streams
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod recorder;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
