//! Configuration management for the rating engine
//!
//! This module holds the Elo parameters the engine runs with and the static
//! sports catalog describing which match formats each sport records.

pub mod elo;
pub mod sports;

// Re-export commonly used types
pub use elo::ExtendedEloConfig;
pub use sports::{SportConfig, SportsConfig};
