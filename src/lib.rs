//! Club Elo - skill ratings for club sports
//!
//! This crate derives Elo ratings and rating histories for the players of a
//! sports club purely from ordered lists of recorded match outcomes, across
//! singles, team, and free-for-all formats.

pub mod config;
pub mod error;
pub mod rating;
pub mod service;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use config::{ExtendedEloConfig, SportsConfig};
pub use rating::EloEngine;
pub use service::RatingService;
pub use store::{InMemoryMatchStore, InMemoryPlayerRegistry, MatchStore, PlayerRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
