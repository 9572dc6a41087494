//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

use crate::types::{PlayerId, SportId};

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
///
/// Business-rule skips (drawn singles/team matches, overlapping team
/// membership, free-for-all matches with fewer than two results) are not
/// errors: the computers exclude those records silently. Everything here is
/// a hard failure.
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("invalid match record: {reason}")]
    InvalidRecord { reason: String },

    #[error("match {match_index}: player {player} appears more than once")]
    DuplicatePlayer { match_index: usize, player: PlayerId },

    #[error("match {match_index}: rank {rank} is not a valid 1-based standing")]
    InvalidRank { match_index: usize, rank: u32 },

    #[error("match {match_index}: team side has no members")]
    EmptyTeam { match_index: usize },

    #[error("unknown sport: {sport}")]
    UnknownSport { sport: SportId },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}
