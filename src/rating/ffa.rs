//! Free-for-all rating computer
//!
//! Decomposes each N-player ranked match into all C(N,2) pairwise
//! comparisons implied by the standings. Every comparison is weighted by
//! 1/(N-1), so one N-player match swings a rating by about as much as one
//! singles match. Deltas are accumulated against the ratings each player
//! held when the match started and applied only after every pair has been
//! evaluated; the order of the result list cannot affect the outcome.

use crate::error::{RatingError, Result};
use crate::rating::elo::{expected_score, round_rating};
use crate::rating::replay::ReplayState;
use crate::rating::EloEngine;
use crate::types::{ComputedRatings, FfaMatch, PlayerId};
use std::collections::HashSet;
use tracing::debug;

impl EloEngine {
    /// Replay a free-for-all match list into ratings and history
    pub fn compute_ffa(
        &self,
        matches: &[FfaMatch],
        seed_players: &HashSet<PlayerId>,
    ) -> Result<ComputedRatings<FfaMatch>> {
        let mut state = ReplayState::seeded(seed_players, self.default_rating());

        for (match_index, record) in matches.iter().enumerate() {
            validate_results(record, match_index)?;

            if record.results.len() < 2 {
                debug!(match_index, "skipping free-for-all match with fewer than two results");
                continue;
            }

            for result in &record.results {
                state.ensure_player(&result.player);
            }

            let participants = record.results.len();
            let weight = 1.0 / (participants - 1) as f64;

            // Ratings as of the start of this match; pair evaluation must
            // never observe a mid-match update.
            let start_ratings: Vec<f64> = record
                .results
                .iter()
                .map(|result| state.rating(&result.player))
                .collect();

            let mut deltas = vec![0.0_f64; participants];

            for i in 0..participants {
                for j in (i + 1)..participants {
                    let rank_i = record.results[i].rank;
                    let rank_j = record.results[j].rank;

                    let outcome_i = if rank_i < rank_j {
                        1.0
                    } else if rank_i > rank_j {
                        0.0
                    } else {
                        0.5
                    };

                    let expected_i = expected_score(start_ratings[i], start_ratings[j]);
                    deltas[i] += self.k_factor() * weight * (outcome_i - expected_i);
                    deltas[j] += self.k_factor() * weight * ((1.0 - outcome_i) - (1.0 - expected_i));
                }
            }

            for (index, result) in record.results.iter().enumerate() {
                let updated = round_rating(start_ratings[index] + deltas[index]);
                state.record(&result.player, updated);
            }

            state.advance();
        }

        Ok(state.finish(matches.to_vec()))
    }
}

/// Ranks must be 1-based and no player may appear twice
fn validate_results(record: &FfaMatch, match_index: usize) -> Result<()> {
    let mut seen = HashSet::new();

    for result in &record.results {
        if result.rank == 0 {
            return Err(RatingError::InvalidRank {
                match_index,
                rank: result.rank,
            }
            .into());
        }
        if !seen.insert(&result.player) {
            return Err(RatingError::DuplicatePlayer {
                match_index,
                player: result.player.clone(),
            }
            .into());
        }
    }

    Ok(())
}
