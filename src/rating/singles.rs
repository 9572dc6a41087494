//! Singles rating computer
//!
//! Folds an ordered list of two-player matches into ratings and
//! trajectories. The higher score wins outright; drawn records are tolerated
//! but excluded from rating impact, trajectories and the match timeline (the
//! recording boundary is expected to reject them before they get here).

use crate::error::{RatingError, Result};
use crate::rating::elo::{pairwise_update, round_rating};
use crate::rating::replay::ReplayState;
use crate::rating::EloEngine;
use crate::types::{ComputedRatings, PlayerId, SinglesMatch};
use std::collections::HashSet;
use tracing::debug;

impl EloEngine {
    /// Replay a singles match list into ratings and history
    pub fn compute_singles(
        &self,
        matches: &[SinglesMatch],
        seed_players: &HashSet<PlayerId>,
    ) -> Result<ComputedRatings<SinglesMatch>> {
        let mut state = ReplayState::seeded(seed_players, self.default_rating());

        for (match_index, record) in matches.iter().enumerate() {
            if record.player_a == record.player_b {
                return Err(RatingError::DuplicatePlayer {
                    match_index,
                    player: record.player_a.clone(),
                }
                .into());
            }

            state.ensure_player(&record.player_a);
            state.ensure_player(&record.player_b);

            if record.score_a == record.score_b {
                debug!(match_index, "skipping drawn singles match");
                continue;
            }

            let (winner, loser) = if record.score_a > record.score_b {
                (&record.player_a, &record.player_b)
            } else {
                (&record.player_b, &record.player_a)
            };

            let (winner_new, loser_new) = pairwise_update(
                state.rating(winner),
                state.rating(loser),
                1.0,
                self.k_factor(),
            );

            state.record(winner, round_rating(winner_new));
            state.record(loser, round_rating(loser_new));
            state.advance();
        }

        Ok(state.finish(matches.to_vec()))
    }
}
