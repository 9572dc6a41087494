//! Team rating computer
//!
//! Folds two-team matches into per-player ratings by treating each side as a
//! single composite: the arithmetic mean of its members' current ratings.
//! The composite pair is updated like a singles pair, and each member then
//! receives their side's composite delta unchanged, so teammates with
//! different ratings shift by the same amount and keep their relative
//! standing within the team.

use crate::error::{RatingError, Result};
use crate::rating::elo::{pairwise_update, round_rating};
use crate::rating::replay::ReplayState;
use crate::rating::EloEngine;
use crate::types::{ComputedRatings, PlayerId, TeamMatch};
use std::collections::HashSet;
use tracing::debug;

/// A side must be non-empty and free of duplicate members
fn validate_side(side: &[PlayerId], match_index: usize) -> Result<()> {
    if side.is_empty() {
        return Err(RatingError::EmptyTeam { match_index }.into());
    }

    let mut seen = HashSet::new();
    for player in side {
        if !seen.insert(player) {
            return Err(RatingError::DuplicatePlayer {
                match_index,
                player: player.clone(),
            }
            .into());
        }
    }

    Ok(())
}

fn sides_overlap(team_a: &[PlayerId], team_b: &[PlayerId]) -> bool {
    team_a.iter().any(|player| team_b.contains(player))
}

impl EloEngine {
    /// Replay a team match list into per-player ratings and history
    pub fn compute_team(
        &self,
        matches: &[TeamMatch],
        seed_players: &HashSet<PlayerId>,
    ) -> Result<ComputedRatings<TeamMatch>> {
        let mut state = ReplayState::seeded(seed_players, self.default_rating());

        for (match_index, record) in matches.iter().enumerate() {
            validate_side(&record.team_a, match_index)?;
            validate_side(&record.team_b, match_index)?;

            if record.score_a == record.score_b {
                debug!(match_index, "skipping drawn team match");
                continue;
            }
            if sides_overlap(&record.team_a, &record.team_b) {
                debug!(match_index, "skipping team match with overlapping sides");
                continue;
            }

            for player in record.team_a.iter().chain(record.team_b.iter()) {
                state.ensure_player(player);
            }

            let composite_a = mean_rating(&state, &record.team_a);
            let composite_b = mean_rating(&state, &record.team_b);

            let result_a = if record.score_a > record.score_b {
                1.0
            } else {
                0.0
            };
            let (new_a, new_b) =
                pairwise_update(composite_a, composite_b, result_a, self.k_factor());

            let delta_a = new_a - composite_a;
            let delta_b = new_b - composite_b;

            for player in &record.team_a {
                let updated = round_rating(state.rating(player) + delta_a);
                state.record(player, updated);
            }
            for player in &record.team_b {
                let updated = round_rating(state.rating(player) + delta_b);
                state.record(player, updated);
            }

            state.advance();
        }

        Ok(state.finish(matches.to_vec()))
    }
}

fn mean_rating(state: &ReplayState, side: &[PlayerId]) -> f64 {
    let total: f64 = side.iter().map(|player| state.rating(player)).sum();
    total / side.len() as f64
}
