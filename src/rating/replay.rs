//! Shared replay bookkeeping for the three computers
//!
//! Tracks ratings, trajectories and the accepted-match counter while a match
//! list is folded. Players are registered lazily: the first time an unseen
//! identifier appears it is inserted at the default rating with the
//! `(0, default)` baseline, exactly as if it had been in the seed set.

use crate::types::{ComputedRatings, HistoryPoint, PlayerId, RatingHistory, RatingTable};
use std::collections::HashSet;

pub(crate) struct ReplayState {
    ratings: RatingTable,
    history: RatingHistory,
    /// Counter of accepted matches; skipped matches do not advance it.
    match_number: u64,
    default_rating: f64,
}

impl ReplayState {
    /// Start a replay with every seed player at the default rating
    pub(crate) fn seeded(seed_players: &HashSet<PlayerId>, default_rating: f64) -> Self {
        let mut state = Self {
            ratings: RatingTable::new(),
            history: RatingHistory::new(),
            match_number: 1,
            default_rating,
        };

        for player in seed_players {
            state.ensure_player(player);
        }

        state
    }

    /// Register a player at the default rating if not yet seen
    pub(crate) fn ensure_player(&mut self, player: &PlayerId) {
        if !self.ratings.contains_key(player) {
            self.ratings.insert(player.clone(), self.default_rating);
            self.history.insert(
                player.clone(),
                vec![HistoryPoint {
                    match_number: 0,
                    rating: self.default_rating,
                }],
            );
        }
    }

    /// Current rating of a registered player
    pub(crate) fn rating(&self, player: &PlayerId) -> f64 {
        self.ratings
            .get(player)
            .copied()
            .unwrap_or(self.default_rating)
    }

    /// Store a participant's new rating and append it to their trajectory
    ///
    /// Must only be called for matches that are being accepted; the entry is
    /// stamped with the current accepted-match number. A player recorded
    /// without prior registration gets the baseline entry first, so the
    /// trajectory always starts at `(0, default)`.
    pub(crate) fn record(&mut self, player: &PlayerId, new_rating: f64) {
        let default_rating = self.default_rating;
        let match_number = self.match_number;

        self.ratings.insert(player.clone(), new_rating);
        self.history
            .entry(player.clone())
            .or_insert_with(|| {
                vec![HistoryPoint {
                    match_number: 0,
                    rating: default_rating,
                }]
            })
            .push(HistoryPoint {
                match_number,
                rating: new_rating,
            });
    }

    /// Advance the accepted-match counter, once per accepted match
    pub(crate) fn advance(&mut self) {
        self.match_number += 1;
    }

    /// Number the next accepted match will be stamped with
    pub(crate) fn current_match_number(&self) -> u64 {
        self.match_number
    }

    /// Finish the replay, passing the input match list through unchanged
    pub(crate) fn finish<M>(self, matches: Vec<M>) -> ComputedRatings<M> {
        ComputedRatings {
            ratings: self.ratings,
            history: self.history,
            matches,
        }
    }
}
