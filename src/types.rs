//! Common types used throughout the rating engine

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use chrono::NaiveDate;

/// Unique identifier for players
///
/// Opaque to the engine: identifiers are owned by the player registry and
/// only ever read from match records and the seed set.
pub type PlayerId = String;

/// Unique identifier for sports (e.g. "table-tennis", "catan")
pub type SportId = String;

/// Mapping from player to current rating
pub type RatingTable = HashMap<PlayerId, f64>;

/// Mapping from player to rating trajectory
pub type RatingHistory = HashMap<PlayerId, Vec<HistoryPoint>>;

/// Match format a sport can be played in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Singles,
    Team,
    Ffa,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Singles => write!(f, "singles"),
            MatchType::Team => write!(f, "team"),
            MatchType::Ffa => write!(f, "ffa"),
        }
    }
}

/// A recorded two-player match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinglesMatch {
    pub date: NaiveDate,
    pub player_a: PlayerId,
    pub player_b: PlayerId,
    pub score_a: u32,
    pub score_b: u32,
}

/// A recorded two-team match
///
/// Two sides of players; doubles puts two per side but the engine accepts
/// any non-empty sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMatch {
    pub date: NaiveDate,
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
    pub score_a: u32,
    pub score_b: u32,
}

/// One participant's outcome within a free-for-all match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FfaResult {
    pub player: PlayerId,
    pub score: i32,
    /// 1-based standing; 1 is best. Ties in rank denote a drawn placement.
    pub rank: u32,
}

/// A recorded free-for-all match of N ranked participants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FfaMatch {
    pub date: NaiveDate,
    pub results: Vec<FfaResult>,
}

/// One point on a player's rating trajectory
///
/// `match_number` is the accepted-match counter at the time the rating was
/// stored; it is shared across all players of a replay so two trajectories
/// can be aligned on a common timeline. Entry 0 of every trajectory is the
/// synthetic pre-history baseline `(0, default rating)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub match_number: u64,
    pub rating: f64,
}

/// Output of one replay: current ratings, per-player trajectories, and the
/// input match list passed through unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedRatings<M> {
    pub ratings: RatingTable,
    pub history: RatingHistory,
    pub matches: Vec<M>,
}

/// An ordered match list of one of the three formats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "match_type", content = "matches", rename_all = "lowercase")]
pub enum MatchList {
    Singles(Vec<SinglesMatch>),
    Team(Vec<TeamMatch>),
    Ffa(Vec<FfaMatch>),
}

impl MatchList {
    pub fn match_type(&self) -> MatchType {
        match self {
            MatchList::Singles(_) => MatchType::Singles,
            MatchList::Team(_) => MatchType::Team,
            MatchList::Ffa(_) => MatchType::Ffa,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            MatchList::Singles(matches) => matches.len(),
            MatchList::Team(matches) => matches.len(),
            MatchList::Ffa(matches) => matches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Replay output for one match format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "match_type", content = "computed", rename_all = "lowercase")]
pub enum FormatRatings {
    Singles(ComputedRatings<SinglesMatch>),
    Team(ComputedRatings<TeamMatch>),
    Ffa(ComputedRatings<FfaMatch>),
}

impl FormatRatings {
    pub fn match_type(&self) -> MatchType {
        match self {
            FormatRatings::Singles(_) => MatchType::Singles,
            FormatRatings::Team(_) => MatchType::Team,
            FormatRatings::Ffa(_) => MatchType::Ffa,
        }
    }

    /// Current rating per player, regardless of format
    pub fn ratings(&self) -> &RatingTable {
        match self {
            FormatRatings::Singles(computed) => &computed.ratings,
            FormatRatings::Team(computed) => &computed.ratings,
            FormatRatings::Ffa(computed) => &computed.ratings,
        }
    }

    /// Rating trajectory per player, regardless of format
    pub fn history(&self) -> &RatingHistory {
        match self {
            FormatRatings::Singles(computed) => &computed.history,
            FormatRatings::Team(computed) => &computed.history,
            FormatRatings::Ffa(computed) => &computed.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_type_display() {
        assert_eq!(MatchType::Singles.to_string(), "singles");
        assert_eq!(MatchType::Team.to_string(), "team");
        assert_eq!(MatchType::Ffa.to_string(), "ffa");
    }

    #[test]
    fn test_match_type_serde_names() {
        assert_eq!(serde_json::to_string(&MatchType::Ffa).unwrap(), "\"ffa\"");
        let parsed: MatchType = serde_json::from_str("\"team\"").unwrap();
        assert_eq!(parsed, MatchType::Team);
    }

    #[test]
    fn test_match_list_accessors() {
        let list = MatchList::Singles(vec![]);
        assert_eq!(list.match_type(), MatchType::Singles);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
