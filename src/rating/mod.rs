//! Rating computation engine
//!
//! A pure replay engine: each computer folds an ordered match list and a
//! seed player set into current ratings and per-player trajectories. No
//! state is carried between calls; identical inputs always produce
//! identical outputs, and inputs are never mutated.

pub mod elo;
mod replay;

pub mod ffa;
pub mod singles;
pub mod team;

use crate::config::ExtendedEloConfig;
use crate::error::{RatingError, Result};
use crate::types::{FormatRatings, MatchList, PlayerId};
use std::collections::HashSet;

// Re-export the pairwise primitive
pub use elo::{expected_score, pairwise_update, round_rating};

/// Elo replay engine for all three match formats
#[derive(Debug, Clone)]
pub struct EloEngine {
    config: ExtendedEloConfig,
}

impl Default for EloEngine {
    fn default() -> Self {
        Self {
            config: ExtendedEloConfig::default(),
        }
    }
}

impl EloEngine {
    /// Create an engine with a validated configuration
    pub fn new(config: ExtendedEloConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Rating assigned to players with no recorded result
    pub fn default_rating(&self) -> f64 {
        self.config.default_rating
    }

    /// The K-factor applied to every update
    pub fn k_factor(&self) -> f64 {
        self.config.k_factor()
    }

    /// Get current configuration as JSON
    pub fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    /// Update configuration from JSON
    pub fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        let new_config: ExtendedEloConfig =
            serde_json::from_value(config).map_err(|e| RatingError::Configuration {
                message: format!("invalid Elo configuration: {}", e),
            })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }

    /// Replay a match list of any format
    pub fn compute(
        &self,
        matches: &MatchList,
        seed_players: &HashSet<PlayerId>,
    ) -> Result<FormatRatings> {
        match matches {
            MatchList::Singles(list) => Ok(FormatRatings::Singles(
                self.compute_singles(list, seed_players)?,
            )),
            MatchList::Team(list) => Ok(FormatRatings::Team(self.compute_team(list, seed_players)?)),
            MatchList::Ffa(list) => Ok(FormatRatings::Ffa(self.compute_ffa(list, seed_players)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MatchType, SinglesMatch};
    use chrono::NaiveDate;

    fn singles(a: &str, b: &str, score_a: u32, score_b: u32) -> SinglesMatch {
        SinglesMatch {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            player_a: a.to_string(),
            player_b: b.to_string(),
            score_a,
            score_b,
        }
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let mut config = ExtendedEloConfig::default();
        config.elo_config.k = -1.0;
        assert!(EloEngine::new(config).is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let mut engine = EloEngine::default();
        assert_eq!(engine.k_factor(), 32.0);

        let mut exported = engine.config();
        exported["elo_config"]["k"] = serde_json::json!(24.0);
        engine.update_config(exported).unwrap();

        assert_eq!(engine.k_factor(), 24.0);
        assert_eq!(engine.default_rating(), 1000.0);
    }

    #[test]
    fn test_update_config_rejects_bad_values() {
        let mut engine = EloEngine::default();
        let result = engine.update_config(serde_json::json!({
            "elo_config": { "k": 0.0 },
            "default_rating": 1000.0
        }));
        assert!(result.is_err());
        // The previous configuration stays in force.
        assert_eq!(engine.k_factor(), 32.0);
    }

    #[test]
    fn test_dispatch_by_format() {
        let engine = EloEngine::default();
        let list = MatchList::Singles(vec![singles("ana", "bo", 11, 5)]);

        let computed = engine.compute(&list, &HashSet::new()).unwrap();
        assert_eq!(computed.match_type(), MatchType::Singles);
        assert_eq!(computed.ratings()["ana"], 1016.0);
        assert_eq!(computed.history()["bo"].len(), 2);
    }
}
