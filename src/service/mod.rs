//! Service layer tying the engine to its collaborators
//!
//! Pulls ordered match lists from the match store, seeds from the player
//! registry, and runs the replay engine for every format a sport records.
//! The service holds no rating state of its own: every call recomputes from
//! the full match list, so results always reflect the store as-is.

use crate::config::SportsConfig;
use crate::error::{RatingError, Result};
use crate::rating::EloEngine;
use crate::store::{MatchStore, PlayerRegistry};
use crate::types::{FormatRatings, MatchType, SportId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Rating computation service for a club's sports catalog
pub struct RatingService {
    engine: EloEngine,
    store: Arc<dyn MatchStore>,
    registry: Arc<dyn PlayerRegistry>,
    sports: SportsConfig,
}

impl RatingService {
    pub fn new(
        engine: EloEngine,
        store: Arc<dyn MatchStore>,
        registry: Arc<dyn PlayerRegistry>,
        sports: SportsConfig,
    ) -> Self {
        Self {
            engine,
            store,
            registry,
            sports,
        }
    }

    /// The sports catalog this service answers for
    pub fn sports(&self) -> &SportsConfig {
        &self.sports
    }

    /// Recompute ratings for every format a sport records
    pub async fn compute_sport(
        &self,
        sport_id: &SportId,
    ) -> Result<HashMap<MatchType, FormatRatings>> {
        let sport = self
            .sports
            .sport(sport_id)
            .ok_or_else(|| RatingError::UnknownSport {
                sport: sport_id.clone(),
            })?;

        let seed_players = self.registry.player_ids().await?;
        let mut computed = HashMap::new();

        for &match_type in &sport.match_types {
            let matches = self.store.match_list(sport_id, match_type).await?;
            debug!(%sport_id, %match_type, matches = matches.len(), "replaying match list");

            computed.insert(match_type, self.engine.compute(&matches, &seed_players)?);
        }

        Ok(computed)
    }

    /// Recompute ratings for a single format of a sport
    pub async fn compute_format(
        &self,
        sport_id: &SportId,
        match_type: MatchType,
    ) -> Result<FormatRatings> {
        let sport = self
            .sports
            .sport(sport_id)
            .ok_or_else(|| RatingError::UnknownSport {
                sport: sport_id.clone(),
            })?;

        if !sport.match_types.contains(&match_type) {
            return Err(RatingError::InvalidRecord {
                reason: format!("sport {} does not record {} matches", sport_id, match_type),
            }
            .into());
        }

        let seed_players = self.registry.player_ids().await?;
        let matches = self.store.match_list(sport_id, match_type).await?;

        self.engine.compute(&matches, &seed_players)
    }
}
