//! Match store interface and implementations
//!
//! The store owns the recorded history of every sport: ordered match lists
//! per format, appended to at the recording boundary. Strict validation
//! lives here: drawn singles/team results and overlapping line-ups are
//! rejected before they ever reach storage, while the replay engine stays
//! tolerant of old records that predate this validation.

use crate::error::{RatingError, Result};
use crate::types::{FfaMatch, MatchList, MatchType, SinglesMatch, SportId, TeamMatch};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::debug;

/// Trait for match storage operations
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// All singles matches of a sport, in recording order
    async fn singles_matches(&self, sport: &SportId) -> Result<Vec<SinglesMatch>>;

    /// All team matches of a sport, in recording order
    async fn team_matches(&self, sport: &SportId) -> Result<Vec<TeamMatch>>;

    /// All free-for-all matches of a sport, in recording order
    async fn ffa_matches(&self, sport: &SportId) -> Result<Vec<FfaMatch>>;

    /// Append a singles match after boundary validation
    async fn record_singles(&self, sport: &SportId, record: SinglesMatch) -> Result<()>;

    /// Append a team match after boundary validation
    async fn record_team(&self, sport: &SportId, record: TeamMatch) -> Result<()>;

    /// Append a free-for-all match after boundary validation
    async fn record_ffa(&self, sport: &SportId, record: FfaMatch) -> Result<()>;

    /// Ordered match list for one format
    async fn match_list(&self, sport: &SportId, match_type: MatchType) -> Result<MatchList> {
        match match_type {
            MatchType::Singles => Ok(MatchList::Singles(self.singles_matches(sport).await?)),
            MatchType::Team => Ok(MatchList::Team(self.team_matches(sport).await?)),
            MatchType::Ffa => Ok(MatchList::Ffa(self.ffa_matches(sport).await?)),
        }
    }
}

/// Recording-boundary validation for singles records
pub fn validate_singles_record(record: &SinglesMatch) -> Result<()> {
    if record.player_a == record.player_b {
        return Err(RatingError::InvalidRecord {
            reason: "a singles match needs two distinct players".to_string(),
        }
        .into());
    }
    if record.score_a == record.score_b {
        return Err(RatingError::InvalidRecord {
            reason: "drawn singles matches cannot be recorded".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Recording-boundary validation for team records
pub fn validate_team_record(record: &TeamMatch) -> Result<()> {
    if record.team_a.is_empty() || record.team_b.is_empty() {
        return Err(RatingError::InvalidRecord {
            reason: "both sides of a team match need at least one player".to_string(),
        }
        .into());
    }

    let mut seen = HashSet::new();
    for player in record.team_a.iter().chain(record.team_b.iter()) {
        if !seen.insert(player) {
            return Err(RatingError::InvalidRecord {
                reason: format!("player {} is listed more than once", player),
            }
            .into());
        }
    }

    if record.score_a == record.score_b {
        return Err(RatingError::InvalidRecord {
            reason: "drawn team matches cannot be recorded".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Recording-boundary validation for free-for-all records
pub fn validate_ffa_record(record: &FfaMatch) -> Result<()> {
    if record.results.len() < 2 {
        return Err(RatingError::InvalidRecord {
            reason: "a free-for-all match needs at least two results".to_string(),
        }
        .into());
    }

    let mut seen = HashSet::new();
    for result in &record.results {
        if result.rank == 0 {
            return Err(RatingError::InvalidRecord {
                reason: format!("rank {} is not a valid 1-based standing", result.rank),
            }
            .into());
        }
        if !seen.insert(&result.player) {
            return Err(RatingError::InvalidRecord {
                reason: format!("player {} is listed more than once", result.player),
            }
            .into());
        }
    }

    Ok(())
}

/// In-memory match store implementation
#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    singles: RwLock<HashMap<SportId, Vec<SinglesMatch>>>,
    team: RwLock<HashMap<SportId, Vec<TeamMatch>>>,
    ffa: RwLock<HashMap<SportId, Vec<FfaMatch>>>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn singles_matches(&self, sport: &SportId) -> Result<Vec<SinglesMatch>> {
        let singles = self.singles.read().await;

        Ok(singles.get(sport).cloned().unwrap_or_default())
    }

    async fn team_matches(&self, sport: &SportId) -> Result<Vec<TeamMatch>> {
        let team = self.team.read().await;

        Ok(team.get(sport).cloned().unwrap_or_default())
    }

    async fn ffa_matches(&self, sport: &SportId) -> Result<Vec<FfaMatch>> {
        let ffa = self.ffa.read().await;

        Ok(ffa.get(sport).cloned().unwrap_or_default())
    }

    async fn record_singles(&self, sport: &SportId, record: SinglesMatch) -> Result<()> {
        validate_singles_record(&record)?;

        let mut singles = self.singles.write().await;
        singles.entry(sport.clone()).or_default().push(record);
        debug!(%sport, "recorded singles match");

        Ok(())
    }

    async fn record_team(&self, sport: &SportId, record: TeamMatch) -> Result<()> {
        validate_team_record(&record)?;

        let mut team = self.team.write().await;
        team.entry(sport.clone()).or_default().push(record);
        debug!(%sport, "recorded team match");

        Ok(())
    }

    async fn record_ffa(&self, sport: &SportId, record: FfaMatch) -> Result<()> {
        validate_ffa_record(&record)?;

        let mut ffa = self.ffa.write().await;
        ffa.entry(sport.clone()).or_default().push(record);
        debug!(%sport, "recorded free-for-all match");

        Ok(())
    }
}
