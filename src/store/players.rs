//! Player registry interface and implementations
//!
//! The registry owns player identifiers and display names. The engine only
//! ever reads identifiers from it to seed default ratings; it never creates
//! or destroys them.

use crate::error::{RatingError, Result};
use crate::types::PlayerId;
use crate::utils::current_timestamp;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

/// Registry entry for one player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub id: PlayerId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Trait for player registry operations
#[async_trait]
pub trait PlayerRegistry: Send + Sync {
    /// All known players as id → display name
    async fn players(&self) -> Result<HashMap<PlayerId, String>>;

    /// Display name for one player
    async fn player_name(&self, player: &PlayerId) -> Result<Option<String>>;

    /// Register a new player and return the issued identifier
    async fn add_player(&self, name: &str) -> Result<PlayerId>;

    /// The set of known identifiers, used to seed default ratings
    async fn player_ids(&self) -> Result<HashSet<PlayerId>> {
        Ok(self.players().await?.into_keys().collect())
    }
}

/// In-memory player registry implementation
#[derive(Debug, Default)]
pub struct InMemoryPlayerRegistry {
    players: RwLock<HashMap<PlayerId, PlayerEntry>>,
    next_id: AtomicU64,
}

impl InMemoryPlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the registry with known players (for tests and imports)
    pub fn with_players(names: &[&str]) -> Self {
        let mut players = HashMap::new();
        for (index, name) in names.iter().enumerate() {
            let id = format!("p{}", index + 1);
            players.insert(
                id.clone(),
                PlayerEntry {
                    id,
                    name: name.to_string(),
                    created_at: current_timestamp(),
                },
            );
        }

        Self {
            next_id: AtomicU64::new(names.len() as u64),
            players: RwLock::new(players),
        }
    }

    fn issue_id(&self) -> PlayerId {
        let number = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        format!("p{}", number)
    }
}

#[async_trait]
impl PlayerRegistry for InMemoryPlayerRegistry {
    async fn players(&self) -> Result<HashMap<PlayerId, String>> {
        let players = self.players.read().await;

        Ok(players
            .values()
            .map(|entry| (entry.id.clone(), entry.name.clone()))
            .collect())
    }

    async fn player_name(&self, player: &PlayerId) -> Result<Option<String>> {
        let players = self.players.read().await;

        Ok(players.get(player).map(|entry| entry.name.clone()))
    }

    async fn add_player(&self, name: &str) -> Result<PlayerId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RatingError::InvalidRecord {
                reason: "player name cannot be empty".to_string(),
            }
            .into());
        }

        let id = self.issue_id();
        let entry = PlayerEntry {
            id: id.clone(),
            name: name.to_string(),
            created_at: current_timestamp(),
        };

        let mut players = self.players.write().await;
        players.insert(id.clone(), entry);
        debug!(%id, %name, "registered player");

        Ok(id)
    }
}
