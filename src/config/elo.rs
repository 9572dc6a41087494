//! Elo rating system configuration

use serde::{Deserialize, Serialize};
use skillratings::elo::EloConfig;

/// Extended configuration for the Elo rating system
/// This wraps the skillratings EloConfig with additional parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedEloConfig {
    /// Core Elo parameters (the K-factor)
    pub elo_config: EloConfig,
    /// Rating assigned to players with no recorded result
    pub default_rating: f64,
}

impl Default for ExtendedEloConfig {
    fn default() -> Self {
        Self {
            elo_config: EloConfig { k: 32.0 },
            default_rating: 1000.0,
        }
    }
}

impl ExtendedEloConfig {
    /// Create conservative configuration (slower rating changes)
    pub fn conservative() -> Self {
        Self {
            elo_config: EloConfig { k: 16.0 },
            default_rating: 1000.0,
        }
    }

    /// Create aggressive configuration (faster rating changes)
    pub fn aggressive() -> Self {
        Self {
            elo_config: EloConfig { k: 64.0 },
            default_rating: 1000.0,
        }
    }

    /// The K-factor in use
    pub fn k_factor(&self) -> f64 {
        self.elo_config.k
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.elo_config.k.is_finite() || self.elo_config.k <= 0.0 {
            return Err(crate::error::RatingError::Configuration {
                message: "K-factor must be positive and finite".to_string(),
            }
            .into());
        }

        if !self.default_rating.is_finite() {
            return Err(crate::error::RatingError::Configuration {
                message: "Default rating must be finite".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
