//! Static sports catalog
//!
//! Describes which sports the club tracks and which match formats each sport
//! records. Loaded once from a TOML file; the catalog carries no ratings and
//! no match data.

use crate::error::{RatingError, Result};
use crate::types::{MatchType, SportId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One sport the club tracks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportConfig {
    /// Stable identifier used as the storage key
    pub id: SportId,
    /// Human-readable name for display
    pub name: String,
    /// Match formats recorded for this sport
    pub match_types: Vec<MatchType>,
}

/// The full sports catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SportsConfig {
    #[serde(default)]
    pub sports: Vec<SportConfig>,
}

impl SportsConfig {
    /// Parse a catalog from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SportsConfig =
            toml::from_str(text).map_err(|e| RatingError::Configuration {
                message: format!("invalid sports catalog: {}", e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load a catalog from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RatingError::Configuration {
                message: format!(
                    "cannot read sports catalog {}: {}",
                    path.as_ref().display(),
                    e
                ),
            }
        })?;

        Self::from_toml_str(&text)
    }

    /// Look up one sport by id
    pub fn sport(&self, id: &str) -> Option<&SportConfig> {
        self.sports.iter().find(|sport| sport.id == id)
    }

    /// Validate catalog entries
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for sport in &self.sports {
            if sport.id.trim().is_empty() {
                return Err(RatingError::Configuration {
                    message: "sport id cannot be empty".to_string(),
                }
                .into());
            }
            if !seen.insert(sport.id.as_str()) {
                return Err(RatingError::Configuration {
                    message: format!("duplicate sport id: {}", sport.id),
                }
                .into());
            }
            if sport.match_types.is_empty() {
                return Err(RatingError::Configuration {
                    message: format!("sport {} has no match types", sport.id),
                }
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
        [[sports]]
        id = "table-tennis"
        name = "Table Tennis"
        match_types = ["singles", "team"]

        [[sports]]
        id = "catan"
        name = "Catan"
        match_types = ["ffa"]
    "#;

    #[test]
    fn test_parse_catalog() {
        let config = SportsConfig::from_toml_str(CATALOG).unwrap();
        assert_eq!(config.sports.len(), 2);

        let tt = config.sport("table-tennis").unwrap();
        assert_eq!(tt.name, "Table Tennis");
        assert_eq!(tt.match_types, vec![MatchType::Singles, MatchType::Team]);

        assert_eq!(
            config.sport("catan").unwrap().match_types,
            vec![MatchType::Ffa]
        );
        assert!(config.sport("cricket").is_none());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let config = SportsConfig::from_toml_str("").unwrap();
        assert!(config.sports.is_empty());
    }

    #[test]
    fn test_duplicate_sport_id_rejected() {
        let text = r#"
            [[sports]]
            id = "darts"
            name = "Darts"
            match_types = ["singles"]

            [[sports]]
            id = "darts"
            name = "Darts Again"
            match_types = ["ffa"]
        "#;
        assert!(SportsConfig::from_toml_str(text).is_err());
    }

    #[test]
    fn test_sport_without_match_types_rejected() {
        let text = r#"
            [[sports]]
            id = "darts"
            name = "Darts"
            match_types = []
        "#;
        assert!(SportsConfig::from_toml_str(text).is_err());
    }
}
