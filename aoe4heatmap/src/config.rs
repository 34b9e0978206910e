use crate::filter::RelevanceFilter;
use aoe4data::CivTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Heatmap view configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    /// Civilization codes and their display titles.
    pub civs: CivTable,
    /// Civilization selected on the attacker axis at startup.
    pub attacker_civ: String,
    /// Civilization selected on the defender axis at startup.
    pub defender_civ: String,
    /// Relevance toggles at startup.
    pub filter: RelevanceFilter,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        // Both selectors start on the first entry of the civ table
        Self {
            civs: CivTable::default(),
            attacker_civ: "en".to_string(),
            defender_civ: "en".to_string(),
            filter: RelevanceFilter::NONE,
        }
    }
}

impl HeatmapConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HeatmapConfig::default();
        assert_eq!(config.attacker_civ, "en");
        assert_eq!(config.defender_civ, "en");
        assert!(!config.filter.is_active());
        assert_eq!(config.civs.len(), 10);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = HeatmapConfig::from_json_str(
            r#"{ "defender_civ": "mo", "filter": { "attackers": true, "defenders": false } }"#,
        )
        .unwrap();
        assert_eq!(config.attacker_civ, "en");
        assert_eq!(config.defender_civ, "mo");
        assert!(config.filter.attackers);
        assert_eq!(config.civs, CivTable::default());
    }

    #[test]
    fn test_invalid_config() {
        let err = HeatmapConfig::from_json_str(r#"{ "attacker_civ": 7 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
