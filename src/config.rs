//! Configuration handling for the TUI
//!
//! Presentation preferences only: the prediction endpoint is fixed at
//! build time and deliberately not configurable.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Show the splash animation on startup
    pub splash: Option<bool>,
    /// Enable the falling-leaves background
    pub leaf_animation: Option<bool>,
    /// Number of background leaf particles
    pub leaf_count: Option<usize>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "cropcast", "cropcast-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Splash enabled unless explicitly turned off
    pub fn splash_enabled(&self) -> bool {
        self.splash.unwrap_or(true)
    }

    /// Leaves enabled unless explicitly turned off
    pub fn leaves_enabled(&self) -> bool {
        self.leaf_animation.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LeafField;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.splash.is_none());
        assert!(config.leaf_animation.is_none());
        assert!(config.leaf_count.is_none());
        assert!(config.splash_enabled());
        assert!(config.leaves_enabled());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            splash: Some(false),
            leaf_animation: Some(true),
            leaf_count: Some(40),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.splash, Some(false));
        assert_eq!(parsed.leaf_animation, Some(true));
        assert_eq!(parsed.leaf_count, Some(40));
        assert!(!parsed.splash_enabled());
    }

    #[test]
    fn test_partial_serialization() {
        let config = TuiConfig {
            leaf_animation: Some(false),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.leaf_animation, Some(false));
        assert!(!parsed.leaves_enabled());
        assert!(parsed.splash.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.splash.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"splash": true, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.splash, Some(true));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_leaf_count_falls_back_to_default() {
        let config = TuiConfig::default();
        assert_eq!(
            config.leaf_count.unwrap_or(LeafField::DEFAULT_COUNT),
            LeafField::DEFAULT_COUNT
        );
    }
}
