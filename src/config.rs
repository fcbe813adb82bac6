//! Inspector configuration.
//!
//! Read from a JSON file; every field is optional:
//!
//! ```json
//! { "collection_limit": 10, "invert_theme": true, "hide_root": true,
//!   "tick_ms": 100, "theme": { "base00": "#000000" } }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inspector::TreeViewSettings;
use crate::tree::{Base16Theme, TreeOptions, DEFAULT_COLLECTION_LIMIT};

/// Display settings for the inspector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Entries shown per collection (0 = unlimited).
    pub collection_limit: usize,
    pub invert_theme: bool,
    pub hide_root: bool,
    pub theme: Base16Theme,
    /// Event poll interval, also the spinner frame rate.
    pub tick_ms: u64,
}

impl InspectorConfig {
    /// Load from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text)
    }

    /// Parse from JSON text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        if config.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be at least 1".into()));
        }
        Ok(config)
    }

    /// Load `path` if given, otherwise defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn tree_settings(&self) -> TreeViewSettings {
        TreeViewSettings {
            options: TreeOptions {
                hide_root: self.hide_root,
                collection_limit: self.collection_limit,
            },
            invert_theme: self.invert_theme,
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            collection_limit: DEFAULT_COLLECTION_LIMIT,
            invert_theme: true,
            hide_root: true,
            theme: Base16Theme::default(),
            tick_ms: 100,
        }
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("invalid config JSON: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tree_view_defaults() {
        let config = InspectorConfig::default();
        assert_eq!(config.tree_settings(), TreeViewSettings::default());
        assert_eq!(config.tick(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_config() {
        let config = InspectorConfig::parse(r##"{"collection_limit": 3, "theme": {"base0B": "#00ff00"}}"##).unwrap();
        assert_eq!(config.collection_limit, 3);
        assert!(config.invert_theme);
        assert_eq!(config.theme.base0b.to_string(), "#00ff00");
        assert_eq!(config.theme.base00, Base16Theme::default().base00);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = InspectorConfig::parse(r#"{"theme": {"base00": "black"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_tick_rejected() {
        assert!(matches!(
            InspectorConfig::parse(r#"{"tick_ms": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_path_uses_defaults() {
        assert_eq!(InspectorConfig::load_or_default(None).unwrap(), InspectorConfig::default());
        assert!(InspectorConfig::load_or_default(Some(Path::new("/nonexistent/inspector.json"))).is_err());
    }
}
