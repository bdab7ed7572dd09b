//! Theme provider configuration

use crate::error::ConfigError;
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for a [`ThemeProvider`](crate::ThemeProvider)
///
/// ```toml
/// storage_key = "theme_mode"
/// default_mode = "system"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Preference-store key holding the persisted mode
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Mode used until a stored preference is loaded
    #[serde(default)]
    pub default_mode: ThemeMode,
}

fn default_storage_key() -> String {
    "theme_mode".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_mode: ThemeMode::default(),
        }
    }
}

impl ThemeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.storage_key, "theme_mode");
        assert_eq!(config.default_mode, ThemeMode::System);
    }

    #[test]
    fn test_overrides() {
        let config = ThemeConfig::from_toml_str(
            r#"
            storage_key = "@theme_mode"
            default_mode = "dark"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage_key, "@theme_mode");
        assert_eq!(config.default_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_invalid_mode_is_a_parse_error() {
        let err = ThemeConfig::from_toml_str("default_mode = \"purple\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ThemeConfig::load("/nonexistent/lumen/theme.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
