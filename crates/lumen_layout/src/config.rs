//! Layout configuration

use crate::metrics::ScaleMultipliers;
use lumen_theme::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for a [`BreakpointTracker`](crate::BreakpointTracker)
///
/// ```toml
/// animate_transitions = true
///
/// [scale]
/// small = 1.0
/// medium = 1.15
/// large = 1.3
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LayoutConfig {
    /// Fire the transition callback when the category changes
    #[serde(default = "default_true")]
    pub animate_transitions: bool,
    /// Multipliers for [`Breakpoints::scale`](crate::Breakpoints::scale)
    #[serde(default)]
    pub scale: ScaleMultipliers,
}

fn default_true() -> bool {
    true
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            animate_transitions: true,
            scale: ScaleMultipliers::default(),
        }
    }
}

impl LayoutConfig {
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
    fn test_empty_config_uses_defaults() {
        let config = LayoutConfig::from_toml_str("").unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn test_partial_scale_table() {
        let config = LayoutConfig::from_toml_str(
            "animate_transitions = false\n[scale]\nlarge = 1.5\n",
        )
        .unwrap();
        assert!(!config.animate_transitions);
        assert_eq!(config.scale.large, 1.5);
        assert_eq!(config.scale.medium, 1.15);
    }

    #[test]
    fn test_bad_type_is_parse_error() {
        let err = LayoutConfig::from_toml_str("animate_transitions = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
