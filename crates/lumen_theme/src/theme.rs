//! Theme mode selection and resolution
//!
//! [`ThemeMode`] is what the user picks (including "follow the system");
//! [`ActiveTheme`] is what styling actually uses. The active theme is always
//! derived with [`resolve_active_theme`] and never stored on its own.

use crate::error::ParseThemeModeError;
use lumen_core::SystemAppearance;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selected theme mode
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the OS appearance
    #[default]
    System,
}

impl ThemeMode {
    /// Stored representation
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

/// The resolved light/dark theme
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTheme {
    #[default]
    Light,
    Dark,
}

impl ActiveTheme {
    pub fn is_dark(self) -> bool {
        matches!(self, ActiveTheme::Dark)
    }

    /// Toggle between light and dark
    pub fn toggle(self) -> Self {
        match self {
            ActiveTheme::Light => ActiveTheme::Dark,
            ActiveTheme::Dark => ActiveTheme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActiveTheme::Light => "light",
            ActiveTheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ActiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ActiveTheme> for ThemeMode {
    fn from(theme: ActiveTheme) -> Self {
        match theme {
            ActiveTheme::Light => ThemeMode::Light,
            ActiveTheme::Dark => ThemeMode::Dark,
        }
    }
}

/// Resolve the theme to apply
///
/// Explicit modes win; `System` follows the appearance signal and falls back
/// to light while the appearance is unknown.
pub fn resolve_active_theme(mode: ThemeMode, appearance: SystemAppearance) -> ActiveTheme {
    match mode {
        ThemeMode::Light => ActiveTheme::Light,
        ThemeMode::Dark => ActiveTheme::Dark,
        ThemeMode::System if appearance.is_dark() => ActiveTheme::Dark,
        ThemeMode::System => ActiveTheme::Light,
    }
}
