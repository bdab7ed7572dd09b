//! System light/dark appearance reported by the host OS

use crate::signal::Signal;
use serde::{Deserialize, Serialize};

/// The appearance the OS currently requests
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemAppearance {
    Light,
    Dark,
    /// Not reported yet, or the platform has no preference
    #[default]
    Unknown,
}

impl SystemAppearance {
    pub fn is_dark(self) -> bool {
        matches!(self, SystemAppearance::Dark)
    }
}

/// Appearance updates pushed by the host
pub type AppearanceSignal = Signal<SystemAppearance>;
