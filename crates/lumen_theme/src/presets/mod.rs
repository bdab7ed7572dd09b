//! Pre-composed style objects for buttons, inputs, and forms
//!
//! Presets are plain data. The functions in [`crate::factories`] turn them
//! into complete [`Style`](lumen_core::Style)s for a given theme.

mod buttons;
mod forms;
mod inputs;

pub use buttons::*;
pub use forms::*;
pub use inputs::*;

use crate::theme::ActiveTheme;

/// A value with one variant per resolved theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemePair<T> {
    pub light: T,
    pub dark: T,
}

impl<T> ThemePair<T> {
    pub const fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    pub fn get(&self, theme: ActiveTheme) -> &T {
        match theme {
            ActiveTheme::Light => &self.light,
            ActiveTheme::Dark => &self.dark,
        }
    }
}
