use super::ThemePair;
use crate::theme::ActiveTheme;
use lumen_core::style::Style;

/// Vertical rhythm between form fields
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum FormGap {
    #[default]
    Default,
    Compact,
    Spacious,
}

impl FormGap {
    pub fn value(self) -> f32 {
        match self {
            FormGap::Default => 24.0,
            FormGap::Compact => 16.0,
            FormGap::Spacious => 32.0,
        }
    }
}

static BACKGROUND: ThemePair<&str> = ThemePair::new("#FFFFFF", "#F1EEE8");

pub struct FormPresets;

impl FormPresets {
    pub fn wrapper() -> Style {
        Style::new()
            .padding_top(40.0)
            .padding_right(24.0)
            .padding_bottom(40.0)
            .padding_left(24.0)
            .border_radius(12.0)
    }

    pub fn smart_input() -> Style {
        Style::new().margin_top(8.0).margin_bottom(8.0)
    }

    pub fn background(theme: ActiveTheme) -> &'static str {
        *BACKGROUND.get(theme)
    }
}
