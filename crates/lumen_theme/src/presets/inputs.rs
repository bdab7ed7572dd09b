use super::ThemePair;
use crate::theme::ActiveTheme;
use crate::tokens::PrimitiveColors;
use lumen_core::style::{BorderStyle, Dimension, FontWeight, Overflow, Style};

/// Interaction state of an input field
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum InputState {
    #[default]
    Default,
    Focused,
    Error,
    Disabled,
}

impl InputState {
    /// Collapse the three state flags; disabled beats error beats focused
    pub fn from_flags(focused: bool, error: bool, disabled: bool) -> InputState {
        if disabled {
            InputState::Disabled
        } else if error {
            InputState::Error
        } else if focused {
            InputState::Focused
        } else {
            InputState::Default
        }
    }
}

/// Colors of an input at rest
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputDefaults {
    pub background: &'static str,
    pub border: &'static str,
    pub color: &'static str,
    pub placeholder: &'static str,
    pub label: &'static str,
}

/// Partial override applied for a non-default state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputStateColors {
    pub background: Option<&'static str>,
    pub border: Option<&'static str>,
    pub opacity: Option<f32>,
}

/// All input colors for one theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputThemePreset {
    pub default: InputDefaults,
    pub focused: InputStateColors,
    pub error: InputStateColors,
    pub disabled: InputStateColors,
}

impl InputThemePreset {
    /// Override for a state; the default state has none
    pub fn state(&self, state: InputState) -> InputStateColors {
        match state {
            InputState::Default => InputStateColors::default(),
            InputState::Focused => self.focused,
            InputState::Error => self.error,
            InputState::Disabled => self.disabled,
        }
    }
}

static INPUT_THEMES: ThemePair<InputThemePreset> = ThemePair::new(
    InputThemePreset {
        default: InputDefaults {
            background: PrimitiveColors::GRAY_100,
            border: PrimitiveColors::GRAY_50,
            color: "#11181C",
            placeholder: "#545353",
            label: PrimitiveColors::GRAY_750,
        },
        focused: InputStateColors {
            background: None,
            border: Some(PrimitiveColors::BRAND_PRIMARY),
            opacity: None,
        },
        error: InputStateColors {
            background: None,
            border: Some("#dc3545"),
            opacity: None,
        },
        disabled: InputStateColors {
            background: Some("#F0F0F0"),
            border: Some("#E0E0E0"),
            opacity: Some(0.6),
        },
    },
    InputThemePreset {
        default: InputDefaults {
            background: PrimitiveColors::GRAY_950,
            border: PrimitiveColors::GRAY_50,
            color: PrimitiveColors::WHITE,
            placeholder: "#5E5E5E",
            label: PrimitiveColors::GRAY_750,
        },
        focused: InputStateColors {
            background: None,
            border: Some(PrimitiveColors::BRAND_PRIMARY),
            opacity: None,
        },
        error: InputStateColors {
            background: None,
            border: Some("#EF5350"),
            opacity: None,
        },
        disabled: InputStateColors {
            background: Some("#2C2C2E"),
            border: Some("#48484A"),
            opacity: Some(0.6),
        },
    },
);

pub struct InputPresets;

impl InputPresets {
    pub fn container() -> Style {
        Style::new()
            .border_radius(8.0)
            .border_width(2.0)
            .border_style(BorderStyle::Solid)
            .overflow(Overflow::Hidden)
            .width(Dimension::Percent(100.0))
            .height(50.0)
            .padding_horizontal(16.0)
    }

    pub fn text() -> Style {
        Style::new()
            .font_size(16.0)
            .font_weight(FontWeight::Normal)
            .line_height(24.0)
    }

    pub fn label() -> Style {
        Style::new()
            .font_size(17.0)
            .font_weight(FontWeight::Normal)
            .line_height(20.0)
            .margin_bottom(4.0)
            .padding_left(8.0)
    }

    pub fn error() -> Style {
        Style::new()
            .font_size(13.0)
            .font_weight(FontWeight::Normal)
            .line_height(16.0)
            .margin_top(2.0)
    }

    pub fn theme(theme: ActiveTheme) -> &'static InputThemePreset {
        INPUT_THEMES.get(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_precedence() {
        assert_eq!(InputState::from_flags(true, true, true), InputState::Disabled);
        assert_eq!(InputState::from_flags(true, true, false), InputState::Error);
        assert_eq!(InputState::from_flags(true, false, false), InputState::Focused);
        assert_eq!(InputState::from_flags(false, false, false), InputState::Default);
    }

    #[test]
    fn test_default_state_has_no_override() {
        let preset = InputPresets::theme(ActiveTheme::Dark);
        assert_eq!(preset.state(InputState::Default), InputStateColors::default());
        assert_eq!(preset.state(InputState::Error).border, Some("#EF5350"));
    }
}
