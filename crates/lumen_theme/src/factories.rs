//! Style factories
//!
//! Pure functions from presets and tokens to complete styles for a theme.
//! They need no provider; [`crate::ThemedStyles`] and the hooks call them
//! with the active theme filled in.

use crate::presets::{
    ButtonPresets, ButtonVariant, FormGap, FormPresets, InputPresets, InputState,
};
use crate::theme::ActiveTheme;
use crate::tokens::{AvatarSize, CssGradient, Gradient, IconSize, ImageSize, ShadowSize};
use lumen_core::style::Style;

const BUTTON_TEXT_DARK: &str = "#11181C";

pub fn button_style(variant: ButtonVariant, theme: ActiveTheme) -> Style {
    ButtonPresets::base().merge(&ButtonPresets::colors(variant, theme).to_style())
}

/// Label style for a button
///
/// Secondary and outline buttons on a light theme get dark text; every
/// other light button is white. On a dark theme only primary (white) buttons
/// get black text.
pub fn button_text_style(variant: ButtonVariant, theme: ActiveTheme) -> Style {
    let light_variant = matches!(variant, ButtonVariant::Secondary | ButtonVariant::Outline);
    let color = match theme {
        ActiveTheme::Light if light_variant => BUTTON_TEXT_DARK,
        ActiveTheme::Light => "#FFFFFF",
        ActiveTheme::Dark if variant == ButtonVariant::Primary => "#000000",
        ActiveTheme::Dark => "#FFFFFF",
    };
    ButtonPresets::text().color(color)
}

pub fn disabled_button_style(theme: ActiveTheme) -> Style {
    ButtonPresets::base().merge(&ButtonPresets::disabled(theme).to_style())
}

/// Input container style for a state
///
/// The state overrides background and border where it defines them. Text
/// color always comes from the default state.
pub fn input_state_style(state: InputState, theme: ActiveTheme) -> Style {
    let preset = InputPresets::theme(theme);
    let overrides = preset.state(state);

    let mut style = InputPresets::container()
        .merge(&InputPresets::text())
        .background_color(overrides.background.unwrap_or(preset.default.background))
        .border_color(overrides.border.unwrap_or(preset.default.border))
        .color(preset.default.color);
    if let Some(opacity) = overrides.opacity {
        style = style.opacity(opacity);
    }
    style
}

pub fn input_label_style(theme: ActiveTheme) -> Style {
    InputPresets::label().color(InputPresets::theme(theme).default.label)
}

pub fn input_error_style(theme: ActiveTheme) -> Style {
    let color = match theme {
        ActiveTheme::Light => "#dc3545",
        ActiveTheme::Dark => "#EF5350",
    };
    InputPresets::error().color(color)
}

pub fn placeholder_color(theme: ActiveTheme) -> &'static str {
    InputPresets::theme(theme).default.placeholder
}

/// Padded, rounded form container with the theme's background
pub fn form_wrapper(theme: ActiveTheme) -> Style {
    FormPresets::wrapper().background_color(FormPresets::background(theme))
}

pub fn form_gap(gap: FormGap) -> Style {
    Style::new().gap(gap.value())
}

pub fn shadow_style(size: ShadowSize, theme: ActiveTheme) -> Style {
    size.style(theme)
}

pub fn apple_shadow_style(size: ShadowSize, theme: ActiveTheme) -> Style {
    size.apple_shadow(theme).to_style()
}

pub fn image_size_style(size: ImageSize) -> Style {
    size.style()
}

pub fn icon_size_style(size: IconSize) -> Style {
    size.style()
}

pub fn avatar_size_style(size: AvatarSize) -> Style {
    size.style()
}

/// Color stops for a native linear gradient
pub fn gradient(key: Gradient) -> &'static [&'static str] {
    key.colors()
}

pub fn css_gradient(key: CssGradient) -> &'static str {
    key.css()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::style::{Dimension, FlexDirection};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_button_style_layers_variant_over_base() {
        let style = button_style(ButtonVariant::Secondary, ActiveTheme::Dark);
        assert_eq!(style.flex_direction, Some(FlexDirection::Row));
        assert_eq!(style.padding_left, Some(Dimension::Points(25.0)));
        assert_eq!(style.background_color.as_deref(), Some("#3A3A3A"));
        assert_eq!(style.border_width, Some(1.0));
    }

    #[test]
    fn test_button_text_colors() {
        let color = |variant, theme| button_text_style(variant, theme).color;
        assert_eq!(color(ButtonVariant::Outline, ActiveTheme::Light).as_deref(), Some("#11181C"));
        assert_eq!(color(ButtonVariant::Inverted, ActiveTheme::Light).as_deref(), Some("#FFFFFF"));
        assert_eq!(color(ButtonVariant::Primary, ActiveTheme::Dark).as_deref(), Some("#000000"));
        assert_eq!(color(ButtonVariant::Secondary, ActiveTheme::Dark).as_deref(), Some("#FFFFFF"));
    }

    #[test]
    fn test_input_state_falls_back_to_default_colors() {
        let focused = input_state_style(InputState::Focused, ActiveTheme::Light);
        assert_eq!(focused.border_color.as_deref(), Some("#8b3dff"));
        assert_eq!(focused.background_color.as_deref(), Some("#E8E8E8"));
        assert_eq!(focused.color.as_deref(), Some("#11181C"));
        assert_eq!(focused.opacity, None);

        let disabled = input_state_style(InputState::Disabled, ActiveTheme::Dark);
        assert_eq!(disabled.background_color.as_deref(), Some("#2C2C2E"));
        assert_eq!(disabled.color.as_deref(), Some("#FFFFFF"));
        assert_eq!(disabled.opacity, Some(0.6));
    }

    #[test]
    fn test_form_factories() {
        assert_eq!(form_gap(FormGap::Spacious).gap, Some(32.0));
        let wrapper = form_wrapper(ActiveTheme::Dark);
        assert_eq!(wrapper.background_color.as_deref(), Some("#F1EEE8"));
        assert_eq!(wrapper.border_radius, Some(12.0));
    }
}
