//! Component style hooks
//!
//! Each hook reads the current provider (see [`ThemeProvider::enter`]) once
//! and returns a small builder bound to the active theme. Calling a hook
//! outside a provider scope panics.
//!
//! [`ThemeProvider::enter`]: crate::ThemeProvider::enter

use crate::factories;
use crate::presets::{ButtonPresets, ButtonVariant, FormGap, FormPresets, InputState};
use crate::provider::use_theme;
use crate::styles::ThemedStyles;
use crate::theme::ActiveTheme;
use crate::tokens::ShadowSize;
use lumen_core::style::Style;

/// Theme-bound style builders of the current provider
pub fn use_themed_styles() -> ThemedStyles {
    use_theme().styles()
}

pub fn use_button_styles() -> ButtonStyles {
    ButtonStyles {
        active: use_theme().active_theme(),
    }
}

pub fn use_input_styles() -> InputStyles {
    InputStyles {
        active: use_theme().active_theme(),
    }
}

pub fn use_form_styles() -> FormStyles {
    FormStyles {
        active: use_theme().active_theme(),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonOptions {
    /// Dark container regardless of variant
    pub inverted: bool,
    pub with_shadow: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyleSet {
    pub container: Style,
    pub text: Style,
}

#[derive(Clone, Copy, Debug)]
pub struct ButtonStyles {
    active: ActiveTheme,
}

impl ButtonStyles {
    pub fn button_style(&self, variant: ButtonVariant, options: ButtonOptions) -> ButtonStyleSet {
        let mut container =
            ButtonPresets::base().merge(&ButtonPresets::colors(variant, self.active).to_style());
        if options.inverted {
            container = container.background_color("#2C2C2E").border_color("#48484A");
        }
        if options.with_shadow {
            container = container.merge(&ShadowSize::Medium.style(self.active));
        }

        let light = self.active == ActiveTheme::Light;
        let color = if options.inverted {
            "#FFFFFF"
        } else {
            match variant {
                ButtonVariant::Primary if light => "#FFFFFF",
                ButtonVariant::Primary => "#000000",
                ButtonVariant::Secondary if light => "#11181C",
                ButtonVariant::Secondary => "#FFFFFF",
                _ if light => "#000000",
                _ => "#FFFFFF",
            }
        };

        ButtonStyleSet {
            container,
            text: ButtonPresets::text().color(color),
        }
    }
}

/// Styles for one labelled form field
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyles {
    pub container: Style,
    pub label: Style,
    pub input: Style,
    /// Present only when the field is in error
    pub error: Option<Style>,
    pub placeholder_color: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct InputStyles {
    active: ActiveTheme,
}

impl InputStyles {
    pub fn input_style(&self, focused: bool, error: bool, disabled: bool) -> Style {
        factories::input_state_style(InputState::from_flags(focused, error, disabled), self.active)
    }

    pub fn label_style(&self) -> Style {
        factories::input_label_style(self.active)
    }

    pub fn error_style(&self) -> Style {
        factories::input_error_style(self.active)
    }

    pub fn placeholder_color(&self) -> &'static str {
        factories::placeholder_color(self.active)
    }

    pub fn field_styles(&self, focused: bool, error: bool, disabled: bool) -> FieldStyles {
        FieldStyles {
            container: Style::new().margin_bottom(16.0),
            label: self.label_style(),
            input: self.input_style(focused, error, disabled),
            error: error.then(|| self.error_style()),
            placeholder_color: self.placeholder_color(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormOptions {
    pub with_shadow: bool,
    pub compact: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormStyleSet {
    pub container: Style,
    pub field_group: Style,
}

#[derive(Clone, Copy, Debug)]
pub struct FormStyles {
    active: ActiveTheme,
}

impl FormStyles {
    pub fn form_style(&self, options: FormOptions) -> FormStyleSet {
        let gap = if options.compact {
            FormGap::Compact
        } else {
            FormGap::Default
        };
        let mut container = factories::form_wrapper(self.active).gap(gap.value());
        if options.with_shadow {
            container = container.merge(&ShadowSize::Medium.style(self.active));
        }

        FormStyleSet {
            container,
            field_group: Style::new().margin_bottom(if options.compact { 12.0 } else { 16.0 }),
        }
    }

    pub fn form_wrapper_style(&self) -> Style {
        factories::form_wrapper(self.active)
    }

    pub fn form_gap_style(&self, gap: FormGap) -> Style {
        factories::form_gap(gap)
    }

    pub fn smart_input_container_style(&self) -> Style {
        FormPresets::smart_input()
    }
}
