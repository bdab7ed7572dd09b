use super::ThemePair;
use crate::theme::ActiveTheme;
use crate::tokens::PrimitiveColors;
use lumen_core::style::{Align, FlexDirection, FontWeight, Justify, Style};

#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Inverted,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 4] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Inverted,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Inverted => "inverted",
        }
    }
}

/// Container colors for one button variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonColors {
    pub background: &'static str,
    pub border: &'static str,
    pub border_width: f32,
}

impl ButtonColors {
    pub fn to_style(&self) -> Style {
        Style::new()
            .background_color(self.background)
            .border_color(self.border)
            .border_width(self.border_width)
    }
}

/// Colors applied to a disabled button
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisabledColors {
    pub background: &'static str,
    pub border: &'static str,
    pub opacity: f32,
}

impl DisabledColors {
    pub fn to_style(&self) -> Style {
        Style::new()
            .background_color(self.background)
            .border_color(self.border)
            .opacity(self.opacity)
    }
}

static PRIMARY: ThemePair<ButtonColors> = ThemePair::new(
    ButtonColors {
        background: PrimitiveColors::BLACK,
        border: PrimitiveColors::TRANSPARENT,
        border_width: 0.0,
    },
    ButtonColors {
        background: PrimitiveColors::WHITE,
        border: PrimitiveColors::TRANSPARENT,
        border_width: 0.0,
    },
);

static SECONDARY: ThemePair<ButtonColors> = ThemePair::new(
    ButtonColors {
        background: "#f8f9fa",
        border: "#dee2e6",
        border_width: 1.0,
    },
    ButtonColors {
        background: "#3A3A3A",
        border: "#48484A",
        border_width: 1.0,
    },
);

static OUTLINE: ThemePair<ButtonColors> = ThemePair::new(
    ButtonColors {
        background: PrimitiveColors::TRANSPARENT,
        border: PrimitiveColors::BLACK,
        border_width: 1.0,
    },
    ButtonColors {
        background: PrimitiveColors::TRANSPARENT,
        border: PrimitiveColors::WHITE,
        border_width: 1.0,
    },
);

static INVERTED: ThemePair<ButtonColors> = ThemePair::new(
    ButtonColors {
        background: "#2C2C2E",
        border: "#48484A",
        border_width: 0.0,
    },
    ButtonColors {
        background: PrimitiveColors::WHITE,
        border: PrimitiveColors::WHITE,
        border_width: 0.0,
    },
);

static DISABLED: ThemePair<DisabledColors> = ThemePair::new(
    DisabledColors {
        background: "#F0F0F0",
        border: "#E0E0E0",
        opacity: 0.6,
    },
    DisabledColors {
        background: "#2C2C2E",
        border: "#48484A",
        opacity: 0.6,
    },
);

pub struct ButtonPresets;

impl ButtonPresets {
    /// Shape and layout shared by every variant
    pub fn base() -> Style {
        Style::new()
            .border_radius(8.0)
            .padding_top(18.0)
            .padding_bottom(18.0)
            .padding_left(25.0)
            .padding_right(25.0)
            .align_items(Align::Center)
            .justify_content(Justify::Center)
            .flex_direction(FlexDirection::Row)
            .margin_top(12.0)
    }

    pub fn text() -> Style {
        Style::new()
            .font_size(16.0)
            .font_weight(FontWeight::W500)
            .line_height(20.0)
    }

    pub fn colors(variant: ButtonVariant, theme: ActiveTheme) -> &'static ButtonColors {
        let pair = match variant {
            ButtonVariant::Primary => &PRIMARY,
            ButtonVariant::Secondary => &SECONDARY,
            ButtonVariant::Outline => &OUTLINE,
            ButtonVariant::Inverted => &INVERTED,
        };
        pair.get(theme)
    }

    pub fn disabled(theme: ActiveTheme) -> &'static DisabledColors {
        DISABLED.get(theme)
    }
}
