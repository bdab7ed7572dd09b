//! The light and dark color tables
//!
//! A [`ColorTable`] bundles everything that varies between the two themes:
//! semantic colors, form metrics, the base radius, the font-size scale, prose
//! colors, and the canva accent palette. Exactly two instances exist,
//! [`LIGHT`] and [`DARK`]; both are immutable statics.

mod dark;
mod light;

pub use dark::DARK;
pub use light::LIGHT;

use crate::theme::ActiveTheme;
use crate::tokens::{ColorToken, ColorTokens};
use lumen_core::style::FontWeight;

/// Status colors only the light table defines
#[derive(Clone, Debug, PartialEq)]
pub struct StatusExtras {
    pub warning_bg: &'static str,
    pub warning_color: &'static str,
    pub success_border_color: &'static str,
    pub success_background_color: &'static str,
    pub success_color: &'static str,
}

impl StatusExtras {
    pub fn get(&self, name: &str) -> Option<&'static str> {
        match name {
            "warning_bg" => Some(self.warning_bg),
            "warning_color" => Some(self.warning_color),
            "success_border_color" => Some(self.success_border_color),
            "success_background_color" => Some(self.success_background_color),
            "success_color" => Some(self.success_color),
            _ => None,
        }
    }
}

/// Form field typography and spacing
#[derive(Clone, Debug, PartialEq)]
pub struct FormTokens {
    pub input_font_family: &'static str,
    pub input_font_size: f32,
    pub input_font_weight: FontWeight,
    pub input_line_height: f32,

    pub label_font_family: &'static str,
    pub label_font_size: f32,
    pub label_font_weight: FontWeight,
    pub label_line_height: f32,

    pub error_text_font_family: &'static str,
    pub error_text_font_size: f32,
    pub error_text_font_weight: FontWeight,
    pub error_text_line_height: f32,

    pub form_gap: f32,
    pub label_margin_bottom: f32,
    pub label_padding_left: f32,
    pub smart_input_margin_top: f32,
    pub smart_input_margin_bottom: f32,

    pub form_wrapper_padding_top: f32,
    pub form_wrapper_padding_right: f32,
    pub form_wrapper_padding_bottom: f32,
    pub form_wrapper_padding_left: f32,
}

/// Theme font-size scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizeScale {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
}

impl FontSizeScale {
    pub const DEFAULT: Self = Self {
        xs: 12.0,
        sm: 14.0,
        md: 16.0,
        lg: 18.0,
        xl: 20.0,
        xxl: 24.0,
    };
}

/// Accent palette shared by both themes
#[derive(Clone, Debug, PartialEq)]
pub struct CanvaPalette {
    pub light_blue: &'static str,
    pub light_green: &'static str,
    pub light_purple: &'static str,
    pub peach_background: &'static str,
    pub off_white_background: &'static str,
    pub subtle_purple: &'static str,
    pub primary_gradient_start: &'static str,
    pub primary_gradient_end: &'static str,
    pub secondary_gradient_start: &'static str,
    pub secondary_gradient_end: &'static str,
    pub background_gradient_start: &'static str,
    pub background_gradient_end: &'static str,
    pub primary_shadow: &'static str,
    pub dark_text_alpha: &'static str,
    pub text_inverse: &'static str,
    pub dark_text: &'static str,
    pub border: &'static str,
    pub text_secondary: &'static str,
    pub text_disabled: &'static str,
    pub purple_alpha: &'static str,
    pub dark_purple: &'static str,
    pub light_purple_alpha: &'static str,
    pub purple_hover: &'static str,
    pub light_purple_bg: &'static str,
    pub divider: &'static str,
    pub white_alpha: &'static str,
    pub white_alpha_strong: &'static str,
    pub primary_blue: &'static str,
    pub primary_light_blue: &'static str,
    pub card_shadow: &'static str,
    pub dark_red: &'static str,
    pub light_red: &'static str,
    pub orange: &'static str,
    pub vibrant_purple: &'static str,
}

impl CanvaPalette {
    pub const DEFAULT: Self = Self {
        light_blue: "#6ba9ff",
        light_green: "#008008",
        light_purple: "#a570ff",
        peach_background: "#ffebd6",
        off_white_background: "#f6f7f8",
        subtle_purple: "rgba(165, 112, 255, .15)",
        primary_gradient_start: "#00c4cc",
        primary_gradient_end: "#7d2ae8",
        secondary_gradient_start: "#7d2ae8",
        secondary_gradient_end: "#03a5ab",
        background_gradient_start: "#f9f5fe",
        background_gradient_end: "#f5ffff",
        primary_shadow: "0px 0px 1px rgba(64, 87, 109, .07), 0px 2px 2px rgba(43, 59, 74, .3)",
        dark_text_alpha: "rgba(13, 18, 22, .7)",
        text_inverse: "#fff",
        dark_text: "#24313d",
        border: "#dadadb",
        text_secondary: "#a1a7aa",
        text_disabled: "#d1d3d5",
        purple_alpha: "rgba(74, 46, 127, .8)",
        dark_purple: "#7731d8",
        light_purple_alpha: "rgba(119, 49, 216, .1)",
        purple_hover: "#612dae",
        light_purple_bg: "#f1ebff",
        divider: "#e1e4e7",
        white_alpha: "hsla(0, 0%, 100%, .5)",
        white_alpha_strong: "hsla(0, 0%, 100%, .9)",
        primary_blue: "#cee2ff",
        primary_light_blue: "#dae9ff",
        card_shadow: "0px 0px 0px 0.5px rgba(64, 87, 109, .04), 0px 1px 2px 0px #182c5923, 0px 2px 4px 0px #182c5923",
        dark_red: "#501b21",
        light_red: "#ffd6d8",
        orange: "#ad5a00",
        vibrant_purple: "#7d2ae8",
    };

    /// Look up by camelCase name
    pub fn get(&self, name: &str) -> Option<&'static str> {
        let value = match name {
            "lightBlue" => self.light_blue,
            "lightGreen" => self.light_green,
            "lightPurple" => self.light_purple,
            "peachBackground" => self.peach_background,
            "offWhiteBackground" => self.off_white_background,
            "subtlePurple" => self.subtle_purple,
            "primaryGradientStart" => self.primary_gradient_start,
            "primaryGradientEnd" => self.primary_gradient_end,
            "secondaryGradientStart" => self.secondary_gradient_start,
            "secondaryGradientEnd" => self.secondary_gradient_end,
            "backgroundGradientStart" => self.background_gradient_start,
            "backgroundGradientEnd" => self.background_gradient_end,
            "primaryShadow" => self.primary_shadow,
            "darkTextAlpha" => self.dark_text_alpha,
            "textInverse" => self.text_inverse,
            "darkText" => self.dark_text,
            "border" => self.border,
            "textSecondary" => self.text_secondary,
            "textDisabled" => self.text_disabled,
            "purpleAlpha" => self.purple_alpha,
            "darkPurple" => self.dark_purple,
            "lightPurpleAlpha" => self.light_purple_alpha,
            "purpleHover" => self.purple_hover,
            "lightPurpleBg" => self.light_purple_bg,
            "divider" => self.divider,
            "whiteAlpha" => self.white_alpha,
            "whiteAlphaStrong" => self.white_alpha_strong,
            "primaryBlue" => self.primary_blue,
            "primaryLightBlue" => self.primary_light_blue,
            "cardShadow" => self.card_shadow,
            "darkRed" => self.dark_red,
            "lightRed" => self.light_red,
            "orange" => self.orange,
            "vibrantPurple" => self.vibrant_purple,
            _ => return None,
        };
        Some(value)
    }
}

/// Prose (rich text) colors
#[derive(Clone, Debug, PartialEq)]
pub struct ProseTokens {
    pub color_primary: &'static str,
}

/// Everything that differs between the light and dark themes
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTable {
    pub colors: ColorTokens,
    pub status_extras: Option<StatusExtras>,
    pub form: FormTokens,
    pub border_radius: f32,
    pub font_sizes: FontSizeScale,
    pub prose: ProseTokens,
    pub canva: CanvaPalette,
    pub gradient_adp: [&'static str; 4],
}

impl ColorTable {
    /// The table for a resolved theme
    pub fn for_theme(theme: ActiveTheme) -> &'static ColorTable {
        match theme {
            ActiveTheme::Light => &LIGHT,
            ActiveTheme::Dark => &DARK,
        }
    }

    pub fn color(&self, token: ColorToken) -> &'static str {
        self.colors.get(token)
    }

    /// Look up a color by name
    ///
    /// Accepts semantic token names (`"inputBorder"`), the light-only status
    /// names (`"warning_bg"`), and canva palette paths (`"canva.darkPurple"`).
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        if let Some(token) = ColorToken::from_name(name) {
            return Some(self.colors.get(token));
        }
        if let Some(key) = name.strip_prefix("canva.") {
            return self.canva.get(key);
        }
        self.status_extras.as_ref().and_then(|extras| extras.get(name))
    }

    /// Resolve a color prop: a known name maps through the table, anything
    /// else is returned unchanged as a literal color
    pub fn resolve_color<'a>(&self, value: &'a str) -> &'a str {
        self.lookup(value).unwrap_or(value)
    }
}
