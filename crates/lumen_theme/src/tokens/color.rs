//! Color tokens for theming
//!
//! [`ColorTokens`] holds every semantic color of a theme as a CSS color
//! string. [`ColorToken`] names each field for dynamic access, and
//! [`ColorToken::from_name`] maps the camelCase names used by style props
//! (`"buttonPrimaryBackground"`) back to a token.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

macro_rules! color_tokens {
    ($( $variant:ident => $field:ident, $name:literal; )*) => {
        /// Semantic color token keys for dynamic access
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
        pub enum ColorToken {
            $( $variant, )*
        }

        impl ColorToken {
            /// Every token, in declaration order
            pub const ALL: &'static [ColorToken] = &[$( ColorToken::$variant, )*];

            /// The camelCase name used in style props
            pub fn name(self) -> &'static str {
                match self {
                    $( ColorToken::$variant => $name, )*
                }
            }
        }

        /// Complete set of semantic color tokens
        #[derive(Clone, Debug, PartialEq)]
        pub struct ColorTokens {
            $( pub $field: &'static str, )*
        }

        impl ColorTokens {
            /// Get a color by token
            pub fn get(&self, token: ColorToken) -> &'static str {
                match token {
                    $( ColorToken::$variant => self.$field, )*
                }
            }
        }
    };
}

color_tokens! {
    Text => text, "text";
    TextMuted => text_muted, "textMuted";
    TextSecondary => text_secondary, "textSecondary";
    TextSecondaryLowLight => text_secondary_low_light, "textSecondaryLowLight";
    TextInverse => text_inverse, "textInverse";
    Tint => tint, "tint";
    Icon => icon, "icon";
    TabIconDefault => tab_icon_default, "tabIconDefault";
    TabIconSelected => tab_icon_selected, "tabIconSelected";
    Primary => primary, "primary";
    ThemePrimary => theme_primary, "themePrimary";
    Secondary => secondary, "secondary";
    SecondaryLight => secondary_light, "secondaryLight";
    Tertiary => tertiary, "tertiary";
    Accent1 => accent_1, "accent1";
    Accent2 => accent_2, "accent2";
    PrimaryContainer => primary_container, "primaryContainer";
    OnPrimaryContainer => on_primary_container, "onPrimaryContainer";
    OnPrimary => on_primary, "onPrimary";
    OnSurface => on_surface, "onSurface";
    Outline => outline, "outline";
    Background => background, "background";
    Surface => surface, "surface";
    SurfaceVariant => surface_variant, "surfaceVariant";
    Card => card, "card";
    Border => border, "border";
    Divider => divider, "divider";
    Disabled => disabled, "disabled";
    Warning => warning, "warning";
    Error => error, "error";
    Success => success, "success";
    Info => info, "info";
    BgError => bg_error, "bgError";
    BgErrorBorder => bg_error_border, "bgErrorBorder";
    FgError => fg_error, "fgError";
    BgWarning => bg_warning, "bgWarning";
    BgWarningBorder => bg_warning_border, "bgWarningBorder";
    FgWarning => fg_warning, "fgWarning";
    IconPrimary => icon_primary, "iconPrimary";
    IconAccent => icon_accent, "iconAccent";
    IconMuted => icon_muted, "iconMuted";
    ButtonPrimaryBackground => button_primary_background, "buttonPrimaryBackground";
    ButtonPrimaryText => button_primary_text, "buttonPrimaryText";
    ButtonPrimaryBorder => button_primary_border, "buttonPrimaryBorder";
    ButtonSecondaryBackground => button_secondary_background, "buttonSecondaryBackground";
    ButtonSecondaryText => button_secondary_text, "buttonSecondaryText";
    ButtonSecondaryBorder => button_secondary_border, "buttonSecondaryBorder";
    ButtonOutlineBackground => button_outline_background, "buttonOutlineBackground";
    ButtonOutlineText => button_outline_text, "buttonOutlineText";
    ButtonOutlineBorder => button_outline_border, "buttonOutlineBorder";
    ButtonInvertedBackground => button_inverted_background, "buttonInvertedBackground";
    ButtonInvertedText => button_inverted_text, "buttonInvertedText";
    ButtonInvertedBorder => button_inverted_border, "buttonInvertedBorder";
    ButtonDisabledBackground => button_disabled_background, "buttonDisabledBackground";
    ButtonDisabledBorder => button_disabled_border, "buttonDisabledBorder";
    ButtonDisabledText => button_disabled_text, "buttonDisabledText";
    SelectionControl => selection_control, "selectionControl";
    InputText => input_text, "inputText";
    InputPlaceholder => input_placeholder, "inputPlaceholder";
    InputBackground => input_background, "inputBackground";
    InputBorder => input_border, "inputBorder";
    LabelColor => label_color, "labelColor";
    ErrorTextColor => error_text_color, "errorTextColor";
    FormBackground => form_background, "formBackground";
    CardBorder => card_border, "cardBorder";
    Separator => separator, "separator";
    TopText => top_text, "topText";
    SecondaryText => secondary_text, "secondaryText";
    SecondaryTextMuted => secondary_text_muted, "secondaryTextMuted";
    TierceryTextMuted => tiercery_text_muted, "tierceryTextMuted";
    QuadiaryTextMuted => quadiary_text_muted, "quadiaryTextMuted";
    StatusApprovedBg => status_approved_bg, "statusApprovedBg";
    StatusApprovedText => status_approved_text, "statusApprovedText";
    StatusPendingBg => status_pending_bg, "statusPendingBg";
    StatusPendingText => status_pending_text, "statusPendingText";
    StatusRejectedBg => status_rejected_bg, "statusRejectedBg";
    StatusRejectedText => status_rejected_text, "statusRejectedText";
    RiderTone => rider_tone, "riderTone";
    DriverTone => driver_tone, "driverTone";
    GuideTone => guide_tone, "guideTone";
    AdminTone => admin_tone, "adminTone";
    DeliveryAccent => delivery_accent, "deliveryAccent";
    SidebarLine => sidebar_line, "sidebarLine";
    Smoke => smoke, "smoke";
    ActiveTintColor => active_tint_color, "activeTintColor";
    ActiveNavigationBackground => active_navigation_background, "activeNavigationBackground";
    MainSecondaryColor => main_secondary_color, "mainSecondaryColor";
    BaseGray05 => base_gray_05, "baseGray05";
    BaseGray80 => base_gray_80, "baseGray80";
    GradientPrimaryStart => gradient_primary_start, "gradientPrimaryStart";
    GradientPrimaryEnd => gradient_primary_end, "gradientPrimaryEnd";
    GradientSecondaryStart => gradient_secondary_start, "gradientSecondaryStart";
    GradientSecondaryEnd => gradient_secondary_end, "gradientSecondaryEnd";
    BackgroundSurface200 => background_surface_200, "backgroundSurface200";
    BackgroundSurface300 => background_surface_300, "backgroundSurface300";
    BackgroundSurface400 => background_surface_400, "backgroundSurface400";
    BackgroundSurface500 => background_surface_500, "backgroundSurface500";
    PostPrimary => post_primary, "postPrimary";
    PostBackground => post_background, "postBackground";
    PostSurface => post_surface, "postSurface";
    PostGrey => post_grey, "postGrey";
    White => white, "white";
    Black => black, "black";
}

static NAME_INDEX: OnceLock<FxHashMap<&'static str, ColorToken>> = OnceLock::new();

impl ColorToken {
    /// Look up a token by its camelCase name
    pub fn from_name(name: &str) -> Option<ColorToken> {
        NAME_INDEX
            .get_or_init(|| ColorToken::ALL.iter().map(|t| (t.name(), *t)).collect())
            .get(name)
            .copied()
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_index() {
        for token in ColorToken::ALL {
            assert_eq!(ColorToken::from_name(token.name()), Some(*token));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(ColorToken::from_name("#ff0000"), None);
        assert_eq!(ColorToken::from_name("button_primary_background"), None);
        assert_eq!(
            ColorToken::from_name("buttonPrimaryBackground"),
            Some(ColorToken::ButtonPrimaryBackground)
        );
    }
}
