//! Typography tokens
//!
//! Font families, the raw size/line-height/weight/letter-spacing scales, and
//! [`TypographyVariant`], the named text styles used by the Text primitive.

use lumen_core::style::{FontWeight, Style};

/// Font family stacks
pub struct FontFamilies;

impl FontFamilies {
    pub const SF_PRO_DISPLAY: &'static str =
        "SF Pro Display, -apple-system, BlinkMacSystemFont, system-ui, sans-serif";
    pub const SF_PRO_TEXT: &'static str =
        "SF Pro Text, -apple-system, BlinkMacSystemFont, system-ui, sans-serif";
    pub const SF_PRO_ICONS: &'static str = "SF Pro Icons, -apple-system, sans-serif";
    pub const REGULAR: &'static str =
        "UberMoveText, system-ui, \"Helvetica Neue\", Helvetica, Arial, sans-serif";
    pub const MEDIUM: &'static str = Self::REGULAR;
    pub const BOLD: &'static str = Self::REGULAR;
    pub const SYSTEM: &'static str =
        "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif";
}

/// Font size scale
pub struct FontSizes;

impl FontSizes {
    pub const XS: f32 = 12.0;
    pub const SM: f32 = 14.0;
    pub const BASE: f32 = 15.0;
    pub const MD: f32 = 16.0;
    pub const BODY: f32 = 17.0;
    pub const LG: f32 = 18.0;
    pub const H2: f32 = 19.0;
    pub const XL: f32 = 20.0;
    pub const H1: f32 = 21.0;
    pub const XXL: f32 = 24.0;
    pub const DISPLAY_MEDIUM: f32 = 32.0;
    pub const DISPLAY: f32 = 40.0;
    pub const X5L: f32 = 48.0;
    pub const GIANT: f32 = 540.0;
}

/// Line heights: multipliers for relative heights, points for fixed ones
pub struct LineHeights;

impl LineHeights {
    pub const TIGHT: f32 = 1.25;
    pub const NORMAL: f32 = 1.5;
    pub const RELAXED: f32 = 1.75;

    pub const DISPLAY: f32 = 44.0;
    pub const DISPLAY_MEDIUM: f32 = 36.0;
    pub const H1: f32 = 25.0;
    pub const H2: f32 = 23.0;
    pub const BODY_LARGE: f32 = 25.0;
    pub const BODY_MEDIUM: f32 = 21.0;
    pub const BODY_SMALL: f32 = 20.0;
    pub const CAPTION: f32 = 16.0;
    pub const LINK_TEXT: f32 = 20.0;
}

pub struct LetterSpacing;

impl LetterSpacing {
    pub const TIGHT: f32 = -0.374;
    pub const NORMAL: f32 = 0.0;
    pub const WIDE: f32 = 0.128;
    pub const H1: f32 = 0.231;
    pub const H2: f32 = 0.228;
    pub const BODY: f32 = -0.374;
    pub const BODY_SMALL: f32 = -0.224;
}

/// A complete text style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypographyStyle {
    pub font_family: &'static str,
    pub font_size: f32,
    pub line_height: f32,
    pub font_weight: FontWeight,
    pub letter_spacing: f32,
}

impl TypographyStyle {
    pub const fn new(
        font_family: &'static str,
        font_size: f32,
        line_height: f32,
        font_weight: FontWeight,
        letter_spacing: f32,
    ) -> Self {
        Self {
            font_family,
            font_size,
            line_height,
            font_weight,
            letter_spacing,
        }
    }

    pub fn to_style(&self) -> Style {
        Style::new()
            .font_family(self.font_family)
            .font_size(self.font_size)
            .line_height(self.line_height)
            .font_weight(self.font_weight)
            .letter_spacing(self.letter_spacing)
    }
}

/// Named text styles
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum TypographyVariant {
    Display,
    DisplayMedium,
    H1,
    H2,
    #[default]
    Body,
    BodyMedium,
    BodySmall,
    Caption,
    LinkText,
    AppBody,
    AppHeading,
    GiantOverlay,
    ScreenTitle,
    ScreenSubtitle,
    SectionHeading,
    SectionSubheading,
    CardTitle,
    CardSubtitle,
    CardBody,
    HeroTitle,
    HeroSubtitle,
    CtaPrimary,
    CtaSecondary,
    LinkDefault,
    LinkNav,
}

impl TypographyVariant {
    pub const ALL: [TypographyVariant; 25] = [
        TypographyVariant::Display,
        TypographyVariant::DisplayMedium,
        TypographyVariant::H1,
        TypographyVariant::H2,
        TypographyVariant::Body,
        TypographyVariant::BodyMedium,
        TypographyVariant::BodySmall,
        TypographyVariant::Caption,
        TypographyVariant::LinkText,
        TypographyVariant::AppBody,
        TypographyVariant::AppHeading,
        TypographyVariant::GiantOverlay,
        TypographyVariant::ScreenTitle,
        TypographyVariant::ScreenSubtitle,
        TypographyVariant::SectionHeading,
        TypographyVariant::SectionSubheading,
        TypographyVariant::CardTitle,
        TypographyVariant::CardSubtitle,
        TypographyVariant::CardBody,
        TypographyVariant::HeroTitle,
        TypographyVariant::HeroSubtitle,
        TypographyVariant::CtaPrimary,
        TypographyVariant::CtaSecondary,
        TypographyVariant::LinkDefault,
        TypographyVariant::LinkNav,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TypographyVariant::Display => "display",
            TypographyVariant::DisplayMedium => "displayMedium",
            TypographyVariant::H1 => "h1",
            TypographyVariant::H2 => "h2",
            TypographyVariant::Body => "body",
            TypographyVariant::BodyMedium => "bodyMedium",
            TypographyVariant::BodySmall => "bodySmall",
            TypographyVariant::Caption => "caption",
            TypographyVariant::LinkText => "linkText",
            TypographyVariant::AppBody => "appBody",
            TypographyVariant::AppHeading => "appHeading",
            TypographyVariant::GiantOverlay => "giantOverlay",
            TypographyVariant::ScreenTitle => "screen.title",
            TypographyVariant::ScreenSubtitle => "screen.subtitle",
            TypographyVariant::SectionHeading => "section.heading",
            TypographyVariant::SectionSubheading => "section.subheading",
            TypographyVariant::CardTitle => "card.title",
            TypographyVariant::CardSubtitle => "card.subtitle",
            TypographyVariant::CardBody => "card.body",
            TypographyVariant::HeroTitle => "hero.title",
            TypographyVariant::HeroSubtitle => "hero.subtitle",
            TypographyVariant::CtaPrimary => "cta.primary",
            TypographyVariant::CtaSecondary => "cta.secondary",
            TypographyVariant::LinkDefault => "link.default",
            TypographyVariant::LinkNav => "link.nav",
        }
    }

    pub fn from_name(name: &str) -> Option<TypographyVariant> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }

    /// The full style for this variant
    pub fn style(self) -> TypographyStyle {
        use TypographyVariant::*;
        match self {
            Display | ScreenTitle | HeroTitle => TypographyStyle::new(
                FontFamilies::SF_PRO_DISPLAY,
                FontSizes::DISPLAY,
                LineHeights::DISPLAY,
                FontWeight::W600,
                LetterSpacing::NORMAL,
            ),
            DisplayMedium | SectionHeading => TypographyStyle::new(
                FontFamilies::SF_PRO_DISPLAY,
                FontSizes::DISPLAY_MEDIUM,
                LineHeights::DISPLAY_MEDIUM,
                FontWeight::W600,
                LetterSpacing::WIDE,
            ),
            H1 | CardTitle => TypographyStyle::new(
                FontFamilies::SF_PRO_DISPLAY,
                FontSizes::H1,
                LineHeights::H1,
                FontWeight::W600,
                LetterSpacing::H1,
            ),
            H2 | SectionSubheading => TypographyStyle::new(
                FontFamilies::SF_PRO_DISPLAY,
                FontSizes::H2,
                LineHeights::H2,
                FontWeight::W600,
                LetterSpacing::H2,
            ),
            Body | ScreenSubtitle | CardBody | HeroSubtitle => TypographyStyle::new(
                FontFamilies::SF_PRO_TEXT,
                FontSizes::BODY,
                LineHeights::BODY_LARGE,
                FontWeight::W400,
                LetterSpacing::BODY,
            ),
            BodyMedium => TypographyStyle::new(
                FontFamilies::SF_PRO_TEXT,
                FontSizes::BODY,
                LineHeights::BODY_MEDIUM,
                FontWeight::W400,
                LetterSpacing::BODY,
            ),
            BodySmall | CardSubtitle | LinkNav => TypographyStyle::new(
                FontFamilies::SF_PRO_TEXT,
                FontSizes::SM,
                LineHeights::BODY_SMALL,
                FontWeight::W400,
                LetterSpacing::BODY_SMALL,
            ),
            Caption => TypographyStyle::new(
                FontFamilies::SF_PRO_TEXT,
                FontSizes::XS,
                LineHeights::CAPTION,
                FontWeight::W400,
                LetterSpacing::NORMAL,
            ),
            LinkText | LinkDefault => TypographyStyle::new(
                FontFamilies::SF_PRO_TEXT,
                FontSizes::SM,
                LineHeights::LINK_TEXT,
                FontWeight::W400,
                LetterSpacing::BODY_SMALL,
            ),
            AppBody => TypographyStyle::new(
                FontFamilies::REGULAR,
                FontSizes::BASE,
                FontSizes::BASE * LineHeights::NORMAL,
                FontWeight::W400,
                LetterSpacing::NORMAL,
            ),
            AppHeading => TypographyStyle::new(
                FontFamilies::MEDIUM,
                FontSizes::LG,
                FontSizes::LG * LineHeights::TIGHT,
                FontWeight::W600,
                LetterSpacing::NORMAL,
            ),
            GiantOverlay => TypographyStyle::new(
                FontFamilies::SF_PRO_DISPLAY,
                FontSizes::GIANT,
                594.0,
                FontWeight::W700,
                LetterSpacing::NORMAL,
            ),
            CtaPrimary => TypographyStyle::new(
                FontFamilies::SF_PRO_TEXT,
                FontSizes::MD,
                20.0,
                FontWeight::W600,
                LetterSpacing::NORMAL,
            ),
            CtaSecondary => TypographyStyle::new(
                FontFamilies::SF_PRO_TEXT,
                FontSizes::SM,
                18.0,
                FontWeight::W500,
                LetterSpacing::NORMAL,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_share_styles() {
        assert_eq!(TypographyVariant::ScreenTitle.style(), TypographyVariant::Display.style());
        assert_eq!(TypographyVariant::CardSubtitle.style(), TypographyVariant::BodySmall.style());
        assert_eq!(TypographyVariant::LinkDefault.style(), TypographyVariant::LinkText.style());
    }

    #[test]
    fn test_relative_line_heights() {
        assert_eq!(TypographyVariant::AppBody.style().line_height, 22.5);
        assert_eq!(TypographyVariant::AppHeading.style().line_height, 22.5);
    }

    #[test]
    fn test_names() {
        assert_eq!(TypographyVariant::from_name("card.title"), Some(TypographyVariant::CardTitle));
        assert_eq!(TypographyVariant::from_name("title"), None);
        assert_eq!(TypographyVariant::default(), TypographyVariant::Body);
    }
}
