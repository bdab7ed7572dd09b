//! The Text primitive

use lumen_core::style::{Style, StyleText, TextAlign};
use lumen_theme::themes::ColorTable;
use lumen_theme::tokens::TypographyVariant;
use serde::{Deserialize, Serialize};

/// Where truncated text is cut
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EllipsizeMode {
    Head,
    Middle,
    #[default]
    Tail,
    Clip,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextProps {
    pub variant: TypographyVariant,
    /// Color name from the active table or a literal color
    pub color: Option<StyleText>,
    pub align: Option<TextAlign>,
    pub number_of_lines: Option<u32>,
    pub ellipsize_mode: Option<EllipsizeMode>,
    /// Layered over the variant style
    pub style: Style,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedText {
    pub style: Style,
    pub number_of_lines: Option<u32>,
    pub ellipsize_mode: Option<EllipsizeMode>,
}

impl TextProps {
    pub fn new(variant: TypographyVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn color(mut self, color: impl Into<StyleText>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    /// Truncate after `lines` lines
    pub fn truncate(mut self, lines: u32, mode: EllipsizeMode) -> Self {
        self.number_of_lines = Some(lines);
        self.ellipsize_mode = Some(mode);
        self
    }

    pub fn resolve(&self, colors: &ColorTable) -> ResolvedText {
        let mut style = self.variant.style().to_style();
        if let Some(color) = self.color.as_deref() {
            style = style.color(colors.resolve_color(color).to_owned());
        }
        if let Some(align) = self.align {
            style = style.text_align(align);
        }

        ResolvedText {
            style: style.merge(&self.style),
            number_of_lines: self.number_of_lines,
            ellipsize_mode: self.ellipsize_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_theme::{DARK, LIGHT};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_to_body() {
        let resolved = TextProps::default().resolve(&LIGHT);
        assert_eq!(resolved.style, TypographyVariant::Body.style().to_style());
        assert_eq!(resolved.number_of_lines, None);
    }

    #[test]
    fn test_color_name_or_literal() {
        let named = TextProps::new(TypographyVariant::H1).color("text").resolve(&DARK);
        assert_eq!(named.style.color.as_deref(), Some("#FFFFFF"));

        let literal = TextProps::new(TypographyVariant::H1).color("#FF00AA").resolve(&DARK);
        assert_eq!(literal.style.color.as_deref(), Some("#FF00AA"));
    }

    #[test]
    fn test_raw_style_and_truncation() {
        let props = TextProps {
            style: Style::new().font_size(99.0),
            ..TextProps::new(TypographyVariant::Caption)
        }
        .align(TextAlign::Center)
        .truncate(2, EllipsizeMode::Middle);

        let resolved = props.resolve(&LIGHT);
        assert_eq!(resolved.style.font_size, Some(99.0));
        assert_eq!(resolved.style.text_align, Some(TextAlign::Center));
        assert_eq!(resolved.number_of_lines, Some(2));
        assert_eq!(resolved.ellipsize_mode, Some(EllipsizeMode::Middle));
    }
}
