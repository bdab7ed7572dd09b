//! Shadow tokens for theming
//!
//! Two families live here:
//!
//! - [`ShadowSize`]: the three provider shadows whose opacity depends on the
//!   active theme
//! - [`ShadowToken`]: the fixed elevation scale (`none` to `xl`), with
//!   [`SemanticShadow`] aliases and [`ComponentShadow`] one-offs on top

use crate::theme::ActiveTheme;
use lumen_core::style::{ShadowOffset, Style};

/// A native drop shadow plus its Android elevation and web equivalent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: &'static str,
    pub offset: ShadowOffset,
    pub opacity: f32,
    pub radius: f32,
    pub elevation: f32,
    pub box_shadow: &'static str,
}

impl Shadow {
    pub const fn new(
        color: &'static str,
        offset_y: f32,
        opacity: f32,
        radius: f32,
        elevation: f32,
        box_shadow: &'static str,
    ) -> Self {
        Self {
            color,
            offset: ShadowOffset::new(0.0, offset_y),
            opacity,
            radius,
            elevation,
            box_shadow,
        }
    }

    pub const fn none() -> Self {
        Self::new("transparent", 0.0, 0.0, 0.0, 0.0, "none")
    }

    /// Native shadow fields and elevation
    pub fn to_style(&self) -> Style {
        Style::new()
            .shadow_color(self.color)
            .shadow_offset(self.offset)
            .shadow_opacity(self.opacity)
            .shadow_radius(self.radius)
            .elevation(self.elevation)
    }

    /// CSS `boxShadow` only
    pub fn web_style(&self) -> Style {
        Style::new().box_shadow(self.box_shadow)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Elevation scale keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

/// Complete elevation scale
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTokens {
    pub none: Shadow,
    pub xs: Shadow,
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
    pub xl: Shadow,
}

impl ShadowTokens {
    pub const DEFAULT: Self = Self {
        none: Shadow::none(),
        xs: Shadow::new("#000", 1.0, 0.05, 2.0, 1.0, "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
        sm: Shadow::new("#000", 2.0, 0.1, 4.0, 2.0, "0 2px 8px rgba(0, 0, 0, 0.1)"),
        md: Shadow::new("#000", 4.0, 0.15, 8.0, 4.0, "0 4px 16px rgba(0, 0, 0, 0.15)"),
        lg: Shadow::new("#000", 6.0, 0.2, 12.0, 6.0, "0 6px 24px rgba(0, 0, 0, 0.2)"),
        xl: Shadow::new("#000", 8.0, 0.25, 16.0, 8.0, "0 8px 32px rgba(0, 0, 0, 0.25)"),
    };

    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::None => &self.none,
            ShadowToken::Xs => &self.xs,
            ShadowToken::Sm => &self.sm,
            ShadowToken::Md => &self.md,
            ShadowToken::Lg => &self.lg,
            ShadowToken::Xl => &self.xl,
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Shadows named by what they decorate
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SemanticShadow {
    Card,
    Button,
    Modal,
    Dropdown,
    Tooltip,
}

impl SemanticShadow {
    pub fn token(self) -> ShadowToken {
        match self {
            SemanticShadow::Card => ShadowToken::Md,
            SemanticShadow::Button => ShadowToken::Sm,
            SemanticShadow::Modal => ShadowToken::Xl,
            SemanticShadow::Dropdown => ShadowToken::Lg,
            SemanticShadow::Tooltip => ShadowToken::Sm,
        }
    }

    pub fn shadow(self) -> Shadow {
        *ShadowTokens::DEFAULT.get(self.token())
    }
}

/// Shadows tuned for individual components
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ComponentShadow {
    StoreCard,
    NavButton,
}

impl ComponentShadow {
    pub fn shadow(self) -> Shadow {
        match self {
            ComponentShadow::StoreCard => {
                Shadow::new("#000", 6.0, 0.04, 8.0, 4.0, "0 6px 16px -8px rgba(0, 0, 0, 0.04)")
            }
            ComponentShadow::NavButton => {
                Shadow::new("#000", 2.0, 0.1, 4.0, 4.0, "0 2px 8px rgba(0, 0, 0, 0.1)")
            }
        }
    }
}

/// The provider's three theme-aware shadow sizes
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowSize {
    Small,
    Medium,
    Large,
}

impl ShadowSize {
    /// Shadow for this size under the given theme
    ///
    /// Dark themes use a stronger opacity so the shadow stays visible.
    pub fn shadow(self, theme: ActiveTheme) -> Shadow {
        let dark = theme.is_dark();
        let (offset_y, radius, elevation, opacity) = match self {
            ShadowSize::Small => (1.0, 2.0, 2.0, if dark { 0.3 } else { 0.1 }),
            ShadowSize::Medium => (2.0, 4.0, 4.0, if dark { 0.4 } else { 0.15 }),
            ShadowSize::Large => (4.0, 8.0, 8.0, if dark { 0.5 } else { 0.2 }),
        };
        Shadow {
            color: "#000",
            offset: ShadowOffset::new(0.0, offset_y),
            opacity,
            radius,
            elevation,
            box_shadow: "none",
        }
    }

    /// Softer, wider variant of [`ShadowSize::shadow`]
    pub fn apple_shadow(self, theme: ActiveTheme) -> Shadow {
        let base = self.shadow(theme);
        Shadow {
            opacity: base.opacity * 0.8,
            radius: base.radius * 1.2,
            ..base
        }
    }

    /// Style carrying the native shadow fields and elevation
    pub fn style(self, theme: ActiveTheme) -> Style {
        self.shadow(theme).to_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_mapping() {
        assert_eq!(SemanticShadow::Card.token(), ShadowToken::Md);
        assert_eq!(SemanticShadow::Modal.shadow().elevation, 8.0);
        assert_eq!(SemanticShadow::Tooltip.shadow(), ShadowTokens::DEFAULT.sm);
    }

    #[test]
    fn test_provider_shadow_opacity_depends_on_theme() {
        assert_eq!(ShadowSize::Medium.shadow(ActiveTheme::Light).opacity, 0.15);
        assert_eq!(ShadowSize::Medium.shadow(ActiveTheme::Dark).opacity, 0.4);
        assert_eq!(ShadowSize::Large.shadow(ActiveTheme::Dark).offset.height, 4.0);
    }

    #[test]
    fn test_apple_shadow_is_softer() {
        let apple = ShadowSize::Large.apple_shadow(ActiveTheme::Light);
        assert!((apple.opacity - 0.16).abs() < 1e-6);
        assert!((apple.radius - 9.6).abs() < 1e-5);
        assert_eq!(apple.elevation, 8.0);
    }

    #[test]
    fn test_to_style_omits_box_shadow() {
        let style = ShadowTokens::DEFAULT.md.to_style();
        assert_eq!(style.elevation, Some(4.0));
        assert_eq!(style.shadow_offset, Some(ShadowOffset::new(0.0, 4.0)));
        assert_eq!(style.box_shadow, None);
    }
}
