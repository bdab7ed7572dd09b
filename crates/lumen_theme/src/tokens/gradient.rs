//! Gradient tokens
//!
//! [`Gradient`] keys resolve to color-stop arrays for native gradient views;
//! [`CssGradient`] keys resolve to ready-made CSS strings for web targets.

/// Keys of the gradient color arrays
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Gradient {
    Primary,
    Secondary,
    Adp,
    Warm,
    Sunset,
    Ocean,
    Sky,
    Purple,
    Pink,
    Blue,
    Green,
    Orange,
    ImageShadowOverlay,
    HeroOverlay,
    Glass,
    GlassDark,
}

impl Gradient {
    pub const ALL: [Gradient; 16] = [
        Gradient::Primary,
        Gradient::Secondary,
        Gradient::Adp,
        Gradient::Warm,
        Gradient::Sunset,
        Gradient::Ocean,
        Gradient::Sky,
        Gradient::Purple,
        Gradient::Pink,
        Gradient::Blue,
        Gradient::Green,
        Gradient::Orange,
        Gradient::ImageShadowOverlay,
        Gradient::HeroOverlay,
        Gradient::Glass,
        Gradient::GlassDark,
    ];

    /// Color stops, first to last
    pub fn colors(self) -> &'static [&'static str] {
        match self {
            Gradient::Primary | Gradient::Ocean | Gradient::Purple => &["#667eea", "#764ba2"],
            Gradient::Secondary | Gradient::Pink => &["#f093fb", "#f5576c"],
            Gradient::Adp => &["#d0768c", "#bf46a5", "#7029b2", "#341d8c"],
            Gradient::Warm | Gradient::Orange => &["#fa709a", "#fee140"],
            Gradient::Sunset => &["#ff6b6b", "#feca57"],
            Gradient::Sky => &["#89f7fe", "#66a6ff"],
            Gradient::Blue => &["#4facfe", "#00f2fe"],
            Gradient::Green => &["#43e97b", "#38f9d7"],
            Gradient::ImageShadowOverlay => &["rgba(0, 0, 0, 0.65)", "rgba(0, 0, 0, 0)"],
            Gradient::HeroOverlay => &["rgba(0, 0, 0, 0.4)", "rgba(0, 0, 0, 0.2)"],
            Gradient::Glass => &["rgba(255, 255, 255, 0.1)", "rgba(255, 255, 255, 0.05)"],
            Gradient::GlassDark => &["rgba(0, 0, 0, 0.1)", "rgba(0, 0, 0, 0.05)"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Gradient::Primary => "primary",
            Gradient::Secondary => "secondary",
            Gradient::Adp => "adp",
            Gradient::Warm => "warm",
            Gradient::Sunset => "sunset",
            Gradient::Ocean => "ocean",
            Gradient::Sky => "sky",
            Gradient::Purple => "purple",
            Gradient::Pink => "pink",
            Gradient::Blue => "blue",
            Gradient::Green => "green",
            Gradient::Orange => "orange",
            Gradient::ImageShadowOverlay => "imageShadowOverlay",
            Gradient::HeroOverlay => "heroOverlay",
            Gradient::Glass => "glass",
            Gradient::GlassDark => "glassDark",
        }
    }

    pub fn from_name(name: &str) -> Option<Gradient> {
        Self::ALL.iter().copied().find(|g| g.name() == name)
    }

    /// `linear-gradient` CSS with evenly spaced stops
    pub fn directional(self, direction: &str) -> String {
        directional_gradient(self.colors(), direction)
    }
}

/// Build a `linear-gradient` string with stops spread evenly from 0% to 100%
///
/// A single color is placed at 0%.
pub fn directional_gradient(colors: &[&str], direction: &str) -> String {
    let last = colors.len().saturating_sub(1).max(1) as f32;
    let stops = colors
        .iter()
        .enumerate()
        .map(|(i, color)| format!("{color} {}%", (i as f32 / last * 100.0).round()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("linear-gradient({direction}, {stops})")
}

/// Default direction for [`directional_gradient`]
pub const DEFAULT_GRADIENT_DIRECTION: &str = "135deg";

/// Keys of the CSS gradient strings
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum CssGradient {
    Primary,
    Secondary,
    Adp,
    SscCard,
    ImageShadowOverlay,
    HeroOverlay,
    Warm,
    Sunset,
    Ocean,
    Sky,
    Purple,
    Pink,
    Blue,
    Green,
    Orange,
    Glass,
    GlassDark,
}

impl CssGradient {
    pub const ALL: [CssGradient; 17] = [
        CssGradient::Primary,
        CssGradient::Secondary,
        CssGradient::Adp,
        CssGradient::SscCard,
        CssGradient::ImageShadowOverlay,
        CssGradient::HeroOverlay,
        CssGradient::Warm,
        CssGradient::Sunset,
        CssGradient::Ocean,
        CssGradient::Sky,
        CssGradient::Purple,
        CssGradient::Pink,
        CssGradient::Blue,
        CssGradient::Green,
        CssGradient::Orange,
        CssGradient::Glass,
        CssGradient::GlassDark,
    ];

    pub fn css(self) -> &'static str {
        match self {
            CssGradient::Primary | CssGradient::Ocean | CssGradient::Purple => {
                "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"
            }
            CssGradient::Secondary | CssGradient::Pink => {
                "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)"
            }
            CssGradient::Adp => {
                "linear-gradient(170deg, #d0768c 0%, #bf46a5 10%, #7029b2 50%, #341d8c 100%)"
            }
            CssGradient::SscCard => {
                "radial-gradient(circle at 50% -10%, #46e0ff 0%, #211d60 43%, rgba(11, 8, 33, 0.45) 80%, transparent 85%), linear-gradient(to bottom, transparent 90%, #000 100%)"
            }
            CssGradient::ImageShadowOverlay => {
                "linear-gradient(to top, rgba(0, 0, 0, 0.65) 0%, rgba(0, 0, 0, 0) 100%)"
            }
            CssGradient::HeroOverlay => {
                "linear-gradient(to bottom, rgba(0, 0, 0, 0.4) 0%, rgba(0, 0, 0, 0.2) 100%)"
            }
            CssGradient::Warm | CssGradient::Orange => {
                "linear-gradient(135deg, #fa709a 0%, #fee140 100%)"
            }
            CssGradient::Sunset => "linear-gradient(135deg, #ff6b6b 0%, #feca57 100%)",
            CssGradient::Sky => "linear-gradient(135deg, #89f7fe 0%, #66a6ff 100%)",
            CssGradient::Blue => "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
            CssGradient::Green => "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
            CssGradient::Glass => {
                "linear-gradient(135deg, rgba(255, 255, 255, 0.1) 0%, rgba(255, 255, 255, 0.05) 100%)"
            }
            CssGradient::GlassDark => {
                "linear-gradient(135deg, rgba(0, 0, 0, 0.1) 0%, rgba(0, 0, 0, 0.05) 100%)"
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CssGradient::Primary => "primary",
            CssGradient::Secondary => "secondary",
            CssGradient::Adp => "adp",
            CssGradient::SscCard => "sscCard",
            CssGradient::ImageShadowOverlay => "imageShadowOverlay",
            CssGradient::HeroOverlay => "heroOverlay",
            CssGradient::Warm => "warm",
            CssGradient::Sunset => "sunset",
            CssGradient::Ocean => "ocean",
            CssGradient::Sky => "sky",
            CssGradient::Purple => "purple",
            CssGradient::Pink => "pink",
            CssGradient::Blue => "blue",
            CssGradient::Green => "green",
            CssGradient::Orange => "orange",
            CssGradient::Glass => "glass",
            CssGradient::GlassDark => "glassDark",
        }
    }

    pub fn from_name(name: &str) -> Option<CssGradient> {
        Self::ALL.iter().copied().find(|g| g.name() == name)
    }
}

/// Gradients named by where they are used
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SemanticGradient {
    Hero,
    Card,
    Overlay,
    HeroOverlay,
    Accent,
    Cta,
}

impl SemanticGradient {
    pub fn gradient(self) -> Gradient {
        match self {
            SemanticGradient::Hero => Gradient::Ocean,
            SemanticGradient::Card => Gradient::Glass,
            SemanticGradient::Overlay => Gradient::ImageShadowOverlay,
            SemanticGradient::HeroOverlay => Gradient::HeroOverlay,
            SemanticGradient::Accent => Gradient::Adp,
            SemanticGradient::Cta => Gradient::Primary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_gradient_spreads_stops() {
        assert_eq!(
            Gradient::Adp.directional(DEFAULT_GRADIENT_DIRECTION),
            "linear-gradient(135deg, #d0768c 0%, #bf46a5 33%, #7029b2 67%, #341d8c 100%)"
        );
        assert_eq!(
            Gradient::Sky.directional("to right"),
            "linear-gradient(to right, #89f7fe 0%, #66a6ff 100%)"
        );
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(Gradient::from_name("glassDark"), Some(Gradient::GlassDark));
        assert_eq!(Gradient::from_name("sscCard"), None);
        assert_eq!(CssGradient::from_name("sscCard"), Some(CssGradient::SscCard));
        assert_eq!(Gradient::from_name("rainbow"), None);
    }

    #[test]
    fn test_css_matches_arrays_for_two_stop_gradients() {
        assert_eq!(
            CssGradient::Blue.css(),
            Gradient::Blue.directional(DEFAULT_GRADIENT_DIRECTION)
        );
        assert_eq!(SemanticGradient::Accent.gradient().colors().len(), 4);
    }
}
