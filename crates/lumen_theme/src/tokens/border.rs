//! Border radius and border width tokens

/// Named border radii
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
    Full,
    StoreCard,
    SearchBar,
    AppleInput,
    AppleMessage,
    NavButton,
    Button,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 15] = [
        RadiusToken::None,
        RadiusToken::Xs,
        RadiusToken::Sm,
        RadiusToken::Md,
        RadiusToken::Lg,
        RadiusToken::Xl,
        RadiusToken::Xxl,
        RadiusToken::Xxxl,
        RadiusToken::Full,
        RadiusToken::StoreCard,
        RadiusToken::SearchBar,
        RadiusToken::AppleInput,
        RadiusToken::AppleMessage,
        RadiusToken::NavButton,
        RadiusToken::Button,
    ];

    pub fn value(self) -> f32 {
        match self {
            RadiusToken::None => 0.0,
            RadiusToken::Xs => 4.0,
            RadiusToken::Sm => 8.0,
            RadiusToken::Md => 12.0,
            RadiusToken::Lg => 18.0,
            RadiusToken::Xl => 24.0,
            RadiusToken::Xxl => 32.0,
            RadiusToken::Xxxl => 40.0,
            RadiusToken::Full => 9999.0,
            RadiusToken::StoreCard => 18.0,
            RadiusToken::SearchBar => 10.0,
            RadiusToken::AppleInput => 33.0,
            RadiusToken::AppleMessage => 8.0,
            RadiusToken::NavButton => 22.0,
            RadiusToken::Button => 24.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RadiusToken::None => "none",
            RadiusToken::Xs => "xs",
            RadiusToken::Sm => "sm",
            RadiusToken::Md => "md",
            RadiusToken::Lg => "lg",
            RadiusToken::Xl => "xl",
            RadiusToken::Xxl => "2xl",
            RadiusToken::Xxxl => "3xl",
            RadiusToken::Full => "full",
            RadiusToken::StoreCard => "storeCard",
            RadiusToken::SearchBar => "searchBar",
            RadiusToken::AppleInput => "appleInput",
            RadiusToken::AppleMessage => "appleMessage",
            RadiusToken::NavButton => "navButton",
            RadiusToken::Button => "button",
        }
    }

    pub fn from_name(name: &str) -> Option<RadiusToken> {
        Self::ALL.iter().copied().find(|token| token.name() == name)
    }
}

/// Named border widths
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum BorderWidthToken {
    None,
    Hairline,
    Thin,
    Medium,
    Thick,
}

impl BorderWidthToken {
    pub const ALL: [BorderWidthToken; 5] = [
        BorderWidthToken::None,
        BorderWidthToken::Hairline,
        BorderWidthToken::Thin,
        BorderWidthToken::Medium,
        BorderWidthToken::Thick,
    ];

    pub fn value(self) -> f32 {
        match self {
            BorderWidthToken::None => 0.0,
            BorderWidthToken::Hairline => 1.0,
            BorderWidthToken::Thin => 2.0,
            BorderWidthToken::Medium => 4.0,
            BorderWidthToken::Thick => 6.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BorderWidthToken::None => "none",
            BorderWidthToken::Hairline => "hairline",
            BorderWidthToken::Thin => "thin",
            BorderWidthToken::Medium => "medium",
            BorderWidthToken::Thick => "thick",
        }
    }

    pub fn from_name(name: &str) -> Option<BorderWidthToken> {
        Self::ALL.iter().copied().find(|token| token.name() == name)
    }
}

/// A radius prop value: a named radius or literal points
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Radius {
    Token(RadiusToken),
    Points(f32),
}

impl Radius {
    pub fn resolve(self) -> f32 {
        match self {
            Radius::Token(token) => token.value(),
            Radius::Points(points) => points,
        }
    }
}

impl From<RadiusToken> for Radius {
    fn from(token: RadiusToken) -> Self {
        Radius::Token(token)
    }
}

impl From<f32> for Radius {
    fn from(points: f32) -> Self {
        Radius::Points(points)
    }
}

/// A border width prop value: a named width or literal points
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderWidth {
    Token(BorderWidthToken),
    Points(f32),
}

impl BorderWidth {
    pub fn resolve(self) -> f32 {
        match self {
            BorderWidth::Token(token) => token.value(),
            BorderWidth::Points(points) => points,
        }
    }
}

impl From<BorderWidthToken> for BorderWidth {
    fn from(token: BorderWidthToken) -> Self {
        BorderWidth::Token(token)
    }
}

impl From<f32> for BorderWidth {
    fn from(points: f32) -> Self {
        BorderWidth::Points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_names() {
        assert_eq!(RadiusToken::from_name("2xl"), Some(RadiusToken::Xxl));
        assert_eq!(RadiusToken::from_name("appleInput").map(|t| t.value()), Some(33.0));
        assert_eq!(RadiusToken::from_name("huge"), None);
        assert_eq!(Radius::from(RadiusToken::Full).resolve(), 9999.0);
        assert_eq!(Radius::from(7.0).resolve(), 7.0);
    }

    #[test]
    fn test_border_widths() {
        assert_eq!(BorderWidth::from(BorderWidthToken::Hairline).resolve(), 1.0);
        assert_eq!(BorderWidthToken::from_name("thick").map(|t| t.value()), Some(6.0));
        assert_eq!(BorderWidth::from(3.0).resolve(), 3.0);
    }
}
