//! Spacing tokens for theming
//!
//! A 4px-based scale keyed by step number, semantic aliases over it, and the
//! [`Space`] value type used by layout props to accept either a scale step or
//! a literal length.

/// Steps of the spacing scale
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum SpacingToken {
    Space0,
    Space1,
    Space2,
    Space3,
    Space4,
    Space5,
    Space6,
    Space7,
    Space8,
    Space9,
    Space10,
    Space11,
    Space12,
    Space14,
    Space16,
    Space20,
    Space24,
    Space28,
    Space32,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 19] = [
        SpacingToken::Space0,
        SpacingToken::Space1,
        SpacingToken::Space2,
        SpacingToken::Space3,
        SpacingToken::Space4,
        SpacingToken::Space5,
        SpacingToken::Space6,
        SpacingToken::Space7,
        SpacingToken::Space8,
        SpacingToken::Space9,
        SpacingToken::Space10,
        SpacingToken::Space11,
        SpacingToken::Space12,
        SpacingToken::Space14,
        SpacingToken::Space16,
        SpacingToken::Space20,
        SpacingToken::Space24,
        SpacingToken::Space28,
        SpacingToken::Space32,
    ];

    /// The scale key (`Space14` is key 14)
    pub fn key(self) -> u32 {
        match self {
            SpacingToken::Space0 => 0,
            SpacingToken::Space1 => 1,
            SpacingToken::Space2 => 2,
            SpacingToken::Space3 => 3,
            SpacingToken::Space4 => 4,
            SpacingToken::Space5 => 5,
            SpacingToken::Space6 => 6,
            SpacingToken::Space7 => 7,
            SpacingToken::Space8 => 8,
            SpacingToken::Space9 => 9,
            SpacingToken::Space10 => 10,
            SpacingToken::Space11 => 11,
            SpacingToken::Space12 => 12,
            SpacingToken::Space14 => 14,
            SpacingToken::Space16 => 16,
            SpacingToken::Space20 => 20,
            SpacingToken::Space24 => 24,
            SpacingToken::Space28 => 28,
            SpacingToken::Space32 => 32,
        }
    }

    /// Find the token for a scale key; keys missing from the scale return `None`
    pub fn from_key(key: u32) -> Option<SpacingToken> {
        Self::ALL.iter().copied().find(|token| token.key() == key)
    }

    /// Value in points
    pub fn value(self) -> f32 {
        self.key() as f32 * 4.0
    }
}

/// Semantic spacing aliases
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SemanticSpacing {
    pub padding_xs: f32,
    pub padding_sm: f32,
    pub padding_md: f32,
    pub padding_lg: f32,
    pub padding_xl: f32,
    pub padding_2xl: f32,

    pub margin_xs: f32,
    pub margin_sm: f32,
    pub margin_md: f32,
    pub margin_lg: f32,
    pub margin_xl: f32,
    pub margin_2xl: f32,

    pub gap_xs: f32,
    pub gap_sm: f32,
    pub gap_md: f32,
    pub gap_lg: f32,
    pub gap_xl: f32,

    /// Horizontal container padding on small viewports
    pub container_padding_sm: f32,
    /// Horizontal container padding on medium viewports
    pub container_padding_md: f32,
    /// Large viewports rely on the container max width instead of padding
    pub container_padding_lg: f32,
}

impl SemanticSpacing {
    pub const DEFAULT: Self = Self {
        padding_xs: 4.0,
        padding_sm: 8.0,
        padding_md: 16.0,
        padding_lg: 24.0,
        padding_xl: 32.0,
        padding_2xl: 64.0,

        margin_xs: 4.0,
        margin_sm: 8.0,
        margin_md: 16.0,
        margin_lg: 24.0,
        margin_xl: 32.0,
        margin_2xl: 64.0,

        gap_xs: 4.0,
        gap_sm: 8.0,
        gap_md: 16.0,
        gap_lg: 24.0,
        gap_xl: 32.0,

        container_padding_sm: 16.0,
        container_padding_md: 22.0,
        container_padding_lg: 0.0,
    };
}

impl Default for SemanticSpacing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A spacing prop value: a step of the scale or a literal length in points
///
/// Integers convert through the scale when they name a step and fall through
/// as literal points otherwise, so `Space::from(4)` is 16pt while
/// `Space::from(13)` is 13pt. Floats are always literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Space {
    Token(SpacingToken),
    Points(f32),
}

impl Space {
    /// Resolve to points
    pub fn resolve(self) -> f32 {
        match self {
            Space::Token(token) => token.value(),
            Space::Points(points) => points,
        }
    }
}

impl From<SpacingToken> for Space {
    fn from(token: SpacingToken) -> Self {
        Space::Token(token)
    }
}

impl From<f32> for Space {
    fn from(points: f32) -> Self {
        Space::Points(points)
    }
}

impl From<i32> for Space {
    fn from(value: i32) -> Self {
        u32::try_from(value)
            .ok()
            .and_then(SpacingToken::from_key)
            .map(Space::Token)
            .unwrap_or(Space::Points(value as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_values() {
        assert_eq!(SpacingToken::Space0.value(), 0.0);
        assert_eq!(SpacingToken::Space4.value(), 16.0);
        assert_eq!(SpacingToken::Space11.value(), 44.0);
        assert_eq!(SpacingToken::Space32.value(), 128.0);
    }

    #[test]
    fn test_integer_keys_resolve_through_scale() {
        assert_eq!(Space::from(4).resolve(), 16.0);
        assert_eq!(Space::from(14).resolve(), 56.0);
        // 13 is not a step, so it is taken literally
        assert_eq!(Space::from(13).resolve(), 13.0);
        assert_eq!(Space::from(-22).resolve(), -22.0);
        assert_eq!(Space::from(4.0).resolve(), 4.0);
    }

    #[test]
    fn test_semantic_aliases_follow_scale() {
        let semantic = SemanticSpacing::DEFAULT;
        assert_eq!(semantic.padding_md, SpacingToken::Space4.value());
        assert_eq!(semantic.padding_2xl, SpacingToken::Space16.value());
        assert_eq!(semantic.gap_xl, SpacingToken::Space8.value());
    }
}
