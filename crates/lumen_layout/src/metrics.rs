//! Scale and width calculations
//!
//! All results are rounded half-up to whole points.

use crate::breakpoints::{Classification, Orientation, SizeCategory};
use crate::responsive::ByCategory;
use lumen_theme::tokens::{SemanticSpacing, SpacingToken};
use serde::{Deserialize, Serialize};

/// Landscape viewports shrink width ratios by this factor
pub const LANDSCAPE_WIDTH_FACTOR: f32 = 0.8;

/// Maximum content width per category
pub const CONTAINER_WIDTHS: ByCategory<f32> = ByCategory::new(335.0, 692.0, 980.0);

/// Round half-up, matching how style values are rounded everywhere else
pub(crate) fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Multiplier applied to a base value in each category
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleMultipliers {
    #[serde(default = "default_small")]
    pub small: f32,
    #[serde(default = "default_medium")]
    pub medium: f32,
    #[serde(default = "default_large")]
    pub large: f32,
}

fn default_small() -> f32 {
    1.0
}

fn default_medium() -> f32 {
    1.15
}

fn default_large() -> f32 {
    1.3
}

impl ScaleMultipliers {
    pub const DEFAULT: Self = Self {
        small: 1.0,
        medium: 1.15,
        large: 1.3,
    };

    pub fn get(&self, category: SizeCategory) -> f32 {
        match category {
            SizeCategory::Small => self.small,
            SizeCategory::Medium => self.medium,
            SizeCategory::Large => self.large,
        }
    }
}

impl Default for ScaleMultipliers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scale `base` by the category's multiplier and round
pub fn scale(category: SizeCategory, base: f32, multipliers: &ScaleMultipliers) -> f32 {
    round_half_up(base * multipliers.get(category))
}

/// Fractions of the viewport width, per category
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WidthRatios {
    pub sm: Option<f32>,
    pub md: Option<f32>,
    pub lg: Option<f32>,
}

impl WidthRatios {
    pub const DEFAULT_SM: f32 = 0.9;
    pub const DEFAULT_MD: f32 = 0.6;
    pub const DEFAULT_LG: f32 = 0.4;

    pub fn new(sm: f32, md: f32, lg: f32) -> Self {
        Self {
            sm: Some(sm),
            md: Some(md),
            lg: Some(lg),
        }
    }

    /// Ratio used for a category
    ///
    /// Starts from `sm` (or its default). A `lg` or `md` ratio replaces it only
    /// when that exact category is active; there is no fallback between `lg`
    /// and `md`, so a medium viewport with only `lg` set uses the `sm` ratio.
    pub fn ratio(&self, category: SizeCategory) -> f32 {
        let base = self.sm.unwrap_or(Self::DEFAULT_SM);
        match (category, self.lg, self.md) {
            (SizeCategory::Large, Some(lg), _) => lg,
            (SizeCategory::Medium, _, Some(md)) => md,
            _ => base,
        }
    }
}

/// Width as a fraction of the viewport
///
/// The ratio comes from [`WidthRatios::ratio`] and is reduced by
/// [`LANDSCAPE_WIDTH_FACTOR`] in landscape.
pub fn get_width(classification: Classification, width: f32, ratios: &WidthRatios) -> f32 {
    let mut ratio = ratios.ratio(classification.category);
    if classification.orientation == Orientation::Landscape {
        ratio *= LANDSCAPE_WIDTH_FACTOR;
    }
    round_half_up(width * ratio)
}

/// Content width for the category, leaving the category's side padding
pub fn container_width(category: SizeCategory, width: f32) -> f32 {
    match category {
        SizeCategory::Small => (width - 32.0).min(CONTAINER_WIDTHS.small),
        SizeCategory::Medium => (width - 44.0).min(CONTAINER_WIDTHS.medium),
        SizeCategory::Large => width.min(CONTAINER_WIDTHS.large),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Padding {
    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

pub const RESPONSIVE_PADDING: ByCategory<Padding> = ByCategory::new(
    Padding::new(16.0, 22.0),
    Padding::new(22.0, 8.0),
    Padding::new(0.0, 8.0),
);

pub fn responsive_padding(category: SizeCategory) -> Padding {
    *RESPONSIVE_PADDING.get(category)
}

/// Horizontal container padding from the semantic spacing scale
pub fn container_padding_horizontal(category: SizeCategory) -> f32 {
    let spacing = SemanticSpacing::DEFAULT;
    match category {
        SizeCategory::Small => spacing.container_padding_sm,
        SizeCategory::Medium => spacing.container_padding_md,
        SizeCategory::Large => spacing.container_padding_lg,
    }
}

/// Space above a page section
pub fn section_margin_top(category: SizeCategory) -> f32 {
    match category {
        SizeCategory::Small => SpacingToken::Space9.value(),
        SizeCategory::Medium | SizeCategory::Large => SpacingToken::Space11.value(),
    }
}
