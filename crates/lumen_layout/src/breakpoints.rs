//! Breakpoint classification
//!
//! Viewport widths fall into three ordered [`SizeCategory`] buckets at fixed
//! boundaries: `<= 734` small, `735..=1068` medium, `>= 1069` large.
//! Orientation is landscape only when the width strictly exceeds the height.

use lumen_core::sanitize_dimension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed category boundaries in points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppleBreakpoints {
    /// Largest small width
    pub small: f32,
    /// Largest medium width
    pub medium: f32,
    /// Smallest large width
    pub large: f32,
}

pub const APPLE_BREAKPOINTS: AppleBreakpoints = AppleBreakpoints {
    small: 734.0,
    medium: 1068.0,
    large: 1069.0,
};

/// Viewport size bucket, ordered by width
#[derive(
    Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    #[default]
    Small,
    Medium,
    Large,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 3] = [SizeCategory::Small, SizeCategory::Medium, SizeCategory::Large];

    /// Category for a width
    pub fn for_width(width: f32) -> SizeCategory {
        let width = sanitize_dimension(width);
        match width {
            w if w >= APPLE_BREAKPOINTS.large => SizeCategory::Large,
            // Fractional widths just above 734 stay small
            w if w >= APPLE_BREAKPOINTS.small + 1.0 => SizeCategory::Medium,
            _ => SizeCategory::Small,
        }
    }

    /// Short key used by responsive props (`sm`, `md`, `lg`)
    pub fn key(self) -> &'static str {
        match self {
            SizeCategory::Small => "sm",
            SizeCategory::Medium => "md",
            SizeCategory::Large => "lg",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn for_size(width: f32, height: f32) -> Orientation {
        if sanitize_dimension(width) > sanitize_dimension(height) {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Category and orientation of a viewport
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: SizeCategory,
    pub orientation: Orientation,
}

/// Classify a viewport
///
/// Negative and NaN dimensions are treated as zero.
pub fn classify(width: f32, height: f32) -> Classification {
    Classification {
        category: SizeCategory::for_width(width),
        orientation: Orientation::for_size(width, height),
    }
}

/// Coarse device class on generic 768/1024 boundaries
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    #[default]
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceType {
    pub fn for_width(width: f32) -> DeviceType {
        match sanitize_dimension(width) {
            w if w >= 1024.0 => DeviceType::Desktop,
            w if w >= 768.0 => DeviceType::Tablet,
            _ => DeviceType::Mobile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_idempotent() {
        let sizes = [
            (0.0, 0.0),
            (320.0, 568.0),
            (734.0, 734.0),
            (734.5, 400.0),
            (735.0, 1000.0),
            (1068.0, 1068.0),
            (1069.0, 800.0),
            (2560.0, 1440.0),
        ];
        for (width, height) in sizes {
            assert_eq!(classify(width, height), classify(width, height), "{width}x{height}");
        }
        assert_eq!(classify(734.0, 734.0).orientation, Orientation::Portrait);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(classify(0.0, 0.0).category, SizeCategory::Small);
        assert_eq!(classify(734.0, 900.0).category, SizeCategory::Small);
        assert_eq!(classify(734.5, 900.0).category, SizeCategory::Small);
        assert_eq!(classify(735.0, 900.0).category, SizeCategory::Medium);
        assert_eq!(classify(1068.0, 900.0).category, SizeCategory::Medium);
        assert_eq!(classify(1068.5, 900.0).category, SizeCategory::Medium);
        assert_eq!(classify(1069.0, 900.0).category, SizeCategory::Large);
        assert_eq!(classify(4000.0, 900.0).category, SizeCategory::Large);
    }

    #[test]
    fn test_categories_are_monotonic() {
        let mut previous = SizeCategory::Small;
        for width in (0..2000).map(|w| w as f32) {
            let category = SizeCategory::for_width(width);
            assert!(category >= previous, "regressed at {width}");
            previous = category;
        }
    }

    #[test]
    fn test_orientation() {
        assert_eq!(classify(800.0, 600.0).orientation, Orientation::Landscape);
        assert_eq!(classify(600.0, 800.0).orientation, Orientation::Portrait);
        assert_eq!(classify(700.0, 700.0).orientation, Orientation::Portrait);
    }

    #[test]
    fn test_invalid_input_is_clamped() {
        assert_eq!(
            classify(f32::NAN, -5.0),
            Classification {
                category: SizeCategory::Small,
                orientation: Orientation::Portrait,
            }
        );
    }

    #[test]
    fn test_device_type() {
        assert_eq!(DeviceType::for_width(767.0), DeviceType::Mobile);
        assert_eq!(DeviceType::for_width(768.0), DeviceType::Tablet);
        assert_eq!(DeviceType::for_width(1023.0), DeviceType::Tablet);
        assert_eq!(DeviceType::for_width(1024.0), DeviceType::Desktop);
    }
}
