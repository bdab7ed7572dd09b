//! Per-category value selection

use crate::breakpoints::SizeCategory;
use serde::{Deserialize, Serialize};

/// A value with optional per-category overrides and a required fallback
///
/// ```rust
/// use lumen_layout::{ResponsiveValue, SizeCategory};
///
/// let columns = ResponsiveValue::new(1).md(2).lg(4);
/// assert_eq!(*columns.resolve(SizeCategory::Small), 1);
/// assert_eq!(*columns.resolve(SizeCategory::Large), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveValue<T> {
    pub default: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<T>,
}

impl<T> ResponsiveValue<T> {
    pub fn new(default: T) -> Self {
        Self {
            default,
            sm: None,
            md: None,
            lg: None,
        }
    }

    pub fn sm(mut self, value: T) -> Self {
        self.sm = Some(value);
        self
    }

    pub fn md(mut self, value: T) -> Self {
        self.md = Some(value);
        self
    }

    pub fn lg(mut self, value: T) -> Self {
        self.lg = Some(value);
        self
    }

    /// Override for a category, if one is set
    pub fn get(&self, category: SizeCategory) -> Option<&T> {
        match category {
            SizeCategory::Small => self.sm.as_ref(),
            SizeCategory::Medium => self.md.as_ref(),
            SizeCategory::Large => self.lg.as_ref(),
        }
    }

    /// The active category's value, or the default
    pub fn resolve(&self, category: SizeCategory) -> &T {
        self.get(category).unwrap_or(&self.default)
    }
}

/// Resolve a responsive value for a category
pub fn select<T: Clone>(category: SizeCategory, values: &ResponsiveValue<T>) -> T {
    values.resolve(category).clone()
}

/// Classify `width` first, then resolve
pub fn select_for_width<T: Clone>(width: f32, values: &ResponsiveValue<T>) -> T {
    select(SizeCategory::for_width(width), values)
}

/// Exactly one value per category
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByCategory<T> {
    pub small: T,
    pub medium: T,
    pub large: T,
}

impl<T> ByCategory<T> {
    pub const fn new(small: T, medium: T, large: T) -> Self {
        Self {
            small,
            medium,
            large,
        }
    }

    pub fn get(&self, category: SizeCategory) -> &T {
        match category {
            SizeCategory::Small => &self.small,
            SizeCategory::Medium => &self.medium,
            SizeCategory::Large => &self.large,
        }
    }
}

/// Pick from a complete per-category table by raw width
///
/// For call sites that do not hold a tracker, such as static style setup.
pub fn responsive<T: Clone>(width: f32, values: &ByCategory<T>) -> T {
    values.get(SizeCategory::for_width(width)).clone()
}
