//! Lumen Layout
//!
//! Responsive layout on top of the lumen theme.
//!
//! # Overview
//!
//! - **Classification**: [`classify`] buckets a viewport into a
//!   [`SizeCategory`] and [`Orientation`]
//! - **Responsive values**: [`ResponsiveValue`] and [`ByCategory`] pick a
//!   value for the active category
//! - **Metrics**: scaling, width ratios, container widths and padding
//! - **Tracking**: [`BreakpointTracker`] follows a viewport signal and keeps
//!   a [`Breakpoints`] snapshot current
//! - **Primitives**: [`BoxProps`] (flexbox with simulated grid columns) and
//!   [`TextProps`] resolve into [`Style`](lumen_core::Style)s
//!
//! # Quick Start
//!
//! ```rust
//! use lumen_core::{Viewport, ViewportSignal};
//! use lumen_layout::{BreakpointTracker, ResponsiveValue, SizeCategory};
//!
//! let viewport = ViewportSignal::new(Viewport::new(390.0, 844.0));
//! let tracker = BreakpointTracker::new(&viewport);
//! assert_eq!(tracker.breakpoints().category, SizeCategory::Small);
//!
//! viewport.set(Viewport::new(1280.0, 800.0));
//! let bp = tracker.breakpoints();
//! assert!(bp.is_large() && bp.is_landscape());
//! assert_eq!(bp.select(&ResponsiveValue::new(1).lg(3)), 3);
//! ```

pub mod breakpoints;
pub mod config;
pub mod layout_box;
pub mod metrics;
pub mod responsive;
pub mod text;
pub mod tracker;

pub use breakpoints::{
    classify, AppleBreakpoints, Classification, DeviceType, Orientation, SizeCategory,
    APPLE_BREAKPOINTS,
};
pub use config::LayoutConfig;
pub use layout_box::{BoxContext, BoxProps, ColSpan, Columns, ResolvedBox, ResponsiveBoxProps};
pub use metrics::{
    container_padding_horizontal, container_width, get_width, responsive_padding, scale,
    section_margin_top, Padding, ScaleMultipliers, WidthRatios, CONTAINER_WIDTHS,
    LANDSCAPE_WIDTH_FACTOR, RESPONSIVE_PADDING,
};
pub use responsive::{responsive, select, select_for_width, ByCategory, ResponsiveValue};
pub use text::{EllipsizeMode, ResolvedText, TextProps};
pub use tracker::{BreakpointTracker, Breakpoints};
