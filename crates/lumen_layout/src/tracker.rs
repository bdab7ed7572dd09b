//! Live breakpoint tracking
//!
//! [`BreakpointTracker`] subscribes to a [`ViewportSignal`] and reclassifies
//! synchronously on every change. Between changes it keeps the last
//! [`Breakpoints`] snapshot.
//!
//! A category change can fire an advisory transition callback, typically
//! used to schedule a layout animation. The new snapshot is stored before the
//! callback runs, so the callback never delays or blocks the update.

use crate::breakpoints::{classify, Classification, DeviceType, Orientation, SizeCategory};
use crate::config::LayoutConfig;
use crate::metrics::{self, Padding, ScaleMultipliers, WidthRatios};
use crate::responsive::{ByCategory, ResponsiveValue};
use lumen_core::{sanitize_dimension, Signal, Subscription, Viewport, ViewportSignal};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, Weak};

/// Classified viewport with the helpers derived from it
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Breakpoints {
    pub category: SizeCategory,
    pub orientation: Orientation,
    pub width: f32,
    pub height: f32,
    #[serde(skip)]
    multipliers: ScaleMultipliers,
}

impl Breakpoints {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_multipliers(viewport, ScaleMultipliers::DEFAULT)
    }

    pub fn with_multipliers(viewport: Viewport, multipliers: ScaleMultipliers) -> Self {
        let width = sanitize_dimension(viewport.width);
        let height = sanitize_dimension(viewport.height);
        let Classification {
            category,
            orientation,
        } = classify(width, height);
        Self {
            category,
            orientation,
            width,
            height,
            multipliers,
        }
    }

    pub fn classification(&self) -> Classification {
        Classification {
            category: self.category,
            orientation: self.orientation,
        }
    }

    pub fn is_small(&self) -> bool {
        self.category == SizeCategory::Small
    }

    pub fn is_medium(&self) -> bool {
        self.category == SizeCategory::Medium
    }

    pub fn is_large(&self) -> bool {
        self.category == SizeCategory::Large
    }

    pub fn is_portrait(&self) -> bool {
        self.orientation == Orientation::Portrait
    }

    pub fn is_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }

    pub fn select<T: Clone>(&self, values: &ResponsiveValue<T>) -> T {
        values.resolve(self.category).clone()
    }

    pub fn responsive<T: Clone>(&self, values: &ByCategory<T>) -> T {
        values.get(self.category).clone()
    }

    /// Scale with the configured multipliers
    pub fn scale(&self, base: f32) -> f32 {
        metrics::scale(self.category, base, &self.multipliers)
    }

    pub fn scale_with(&self, base: f32, multipliers: &ScaleMultipliers) -> f32 {
        metrics::scale(self.category, base, multipliers)
    }

    pub fn get_width(&self, ratios: &WidthRatios) -> f32 {
        metrics::get_width(self.classification(), self.width, ratios)
    }

    pub fn container_width(&self) -> f32 {
        metrics::container_width(self.category, self.width)
    }

    pub fn padding(&self) -> Padding {
        metrics::responsive_padding(self.category)
    }

    pub fn device_type(&self) -> DeviceType {
        DeviceType::for_width(self.width)
    }
}

type TransitionCallback = Arc<dyn Fn(SizeCategory, SizeCategory) + Send + Sync>;

struct TrackerInner {
    config: LayoutConfig,
    breakpoints: Signal<Breakpoints>,
    on_transition: Mutex<Option<TransitionCallback>>,
    viewport_subscription: Mutex<Option<Subscription>>,
}

impl TrackerInner {
    fn apply(&self, viewport: Viewport) {
        let next = Breakpoints::with_multipliers(viewport, self.config.scale);
        let previous = self.breakpoints.replace(next);
        if previous == next {
            return;
        }

        if previous.category != next.category {
            tracing::debug!(
                from = %previous.category,
                to = %next.category,
                width = next.width,
                "breakpoint category changed"
            );
            if self.config.animate_transitions {
                let callback = self.on_transition.lock().unwrap().clone();
                if let Some(callback) = callback {
                    callback(previous.category, next.category);
                }
            }
        }
    }
}

/// Keeps a [`Breakpoints`] snapshot in sync with a viewport signal
#[derive(Clone)]
pub struct BreakpointTracker {
    inner: Arc<TrackerInner>,
}

impl BreakpointTracker {
    pub fn new(viewport: &ViewportSignal) -> Self {
        Self::with_config(LayoutConfig::default(), viewport)
    }

    pub fn with_config(config: LayoutConfig, viewport: &ViewportSignal) -> Self {
        let initial = Breakpoints::with_multipliers(viewport.get(), config.scale);
        let inner = Arc::new(TrackerInner {
            config,
            breakpoints: Signal::new(initial),
            on_transition: Mutex::new(None),
            viewport_subscription: Mutex::new(None),
        });

        let weak: Weak<TrackerInner> = Arc::downgrade(&inner);
        let subscription = viewport.subscribe(move |viewport| {
            if let Some(inner) = weak.upgrade() {
                inner.apply(*viewport);
            }
        });
        *inner.viewport_subscription.lock().unwrap() = Some(subscription);

        Self { inner }
    }

    /// Latest snapshot
    pub fn breakpoints(&self) -> Breakpoints {
        self.inner.breakpoints.get()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.inner.config
    }

    /// Observe every new snapshot
    #[must_use = "dropping the subscription immediately unsubscribes the listener"]
    pub fn subscribe(&self, listener: impl Fn(&Breakpoints) + Send + Sync + 'static) -> Subscription {
        self.inner.breakpoints.subscribe(listener)
    }

    /// Register the category transition callback, replacing any previous one
    ///
    /// Called with `(from, to)` after the new snapshot is stored, only when
    /// the category changes and `animate_transitions` is enabled.
    pub fn set_transition_callback(
        &self,
        callback: impl Fn(SizeCategory, SizeCategory) + Send + Sync + 'static,
    ) {
        *self.inner.on_transition.lock().unwrap() = Some(Arc::new(callback));
    }

    pub fn clear_transition_callback(&self) {
        self.inner.on_transition.lock().unwrap().take();
    }
}

impl fmt::Debug for BreakpointTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakpointTracker")
            .field("breakpoints", &self.breakpoints())
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_helpers() {
        let bp = Breakpoints::new(Viewport::new(800.0, 1000.0));
        assert!(bp.is_medium());
        assert!(bp.is_portrait());
        assert_eq!(bp.container_width(), 692.0);
        assert_eq!(bp.padding(), Padding::new(22.0, 8.0));
        assert_eq!(bp.device_type(), DeviceType::Tablet);
        assert_eq!(bp.scale(20.0), 23.0);
        assert_eq!(bp.select(&ResponsiveValue::new(1).md(2)), 2);
        assert_eq!(bp.responsive(&ByCategory::new("a", "b", "c")), "b");
    }

    #[test]
    fn test_unsanitized_viewport_is_clamped() {
        let bp = Breakpoints::new(Viewport {
            width: -3.0,
            height: f32::NAN,
        });
        assert_eq!(bp.width, 0.0);
        assert_eq!(bp.height, 0.0);
        assert!(bp.is_small());
    }
}
