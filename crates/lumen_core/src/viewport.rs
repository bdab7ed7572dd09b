//! Viewport dimensions delivered by the render layer

use crate::signal::Signal;
use serde::{Deserialize, Serialize};

/// Logical size of the window or screen in points
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport, clamping negative and NaN dimensions to zero
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_dimension(width),
            height: sanitize_dimension(height),
        }
    }

    /// True when the viewport is wider than it is tall
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

/// Viewport updates pushed by the host window
pub type ViewportSignal = Signal<Viewport>;

/// Clamp a raw dimension to a finite, non-negative value
pub fn sanitize_dimension(value: f32) -> f32 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_and_nan_are_clamped() {
        assert_eq!(Viewport::new(-10.0, f32::NAN), Viewport::new(0.0, 0.0));
        assert_eq!(Viewport::new(390.0, 844.0).width, 390.0);
    }

    #[test]
    fn test_square_is_portrait() {
        assert!(!Viewport::new(500.0, 500.0).is_landscape());
        assert!(Viewport::new(501.0, 500.0).is_landscape());
    }
}
