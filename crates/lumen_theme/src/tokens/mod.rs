//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Primitive and semantic colors
//! - Spacing
//! - Border radii and widths
//! - Shadows
//! - Gradients
//! - Image, icon, and avatar sizes
//! - Typography

mod border;
mod color;
mod gradient;
mod primitive;
mod shadow;
mod size;
mod spacing;
mod typography;

pub use border::*;
pub use color::*;
pub use gradient::*;
pub use primitive::*;
pub use shadow::*;
pub use size::*;
pub use spacing::*;
pub use typography::*;
