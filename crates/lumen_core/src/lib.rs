//! Lumen Core
//!
//! Foundation types shared by the lumen theming and layout crates:
//!
//! - [`Signal`]: observable values with [`Subscription`] guards that
//!   unsubscribe on drop
//! - [`Viewport`] and [`SystemAppearance`]: the two inputs the host pushes in
//! - [`PreferenceStore`]: the key-value collaborator used to persist the
//!   theme preference
//! - [`Style`]: the typed, mergeable style object produced for the render layer

pub mod appearance;
pub mod error;
pub mod signal;
pub mod storage;
pub mod style;
pub mod viewport;

pub use appearance::{AppearanceSignal, SystemAppearance};
pub use error::StoreError;
pub use signal::{ListenerId, Signal, Subscription};
pub use storage::{MemoryStore, PreferenceStore};
pub use style::{
    Align, BorderStyle, Dimension, Display, FlexDirection, FlexWrap, FontWeight, Justify,
    Overflow, Position, ShadowOffset, Style, StyleText, TextAlign,
};
pub use viewport::{sanitize_dimension, Viewport, ViewportSignal};
