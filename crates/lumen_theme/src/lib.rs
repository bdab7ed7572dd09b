//! Lumen Theme
//!
//! Design tokens, the light and dark color tables, and the theme provider.
//!
//! # Overview
//!
//! - **Tokens**: colors, spacing, radii and border widths, shadows,
//!   gradients, image/icon/avatar sizes, typography
//! - **Color tables**: [`LIGHT`] and [`DARK`], immutable and shared
//! - **Provider**: [`ThemeProvider`] resolves a [`ThemeMode`] against the
//!   system appearance and persists the user's choice
//! - **Styles**: [`ThemedStyles`], presets, factories, and hooks that turn
//!   tokens into [`Style`](lumen_core::Style)s
//!
//! # Quick Start
//!
//! ```rust
//! use lumen_core::{AppearanceSignal, MemoryStore, SystemAppearance};
//! use lumen_theme::{use_button_styles, ButtonOptions, ButtonVariant, ThemeProvider};
//! use std::sync::Arc;
//!
//! let appearance = AppearanceSignal::new(SystemAppearance::Dark);
//! let provider = ThemeProvider::new(Arc::new(MemoryStore::new()), &appearance);
//! let _scope = provider.enter();
//!
//! let button = use_button_styles().button_style(ButtonVariant::Primary, ButtonOptions::default());
//! assert_eq!(button.container.background_color.as_deref(), Some("#FFFFFF"));
//! ```

pub mod config;
pub mod error;
pub mod factories;
pub mod hooks;
pub mod presets;
pub mod provider;
pub mod styles;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use config::ThemeConfig;
pub use error::{ConfigError, ParseThemeModeError};
pub use hooks::{
    use_button_styles, use_form_styles, use_input_styles, use_themed_styles, ButtonOptions,
    ButtonStyleSet, ButtonStyles, FieldStyles, FormOptions, FormStyleSet, FormStyles,
    InputStyles,
};
pub use presets::{ButtonVariant, FormGap, InputState};
pub use provider::{
    try_use_theme, use_color_scheme, use_theme, use_theme_color, ProviderScope, ThemeProvider,
    ThemeSnapshot,
};
pub use styles::ThemedStyles;
pub use theme::{resolve_active_theme, ActiveTheme, ThemeMode};
pub use themes::{ColorTable, DARK, LIGHT};
pub use tokens::*;
