//! Responsive Grid Demo
//!
//! Resizes a simulated window across the three size categories and prints
//! the resolved styles of a card grid under the active theme.
//!
//! Run with:
//! `RUST_LOG=debug cargo run -p lumen_layout --example responsive_grid`

use lumen_core::{AppearanceSignal, MemoryStore, SystemAppearance, Viewport, ViewportSignal};
use lumen_layout::{
    BoxContext, BoxProps, BreakpointTracker, ColSpan, Columns, ResponsiveBoxProps, TextProps,
};
use lumen_theme::{SemanticShadow, Space, ThemeMode, ThemeProvider, TypographyVariant};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let appearance = AppearanceSignal::new(SystemAppearance::Light);
    let theme = ThemeProvider::new(Arc::new(MemoryStore::new()), &appearance);

    let viewport = ViewportSignal::new(Viewport::new(390.0, 844.0));
    let tracker = BreakpointTracker::new(&viewport);
    tracker.set_transition_callback(|from, to| {
        tracing::info!(%from, %to, "animating layout change");
    });

    let grid = BoxProps {
        cols: Columns::new(1),
        gap: Some(Space::from(4)),
        p: Some(Space::from(4)),
        bg: Some("background".into()),
        md: Some(ResponsiveBoxProps {
            cols: Columns::new(2),
            ..ResponsiveBoxProps::default()
        }),
        lg: Some(ResponsiveBoxProps {
            cols: Columns::new(4),
            p: Some(Space::from(8)),
            ..ResponsiveBoxProps::default()
        }),
        ..BoxProps::default()
    };
    let card = BoxProps {
        col_span: Some(ColSpan::Span(1)),
        bg: Some("backgroundSurface200".into()),
        shadow: Some(SemanticShadow::Card),
        ..BoxProps::default()
    };
    let title = TextProps::new(TypographyVariant::CardTitle).color("text");

    for (width, height, system) in [
        (390.0, 844.0, SystemAppearance::Light),
        (820.0, 1180.0, SystemAppearance::Dark),
        (1440.0, 900.0, SystemAppearance::Dark),
    ] {
        viewport.set(Viewport::new(width, height));
        appearance.set(system);

        let bp = tracker.breakpoints();
        let colors = theme.colors();
        let ctx = BoxContext::new(&bp, colors);
        let resolved_grid = grid.resolve(&ctx);
        let resolved_card = card.resolve(&resolved_grid.child_context(&ctx));

        tracing::info!(
            category = %bp.category,
            theme = %theme.active_theme(),
            container_width = bp.container_width(),
            "viewport {width}x{height}"
        );
        println!("grid:  {}", serde_json::to_string(&resolved_grid.style)?);
        println!("card:  {}", serde_json::to_string(&resolved_card.style)?);
        println!("title: {}", serde_json::to_string(&title.resolve(colors).style)?);
    }

    theme.set_theme(ThemeMode::Light);
    tracing::info!(mode = %theme.mode(), "explicit mode overrides the system appearance");
    Ok(())
}
