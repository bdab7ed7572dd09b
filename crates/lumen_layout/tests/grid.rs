use lumen_core::{Dimension, FlexDirection, FlexWrap, Viewport};
use lumen_layout::{BoxContext, BoxProps, Breakpoints, ColSpan, Columns, ResponsiveBoxProps};
use lumen_theme::LIGHT;
use pretty_assertions::assert_eq;

fn breakpoints(width: f32) -> Breakpoints {
    Breakpoints::new(Viewport::new(width, 900.0))
}

fn span(span: ColSpan) -> BoxProps {
    BoxProps {
        col_span: Some(span),
        ..BoxProps::default()
    }
}

#[test]
fn test_span_of_four_columns() {
    let bp = breakpoints(390.0);
    let ctx = BoxContext::new(&bp, &LIGHT);
    let grid = BoxProps {
        cols: Columns::new(4),
        ..BoxProps::default()
    }
    .resolve(&ctx);
    let child_ctx = grid.child_context(&ctx);

    let one = span(ColSpan::Span(1)).resolve(&child_ctx);
    assert_eq!(one.style.width, Some(Dimension::Percent(25.0)));

    let full = span(ColSpan::Full).resolve(&child_ctx);
    assert_eq!(full.style.width, Some(Dimension::Percent(100.0)));
}

#[test]
fn test_span_without_parent_uses_twelve_columns() {
    let bp = breakpoints(390.0);
    let resolved = span(ColSpan::Span(2)).resolve(&BoxContext::new(&bp, &LIGHT));

    let percent = resolved.style.width.and_then(|w| w.percent()).unwrap();
    assert!((percent - 100.0 / 6.0).abs() < 1e-4);

    let full = span(ColSpan::Full).resolve(&BoxContext::new(&bp, &LIGHT));
    assert_eq!(full.style.width, Some(Dimension::Percent(100.0)));
}

#[test]
fn test_responsive_columns() {
    let props = BoxProps {
        cols: Columns::new(1),
        md: Some(ResponsiveBoxProps {
            cols: Columns::new(2),
            ..ResponsiveBoxProps::default()
        }),
        lg: Some(ResponsiveBoxProps {
            cols: Columns::new(3),
            ..ResponsiveBoxProps::default()
        }),
        ..BoxProps::default()
    };

    for (width, expected) in [(390.0, 1), (800.0, 2), (1440.0, 3)] {
        let bp = breakpoints(width);
        let ctx = BoxContext::new(&bp, &LIGHT);
        let grid = props.resolve(&ctx);
        assert_eq!(grid.columns.map(Columns::get), Some(expected));
        assert_eq!(grid.style.flex_direction, Some(FlexDirection::Row));
        assert_eq!(grid.style.flex_wrap, Some(FlexWrap::Wrap));

        let cell = span(ColSpan::Span(1)).resolve(&grid.child_context(&ctx));
        let percent = cell.style.width.and_then(|w| w.percent()).unwrap();
        assert!((percent - 100.0 / f32::from(expected)).abs() < 1e-4);
    }
}

#[test]
fn test_nested_grids_use_nearest_parent() {
    let bp = breakpoints(1440.0);
    let ctx = BoxContext::new(&bp, &LIGHT);

    let outer = BoxProps {
        cols: Columns::new(2),
        ..BoxProps::default()
    }
    .resolve(&ctx);
    let outer_ctx = outer.child_context(&ctx);

    let inner = BoxProps {
        cols: Columns::new(6),
        col_span: Some(ColSpan::Span(1)),
        ..BoxProps::default()
    }
    .resolve(&outer_ctx);
    assert_eq!(inner.style.width, Some(Dimension::Percent(50.0)));

    let leaf = span(ColSpan::Span(3)).resolve(&inner.child_context(&outer_ctx));
    assert_eq!(leaf.style.width, Some(Dimension::Percent(50.0)));

    let plain = BoxProps::default().resolve(&inner.child_context(&outer_ctx));
    assert_eq!(plain.columns, None);
    assert_eq!(
        plain.child_context(&outer_ctx).parent_columns,
        None,
        "a non-grid box does not pass columns on"
    );
}

#[test]
fn test_style_serializes_for_render_layer() {
    let bp = breakpoints(390.0);
    let ctx = BoxContext::new(&bp, &LIGHT).with_parent_columns(Columns::new(4));
    let style = span(ColSpan::Span(1)).resolve(&ctx).style;

    assert_eq!(
        serde_json::to_value(&style).unwrap(),
        serde_json::json!({ "flexDirection": "column", "width": "25%" })
    );
}
