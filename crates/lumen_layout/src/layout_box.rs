//! The Box layout primitive
//!
//! A Box resolves its props into one flattened [`Style`]. Grid layouts are
//! simulated with flexbox: a Box with `cols` lays its children out in a
//! wrapping row, and each child's `col_span` becomes a percentage width of
//! the parent's columns.
//!
//! ```rust
//! use lumen_core::Viewport;
//! use lumen_layout::{BoxContext, BoxProps, Breakpoints, ColSpan, Columns};
//! use lumen_theme::LIGHT;
//!
//! let breakpoints = Breakpoints::new(Viewport::new(390.0, 844.0));
//! let ctx = BoxContext::new(&breakpoints, &LIGHT);
//!
//! let grid = BoxProps { cols: Columns::new(4), ..BoxProps::default() }.resolve(&ctx);
//! let cell = BoxProps { col_span: Some(ColSpan::Span(1)), ..BoxProps::default() }
//!     .resolve(&grid.child_context(&ctx));
//!
//! assert_eq!(cell.style.width, Some(lumen_core::Dimension::Percent(25.0)));
//! ```

use crate::responsive::ResponsiveValue;
use crate::tracker::Breakpoints;
use lumen_core::style::{
    Align, Dimension, FlexDirection, FlexWrap, Justify, Overflow, Position, Style, StyleText,
};
use lumen_theme::themes::ColorTable;
use lumen_theme::tokens::{BorderWidth, Radius, SemanticShadow, Space};

/// Column count of a grid Box
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Columns(u8);

impl Columns {
    /// Basis used when a span has no parent grid
    pub const BASIS: Columns = Columns(12);

    /// Supported counts are 1, 2, 3, 4, 6 and 12
    pub fn new(count: u8) -> Option<Columns> {
        matches!(count, 1 | 2 | 3 | 4 | 6 | 12).then_some(Columns(count))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// How many of the parent's columns a child covers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColSpan {
    Span(u8),
    Full,
}

impl ColSpan {
    /// Width as a percentage of the parent
    pub fn percent(self, columns: Columns) -> f32 {
        match self {
            ColSpan::Full => 100.0,
            ColSpan::Span(span) => f32::from(span) / f32::from(columns.get()) * 100.0,
        }
    }
}

impl From<u8> for ColSpan {
    fn from(span: u8) -> Self {
        ColSpan::Span(span)
    }
}

/// Per-category overrides; every field set here wins over the base prop
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponsiveBoxProps {
    pub cols: Option<Columns>,
    pub direction: Option<FlexDirection>,
    pub align: Option<Align>,
    pub justify: Option<Justify>,
    pub wrap: Option<FlexWrap>,
    pub flex: Option<f32>,
    pub gap: Option<Space>,

    pub m: Option<Space>,
    pub mx: Option<Space>,
    pub my: Option<Space>,
    pub mt: Option<Space>,
    pub mr: Option<Space>,
    pub mb: Option<Space>,
    pub ml: Option<Space>,

    pub p: Option<Space>,
    pub px: Option<Space>,
    pub py: Option<Space>,
    pub pt: Option<Space>,
    pub pr: Option<Space>,
    pub pb: Option<Space>,
    pub pl: Option<Space>,

    pub width: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub height: Option<Dimension>,
}

/// Props of a Box
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxProps {
    // Spacing
    pub m: Option<Space>,
    pub mx: Option<Space>,
    pub my: Option<Space>,
    pub mt: Option<Space>,
    pub mr: Option<Space>,
    pub mb: Option<Space>,
    pub ml: Option<Space>,
    pub p: Option<Space>,
    pub px: Option<Space>,
    pub py: Option<Space>,
    pub pt: Option<Space>,
    pub pr: Option<Space>,
    pub pb: Option<Space>,
    pub pl: Option<Space>,
    pub gap: Option<Space>,

    // Flexbox
    pub flex: Option<f32>,
    pub direction: FlexDirection,
    pub align: Option<Align>,
    pub justify: Option<Justify>,
    pub wrap: Option<FlexWrap>,

    /// Color name from the active table or a literal color
    pub bg: Option<StyleText>,
    pub border_color: Option<StyleText>,

    pub border_radius: Option<Radius>,
    pub border_width: Option<BorderWidth>,
    pub border_top_left_radius: Option<Radius>,
    pub border_top_right_radius: Option<Radius>,
    pub border_bottom_left_radius: Option<Radius>,
    pub border_bottom_right_radius: Option<Radius>,

    pub shadow: Option<SemanticShadow>,

    // Layout
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub min_width: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub max_height: Option<Dimension>,

    pub position: Option<Position>,
    pub top: Option<Dimension>,
    pub right: Option<Dimension>,
    pub bottom: Option<Dimension>,
    pub left: Option<Dimension>,
    pub z_index: Option<i32>,
    pub overflow: Option<Overflow>,

    /// Layered over everything computed
    pub style: Style,

    // Grid
    pub cols: Option<Columns>,
    pub col_span: Option<ColSpan>,

    pub sm: Option<ResponsiveBoxProps>,
    pub md: Option<ResponsiveBoxProps>,
    pub lg: Option<ResponsiveBoxProps>,
}

/// What a Box needs from its surroundings
#[derive(Clone, Copy, Debug)]
pub struct BoxContext<'a> {
    pub breakpoints: &'a Breakpoints,
    pub colors: &'a ColorTable,
    /// Columns of the enclosing grid Box, if any
    pub parent_columns: Option<Columns>,
}

impl<'a> BoxContext<'a> {
    pub fn new(breakpoints: &'a Breakpoints, colors: &'a ColorTable) -> Self {
        Self {
            breakpoints,
            colors,
            parent_columns: None,
        }
    }

    pub fn with_parent_columns(mut self, columns: Option<Columns>) -> Self {
        self.parent_columns = columns;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedBox {
    pub style: Style,
    /// Resolved column count, handed to children as their parent columns
    pub columns: Option<Columns>,
}

impl ResolvedBox {
    /// Context for this Box's children
    pub fn child_context<'a>(&self, ctx: &BoxContext<'a>) -> BoxContext<'a> {
        ctx.with_parent_columns(self.columns)
    }
}

fn set<T>(style: Style, value: Option<T>, apply: impl FnOnce(Style, T) -> Style) -> Style {
    match value {
        Some(value) => apply(style, value),
        None => style,
    }
}

fn space(apply: fn(Style, Dimension) -> Style) -> impl Fn(Style, Space) -> Style {
    move |style, value| apply(style, Dimension::Points(value.resolve()))
}

impl BoxProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// The override bag of the active category; other categories are ignored
    fn overrides(&self, ctx: &BoxContext<'_>) -> ResponsiveBoxProps {
        let empty = ResponsiveBoxProps::default();
        let bags = ResponsiveValue {
            default: &empty,
            sm: self.sm.as_ref(),
            md: self.md.as_ref(),
            lg: self.lg.as_ref(),
        };
        ctx.breakpoints.select(&bags).clone()
    }

    pub fn resolve(&self, ctx: &BoxContext<'_>) -> ResolvedBox {
        let over = self.overrides(ctx);

        let cols = over.cols.or(self.cols);
        let grid = cols.is_some();
        let direction = if grid {
            FlexDirection::Row
        } else {
            over.direction.unwrap_or(self.direction)
        };
        let wrap = if grid {
            Some(FlexWrap::Wrap)
        } else {
            over.wrap.or(self.wrap)
        };

        let span_width = self.col_span.map(|span| {
            let basis = ctx.parent_columns.unwrap_or_else(|| {
                tracing::trace!(?span, "col_span without a parent grid, using 12 columns");
                Columns::BASIS
            });
            Dimension::Percent(span.percent(basis))
        });

        let mut style = Style::new();

        // Flexbox
        style = set(style, over.flex.or(self.flex), Style::flex);
        style = style.flex_direction(direction);
        style = set(style, over.align.or(self.align), Style::align_items);
        style = set(style, over.justify.or(self.justify), Style::justify_content);
        style = set(style, wrap, Style::flex_wrap);
        style = set(style, over.gap.or(self.gap), |s, gap| s.gap(gap.resolve()));

        // Margin
        style = set(style, over.m.or(self.m), space(Style::margin));
        style = set(style, over.mx.or(self.mx), space(Style::margin_horizontal));
        style = set(style, over.my.or(self.my), space(Style::margin_vertical));
        style = set(style, over.mt.or(self.mt), space(Style::margin_top));
        style = set(style, over.mr.or(self.mr), space(Style::margin_right));
        style = set(style, over.mb.or(self.mb), space(Style::margin_bottom));
        style = set(style, over.ml.or(self.ml), space(Style::margin_left));

        // Padding
        style = set(style, over.p.or(self.p), space(Style::padding));
        style = set(style, over.px.or(self.px), space(Style::padding_horizontal));
        style = set(style, over.py.or(self.py), space(Style::padding_vertical));
        style = set(style, over.pt.or(self.pt), space(Style::padding_top));
        style = set(style, over.pr.or(self.pr), space(Style::padding_right));
        style = set(style, over.pb.or(self.pb), space(Style::padding_bottom));
        style = set(style, over.pl.or(self.pl), space(Style::padding_left));

        // Colors
        style = set(style, self.bg.as_deref(), |s, bg| {
            s.background_color(ctx.colors.resolve_color(bg).to_owned())
        });
        style = set(style, self.border_color.as_deref(), |s, color| {
            s.border_color(ctx.colors.resolve_color(color).to_owned())
        });

        // Borders
        style = set(style, self.border_radius, |s, r| s.border_radius(r.resolve()));
        style = set(style, self.border_width, |s, w| s.border_width(w.resolve()));
        style = set(style, self.border_top_left_radius, |s, r| {
            s.border_top_left_radius(r.resolve())
        });
        style = set(style, self.border_top_right_radius, |s, r| {
            s.border_top_right_radius(r.resolve())
        });
        style = set(style, self.border_bottom_left_radius, |s, r| {
            s.border_bottom_left_radius(r.resolve())
        });
        style = set(style, self.border_bottom_right_radius, |s, r| {
            s.border_bottom_right_radius(r.resolve())
        });

        if let Some(shadow) = self.shadow {
            style = style.merge(&shadow.shadow().to_style());
        }

        // Layout; a span width replaces any width prop
        style = set(style, span_width.or(over.width.or(self.width)), Style::width);
        style = set(style, over.height.or(self.height), Style::height);
        style = set(style, self.min_width, Style::min_width);
        style = set(style, self.min_height, Style::min_height);
        style = set(style, over.max_width.or(self.max_width), Style::max_width);
        style = set(style, self.max_height, Style::max_height);

        // Position
        style = set(style, self.position, Style::position);
        style = set(style, self.top, Style::top);
        style = set(style, self.right, Style::right);
        style = set(style, self.bottom, Style::bottom);
        style = set(style, self.left, Style::left);
        style = set(style, self.z_index, Style::z_index);
        style = set(style, self.overflow, Style::overflow);

        ResolvedBox {
            style: style.merge(&self.style),
            columns: cols,
        }
    }
}
