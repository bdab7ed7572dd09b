//! Typed style objects
//!
//! [`Style`] is the flattened style handed to the render layer. Every field is
//! optional: unset fields are omitted from the serialized form and are left to
//! the renderer's defaults.
//!
//! Styles compose with [`Style::merge`], which resolves field by field with the
//! argument winning wherever it sets a value.
//!
//! ```rust
//! use lumen_core::style::{Dimension, Style};
//!
//! let base = Style::new().padding(16.0).background_color("#FFFFFF");
//! let over = Style::new().background_color("#000000");
//!
//! let merged = base.merge(&over);
//! assert_eq!(merged.padding, Some(Dimension::Points(16.0)));
//! assert_eq!(merged.background_color.as_deref(), Some("#000000"));
//! ```

use serde::{Serialize, Serializer};
use std::borrow::Cow;

/// A color or other free-form string value
pub type StyleText = Cow<'static, str>;

/// A length in points, a percentage of the parent, or automatic
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    Points(f32),
    Percent(f32),
    Auto,
}

impl Dimension {
    pub fn points(&self) -> Option<f32> {
        match self {
            Dimension::Points(value) => Some(*value),
            _ => None,
        }
    }

    pub fn percent(&self) -> Option<f32> {
        match self {
            Dimension::Percent(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Points(value)
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dimension::Points(value) => serializer.serialize_f32(*value),
            Dimension::Percent(value) => serializer.serialize_str(&format!("{value}%")),
            Dimension::Auto => serializer.serialize_str("auto"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Flex,
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    Row,
    #[default]
    Column,
    RowReverse,
    ColumnReverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    Wrap,
    NoWrap,
    WrapReverse,
}

/// Cross-axis alignment (`alignItems`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    Baseline,
}

/// Main-axis distribution (`justifyContent`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Relative,
    Absolute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Visible,
    Hidden,
    Scroll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Auto,
    Left,
    Right,
    Center,
    Justify,
}

/// Font weight as the render layer expects it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FontWeight {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "400")]
    W400,
    #[serde(rename = "500")]
    W500,
    #[serde(rename = "600")]
    W600,
    #[serde(rename = "700")]
    W700,
}

impl FontWeight {
    /// Numeric weight, `normal` being 400 and `bold` 700
    pub fn numeric(self) -> u16 {
        match self {
            FontWeight::Normal | FontWeight::W400 => 400,
            FontWeight::W500 => 500,
            FontWeight::W600 => 600,
            FontWeight::Bold | FontWeight::W700 => 700,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ShadowOffset {
    pub width: f32,
    pub height: f32,
}

impl ShadowOffset {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

macro_rules! style_fields {
    ($( $(#[$attr:meta])* $field:ident : $ty:ty ),* $(,)?) => {
        /// Flattened style object
        ///
        /// All properties are optional; see the module docs for merging rules.
        #[derive(Clone, Debug, Default, PartialEq, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Style {
            $(
                $(#[$attr])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl Style {
            /// Layer `other` over `self`; fields set in `other` win
            pub fn merge(&self, other: &Style) -> Style {
                Style {
                    $( $field: other.$field.clone().or_else(|| self.$field.clone()), )*
                }
            }

            /// Check if any property is set
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

style_fields! {
    // Flex container
    display: Display,
    flex: f32,
    flex_direction: FlexDirection,
    flex_wrap: FlexWrap,
    align_items: Align,
    justify_content: Justify,
    gap: f32,

    // Sizing
    width: Dimension,
    height: Dimension,
    min_width: Dimension,
    min_height: Dimension,
    max_width: Dimension,
    max_height: Dimension,

    // Margin
    margin: Dimension,
    margin_horizontal: Dimension,
    margin_vertical: Dimension,
    margin_top: Dimension,
    margin_right: Dimension,
    margin_bottom: Dimension,
    margin_left: Dimension,

    // Padding
    padding: Dimension,
    padding_horizontal: Dimension,
    padding_vertical: Dimension,
    padding_top: Dimension,
    padding_right: Dimension,
    padding_bottom: Dimension,
    padding_left: Dimension,

    // Positioning
    position: Position,
    top: Dimension,
    right: Dimension,
    bottom: Dimension,
    left: Dimension,
    z_index: i32,
    overflow: Overflow,
    box_sizing: StyleText,

    // Colors
    background_color: StyleText,
    color: StyleText,
    opacity: f32,

    // Border radius
    border_radius: f32,
    border_top_left_radius: f32,
    border_top_right_radius: f32,
    border_bottom_left_radius: f32,
    border_bottom_right_radius: f32,

    // Border width
    border_width: f32,
    border_top_width: f32,
    border_right_width: f32,
    border_bottom_width: f32,
    border_left_width: f32,

    // Border style
    border_style: BorderStyle,
    border_top_style: BorderStyle,
    border_right_style: BorderStyle,
    border_bottom_style: BorderStyle,
    border_left_style: BorderStyle,

    // Border color
    border_color: StyleText,
    border_top_color: StyleText,
    border_right_color: StyleText,
    border_bottom_color: StyleText,
    border_left_color: StyleText,

    // Shadow
    shadow_color: StyleText,
    shadow_offset: ShadowOffset,
    shadow_opacity: f32,
    shadow_radius: f32,
    elevation: f32,
    box_shadow: StyleText,

    // Typography
    font_family: StyleText,
    font_size: f32,
    font_weight: FontWeight,
    line_height: f32,
    letter_spacing: f32,
    text_align: TextAlign,
    text_decoration: StyleText,

    // Interaction (web targets)
    cursor: StyleText,
    outline: StyleText,
    transition_property: StyleText,
    transition_duration: f32,
    transition_timing_function: StyleText,
    #[serde(rename = "WebkitAppearance")]
    webkit_appearance: StyleText,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same radius on all four corners, written per corner
    pub fn corner_radii(self, radius: f32) -> Self {
        self.border_top_left_radius(radius)
            .border_top_right_radius(radius)
            .border_bottom_left_radius(radius)
            .border_bottom_right_radius(radius)
    }

    /// Same width, style, and color on all four sides, written per side
    pub fn side_borders(self, width: f32, style: BorderStyle, color: impl Into<StyleText>) -> Self {
        let color = color.into();
        self.border_top_width(width)
            .border_right_width(width)
            .border_bottom_width(width)
            .border_left_width(width)
            .border_top_style(style)
            .border_right_style(style)
            .border_bottom_style(style)
            .border_left_style(style)
            .border_top_color(color.clone())
            .border_right_color(color.clone())
            .border_bottom_color(color.clone())
            .border_left_color(color)
    }
}
