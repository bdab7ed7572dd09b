//! Theme-aware style builders
//!
//! [`ThemedStyles`] binds the builders to one resolved theme. Builders that
//! take no arguments depend only on the theme, so each is built once per
//! theme and handed out as a `&'static Style`.

use crate::factories;
use crate::presets::{ButtonVariant, FormGap, InputState};
use crate::theme::ActiveTheme;
use crate::themes::ColorTable;
use crate::tokens::{
    AvatarSize, CssGradient, FontFamilies, Gradient, IconSize, ImageSize, PrimitiveColors,
    ShadowSize,
};
use lumen_core::style::{
    Align, BorderStyle, Dimension, Display, FlexDirection, FontWeight, Justify, Overflow,
    Position, Style,
};
use std::sync::OnceLock;

type StyleCache = [OnceLock<Style>; 2];

macro_rules! memoized {
    ($( $(#[$meta:meta])* $name:ident => $build:ident; )*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> &'static Style {
                static CACHE: StyleCache = [OnceLock::new(), OnceLock::new()];
                CACHE[cache_slot(self.active)].get_or_init(|| $build(self.table))
            }
        )*
    };
}

fn cache_slot(theme: ActiveTheme) -> usize {
    match theme {
        ActiveTheme::Light => 0,
        ActiveTheme::Dark => 1,
    }
}

/// Style builders for a resolved theme
#[derive(Clone, Copy, Debug)]
pub struct ThemedStyles {
    active: ActiveTheme,
    table: &'static ColorTable,
}

impl ThemedStyles {
    pub fn new(active: ActiveTheme) -> Self {
        Self {
            active,
            table: ColorTable::for_theme(active),
        }
    }

    pub fn active_theme(&self) -> ActiveTheme {
        self.active
    }

    pub fn colors(&self) -> &'static ColorTable {
        self.table
    }

    memoized! {
        /// Full-width input container with per-side borders
        input_style => build_input;
        label_style => build_label;
        /// Solid primary button including web interaction fields
        default_button_style => build_default_button;
        error_text_style => build_error_text;
        form_gap_style => build_form_gap;
        smart_input_container_style => build_smart_input_container;
        form_wrapper_style => build_form_wrapper;
        text_xs_style => build_text_xs;
        prose_color_primary_style => build_prose_color_primary;
        /// Inline code highlight inside prose
        highlight_prose_style => build_highlight_prose;
        default_border_style => build_default_border;
    }

    pub fn shadow(&self, size: ShadowSize) -> Style {
        factories::shadow_style(size, self.active)
    }

    pub fn apple_shadow(&self, size: ShadowSize) -> Style {
        factories::apple_shadow_style(size, self.active)
    }

    pub fn image_size_style(&self, size: ImageSize) -> Style {
        factories::image_size_style(size)
    }

    /// Image size by name; unknown names resolve to `md`
    pub fn image_size_style_by_name(&self, name: &str) -> Style {
        factories::image_size_style(ImageSize::from_name_or_default(name))
    }

    pub fn icon_size_style(&self, size: IconSize) -> Style {
        factories::icon_size_style(size)
    }

    pub fn avatar_size_style(&self, size: AvatarSize) -> Style {
        factories::avatar_size_style(size)
    }

    pub fn gradient(&self, key: Gradient) -> &'static [&'static str] {
        factories::gradient(key)
    }

    pub fn gradient_css(&self, key: CssGradient) -> &'static str {
        factories::css_gradient(key)
    }

    pub fn button_style(&self, variant: ButtonVariant) -> Style {
        factories::button_style(variant, self.active)
    }

    pub fn button_text_style(&self, variant: ButtonVariant) -> Style {
        factories::button_text_style(variant, self.active)
    }

    pub fn disabled_button_style(&self) -> Style {
        factories::disabled_button_style(self.active)
    }

    pub fn input_state_style(&self, state: InputState) -> Style {
        factories::input_state_style(state, self.active)
    }

    pub fn input_label_style(&self) -> Style {
        factories::input_label_style(self.active)
    }

    pub fn input_error_style(&self) -> Style {
        factories::input_error_style(self.active)
    }

    pub fn form_gap(&self, gap: FormGap) -> Style {
        factories::form_gap(gap)
    }
}

fn build_input(table: &ColorTable) -> Style {
    let form = &table.form;
    Style::new()
        .corner_radii(8.0)
        .overflow(Overflow::Hidden)
        .width(Dimension::Percent(100.0))
        .display(Display::Flex)
        .justify_content(Justify::SpaceBetween)
        .side_borders(2.0, BorderStyle::Solid, table.colors.input_border)
        .background_color(PrimitiveColors::GRAY_100)
        .color(table.colors.input_text)
        .padding_horizontal(16.0)
        .padding_bottom(Dimension::Percent(2.6))
        .font_size(form.input_font_size)
        .font_family(form.input_font_family)
        .font_weight(form.input_font_weight)
        .line_height(form.input_line_height)
        .height(50.0)
        .position(Position::Relative)
        .box_sizing("border-box")
}

fn build_label(table: &ColorTable) -> Style {
    let form = &table.form;
    Style::new()
        .color(table.colors.label_color)
        .font_family(form.label_font_family)
        .font_size(form.label_font_size)
        .font_weight(form.label_font_weight)
        .line_height(form.label_line_height)
        .margin(0.0)
        .margin_bottom(form.label_margin_bottom)
        .padding_left(form.label_padding_left)
}

fn build_default_button(table: &ColorTable) -> Style {
    Style::new()
        .font_size(16.0)
        .font_weight(FontWeight::W500)
        .line_height(20.0)
        .corner_radii(8.0)
        .padding_top(18.0)
        .padding_bottom(18.0)
        .padding_left(25.0)
        .padding_right(25.0)
        .margin_left(0.0)
        .margin_top(12.0)
        .margin_right(0.0)
        .margin_bottom(0.0)
        .transition_property("background")
        .transition_duration(200.0)
        .transition_timing_function("cubic-bezier(0, 0, 1, 1)")
        .cursor("pointer")
        .color(table.colors.button_primary_text)
        .background_color(table.colors.button_primary_background)
        .display(Display::Flex)
        .flex_direction(FlexDirection::Row)
        .align_items(Align::Center)
        .justify_content(Justify::Center)
        .border_left_width(0.0)
        .border_top_width(0.0)
        .border_right_width(0.0)
        .border_bottom_width(0.0)
        .border_left_style(BorderStyle::None)
        .border_top_style(BorderStyle::None)
        .border_right_style(BorderStyle::None)
        .border_bottom_style(BorderStyle::None)
        .outline("none")
        .box_shadow("none")
        .text_decoration("none")
        .webkit_appearance("none")
        .font_family(FontFamilies::MEDIUM)
}

fn build_error_text(table: &ColorTable) -> Style {
    let form = &table.form;
    Style::new()
        .color(table.colors.error_text_color)
        .font_size(form.error_text_font_size)
        .font_family(form.error_text_font_family)
        .font_weight(form.error_text_font_weight)
        .line_height(form.error_text_line_height)
        .margin_top(2.0)
}

fn build_form_gap(table: &ColorTable) -> Style {
    Style::new().gap(table.form.form_gap)
}

fn build_smart_input_container(table: &ColorTable) -> Style {
    Style::new()
        .margin_top(table.form.smart_input_margin_top)
        .margin_bottom(table.form.smart_input_margin_bottom)
}

fn build_form_wrapper(table: &ColorTable) -> Style {
    let form = &table.form;
    Style::new()
        .padding_top(form.form_wrapper_padding_top)
        .padding_right(form.form_wrapper_padding_right)
        .padding_bottom(form.form_wrapper_padding_bottom)
        .padding_left(form.form_wrapper_padding_left)
        .background_color(table.colors.form_background)
        .border_radius(12.0)
}

fn build_text_xs(_table: &ColorTable) -> Style {
    Style::new().font_size(12.0).line_height(16.0)
}

fn build_prose_color_primary(table: &ColorTable) -> Style {
    Style::new().color(table.prose.color_primary)
}

fn build_highlight_prose(table: &ColorTable) -> Style {
    Style::new()
        .color("var(--tw-prose-code)")
        .font_weight(FontWeight::W400)
        .font_size(14.0)
        .padding(3.2)
        .background_color(table.colors.background_surface_200)
        .border_width(1.0)
        .border_color(table.colors.background_surface_300)
        .border_radius(8.0)
}

fn build_default_border(table: &ColorTable) -> Style {
    Style::new()
        .border_width(1.0)
        .border_color(table.colors.background_surface_300)
        .border_style(BorderStyle::Solid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memoized_per_theme() {
        let light = ThemedStyles::new(ActiveTheme::Light);
        let dark = ThemedStyles::new(ActiveTheme::Dark);

        assert!(std::ptr::eq(light.input_style(), light.input_style()));
        assert!(!std::ptr::eq(light.input_style(), dark.input_style()));
        assert_eq!(
            light.input_style().border_top_color.as_deref(),
            Some(light.colors().colors.input_border)
        );
    }

    #[test]
    fn test_label_follows_form_tokens() {
        let light = ThemedStyles::new(ActiveTheme::Light).label_style();
        let dark = ThemedStyles::new(ActiveTheme::Dark).label_style();
        assert_eq!(light.font_size, Some(17.0));
        assert_eq!(dark.font_size, Some(14.0));
        assert_eq!(dark.padding_left, Some(Dimension::Points(12.0)));
    }

    #[test]
    fn test_default_button_uses_primary_colors() {
        let style = ThemedStyles::new(ActiveTheme::Dark).default_button_style();
        assert_eq!(style.background_color.as_deref(), Some("#FFFF"));
        assert_eq!(style.border_top_style, Some(BorderStyle::None));
        assert_eq!(style.webkit_appearance.as_deref(), Some("none"));
    }

    #[test]
    fn test_image_size_by_name_defaults_to_md() {
        let styles = ThemedStyles::new(ActiveTheme::Light);
        assert_eq!(styles.image_size_style_by_name("9xl").width, Some(Dimension::Points(112.0)));
        assert_eq!(styles.image_size_style_by_name("huge").width, Some(Dimension::Points(32.0)));
    }

    #[test]
    fn test_shadow_sizes() {
        let styles = ThemedStyles::new(ActiveTheme::Dark);
        let large = styles.shadow(ShadowSize::Large);
        assert_eq!(large.shadow_opacity, Some(0.5));
        assert_eq!(large.elevation, Some(8.0));
        assert_eq!(styles.apple_shadow(ShadowSize::Small).shadow_radius, Some(2.4));
    }
}
