use super::{CanvaPalette, ColorTable, FontSizeScale, FormTokens, ProseTokens};
use crate::tokens::{ColorTokens, FontFamilies};
use lumen_core::style::FontWeight;

/// The dark theme
pub static DARK: ColorTable = ColorTable {
    colors: ColorTokens {
        text: "#FFFFFF",
        text_muted: "#B0B0B0",
        text_secondary: "#D1D1D1",
        text_secondary_low_light: "#DDDDDD",
        text_inverse: "#121212",
        tint: "#8b3dff",
        icon: "#FFFFFF",
        tab_icon_default: "#B0B0B0",
        tab_icon_selected: "#4a2e7e",
        primary: "#FFFF",
        theme_primary: "#8b3dff",
        secondary: "#232323",
        secondary_light: "#2C2C2C",
        tertiary: "#9ea3a8",
        accent_1: "#D4AF37",
        accent_2: "#B8C2CC",
        primary_container: "#4a2e7e",
        on_primary_container: "#e6d9ff",
        on_primary: "#ffffff",
        on_surface: "#e6e1e5",
        outline: "#938f99",
        background: "#161616",
        surface: "#2C2C2C",
        surface_variant: "#49454e",
        card: "#282828",
        border: "#3A3A3A",
        divider: "#3A3A3A",
        disabled: "#666666",
        warning: "#FFEB3B",
        error: "#EF5350",
        success: "#4CAF50",
        info: "#29B6F6",
        bg_error: "#3d1319",
        bg_error_border: "#ef5350",
        fg_error: "#ef5350",
        bg_warning: "#3d3419",
        bg_warning_border: "#ffeb3b",
        fg_warning: "#ffeb3b",
        icon_primary: "#FFFFFF",
        icon_accent: "#FFFF",
        icon_muted: "#B0B0B0",
        button_primary_background: "#FFFF",
        button_primary_text: "#FFFFFF",
        button_primary_border: "transparent",
        button_secondary_background: "#3A3A3A",
        button_secondary_text: "#FFFFFF",
        button_secondary_border: "#48484A",
        button_outline_background: "transparent",
        button_outline_text: "#FFFF",
        button_outline_border: "#FFFF",
        button_inverted_background: "#FFFFFF",
        button_inverted_text: "#000000",
        button_inverted_border: "#FFFFFF",
        button_disabled_background: "#2C2C2E",
        button_disabled_border: "#48484A",
        button_disabled_text: "#666666",
        selection_control: "#8b3dff",
        input_text: "#FFFFFF",
        input_placeholder: "#5E5E5E",
        input_background: "rgba(30, 30, 30, 0.8)",
        input_border: "#F3F3F3",
        label_color: "#433f3f",
        error_text_color: "#dc3545",
        form_background: "#F1EEE8",
        card_border: "rgba(255,255,255,0.10)",
        separator: "rgba(255,255,255,0.20)",
        top_text: "#FFF",
        secondary_text: "#ECEDEE",
        secondary_text_muted: "#D1D1D1",
        tiercery_text_muted: "#C6C6C6",
        quadiary_text_muted: "#A6A6A6",
        status_approved_bg: "#0f5132",
        status_approved_text: "#d1e7dd",
        status_pending_bg: "#664d03",
        status_pending_text: "#fff3cd",
        status_rejected_bg: "#842029",
        status_rejected_text: "#f8d7da",
        rider_tone: "#b197fc",
        driver_tone: "#0d6efd",
        guide_tone: "#20c997",
        admin_tone: "#6610f2",
        delivery_accent: "#D4AF37",
        sidebar_line: "rgba(255,255,255,0.10)",
        smoke: "#232325",
        active_tint_color: "#4a2e7fcc",
        active_navigation_background: "#a370fc26",
        main_secondary_color: "#a370fc26",
        base_gray_05: "#E5E2DC",
        base_gray_80: "#30302E",
        gradient_primary_start: "#00a0a8",
        gradient_primary_end: "#7d2ae8",
        gradient_secondary_start: "#667eea",
        gradient_secondary_end: "#764ba2",
        background_surface_200: "hsl(0deg 0% 15%)",
        background_surface_300: "rgba(19, 19, 19, 0.4)",
        background_surface_400: "rgba(40, 40, 40, 0.4)",
        background_surface_500: "rgba(31, 31, 31, 0.9)",
        post_primary: "#8b3dff",
        post_background: "#0f1113",
        post_surface: "#1a1d21",
        post_grey: "#9BA1A6",
        white: "#FFFFFF",
        black: "#000000",
    },
    status_extras: None,
    form: FormTokens {
        input_font_family: FontFamilies::MEDIUM,
        input_font_size: 16.0,
        input_font_weight: FontWeight::Normal,
        input_line_height: 24.0,

        label_font_family: FontFamilies::MEDIUM,
        label_font_size: 14.0,
        label_font_weight: FontWeight::Normal,
        label_line_height: 20.0,

        error_text_font_family: FontFamilies::REGULAR,
        error_text_font_size: 13.0,
        error_text_font_weight: FontWeight::Normal,
        error_text_line_height: 16.0,

        form_gap: 24.0,
        label_margin_bottom: 1.0,
        label_padding_left: 12.0,
        smart_input_margin_top: 8.0,
        smart_input_margin_bottom: 8.0,

        form_wrapper_padding_top: 40.0,
        form_wrapper_padding_right: 24.0,
        form_wrapper_padding_bottom: 40.0,
        form_wrapper_padding_left: 24.0,
    },
    border_radius: 13.0,
    font_sizes: FontSizeScale::DEFAULT,
    prose: ProseTokens {
        color_primary: "hsl(0deg 0% 9%)",
    },
    canva: CanvaPalette::DEFAULT,
    gradient_adp: ["#d0768c", "#bf46a5", "#7029b2", "#341d8c"],
};
