use super::{CanvaPalette, ColorTable, FontSizeScale, FormTokens, ProseTokens, StatusExtras};
use crate::tokens::{ColorTokens, FontFamilies};
use lumen_core::style::FontWeight;

/// The light theme
pub static LIGHT: ColorTable = ColorTable {
    colors: ColorTokens {
        text: "#11181C",
        text_muted: "#687076",
        text_secondary: "#888",
        text_secondary_low_light: "#DDDDDD",
        text_inverse: "#fff",
        tint: "#8b3dff",
        icon: "#687076",
        tab_icon_default: "#687076",
        tab_icon_selected: "#4a2e7e",
        primary: "#000",
        theme_primary: "#8b3dff",
        secondary: "#6c757d",
        secondary_light: "#adb5bd",
        tertiary: "#6c757d",
        accent_1: "#D4AF37",
        accent_2: "#B8C2CC",
        primary_container: "#d6c4f5",
        on_primary_container: "#1a0038",
        on_primary: "#ffffff",
        on_surface: "#1a1c1e",
        outline: "#79747e",
        background: "rgba(247, 247, 247, 2)",
        surface: "#f8f9fa",
        surface_variant: "#e9ecef",
        card: "#FFFFFF",
        border: "#DDDDDD",
        divider: "#dee2e6",
        disabled: "#ced4da",
        warning: "#ffc107",
        error: "#dc3545",
        success: "#28a745",
        info: "#29B6F6",
        bg_error: "#fff2f4",
        bg_error_border: "#e30000",
        fg_error: "#e30000",
        bg_warning: "#fae9a3",
        bg_warning_border: "#c9a33b",
        fg_warning: "#856404",
        icon_primary: "#11181C",
        icon_accent: "#8b3dff",
        icon_muted: "#B0B0B0",
        button_primary_background: "#000",
        button_primary_text: "#FFFFFF",
        button_primary_border: "transparent",
        button_secondary_background: "#f8f9fa",
        button_secondary_text: "#11181C",
        button_secondary_border: "#dee2e6",
        button_outline_background: "transparent",
        button_outline_text: "#000",
        button_outline_border: "#000",
        button_inverted_background: "#2C2C2E",
        button_inverted_text: "#FFFFFF",
        button_inverted_border: "#48484A",
        button_disabled_background: "#F0F0F0",
        button_disabled_border: "#E0E0E0",
        button_disabled_text: "#A0A0A0",
        selection_control: "#8b3dff",
        input_text: "#11181C",
        input_placeholder: "#545353",
        input_background: "#F3F3F3",
        input_border: "#F3F3F3",
        label_color: "#433f3f",
        error_text_color: "#dc3545",
        form_background: "#FFFFFF",
        card_border: "#E5E7EB",
        separator: "#EDEDED",
        top_text: "#222",
        secondary_text: "#888",
        secondary_text_muted: "#DDDDDD",
        tiercery_text_muted: "#C6C6C6",
        quadiary_text_muted: "#A6A6A6",
        status_approved_bg: "#d1e7dd",
        status_approved_text: "#0f5132",
        status_pending_bg: "#fff3cd",
        status_pending_text: "#664d03",
        status_rejected_bg: "#f8d7da",
        status_rejected_text: "#842029",
        rider_tone: "#b197fc",
        driver_tone: "#0d6efd",
        guide_tone: "#20c997",
        admin_tone: "#6610f2",
        delivery_accent: "#D4AF37",
        sidebar_line: "#dee2e6",
        smoke: "#F5F5F7",
        active_tint_color: "#4a2e7fcc",
        active_navigation_background: "#a370fc26",
        main_secondary_color: "#a370fc26",
        base_gray_05: "#E5E2DC",
        base_gray_80: "#30302E",
        gradient_primary_start: "#00a0a8",
        gradient_primary_end: "#7d2ae8",
        gradient_secondary_start: "#667eea",
        gradient_secondary_end: "#764ba2",
        background_surface_200: "hsl(0deg 0% 95.3%)",
        background_surface_300: "rgba(26, 26, 26, 0.9)",
        background_surface_400: "rgba(40, 40, 40, 0.4)",
        background_surface_500: "rgba(31, 31, 31, 0.9)",
        post_primary: "#8b3dff",
        post_background: "rgba(247, 247, 247, 1)",
        post_surface: "#1a1d21",
        post_grey: "#9BA1A6",
        white: "#FFFFFF",
        black: "#000000",
    },
    status_extras: Some(StatusExtras {
        warning_bg: "rgba(245,133,32,0.08)",
        warning_color: "rgba(245,133,32,1)",
        success_border_color: "#cbf3ec",
        success_background_color: "#cbf3ec",
        success_color: "#25694f",
    }),
    form: FormTokens {
        input_font_family: FontFamilies::MEDIUM,
        input_font_size: 16.0,
        input_font_weight: FontWeight::Normal,
        input_line_height: 24.0,

        label_font_family: FontFamilies::MEDIUM,
        label_font_size: 17.0,
        label_font_weight: FontWeight::Normal,
        label_line_height: 20.0,

        error_text_font_family: FontFamilies::REGULAR,
        error_text_font_size: 13.0,
        error_text_font_weight: FontWeight::Normal,
        error_text_line_height: 16.0,

        form_gap: 24.0,
        label_margin_bottom: 4.0,
        label_padding_left: 8.0,
        smart_input_margin_top: 8.0,
        smart_input_margin_bottom: 8.0,

        form_wrapper_padding_top: 40.0,
        form_wrapper_padding_right: 24.0,
        form_wrapper_padding_bottom: 40.0,
        form_wrapper_padding_left: 24.0,
    },
    border_radius: 11.0,
    font_sizes: FontSizeScale::DEFAULT,
    prose: ProseTokens {
        color_primary: "hsl(0deg 0% 92.9%)",
    },
    canva: CanvaPalette::DEFAULT,
    gradient_adp: ["#d0768c", "#bf46a5", "#7029b2", "#341d8c"],
};
