//! Raw palette values without semantic meaning
//!
//! Semantic tables and presets are composed from these.

pub struct PrimitiveColors;

impl PrimitiveColors {
    pub const WHITE: &'static str = "#FFFFFF";
    pub const BLACK: &'static str = "#000000";
    pub const TRANSPARENT: &'static str = "transparent";

    // Gray scale (light)
    pub const GRAY_50: &'static str = "#F3F3F3";
    pub const GRAY_75: &'static str = "#F0EFEF";
    pub const GRAY_100: &'static str = "#E8E8E8";
    pub const GRAY_200: &'static str = "#DDDDDD";
    pub const GRAY_250: &'static str = "#D1D1D1";
    pub const GRAY_300: &'static str = "#C6C6C6";
    pub const GRAY_400: &'static str = "#A6A6A6";
    pub const GRAY_500: &'static str = "#868686";
    pub const GRAY_600: &'static str = "#727272";
    pub const GRAY_700: &'static str = "#5E5E5E";
    pub const GRAY_750: &'static str = "#433f3f";
    pub const GRAY_800: &'static str = "#4B4B4B";
    pub const GRAY_900: &'static str = "#282828";
    pub const GRAY_950: &'static str = "rgba(30, 30, 30, 0.8)";

    // Gray scale (dark)
    pub const GRAY_50_DARK: &'static str = "#161616";
    pub const GRAY_100_DARK: &'static str = "#292929";
    pub const GRAY_200_DARK: &'static str = "#383838";
    pub const GRAY_300_DARK: &'static str = "#484848";
    pub const GRAY_400_DARK: &'static str = "#5D5D5D";
    pub const GRAY_500_DARK: &'static str = "#717171";
    pub const GRAY_600_DARK: &'static str = "#8C8C8C";
    pub const GRAY_700_DARK: &'static str = "#ABABAB";
    pub const GRAY_800_DARK: &'static str = "#C4C4C4";
    pub const GRAY_900_DARK: &'static str = "#DEDEDE";

    // Brand
    pub const BRAND_PRIMARY: &'static str = "#8b3dff";
    pub const BRAND_PRIMARY_LIGHT: &'static str = "#a370fc";
    pub const BRAND_PRIMARY_DARK: &'static str = "#4a2e7e";
}
