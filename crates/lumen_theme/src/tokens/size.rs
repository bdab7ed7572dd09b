//! Image, icon, and avatar size scales

use lumen_core::style::Style;

macro_rules! size_scale {
    (
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident => $key:literal, $value:literal; )* }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
        pub enum $name {
            $( $variant, )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant, )*];

            /// Edge length in points
            pub fn value(self) -> f32 {
                match self {
                    $( $name::$variant => $value, )*
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $key, )*
                }
            }

            pub fn from_name(name: &str) -> Option<$name> {
                Self::ALL.iter().copied().find(|size| size.name() == name)
            }
        }
    };
}

size_scale! {
    /// Square image sizes
    ImageSize {
        Xs => "xs", 16.0;
        Sm => "sm", 24.0;
        Md => "md", 32.0;
        Lg => "lg", 40.0;
        Xl => "xl", 48.0;
        Xxl => "xxl", 56.0;
        X3l => "3xl", 64.0;
        X4l => "4xl", 72.0;
        X5l => "5xl", 80.0;
        X6l => "6xl", 88.0;
        X7l => "7xl", 96.0;
        X8l => "8xl", 104.0;
        X9l => "9xl", 112.0;
        X10l => "10xl", 120.0;
    }
}

size_scale! {
    /// Icon glyph sizes
    IconSize {
        Xs => "xs", 12.0;
        Sm => "sm", 16.0;
        Md => "md", 20.0;
        Lg => "lg", 24.0;
        Xl => "xl", 28.0;
        Xxl => "xxl", 32.0;
    }
}

size_scale! {
    /// Circular avatar diameters
    AvatarSize {
        Xs => "xs", 24.0;
        Sm => "sm", 32.0;
        Md => "md", 40.0;
        Lg => "lg", 48.0;
        Xl => "xl", 56.0;
        Xxl => "xxl", 64.0;
        X3l => "3xl", 80.0;
        X4l => "4xl", 96.0;
    }
}

impl ImageSize {
    /// Look up by name, falling back to [`ImageSize::Md`] for unknown names
    pub fn from_name_or_default(name: &str) -> ImageSize {
        Self::from_name(name).unwrap_or(ImageSize::Md)
    }

    pub fn style(self) -> Style {
        square(self.value())
    }
}

impl IconSize {
    pub fn style(self) -> Style {
        square(self.value())
    }
}

impl AvatarSize {
    /// Square style with a radius that makes it a circle
    pub fn style(self) -> Style {
        let dimension = self.value();
        square(dimension).border_radius(dimension / 2.0)
    }
}

fn square(dimension: f32) -> Style {
    Style::new().width(dimension).height(dimension)
}
