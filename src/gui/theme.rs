//! Custom theme definitions for the application - Light Theme

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Gradient, Shadow, Theme, Vector};

use crate::session::Banner;

// --- Palette ---

pub const BACKGROUND_START: Color = Color::from_rgb(0.941, 0.976, 1.0); // Sky Blue 50
pub const BACKGROUND_END: Color = Color::from_rgb(0.953, 0.910, 1.0); // Purple 50

pub const INDIGO_500: Color = Color::from_rgb(0.388, 0.400, 0.945); // Primary actions
pub const INDIGO_400: Color = Color::from_rgb(0.506, 0.549, 0.973); // Focus ring
pub const PURPLE_500: Color = Color::from_rgb(0.545, 0.361, 0.965);

pub const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
pub const BLUE_50: Color = Color::from_rgb(0.937, 0.965, 1.0);
pub const EMERALD_600: Color = Color::from_rgb(0.020, 0.588, 0.412);
pub const EMERALD_50: Color = Color::from_rgb(0.925, 0.992, 0.961);
pub const AMBER_600: Color = Color::from_rgb(0.851, 0.467, 0.024);
pub const AMBER_50: Color = Color::from_rgb(1.0, 0.984, 0.922);
pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
pub const RED_50: Color = Color::from_rgb(0.996, 0.949, 0.949);

pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // Primary text
pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388); // Secondary text
pub const GRAY_400: Color = Color::from_rgb(0.616, 0.639, 0.667); // Placeholder
pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // Borders
pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
pub const WHITE_85: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.85);

/// Foreground and background colors for a banner
pub fn banner_colors(banner: &Banner) -> (Color, Color) {
    match banner {
        Banner::Info(_) => (BLUE_600, BLUE_50),
        Banner::Success(_) => (EMERALD_600, EMERALD_50),
        Banner::Warning(_) => (AMBER_600, AMBER_50),
        Banner::Error(_) => (RED_500, RED_50),
    }
}

// --- Container Styles ---

pub struct MainGradientContainer;

impl container::StyleSheet for MainGradientContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(2.356)) // 135 degrees
                    .add_stop(0.0, BACKGROUND_START)
                    .add_stop(1.0, BACKGROUND_END),
            ))),
            ..Default::default()
        }
    }
}

pub struct CardContainer;

impl container::StyleSheet for CardContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Color(WHITE_85)),
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: 20.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.388, 0.400, 0.945, 0.12),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 20.0,
            },
        }
    }
}

/// Tinted strip behind the status banner
pub struct BannerContainer {
    pub accent: Color,
    pub fill: Color,
}

impl BannerContainer {
    pub fn for_banner(banner: &Banner) -> Self {
        let (accent, fill) = banner_colors(banner);
        Self { accent, fill }
    }
}

impl container::StyleSheet for BannerContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(self.accent),
            background: Some(Background::Color(self.fill)),
            border: Border {
                color: self.accent,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(0.0))
                    .add_stop(0.0, INDIGO_500)
                    .add_stop(1.0, PURPLE_500),
            ))),
            text_color: WHITE,
            border: Border {
                radius: 14.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.388, 0.400, 0.945, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(GRAY_200)),
            text_color: GRAY_400,
            shadow: Shadow::default(),
            ..self.active(style)
        }
    }
}

pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: GRAY_600,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: GRAY_800,
            background: Some(Background::Color(GRAY_100)),
            ..self.active(style)
        }
    }
}

// --- Input Styles ---

/// Text input outline; red when the last submission was rejected
pub struct InputStyle {
    pub invalid: bool,
}

impl InputStyle {
    fn outline(&self) -> Color {
        if self.invalid {
            RED_500
        } else {
            GRAY_200
        }
    }
}

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(WHITE),
            border: Border {
                radius: 14.0.into(),
                width: 2.0,
                color: self.outline(),
            },
            icon_color: GRAY_600,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        if self.invalid {
            return active;
        }
        text_input::Appearance {
            border: Border {
                color: INDIGO_400,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        GRAY_800
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.388, 0.400, 0.945, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(GRAY_100),
            ..self.active(style)
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }
}
