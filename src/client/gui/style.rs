// Palette and container styles shared by the home screen widgets
use iced::{Color, Font};
use iced::widget::container::Appearance;

use crate::client::models::analysis::BadgeStyle;
use crate::client::services::notification::ToastLevel;

pub const BG_MAIN: Color = Color::from_rgb(0.93, 0.95, 0.97);
pub const CARD_BG: Color = Color::WHITE;
pub const SURFACE_MUTED: Color = Color::from_rgb(0.89, 0.91, 0.93);
pub const PRIMARY: Color = Color::from_rgb(0.15, 0.39, 0.92);
pub const PRIMARY_DARK: Color = Color::from_rgb(0.11, 0.25, 0.69);
pub const ACCENT: Color = Color::from_rgb(0.06, 0.72, 0.51);
pub const DANGER: Color = Color::from_rgb(0.86, 0.15, 0.15);
pub const WARNING: Color = Color::from_rgb(0.96, 0.62, 0.04);
pub const BORDER: Color = Color::from_rgb(0.82, 0.84, 0.87);
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.2, 0.23, 0.28);
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.42, 0.45, 0.5);

pub const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
pub const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn rounded(background: Color, border_color: Color, border_width: f32, radius: f32) -> Appearance {
    Appearance {
        background: Some(iced::Background::Color(background)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: border_width,
            color: border_color,
            radius: radius.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

pub fn bg_main_appearance(_: &iced::Theme) -> Appearance {
    rounded(BG_MAIN, Color::TRANSPARENT, 0.0, 0.0)
}

pub fn card_appearance(_: &iced::Theme) -> Appearance {
    Appearance {
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
        },
        ..rounded(CARD_BG, BORDER, 1.0, 16.0)
    }
}

pub fn tabs_appearance(_: &iced::Theme) -> Appearance {
    rounded(SURFACE_MUTED, Color::TRANSPARENT, 0.0, 12.0)
}

pub fn drop_zone_appearance(dragging: bool, has_file: bool) -> Appearance {
    if dragging {
        rounded(Color::from_rgb(0.92, 0.95, 1.0), PRIMARY, 2.0, 16.0)
    } else if has_file {
        rounded(Color::from_rgb(0.93, 0.99, 0.96), ACCENT, 2.0, 16.0)
    } else {
        rounded(Color::from_rgb(0.98, 0.98, 0.99), BORDER, 2.0, 16.0)
    }
}

pub fn badge_color(style: BadgeStyle) -> Color {
    match style {
        BadgeStyle::Primary => PRIMARY,
        BadgeStyle::Danger => DANGER,
    }
}

pub fn badge_appearance(style: BadgeStyle) -> Appearance {
    Appearance {
        text_color: Some(Color::WHITE),
        ..rounded(badge_color(style), Color::TRANSPARENT, 0.0, 999.0)
    }
}

pub fn toast_color(level: ToastLevel) -> Color {
    match level {
        ToastLevel::Success => Color::from_rgb(0.2, 0.8, 0.4),
        ToastLevel::Error => DANGER,
        ToastLevel::Warning => WARNING,
    }
}

pub fn toast_appearance(level: ToastLevel) -> Appearance {
    Appearance {
        text_color: Some(Color::WHITE),
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
        ..rounded(toast_color(level), Color::TRANSPARENT, 0.0, 8.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_has_exactly_two_colours() {
        assert_eq!(badge_color(BadgeStyle::Primary), PRIMARY);
        assert_eq!(badge_color(BadgeStyle::Danger), DANGER);
        assert_ne!(PRIMARY, DANGER);
    }
}
