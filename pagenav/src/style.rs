use iced::widget::container;
use iced::{Border, Color};

use super::theme::{IcedColorPalette, ThemeProps};

const TAB_RADIUS: f32 = 6.0;
const INACTIVE_TAB_ALPHA: f32 = 0.15;
const CARRIED_TAB_ALPHA: f32 = 0.5;

pub(crate) fn menu_panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = *theme.theme.iced_palette();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.overlay.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: palette.separator,
            radius: iced::border::Radius::new(8.0),
        },
        shadow: iced::Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Visual state of a single page tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TabLook {
    pub(crate) is_active: bool,
    pub(crate) is_carried: bool,
}

pub(crate) fn tab_style(
    palette: &IcedColorPalette,
    look: TabLook,
) -> container::Style {
    let (background, foreground, border) = if look.is_active {
        (
            palette.tab_active_background,
            palette.foreground,
            Border {
                width: 1.0,
                color: palette.accent,
                radius: TAB_RADIUS.into(),
            },
        )
    } else {
        (
            with_alpha(palette.tab_inactive_background, INACTIVE_TAB_ALPHA),
            palette.tab_inactive_foreground,
            Border {
                radius: TAB_RADIUS.into(),
                ..Border::default()
            },
        )
    };

    let (background, foreground) = if look.is_carried {
        (
            fade(background, CARRIED_TAB_ALPHA),
            fade(foreground, CARRIED_TAB_ALPHA),
        )
    } else {
        (background, foreground)
    };

    container::Style {
        background: Some(background.into()),
        text_color: Some(foreground),
        border,
        ..Default::default()
    }
}

/// Tint for the page glyph, faded with the carried tab.
pub(crate) fn tab_glyph_color(color: Color, look: TabLook) -> Color {
    if look.is_carried {
        fade(color, CARRIED_TAB_ALPHA)
    } else {
        color
    }
}

pub(crate) fn drop_indicator_style(
    palette: &IcedColorPalette,
    visible: bool,
) -> container::Style {
    container::Style {
        background: visible.then(|| palette.accent.into()),
        ..Default::default()
    }
}

pub(crate) fn separator_style(palette: &IcedColorPalette) -> container::Style {
    container::Style {
        background: Some(palette.separator.into()),
        ..Default::default()
    }
}

fn with_alpha(mut color: Color, alpha: f32) -> Color {
    color.a = alpha;
    color
}

fn fade(mut color: Color, factor: f32) -> Color {
    color.a *= factor;
    color
}
