use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while converting a configured palette.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ThemeError {
    #[error("invalid color '{value}' for '{field}'")]
    InvalidColor { field: &'static str, value: String },
}

/// Raw palette as written in the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) tab_active_background: String,
    pub(crate) tab_inactive_background: String,
    pub(crate) tab_inactive_foreground: String,
    pub(crate) accent: String,
    pub(crate) icon_active: String,
    pub(crate) icon_inactive: String,
    pub(crate) danger: String,
    pub(crate) overlay: String,
    pub(crate) overlay_hover: String,
    pub(crate) separator: String,
    pub(crate) dim_foreground: String,
}

impl Default for ColorPalette {
    /// Hex form of [`IcedColorPalette::default`].
    fn default() -> Self {
        let p = IcedColorPalette::default();
        Self {
            foreground: to_hex(p.foreground),
            background: to_hex(p.background),
            surface: to_hex(p.surface),
            tab_active_background: to_hex(p.tab_active_background),
            tab_inactive_background: to_hex(p.tab_inactive_background),
            tab_inactive_foreground: to_hex(p.tab_inactive_foreground),
            accent: to_hex(p.accent),
            icon_active: to_hex(p.icon_active),
            icon_inactive: to_hex(p.icon_inactive),
            danger: to_hex(p.danger),
            overlay: to_hex(p.overlay),
            overlay_hover: to_hex(p.overlay_hover),
            separator: to_hex(p.separator),
            dim_foreground: to_hex(p.dim_foreground),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) tab_active_background: Color,
    pub(crate) tab_inactive_background: Color,
    pub(crate) tab_inactive_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) icon_active: Color,
    pub(crate) icon_inactive: Color,
    pub(crate) danger: Color,
    pub(crate) overlay: Color,
    pub(crate) overlay_hover: Color,
    pub(crate) separator: Color,
    pub(crate) dim_foreground: Color,
}

impl Default for IcedColorPalette {
    fn default() -> Self {
        Self {
            foreground: Color::from_rgb8(0x1A, 0x1A, 0x1A),
            background: Color::from_rgb8(0x44, 0x44, 0x44),
            surface: Color::from_rgb8(0xF9, 0xFA, 0xFB),
            tab_active_background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            tab_inactive_background: Color::from_rgb8(0x9D, 0xA4, 0xB2),
            tab_inactive_foreground: Color::from_rgb8(0x67, 0x72, 0x89),
            accent: Color::from_rgb8(0x2F, 0x72, 0xE2),
            icon_active: Color::from_rgb8(0xF5, 0x9D, 0x0E),
            icon_inactive: Color::from_rgb8(0x8C, 0x93, 0xA1),
            danger: Color::from_rgb8(0xEF, 0x49, 0x4F),
            overlay: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            overlay_hover: Color::from_rgb8(0xF3, 0xF4, 0xF6),
            separator: Color::from_rgb8(0xE1, 0xE1, 0xE1),
            dim_foreground: Color::from_rgb8(0x6B, 0x72, 0x80),
        }
    }
}

impl TryFrom<&ColorPalette> for IcedColorPalette {
    type Error = ThemeError;

    fn try_from(p: &ColorPalette) -> Result<Self, Self::Error> {
        Ok(Self {
            foreground: parse_field("foreground", &p.foreground)?,
            background: parse_field("background", &p.background)?,
            surface: parse_field("surface", &p.surface)?,
            tab_active_background: parse_field(
                "tab_active_background",
                &p.tab_active_background,
            )?,
            tab_inactive_background: parse_field(
                "tab_inactive_background",
                &p.tab_inactive_background,
            )?,
            tab_inactive_foreground: parse_field(
                "tab_inactive_foreground",
                &p.tab_inactive_foreground,
            )?,
            accent: parse_field("accent", &p.accent)?,
            icon_active: parse_field("icon_active", &p.icon_active)?,
            icon_inactive: parse_field("icon_inactive", &p.icon_inactive)?,
            danger: parse_field("danger", &p.danger)?,
            overlay: parse_field("overlay", &p.overlay)?,
            overlay_hover: parse_field("overlay_hover", &p.overlay_hover)?,
            separator: parse_field("separator", &p.separator)?,
            dim_foreground: parse_field("dim_foreground", &p.dim_foreground)?,
        })
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<Color, ThemeError> {
    parse_hex_color(value).ok_or_else(|| ThemeError::InvalidColor {
        field,
        value: value.to_owned(),
    })
}

/// Format a color as `#RRGGBB`, dropping alpha.
pub(crate) fn to_hex(color: Color) -> String {
    let [r, g, b, _] = color.into_rgba8();
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Parse `#RRGGBB` (the leading `#` is optional).
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).ok()
    };

    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("default"),
            iced_palette: IcedColorPalette::default(),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.icon_active,
            danger: palette.danger,
            warning: palette.icon_active,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build an application theme from a raw palette.
    pub(crate) fn from_palette(
        id: String,
        raw_palette: &ColorPalette,
    ) -> Result<Self, ThemeError> {
        let iced_palette = IcedColorPalette::try_from(raw_palette)?;
        Ok(Self { id, iced_palette })
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Owns the current global theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Replace the current theme with a custom palette, keeping the
    /// previous theme when the palette does not parse.
    pub(crate) fn set_custom_palette(&mut self, palette: &ColorPalette) {
        match AppTheme::from_palette(String::from("custom"), palette) {
            Ok(theme) => self.current = theme,
            Err(err) => {
                log::warn!("palette override ignored: {err}");
            },
        }
    }
}
