use iced::Color;
use iced::widget::svg;
use serde::{Deserialize, Serialize};

use crate::icons;
use crate::theme::IcedColorPalette;

/// Closed set of page icon kinds.
///
/// Serialized as a lowercase tag (`"info"`, `"document"`, `"check"`). Any
/// other tag maps to [`PageIcon::None`], which renders no glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub(crate) enum PageIcon {
    Info,
    Document,
    Check,
    #[default]
    None,
}

impl PageIcon {
    pub(crate) fn from_tag(tag: &str) -> Self {
        match tag {
            "info" => Self::Info,
            "document" => Self::Document,
            "check" => Self::Check,
            _ => Self::None,
        }
    }

    pub(crate) fn tag(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Document => "document",
            Self::Check => "check",
            Self::None => "none",
        }
    }
}

impl From<String> for PageIcon {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<PageIcon> for String {
    fn from(icon: PageIcon) -> Self {
        String::from(icon.tag())
    }
}

/// Vector glyph for a page icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Glyph(&'static [u8]);

impl Glyph {
    pub(crate) fn handle(self) -> svg::Handle {
        svg::Handle::from_memory(self.0)
    }
}

/// Map an icon to its glyph. [`PageIcon::None`] has no glyph.
pub(crate) fn resolve(icon: PageIcon) -> Option<Glyph> {
    match icon {
        PageIcon::Info => Some(Glyph(icons::PAGE_INFO)),
        PageIcon::Document => Some(Glyph(icons::PAGE_DOCUMENT)),
        PageIcon::Check => Some(Glyph(icons::PAGE_CHECK)),
        PageIcon::None => None,
    }
}

/// Glyph tint for a page, accented when the page is active.
pub(crate) fn glyph_color(
    palette: &IcedColorPalette,
    is_active: bool,
) -> Color {
    if is_active {
        palette.icon_active
    } else {
        palette.icon_inactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_known_icons_when_resolved_then_each_has_distinct_glyph() {
        let info = resolve(PageIcon::Info).expect("info glyph");
        let document = resolve(PageIcon::Document).expect("document glyph");
        let check = resolve(PageIcon::Check).expect("check glyph");

        assert_ne!(info, document);
        assert_ne!(document, check);
        assert_ne!(info, check);
        assert!(info.0.starts_with(b"<svg"));
    }

    #[test]
    fn given_unknown_tag_when_resolved_then_no_glyph() {
        let icon = PageIcon::from_tag("/icons/unknown.svg");
        assert_eq!(icon, PageIcon::None);
        assert!(resolve(icon).is_none());
    }

    #[test]
    fn given_icon_tags_when_deserialized_then_unknown_falls_back_to_none() {
        let icons: Vec<PageIcon> =
            serde_json::from_str(r#"["info", "document", "check", "star"]"#)
                .expect("tags should deserialize");

        assert_eq!(
            icons,
            vec![
                PageIcon::Info,
                PageIcon::Document,
                PageIcon::Check,
                PageIcon::None,
            ]
        );
    }

    #[test]
    fn given_active_flag_when_coloring_glyph_then_accent_only_when_active() {
        let palette = IcedColorPalette::default();

        assert_eq!(glyph_color(&palette, true), palette.icon_active);
        assert_eq!(glyph_color(&palette, false), palette.icon_inactive);
    }
}
