use iced::widget::{button, container, svg};
use iced::{Color, Element, Length, alignment};

use crate::theme::ThemeProps;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// How the glyph is tinted at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconButtonVariant {
    /// Neutral glyph, accent on hover.
    Standard,
    /// Invisible glyph that only appears on hover.
    Reveal,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

/// Render a square, chromeless icon button.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let (base_color, hover_color) = resolve_variant_colors(
        props.variant,
        palette.icon_inactive,
        palette.accent,
    );

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(0.0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(|_, _| button::Style::default())
        .into()
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    default_base: Color,
    accent: Color,
) -> (Color, Color) {
    match variant {
        IconButtonVariant::Standard => (default_base, accent),
        IconButtonVariant::Reveal => (Color::TRANSPARENT, accent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_reveal_variant_when_resolving_then_glyph_hidden_until_hover() {
        let base = Color::from_rgb(0.1, 0.2, 0.3);
        let accent = Color::from_rgb(0.4, 0.5, 0.6);

        let (rest, hover) =
            resolve_variant_colors(IconButtonVariant::Reveal, base, accent);

        assert_eq!(rest, Color::TRANSPARENT);
        assert_eq!(hover, accent);
    }

    #[test]
    fn given_standard_variant_when_resolving_then_hover_uses_accent() {
        let base = Color::from_rgb(0.1, 0.2, 0.3);
        let accent = Color::from_rgb(0.4, 0.5, 0.6);

        let (rest, hover) =
            resolve_variant_colors(IconButtonVariant::Standard, base, accent);

        assert_eq!(rest, base);
        assert_eq!(hover, accent);
    }
}
