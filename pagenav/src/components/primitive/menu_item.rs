use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, row, svg, text};
use iced::{Color, Element, Length, alignment};

use crate::theme::{IcedColorPalette, ThemeProps};

const MENU_ITEM_HEIGHT: f32 = 28.0;
const MENU_ITEM_FONT_SIZE: f32 = 13.0;
const MENU_ITEM_ICON_SIZE: f32 = 16.0;
const MENU_ITEM_SPACING: f32 = 8.0;
const MENU_ITEM_HORIZONTAL_PADDING: f32 = 10.0;
const MENU_ITEM_VERTICAL_PADDING: f32 = 1.0;

/// UI events emitted by a menu item.
#[derive(Debug, Clone)]
pub(crate) enum MenuItemEvent {
    Pressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuItemVariant {
    Standard,
    Danger,
}

/// Props for rendering a menu item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuItemProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) icon: &'static [u8],
    pub(crate) variant: MenuItemVariant,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a single icon + label row used in context menus.
pub(crate) fn view<'a>(props: MenuItemProps<'a>) -> Element<'a, MenuItemEvent> {
    let palette = *props.theme.theme.iced_palette();
    let variant = props.variant;
    let tint = item_color(&palette, variant);

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(MENU_ITEM_ICON_SIZE))
        .height(Length::Fixed(MENU_ITEM_ICON_SIZE))
        .style(move |_, _| svg::Style { color: Some(tint) });

    let label = text(props.label)
        .size(MENU_ITEM_FONT_SIZE)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center);

    let content = row![icon, label]
        .spacing(MENU_ITEM_SPACING)
        .align_y(alignment::Vertical::Center);

    button(content)
        .padding([MENU_ITEM_VERTICAL_PADDING, MENU_ITEM_HORIZONTAL_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(MENU_ITEM_HEIGHT))
        .style(move |_, status| menu_button_style(&palette, variant, status))
        .on_press(MenuItemEvent::Pressed)
        .into()
}

fn item_color(palette: &IcedColorPalette, variant: MenuItemVariant) -> Color {
    match variant {
        MenuItemVariant::Standard => palette.foreground,
        MenuItemVariant::Danger => palette.danger,
    }
}

fn menu_button_style(
    palette: &IcedColorPalette,
    variant: MenuItemVariant,
    status: ButtonStatus,
) -> button::Style {
    let background = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => palette.overlay_hover,
        _ => palette.overlay,
    };

    button::Style {
        background: Some(background.into()),
        text_color: item_color(palette, variant),
        border: iced::Border {
            width: 0.0,
            radius: iced::border::Radius::new(4.0),
            ..Default::default()
        },
        ..Default::default()
    }
}
