use iced::widget::{Space, Stack, column, container, mouse_area, text};
use iced::{Element, Length, Padding, Theme};

use crate::components::primitive::menu_item::{
    self, MenuItemProps, MenuItemVariant,
};
use crate::icons;
use crate::style::{menu_panel_style, separator_style};
use crate::theme::ThemeProps;
use crate::widgets::page_tabs::context_menu::{
    ContextMenuAction, ContextMenuState, MENU_WIDTH,
};
use crate::widgets::page_tabs::event::PageTabsIntent;

const MENU_CONTAINER_PADDING: f32 = 6.0;
const MENU_HEADER_FONT_SIZE: f32 = 12.0;
const MENU_HEADER_PADDING: [f32; 2] = [6.0, 10.0];
const SEPARATOR_HEIGHT: f32 = 1.0;
const SEPARATOR_MARGIN: f32 = 4.0;

/// Props for the page options menu overlay.
pub(crate) struct ContextMenuProps<'a> {
    pub(crate) menu: &'a ContextMenuState,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the page options menu above a full-viewport dismiss layer.
pub(crate) fn view(
    props: ContextMenuProps<'_>,
) -> Element<'_, PageTabsIntent, Theme, iced::Renderer> {
    let theme = props.theme;
    let palette = *theme.theme.iced_palette();

    let header = container(
        text("Settings")
            .size(MENU_HEADER_FONT_SIZE)
            .color(palette.dim_foreground),
    )
    .padding(MENU_HEADER_PADDING);

    let menu_content = column![
        header,
        separator(theme),
        item("Set as first page", ContextMenuAction::SetAsFirst, theme),
        item("Rename", ContextMenuAction::Rename, theme),
        item("Copy", ContextMenuAction::Copy, theme),
        item("Duplicate", ContextMenuAction::Duplicate, theme),
        separator(theme),
        item("Delete", ContextMenuAction::Delete, theme),
    ]
    .spacing(0);

    let menu_panel = container(menu_content)
        .width(Length::Fixed(MENU_WIDTH))
        .padding(MENU_CONTAINER_PADDING)
        .style(menu_panel_style(theme));

    let position = props.menu.position;
    let positioned_menu = container(menu_panel).padding(Padding {
        top: position.y,
        right: 0.0,
        bottom: 0.0,
        left: position.x,
    });

    // Dismiss layer
    let dismiss_layer = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(PageTabsIntent::ContextMenuDismiss)
    .on_right_press(PageTabsIntent::ContextMenuDismiss);

    Stack::with_children(vec![dismiss_layer.into(), positioned_menu.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn item<'a>(
    label: &'a str,
    action: ContextMenuAction,
    theme: ThemeProps<'a>,
) -> Element<'a, PageTabsIntent, Theme, iced::Renderer> {
    let (icon, variant) = match action {
        ContextMenuAction::SetAsFirst => {
            (icons::MENU_SET_FIRST, MenuItemVariant::Standard)
        },
        ContextMenuAction::Rename => {
            (icons::MENU_RENAME, MenuItemVariant::Standard)
        },
        ContextMenuAction::Copy => {
            (icons::MENU_COPY, MenuItemVariant::Standard)
        },
        ContextMenuAction::Duplicate => {
            (icons::MENU_DUPLICATE, MenuItemVariant::Standard)
        },
        ContextMenuAction::Delete => {
            (icons::MENU_DELETE, MenuItemVariant::Danger)
        },
    };

    menu_item::view(MenuItemProps {
        label,
        icon,
        variant,
        theme,
    })
    .map(move |_| PageTabsIntent::ContextMenuAction(action))
}

fn separator<'a>(
    theme: ThemeProps<'a>,
) -> Element<'a, PageTabsIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();
    container(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(SEPARATOR_HEIGHT))
            .style(move |_| separator_style(&palette)),
    )
    .padding([SEPARATOR_MARGIN, 0.0])
    .into()
}
