use iced::widget::{Space, Stack, column, container, mouse_area};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::style::separator_style;
use crate::theme::ThemeProps;
use crate::widgets::page_detail::view::heading;
use crate::widgets::page_tabs::view::{context_menu, tab_bar};
use crate::widgets::page_tabs::{PageTabsEvent, PageTabsIntent};

const HEADER_SEPARATOR_HEIGHT: f32 = 1.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(app.theme_manager.current());
    let palette = *theme_props.theme.iced_palette();
    let page_tabs_vm = app.widgets.page_tabs.vm();

    let tab_bar = tab_bar::view(tab_bar::TabBarProps {
        vm: page_tabs_vm,
        active_page_id: app.widgets.page_detail.active_page_id(),
        theme: theme_props,
    })
    .map(page_tabs_intent);

    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_SEPARATOR_HEIGHT))
        .style(move |_| separator_style(&palette));

    let heading = heading::view(heading::HeadingProps {
        vm: app.widgets.page_detail.vm(),
        theme: theme_props,
    });

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![
            column![tab_bar, separator, heading]
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        ];

    // Page options menu overlay
    if let Some(menu) = page_tabs_vm.context_menu {
        layers.push(
            context_menu::view(context_menu::ContextMenuProps {
                menu,
                theme: theme_props,
            })
            .map(page_tabs_intent),
        );
    }

    let content = Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill);

    // Pointer tracking for menu anchoring, and the window-wide release that
    // ends a reorder gesture dropped outside any slot.
    mouse_area(content)
        .on_move(|position| AppEvent::CursorMoved { position })
        .on_release(page_tabs_intent(PageTabsIntent::DragEnded))
        .into()
}

fn page_tabs_intent(intent: PageTabsIntent) -> AppEvent {
    AppEvent::PageTabs(PageTabsEvent::Intent(intent))
}
