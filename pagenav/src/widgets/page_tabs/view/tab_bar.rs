use iced::widget::text::Wrapping;
use iced::widget::{
    Space, button, container, mouse_area, row, scrollable, svg, text,
};
use iced::{Alignment, Element, Length, Theme, mouse};

use crate::components::primitive::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::icons;
use crate::style::{TabLook, drop_indicator_style, tab_glyph_color, tab_style};
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::page_tabs::drag::{DragState, IndicatorEdge};
use crate::widgets::page_tabs::event::PageTabsIntent;
use crate::widgets::page_tabs::icon::{glyph_color, resolve};
use crate::widgets::page_tabs::model::{Page, PageId, PageTabsViewModel};

pub(crate) const TAB_BAR_HEIGHT: f32 = 44.0;
const TAB_HEIGHT: f32 = 32.0;
const TAB_MAX_WIDTH: f32 = 220.0;
const TAB_HORIZONTAL_PADDING: f32 = 10.0;
const TAB_CONTENT_SPACING: f32 = 6.0;
const TAB_FONT_SIZE: f32 = 13.0;
const TAB_ICON_SIZE: f32 = 16.0;
const OPTIONS_BUTTON_SIZE: f32 = 20.0;
const OPTIONS_ICON_SIZE: f32 = 16.0;
const INSERT_GAP_WIDTH: f32 = 20.0;
const INSERT_ICON_SIZE: f32 = 12.0;
const INDICATOR_WIDTH: f32 = 2.0;
const BAR_PADDING: f32 = 6.0;
const TITLE_MAX_CHARS: usize = 24;

/// Props for rendering the page tab bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TabBarProps<'a> {
    pub(crate) vm: PageTabsViewModel<'a>,
    pub(crate) active_page_id: Option<&'a PageId>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the scrollable strip of page tabs with the trailing add slot.
pub(crate) fn view<'a>(
    props: TabBarProps<'a>,
) -> Element<'a, PageTabsIntent, Theme, iced::Renderer> {
    let pages = props.vm.pages;
    let drag = props.vm.drag;

    let mut strip = row![].spacing(0).align_y(Alignment::Center);
    for (index, page) in pages.iter().enumerate() {
        let is_active = props.active_page_id == Some(page.id());
        strip = strip.push(page_slot(
            PageSlot {
                index,
                page_count: pages.len(),
                is_active,
            },
            page,
            drag,
            props.theme,
        ));
    }
    strip = strip.push(add_page_slot(pages.len(), drag, props.theme));

    let scroll = scrollable::Scrollable::with_direction(
        strip,
        scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .width(Length::Fill);

    let palette = *props.theme.theme.iced_palette();
    container(scroll)
        .padding([0.0, BAR_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(TAB_BAR_HEIGHT))
        .align_y(Alignment::Center)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            ..Default::default()
        })
        .into()
}

/// Which edge of a slot shows the drop indicator.
///
/// The trailing add slot (`slot == page_count`) always reports its leading
/// edge, so a drop there reads as "after the last page".
fn indicator_edge(
    drag: DragState,
    slot: usize,
    page_count: usize,
) -> Option<IndicatorEdge> {
    let indicator = drag.indicator(page_count).filter(|i| i.slot == slot)?;
    if slot >= page_count {
        Some(IndicatorEdge::Leading)
    } else {
        Some(indicator.edge)
    }
}

#[derive(Debug, Clone, Copy)]
struct PageSlot {
    index: usize,
    page_count: usize,
    is_active: bool,
}

fn page_slot<'a>(
    slot: PageSlot,
    page: &'a Page,
    drag: DragState,
    theme: ThemeProps<'a>,
) -> Element<'a, PageTabsIntent, Theme, iced::Renderer> {
    let PageSlot {
        index,
        page_count,
        is_active,
    } = slot;
    let edge = indicator_edge(drag, index, page_count);
    let palette = theme.theme.iced_palette();

    let look = TabLook {
        is_active,
        is_carried: drag.is_carrying(index),
    };
    let tab = mouse_area(tab_pill(page, look, theme))
        .on_press(PageTabsIntent::TabPressed { index })
        .on_right_press(PageTabsIntent::TabRightClicked {
            page_id: page.id().clone(),
        })
        .interaction(mouse::Interaction::Pointer);

    let content = row![
        indicator(palette, edge == Some(IndicatorEdge::Leading)),
        tab,
        insert_gap(index, theme),
        indicator(palette, edge == Some(IndicatorEdge::Trailing)),
    ]
    .align_y(Alignment::Center);

    mouse_area(content)
        .on_enter(PageTabsIntent::SlotHovered { index })
        .on_release(PageTabsIntent::SlotReleased { index })
        .into()
}

fn tab_pill<'a>(
    page: &'a Page,
    look: TabLook,
    theme: ThemeProps<'a>,
) -> Element<'a, PageTabsIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();
    let mut content = row![]
        .spacing(TAB_CONTENT_SPACING)
        .align_y(Alignment::Center);

    if let Some(glyph) = resolve(page.icon()) {
        let color =
            tab_glyph_color(glyph_color(&palette, look.is_active), look);
        content = content.push(
            svg::Svg::new(glyph.handle())
                .width(Length::Fixed(TAB_ICON_SIZE))
                .height(Length::Fixed(TAB_ICON_SIZE))
                .style(move |_, _| svg::Style { color: Some(color) }),
        );
    }

    content = content.push(
        text(ellipsize(page.title()))
            .size(TAB_FONT_SIZE)
            .wrapping(Wrapping::None),
    );

    if look.is_active {
        let page_id = page.id().clone();
        content = content.push(
            icon_button::view(IconButtonProps {
                icon: icons::PAGE_OPTIONS,
                theme,
                size: OPTIONS_BUTTON_SIZE,
                icon_size: OPTIONS_ICON_SIZE,
                variant: IconButtonVariant::Standard,
            })
            .map(move |_| PageTabsIntent::OptionsPressed {
                page_id: page_id.clone(),
            }),
        );
    }

    container(content)
        .padding([0.0, TAB_HORIZONTAL_PADDING])
        .max_width(TAB_MAX_WIDTH)
        .height(Length::Fixed(TAB_HEIGHT))
        .align_y(Alignment::Center)
        .style(move |_| tab_style(&palette, look))
        .into()
}

fn insert_gap<'a>(
    index: usize,
    theme: ThemeProps<'a>,
) -> Element<'a, PageTabsIntent, Theme, iced::Renderer> {
    icon_button::view(IconButtonProps {
        icon: icons::INSERT_PAGE,
        theme,
        size: INSERT_GAP_WIDTH,
        icon_size: INSERT_ICON_SIZE,
        variant: IconButtonVariant::Reveal,
    })
    .map(move |_| PageTabsIntent::AddPage { after_index: index })
}

fn add_page_slot<'a>(
    page_count: usize,
    drag: DragState,
    theme: ThemeProps<'a>,
) -> Element<'a, PageTabsIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();
    let edge = indicator_edge(drag, page_count, page_count);
    let foreground = palette.dim_foreground;

    let label = row![
        svg::Svg::new(svg::Handle::from_memory(icons::ADD_PAGE))
            .width(Length::Fixed(TAB_ICON_SIZE))
            .height(Length::Fixed(TAB_ICON_SIZE))
            .style(move |_, status| {
                let color = if matches!(status, svg::Status::Hovered) {
                    palette.accent
                } else {
                    foreground
                };
                svg::Style { color: Some(color) }
            }),
        text("Add Page").size(TAB_FONT_SIZE).wrapping(Wrapping::None),
    ]
    .spacing(TAB_CONTENT_SPACING)
    .align_y(Alignment::Center);

    let add_button = button(label)
        .on_press(PageTabsIntent::AddPage {
            after_index: page_count.saturating_sub(1),
        })
        .padding([0.0, TAB_HORIZONTAL_PADDING])
        .height(Length::Fixed(TAB_HEIGHT))
        .style(move |_, status| button::Style {
            text_color: match status {
                button::Status::Hovered | button::Status::Pressed => {
                    palette.accent
                },
                _ => foreground,
            },
            ..Default::default()
        });

    let content = row![
        indicator(&palette, edge == Some(IndicatorEdge::Leading)),
        add_button,
    ]
    .align_y(Alignment::Center);

    mouse_area(content)
        .on_enter(PageTabsIntent::SlotHovered { index: page_count })
        .on_release(PageTabsIntent::SlotReleased { index: page_count })
        .into()
}

fn indicator<'a>(
    palette: &IcedColorPalette,
    visible: bool,
) -> Element<'a, PageTabsIntent, Theme, iced::Renderer> {
    let palette = *palette;
    container(Space::new())
        .width(Length::Fixed(INDICATOR_WIDTH))
        .height(Length::Fixed(TAB_HEIGHT))
        .style(move |_| drop_indicator_style(&palette, visible))
        .into()
}

fn ellipsize(title: &str) -> String {
    if title.chars().count() <= TITLE_MAX_CHARS {
        return title.to_owned();
    }

    let mut short: String = title.chars().take(TITLE_MAX_CHARS - 1).collect();
    short.push('…');
    short
}
