use iced::widget::{column, container, text};
use iced::{Element, Length, Theme};

use crate::theme::ThemeProps;
use crate::widgets::page_detail::model::{PageDetailViewModel, PagePosition};

const HEADING_FONT_SIZE: f32 = 28.0;
const CAPTION_FONT_SIZE: f32 = 13.0;
const HEADING_SPACING: f32 = 6.0;
const HEADING_PADDING: f32 = 24.0;

/// Props for rendering the selected page heading.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeadingProps<'a> {
    pub(crate) vm: PageDetailViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the heading of the active page.
pub(crate) fn view<'a, Message: 'a>(
    props: HeadingProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();

    let mut content = column![
        text(props.vm.title)
            .size(HEADING_FONT_SIZE)
            .color(palette.foreground),
    ]
    .spacing(HEADING_SPACING);

    if let Some(position) = props.vm.position {
        content = content.push(
            text(caption(position))
                .size(CAPTION_FONT_SIZE)
                .color(palette.dim_foreground),
        );
    }

    container(content)
        .padding(HEADING_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.tab_active_background.into()),
            ..Default::default()
        })
        .into()
}

fn caption(position: PagePosition) -> String {
    format!("Page {} of {}", position.index, position.count)
}
