use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::page_detail::PageDetailIntent;

pub(crate) fn handle(
    app: &mut App,
    intent: PageDetailIntent,
) -> Task<AppEvent> {
    app.widgets.page_detail.reduce(intent);
    Task::none()
}
