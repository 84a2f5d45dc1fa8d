use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod page_detail;
pub(crate) mod page_tabs;
pub(crate) mod window;

/// Route an app event to the handler that owns it.
pub(crate) fn handle(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::PageTabs(event) => page_tabs::handle(app, event),
        AppEvent::PageDetail(intent) => page_detail::handle(app, intent),
        AppEvent::CursorMoved { position } => {
            window::handle_cursor_moved(app, position)
        },
        AppEvent::Window(iced::window::Event::Resized(size)) => {
            window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
