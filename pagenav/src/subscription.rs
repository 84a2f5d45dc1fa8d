use iced::{Event, Subscription, event, mouse, window};

use super::{App, AppEvent};
use crate::widgets::page_tabs::{PageTabsEvent, PageTabsIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let mut subs = vec![win_subs];

    // A gesture must end even when the pointer is released outside.
    if app.widgets.page_tabs.is_dragging() {
        subs.push(event::listen_with(pointer_left));
    }

    Subscription::batch(subs)
}

fn pointer_left(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    match event {
        Event::Mouse(mouse::Event::CursorLeft) => Some(AppEvent::PageTabs(
            PageTabsEvent::Intent(PageTabsIntent::DragEnded),
        )),
        _ => None,
    }
}
