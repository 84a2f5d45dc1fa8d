use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::page_detail::PageDetailIntent;
use crate::widgets::page_tabs::{PageTabsCtx, PageTabsEffect, PageTabsEvent};

pub(crate) fn handle(app: &mut App, event: PageTabsEvent) -> Task<AppEvent> {
    match event {
        PageTabsEvent::Intent(intent) => {
            let ctx = PageTabsCtx {
                active_page_id: app.widgets.page_detail.active_page_id(),
                cursor: app.state.cursor,
                viewport: app.state.screen_size,
            };
            app.widgets
                .page_tabs
                .reduce(intent, &ctx)
                .map(AppEvent::PageTabs)
        },
        PageTabsEvent::Effect(effect) => handle_effect(effect),
    }
}

fn handle_effect(effect: PageTabsEffect) -> Task<AppEvent> {
    match route(effect) {
        Some(intent) => Task::done(AppEvent::PageDetail(intent)),
        None => Task::none(),
    }
}

/// Map a tab bar notification onto the page heading it drives.
pub(crate) fn route(effect: PageTabsEffect) -> Option<PageDetailIntent> {
    match effect {
        PageTabsEffect::PageSelected { page_id } => {
            Some(PageDetailIntent::SelectPage { page_id })
        },
        PageTabsEffect::PagesChanged { pages } => {
            Some(PageDetailIntent::SyncPages { pages })
        },
        PageTabsEffect::RenameRequested { page_id, title } => {
            // No rename surface in this host; the title stays as is.
            log::debug!("rename of {page_id} ('{title}') left to the host");
            None
        },
    }
}
