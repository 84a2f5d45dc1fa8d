pub(crate) mod context_menu;
pub(crate) mod drag;
pub(crate) mod event;
pub(crate) mod icon;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{PageTabsEffect, PageTabsEvent, PageTabsIntent};
use iced::Task;
use model::{Page, PageTabsViewModel};
pub(crate) use reducer::PageTabsCtx;
use state::PageTabsState;

use self::context_menu::MenuPlacement;

/// Tab bar widget owning the page list and its gesture state.
pub(crate) struct PageTabsWidget {
    state: PageTabsState,
}

impl PageTabsWidget {
    /// Create the widget from an initial page list.
    pub(crate) fn new(pages: Vec<Page>, placement: MenuPlacement) -> Self {
        Self {
            state: PageTabsState::new(pages, placement),
        }
    }

    /// Announce the initial page list to the host.
    pub(crate) fn mount(&self) -> Task<PageTabsEvent> {
        reducer::into_task(self.mount_effects())
    }

    /// Effects raised once when the widget is mounted.
    pub(crate) fn mount_effects(&self) -> Vec<PageTabsEffect> {
        vec![PageTabsEffect::PagesChanged {
            pages: self.state.snapshot(),
        }]
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: PageTabsIntent,
        ctx: &PageTabsCtx<'_>,
    ) -> Task<PageTabsEvent> {
        reducer::into_task(self.apply(intent, ctx))
    }

    /// Apply an intent and return its effects in emission order.
    pub(crate) fn apply(
        &mut self,
        intent: PageTabsIntent,
        ctx: &PageTabsCtx<'_>,
    ) -> Vec<PageTabsEffect> {
        reducer::apply(&mut self.state, intent, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> PageTabsViewModel<'_> {
        PageTabsViewModel {
            pages: self.state.pages(),
            drag: self.state.drag(),
            context_menu: self.state.context_menu(),
        }
    }

    /// Return whether a reorder gesture is in flight.
    pub(crate) fn is_dragging(&self) -> bool {
        self.state.drag().is_active()
    }
}
