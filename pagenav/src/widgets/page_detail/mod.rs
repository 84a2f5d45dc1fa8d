pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::PageDetailIntent;
use model::PageDetailViewModel;
use state::PageDetailState;

use crate::widgets::page_tabs::model::PageId;

/// Host pane that tracks the active page and renders its heading.
pub(crate) struct PageDetailWidget {
    state: PageDetailState,
}

impl PageDetailWidget {
    pub(crate) fn new(active_page_id: PageId) -> Self {
        Self {
            state: PageDetailState::new(active_page_id),
        }
    }

    pub(crate) fn reduce(&mut self, intent: PageDetailIntent) {
        reducer::reduce(&mut self.state, intent);
    }

    pub(crate) fn vm(&self) -> PageDetailViewModel<'_> {
        PageDetailViewModel {
            title: self.state.title(),
            position: self.state.position(),
        }
    }

    /// Return the page the host currently shows.
    pub(crate) fn active_page_id(&self) -> Option<&PageId> {
        self.state.active_page_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::page_tabs::model::default_pages;

    #[test]
    fn given_sync_then_select_intents_when_reduced_then_vm_shows_selection() {
        let mut widget = PageDetailWidget::new(PageId::new("1"));

        widget.reduce(PageDetailIntent::SyncPages {
            pages: default_pages(),
        });
        assert_eq!(widget.vm().title, "Info");

        widget.reduce(PageDetailIntent::SelectPage {
            page_id: PageId::new("2"),
        });

        assert_eq!(widget.vm().title, "Details");
        assert_eq!(widget.active_page_id(), Some(&PageId::new("2")));
    }
}
