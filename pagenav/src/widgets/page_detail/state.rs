use std::collections::HashMap;

use super::model::{PagePosition, UNKNOWN_PAGE_TITLE};
use crate::widgets::page_tabs::model::{Page, PageId};

/// Host-side mirror of the page list.
///
/// Titles are merged, never pruned: a page deleted earlier keeps its last
/// known title so a stale active id still renders a sensible heading.
#[derive(Debug, Default)]
pub(crate) struct PageDetailState {
    active_page_id: Option<PageId>,
    titles: HashMap<PageId, String>,
    order: Vec<PageId>,
}

impl PageDetailState {
    pub(crate) fn new(active_page_id: PageId) -> Self {
        Self {
            active_page_id: Some(active_page_id),
            ..Self::default()
        }
    }

    pub(crate) fn active_page_id(&self) -> Option<&PageId> {
        self.active_page_id.as_ref()
    }

    pub(crate) fn select(&mut self, page_id: PageId) {
        self.active_page_id = Some(page_id);
    }

    pub(crate) fn sync(&mut self, pages: &[Page]) {
        for page in pages {
            self.titles
                .insert(page.id().clone(), page.title().to_owned());
        }
        self.order = pages.iter().map(|page| page.id().clone()).collect();
    }

    pub(crate) fn title(&self) -> &str {
        self.active_page_id
            .as_ref()
            .and_then(|id| self.titles.get(id))
            .map_or(UNKNOWN_PAGE_TITLE, String::as_str)
    }

    /// Position of the active page, if it is in the latest snapshot.
    pub(crate) fn position(&self) -> Option<PagePosition> {
        let active = self.active_page_id.as_ref()?;
        let index = self.order.iter().position(|id| id == active)?;
        Some(PagePosition {
            index: index + 1,
            count: self.order.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::page_tabs::icon::PageIcon;
    use crate::widgets::page_tabs::model::default_pages;

    #[test]
    fn given_no_snapshot_when_reading_title_then_fallback_is_used() {
        let state = PageDetailState::new(PageId::new("1"));
        assert_eq!(state.title(), "Unknown Page");
        assert!(state.position().is_none());
    }

    #[test]
    fn given_snapshot_when_active_page_selected_then_title_and_position_match()
    {
        let mut state = PageDetailState::new(PageId::new("1"));
        state.sync(&default_pages());

        state.select(PageId::new("3"));

        assert_eq!(state.title(), "Other");
        assert_eq!(state.position(), Some(PagePosition { index: 3, count: 4 }));
    }

    #[test]
    fn given_page_removed_from_snapshot_when_still_active_then_title_is_kept() {
        let mut state = PageDetailState::new(PageId::new("4"));
        state.sync(&default_pages());

        let remaining: Vec<Page> = default_pages()
            .into_iter()
            .filter(|page| page.id() != &PageId::new("4"))
            .collect();
        state.sync(&remaining);

        assert_eq!(state.title(), "Ending");
        assert!(state.position().is_none());
    }

    #[test]
    fn given_renamed_page_when_synced_then_latest_title_wins() {
        let mut state = PageDetailState::new(PageId::new("a"));
        state.sync(&[Page::new(PageId::new("a"), "Alpha", PageIcon::Info)]);
        state.sync(&[Page::new(PageId::new("a"), "Alef", PageIcon::Info)]);

        assert_eq!(state.title(), "Alef");
    }
}
