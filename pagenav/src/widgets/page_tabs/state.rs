use iced::{Point, Size};

use super::context_menu::{ContextMenuState, MenuPlacement};
use super::drag::DragState;
use super::icon::PageIcon;
use super::model::{COPY_SUFFIX, NEW_PAGE_TITLE, Page, PageId, default_pages};

/// Result of removing a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeleteOutcome {
    /// Replacement selection when the removed page was active.
    pub(crate) next_active: Option<PageId>,
}

/// Page list plus the transient gesture state of the tab bar.
#[derive(Debug)]
pub(crate) struct PageTabsState {
    pages: Vec<Page>,
    drag: DragState,
    context_menu: Option<ContextMenuState>,
    placement: MenuPlacement,
}

impl Default for PageTabsState {
    fn default() -> Self {
        Self::new(default_pages(), MenuPlacement::default())
    }
}

impl PageTabsState {
    /// Build state from an initial page list, falling back to the starter
    /// set when `pages` is empty.
    pub(crate) fn new(pages: Vec<Page>, placement: MenuPlacement) -> Self {
        let pages = if pages.is_empty() {
            default_pages()
        } else {
            pages
        };

        Self {
            pages,
            drag: DragState::default(),
            context_menu: None,
            placement,
        }
    }

    // --- Page list ---

    pub(crate) fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub(crate) fn len(&self) -> usize {
        self.pages.len()
    }

    pub(crate) fn page(&self, page_id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|page| page.id() == page_id)
    }

    pub(crate) fn index_of(&self, page_id: &PageId) -> Option<usize> {
        self.pages.iter().position(|page| page.id() == page_id)
    }

    pub(crate) fn page_at(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub(crate) fn snapshot(&self) -> Vec<Page> {
        self.pages.clone()
    }

    fn allocate_page_id(&self) -> PageId {
        loop {
            let id = PageId::generate();
            if self.page(&id).is_none() {
                return id;
            }
        }
    }

    /// Insert a blank page right after `after_index` and return its id.
    pub(crate) fn add_page(&mut self, after_index: usize) -> PageId {
        let id = self.allocate_page_id();
        let position = after_index.saturating_add(1).min(self.pages.len());
        self.pages.insert(
            position,
            Page::new(id.clone(), NEW_PAGE_TITLE, PageIcon::Document),
        );
        id
    }

    /// Insert a copy of `page_id` right after it and return the copy's id.
    pub(crate) fn duplicate_page(
        &mut self,
        page_id: &PageId,
    ) -> Option<PageId> {
        let index = self.index_of(page_id)?;
        let source = &self.pages[index];
        let title = format!("{}{COPY_SUFFIX}", source.title());
        let icon = source.icon();

        let id = self.allocate_page_id();
        self.pages.insert(index + 1, Page::new(id.clone(), title, icon));
        Some(id)
    }

    /// Remove `page_id` unless it is the last page.
    ///
    /// When the removed page is `active`, the replacement is the first page
    /// in the original order that is not the removed one.
    pub(crate) fn delete_page(
        &mut self,
        page_id: &PageId,
        active: Option<&PageId>,
    ) -> Option<DeleteOutcome> {
        if self.pages.len() <= 1 {
            return None;
        }
        let index = self.index_of(page_id)?;

        let next_active = if active == Some(page_id) {
            self.pages
                .iter()
                .find(|page| page.id() != page_id)
                .map(|page| page.id().clone())
        } else {
            None
        };

        self.pages.remove(index);
        Some(DeleteOutcome { next_active })
    }

    /// Splice the page at `from` out and back in at `to`, where `to` indexes
    /// the list without the moved page. Targets past the end append.
    ///
    /// Returns `false` when nothing moved.
    pub(crate) fn move_page(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.pages.len() {
            return false;
        }
        let to = to.min(self.pages.len() - 1);
        if from == to {
            return false;
        }

        let page = self.pages.remove(from);
        self.pages.insert(to, page);
        true
    }

    // --- Drag & drop ---

    pub(crate) fn drag(&self) -> DragState {
        self.drag
    }

    pub(crate) fn drag_mut(&mut self) -> &mut DragState {
        &mut self.drag
    }

    // --- Context menu ---

    pub(crate) fn context_menu(&self) -> Option<&ContextMenuState> {
        self.context_menu.as_ref()
    }

    /// Open (or retarget) the options menu at the pointer.
    pub(crate) fn open_context_menu(
        &mut self,
        target: PageId,
        cursor: Point,
        viewport: Size,
    ) {
        self.context_menu = Some(ContextMenuState::open(
            target,
            cursor,
            viewport,
            &self.placement,
        ));
    }

    pub(crate) fn take_context_menu(&mut self) -> Option<ContextMenuState> {
        self.context_menu.take()
    }

    pub(crate) fn clear_context_menu(&mut self) {
        self.context_menu = None;
    }
}
