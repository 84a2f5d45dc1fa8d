use super::context_menu::ContextMenuAction;
use super::model::{Page, PageId};

/// Intent events handled by the page tabs widget.
#[derive(Debug, Clone)]
pub(crate) enum PageTabsIntent {
    // Pointer interaction
    TabPressed {
        index: usize,
    },
    SlotHovered {
        index: usize,
    },
    SlotReleased {
        index: usize,
    },
    DragEnded,
    TabRightClicked {
        page_id: PageId,
    },
    OptionsPressed {
        page_id: PageId,
    },

    // Context menu events
    ContextMenuDismiss,
    ContextMenuAction(ContextMenuAction),

    // Page list operations
    AddPage {
        after_index: usize,
    },
}

/// Effect events produced by the page tabs reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PageTabsEffect {
    /// The host should make `page_id` the active page.
    PageSelected { page_id: PageId },
    /// Full ordered snapshot after a mutation (and once at mount).
    PagesChanged { pages: Vec<Page> },
    /// Rename was requested; the host owns the rename flow.
    RenameRequested { page_id: PageId, title: String },
}

/// Page tabs event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum PageTabsEvent {
    /// Intent event reduced by the page tabs widget.
    Intent(PageTabsIntent),
    /// External effect orchestrated by app-level routing.
    Effect(PageTabsEffect),
}
