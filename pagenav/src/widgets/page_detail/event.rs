use crate::widgets::page_tabs::model::{Page, PageId};

/// Intent events handled by the page detail widget.
#[derive(Debug, Clone)]
pub(crate) enum PageDetailIntent {
    SelectPage { page_id: PageId },
    /// Merge a page list snapshot into the title mirror.
    SyncPages { pages: Vec<Page> },
}
