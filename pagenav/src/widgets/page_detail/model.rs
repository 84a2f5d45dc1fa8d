/// Heading shown when the active id matches no known page.
pub(crate) const UNKNOWN_PAGE_TITLE: &str = "Unknown Page";

/// One-based position of the active page in the current order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PagePosition {
    pub(crate) index: usize,
    pub(crate) count: usize,
}

/// Read-only snapshot of the detail pane for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageDetailViewModel<'a> {
    pub(crate) title: &'a str,
    pub(crate) position: Option<PagePosition>,
}
