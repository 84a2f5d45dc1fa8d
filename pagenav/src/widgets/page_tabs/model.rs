use std::fmt;

use serde::{Deserialize, Serialize};

use super::context_menu::ContextMenuState;
use super::drag::DragState;
use super::icon::PageIcon;

/// Opaque, stable identifier of a page.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub(crate) struct PageId(String);

impl PageId {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    pub(crate) fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single navigable page entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Page {
    id: PageId,
    title: String,
    #[serde(default)]
    icon: PageIcon,
}

impl Page {
    pub(crate) fn new(
        id: PageId,
        title: impl Into<String>,
        icon: PageIcon,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            icon,
        }
    }

    pub(crate) fn id(&self) -> &PageId {
        &self.id
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn icon(&self) -> PageIcon {
        self.icon
    }
}

pub(crate) const NEW_PAGE_TITLE: &str = "New Page";
pub(crate) const COPY_SUFFIX: &str = " (Copy)";

/// Starter page set used when no pages are configured.
pub(crate) fn default_pages() -> Vec<Page> {
    vec![
        Page::new(PageId::new("1"), "Info", PageIcon::Info),
        Page::new(PageId::new("2"), "Details", PageIcon::Document),
        Page::new(PageId::new("3"), "Other", PageIcon::Document),
        Page::new(PageId::new("4"), "Ending", PageIcon::Check),
    ]
}

/// Read-only snapshot of the tab bar for rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageTabsViewModel<'a> {
    pub(crate) pages: &'a [Page],
    pub(crate) drag: DragState,
    pub(crate) context_menu: Option<&'a ContextMenuState>,
}
