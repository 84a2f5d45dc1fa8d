pub(crate) mod page_detail;
pub(crate) mod page_tabs;
