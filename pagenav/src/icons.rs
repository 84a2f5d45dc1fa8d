pub(crate) const PAGE_INFO: &[u8] =
    include_bytes!("../assets/svg/circle-info.svg");
pub(crate) const PAGE_DOCUMENT: &[u8] =
    include_bytes!("../assets/svg/file-text.svg");
pub(crate) const PAGE_CHECK: &[u8] =
    include_bytes!("../assets/svg/circle-check.svg");
pub(crate) const PAGE_OPTIONS: &[u8] =
    include_bytes!("../assets/svg/dot-menu.svg");
pub(crate) const INSERT_PAGE: &[u8] =
    include_bytes!("../assets/svg/plus-large.svg");
pub(crate) const ADD_PAGE: &[u8] = include_bytes!("../assets/svg/add-icon.svg");
pub(crate) const MENU_SET_FIRST: &[u8] =
    include_bytes!("../assets/svg/flag.svg");
pub(crate) const MENU_RENAME: &[u8] =
    include_bytes!("../assets/svg/pencil-line.svg");
pub(crate) const MENU_COPY: &[u8] =
    include_bytes!("../assets/svg/clipboard.svg");
pub(crate) const MENU_DUPLICATE: &[u8] =
    include_bytes!("../assets/svg/square-behind-square.svg");
pub(crate) const MENU_DELETE: &[u8] =
    include_bytes!("../assets/svg/trash-can.svg");
