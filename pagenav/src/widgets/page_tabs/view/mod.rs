pub(crate) mod context_menu;
pub(crate) mod tab_bar;
