//! Yew components making up the page.

pub(crate) mod debug_panel;
pub(crate) mod file_list;
pub(crate) mod flash;
pub(crate) mod search_input;
pub(crate) mod theme_toggle;
pub(crate) mod upload_form;
