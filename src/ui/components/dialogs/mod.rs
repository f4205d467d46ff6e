//! Dialog rendering helpers shared by the modal dialog component

pub mod common;
pub mod item_dialogs;
pub mod list_dialogs;
pub mod system_dialogs;
