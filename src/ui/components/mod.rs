//! UI components for the listkeeper application

pub mod dialog_component;
pub mod dialogs;
pub mod item_list_component;
pub mod sidebar_component;
pub mod status_bar;

pub use dialog_component::DialogComponent;
pub use item_list_component::ItemListComponent;
pub use sidebar_component::{SidebarComponent, SidebarEntry};
pub use status_bar::StatusBar;
