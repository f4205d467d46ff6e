//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Validation warnings surfaced when list creation is rejected
pub const WARNING_EMPTY_LIST_NAME: &str = "Please enter a list name.";
pub const WARNING_DUPLICATE_LIST_NAME: &str =
    "A list already exists with that name! List names must be unique.";

// UI messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";
pub const STATUS_SHORTCUTS: &str =
    "a: add item • A: new list • D: delete list • /: search • ?: help • q: quit";

// UI layout constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
