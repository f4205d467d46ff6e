//! Modal dialog component for user interactions.
//!
//! This component serves as a container for the different dialogs the app
//! needs: list creation (with the store's warning surfaced inline), item
//! creation, list reordering, delete confirmation, help, and logs. It owns
//! the shared input buffer and delegates rendering to the dialog modules.

use crate::ui::components::dialogs::{item_dialogs, list_dialogs, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    /// Warning from the last rejected list creation, shown inside the
    /// creation dialog.
    warning: Option<String>,
    /// Snapshot of log entries for the logs dialog, newest first.
    logs: Vec<String>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            warning: None,
            logs: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn set_warning(&mut self, warning: Option<String>) {
        self.warning = warning;
    }

    pub fn set_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
    }

    /// Close the dialog from the outside, e.g. after a successful submit.
    pub fn hide(&mut self) {
        self.clear_dialog();
    }

    fn handle_submit(&mut self) -> Action {
        match &self.dialog_type {
            // The store validates the name; an empty or duplicate submission
            // keeps the dialog open with the warning shown.
            Some(DialogType::ListCreation) => Action::CreateList(self.input_buffer.clone()),
            Some(DialogType::ItemCreation { list_name }) => {
                // Blank items are rejected here, the store takes text as-is
                if self.input_buffer.is_empty() {
                    return Action::None;
                }
                let action = Action::AddItem {
                    list_name: list_name.clone(),
                    text: self.input_buffer.clone(),
                };
                self.clear_dialog();
                action
            }
            Some(DialogType::MoveToIndex { from_index, .. }) => {
                // Positions are 1-based in the UI, bad input just closes the
                // dialog without emitting anything
                let from_index = *from_index;
                let action = match self.input_buffer.parse::<usize>() {
                    Ok(position) if position >= 1 => Action::MoveListToIndex {
                        from_index,
                        to_index: position - 1,
                    },
                    _ => Action::None,
                };
                self.clear_dialog();
                action
            }
            Some(DialogType::DeleteConfirmation { list_name }) => {
                let action = Action::DeleteList(list_name.clone());
                self.clear_dialog();
                action
            }
            Some(DialogType::Help) | Some(DialogType::Logs) | None => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                    self.clear_dialog();
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('G') => {
                    self.clear_dialog();
                    Action::None
                }
                _ => Action::None,
            },
            Some(_) => match key.code {
                KeyCode::Enter => self.handle_submit(),
                KeyCode::Esc => {
                    self.clear_dialog();
                    Action::HideDialog
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                    Action::None
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                    Action::None
                }
                _ => Action::None,
            },
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.input_buffer.clear();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.dialog_type {
            Some(DialogType::ListCreation) => {
                list_dialogs::render_list_creation_dialog(f, rect, &self.input_buffer, self.warning.as_deref());
            }
            Some(DialogType::ItemCreation { list_name }) => {
                item_dialogs::render_item_creation_dialog(f, rect, list_name, &self.input_buffer);
            }
            Some(DialogType::MoveToIndex { list_name, .. }) => {
                list_dialogs::render_move_to_index_dialog(f, rect, list_name, &self.input_buffer);
            }
            Some(DialogType::DeleteConfirmation { list_name }) => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, list_name);
            }
            Some(DialogType::Help) => {
                system_dialogs::render_help_dialog(f, rect);
            }
            Some(DialogType::Logs) => {
                system_dialogs::render_logs_dialog(f, rect, &self.logs);
            }
            None => {}
        }
    }
}
