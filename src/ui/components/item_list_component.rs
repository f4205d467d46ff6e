//! Item list component showing the contents of the selected list.
//!
//! Items render in insertion order. j/k move the item selection, 'a' opens
//! the item creation dialog for the current list, and 'd' removes the
//! selected item.

use crate::store::Item;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct ItemListComponent {
    /// Name of the list whose items are shown, if any list is selected.
    list_name: Option<String>,
    items: Vec<Item>,
    selected_index: usize,
    list_state: ListState,
}

impl Default for ItemListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemListComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_name: None,
            items: Vec::new(),
            selected_index: 0,
            list_state,
        }
    }

    /// Replace the displayed list and its items.
    pub fn update_data(&mut self, list_name: Option<String>, items: Vec<Item>) {
        let list_changed = self.list_name != list_name;
        self.list_name = list_name;
        self.items = items;
        if list_changed || self.selected_index >= self.items.len() {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    fn next_item(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.items.len();
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn previous_item(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.items.len() - 1
            } else {
                self.selected_index - 1
            };
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// The currently selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected_index)
    }
}

impl Component for ItemListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(list_name) = self.list_name.clone() else {
            return Action::None;
        };

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next_item();
                Action::NextItem
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous_item();
                Action::PreviousItem
            }
            KeyCode::Char('a') => Action::ShowDialog(DialogType::ItemCreation { list_name }),
            KeyCode::Char('d') => match self.selected_item() {
                Some(item) => Action::RemoveItem {
                    list_name,
                    item_id: item.id(),
                },
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = match &self.list_name {
            Some(name) => format!("{} ({} items)", name, self.items.len()),
            None => "No list selected".to_string(),
        };

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let style = if index == self.selected_index {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(format!("• {}", item.text())).style(style)
            })
            .collect();

        let list = List::new(rows)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::White));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
