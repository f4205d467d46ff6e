//! Sidebar navigation component for the listkeeper application.
//!
//! The sidebar shows every list in display order, newest first, and lets the
//! user move the selection with Shift+J/K or the arrow keys. When a search
//! filter is active, lists whose name or contents do not match are hidden.

use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

/// One row of the sidebar, precomputed by the app from the store.
#[derive(Debug, Clone)]
pub struct SidebarEntry {
    pub name: String,
    pub item_count: usize,
    /// Whether the active search filter keeps this list visible.
    pub visible: bool,
}

/// Navigation sidebar listing all lists in the store's ordering.
pub struct SidebarComponent {
    /// Index into the full ordering, not just the visible subset.
    pub selected: usize,
    entries: Vec<SidebarEntry>,
    show_item_counts: bool,
    searching: bool,
    list_state: ListState,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            entries: Vec::new(),
            show_item_counts: true,
            searching: false,
            list_state,
        }
    }

    pub fn set_show_item_counts(&mut self, show: bool) {
        self.show_item_counts = show;
    }

    /// Replace the sidebar rows and clamp the selection to the new data.
    pub fn update_data(&mut self, entries: Vec<SidebarEntry>, searching: bool) {
        self.entries = entries;
        self.searching = searching;
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
        self.update_list_state();
    }

    /// Indices of entries the current filter keeps visible
    fn visible_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.visible)
            .map(|(index, _)| index)
            .collect()
    }

    /// Move the selection to the next visible list, wrapping around.
    fn select_next(&mut self) -> Action {
        let visible = self.visible_indices();
        if visible.is_empty() {
            return Action::None;
        }
        let position = visible.iter().position(|&index| index == self.selected);
        let next = match position {
            Some(current) => visible[(current + 1) % visible.len()],
            // Selection was filtered out, snap to the first visible list
            None => visible[0],
        };
        Action::SelectList(next)
    }

    /// Move the selection to the previous visible list, wrapping around.
    fn select_previous(&mut self) -> Action {
        let visible = self.visible_indices();
        if visible.is_empty() {
            return Action::None;
        }
        let position = visible.iter().position(|&index| index == self.selected);
        let previous = match position {
            Some(0) | None => visible[visible.len() - 1],
            Some(current) => visible[current - 1],
        };
        Action::SelectList(previous)
    }

    /// Map the selected ordering index to its row among visible entries
    fn update_list_state(&mut self) {
        let row = self
            .visible_indices()
            .iter()
            .position(|&index| index == self.selected);
        self.list_state.select(row);
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') | KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => self.select_next(),
            KeyCode::Char('K') | KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => self.select_previous(),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectList(index) => {
                self.selected = index;
                self.update_list_state();
                // Pass the action through for app-level processing
                Action::SelectList(index)
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.update_list_state();

        let rows: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.visible)
            .map(|(index, entry)| {
                let label = if self.show_item_counts {
                    format!("{} ({})", entry.name, entry.item_count)
                } else {
                    entry.name.clone()
                };
                let style = if index == self.selected {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(label).style(style)
            })
            .collect();

        let title = if self.searching { "Lists (filtered)" } else { "Lists" };
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
