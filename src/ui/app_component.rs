//! Root component: owns the store, routes events, applies actions.

use crate::config::Config;
use crate::logger::Logger;
use crate::store::ListStore;
use crate::ui::components::{DialogComponent, ItemListComponent, SidebarComponent, SidebarEntry, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    item_list: ItemListComponent,
    dialog: DialogComponent,

    // Application state
    store: ListStore,
    selected_list: usize,
    search_active: bool,

    // Services
    logger: Logger,
    config: Config,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: Config) -> Self {
        let mut sidebar = SidebarComponent::new();
        sidebar.set_show_item_counts(config.display.show_item_counts);

        let mut app = Self {
            sidebar,
            item_list: ItemListComponent::new(),
            dialog: DialogComponent::new(),
            store: ListStore::new(),
            selected_list: 0,
            search_active: false,
            logger: Logger::new(),
            config,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Read-only view of the store for rendering and inspection.
    #[must_use]
    pub fn store(&self) -> &ListStore {
        &self.store
    }

    /// Name of the currently selected list, if any.
    fn selected_list_name(&self) -> Option<String> {
        self.store.ordering().get(self.selected_list).cloned()
    }

    /// Whether the active search filter keeps a list visible. The empty
    /// filter shows everything; otherwise a list stays visible when its name
    /// or one of its items contains the filter.
    fn list_is_visible(&self, name: &str) -> bool {
        let filter = self.store.search_filter();
        filter.is_empty() || name.contains(filter) || self.store.matches_filter(name, filter)
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let entries: Vec<SidebarEntry> = self
            .store
            .ordering()
            .iter()
            .map(|name| SidebarEntry {
                name: name.clone(),
                item_count: self.store.items(name).map_or(0, <[_]>::len),
                visible: self.list_is_visible(name),
            })
            .collect();
        self.sidebar.update_data(entries, !self.store.search_filter().is_empty());
        self.sidebar.selected = self.selected_list;

        let list_name = self.selected_list_name();
        let items = list_name
            .as_deref()
            .and_then(|name| self.store.items(name))
            .map(<[_]>::to_vec)
            .unwrap_or_default();
        self.item_list.update_data(list_name, items);

        self.dialog.set_warning(self.store.warning().map(str::to_string));
        self.dialog.set_logs(self.logger.get_logs());
    }

    /// Handle keys while the inline search mode is active. Every keystroke
    /// updates the filter immediately, like the original key-up filtering.
    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.search_active = false;
                Action::SetSearchFilter(String::new())
            }
            KeyCode::Enter => {
                self.search_active = false;
                Action::None
            }
            KeyCode::Backspace => {
                let mut filter = self.store.search_filter().to_string();
                filter.pop();
                Action::SetSearchFilter(filter)
            }
            KeyCode::Char(c) => {
                let mut filter = self.store.search_filter().to_string();
                filter.push(c);
                Action::SetSearchFilter(filter)
            }
            _ => Action::None,
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('A') => {
                self.logger.log("Global key: 'A' - opening list creation dialog".to_string());
                Action::ShowDialog(DialogType::ListCreation)
            }
            KeyCode::Char('D') => match self.selected_list_name() {
                Some(list_name) => {
                    self.logger.log(format!("Global key: 'D' - deleting list '{}'", list_name));
                    Action::ShowDialog(DialogType::DeleteConfirmation { list_name })
                }
                None => {
                    self.logger.log("Global key: 'D' - no list selected".to_string());
                    Action::None
                }
            },
            KeyCode::Char('t') => match self.selected_list_name() {
                Some(list_name) => {
                    self.logger
                        .log(format!("Global key: 't' - moving list '{}' to the top", list_name));
                    Action::MoveListToFront(list_name)
                }
                None => Action::None,
            },
            KeyCode::Char('m') => match self.selected_list_name() {
                Some(list_name) => {
                    self.logger
                        .log(format!("Global key: 'm' - opening move dialog for '{}'", list_name));
                    Action::ShowDialog(DialogType::MoveToIndex {
                        list_name,
                        from_index: self.selected_list,
                    })
                }
                None => Action::None,
            },
            KeyCode::Char('/') => {
                self.logger.log("Global key: '/' - entering search mode".to_string());
                self.search_active = true;
                Action::None
            }
            KeyCode::Esc => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that mutate the store
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::CreateList(name) => {
                match self.store.create_list(&name) {
                    Ok(()) => {
                        self.logger.log(format!("List: Created list '{}'", name));
                        // New lists land at the front, follow with the selection
                        self.selected_list = 0;
                        self.dialog.hide();
                    }
                    Err(e) => {
                        // Warning stays visible inside the open dialog
                        self.logger.log(format!("List: Rejected creation of '{}': {}", name, e));
                    }
                }
                Action::None
            }
            Action::DeleteList(name) => {
                self.logger.log(format!("List: Deleting list '{}'", name));
                self.store.delete_list(&name);
                if self.selected_list >= self.store.len() {
                    self.selected_list = self.store.len().saturating_sub(1);
                }
                Action::None
            }
            Action::MoveListToFront(name) => {
                self.logger.log(format!("List: Moving list '{}' to the front", name));
                self.store.move_list_to_front(&name);
                self.selected_list = 0;
                Action::None
            }
            Action::MoveListToIndex { from_index, to_index } => {
                self.logger.log(format!(
                    "List: Moving list from position {} to {}",
                    from_index, to_index
                ));
                self.store.move_list_to_index(from_index, to_index);
                // Keep following the moved list at its clamped destination
                if from_index < self.store.len() {
                    self.selected_list = to_index.min(self.store.len().saturating_sub(1));
                }
                Action::None
            }
            Action::AddItem { list_name, text } => {
                self.logger.log(format!("Item: Adding '{}' to list '{}'", text, list_name));
                self.store.add_item(&list_name, &text);
                Action::None
            }
            Action::RemoveItem { list_name, item_id } => {
                self.logger
                    .log(format!("Item: Removing item {} from list '{}'", item_id, list_name));
                self.store.remove_item(&list_name, item_id);
                Action::None
            }
            Action::SetSearchFilter(filter) => {
                self.store.set_search_filter(filter);
                Action::None
            }
            Action::SelectList(index) => {
                self.selected_list = index;
                Action::None
            }
            // Component-internal actions need no app-level handling
            _ => action,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else if self.search_active {
                    self.handle_search_key(key)
                } else {
                    // Try sidebar first (Shift+J/K navigation)
                    let sidebar_action = self.sidebar.handle_key_events(key);

                    if !matches!(sidebar_action, Action::None) {
                        sidebar_action
                    } else {
                        // Then the item list (j/k, a, d)
                        let item_action = self.item_list.handle_key_events(key);

                        if !matches!(item_action, Action::None) {
                            item_action
                        } else {
                            self.handle_global_key(key)
                        }
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        // Process action through component hierarchy
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);
        let action = self.item_list.update(action);

        // Apply store mutations
        let _final_action = self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();

        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let main_areas = LayoutManager::main_layout(rect);
        let panes = LayoutManager::top_pane_layout(main_areas[0], self.config.ui.sidebar_width);

        self.sidebar.render(f, panes[0]);
        self.item_list.render(f, panes[1]);

        StatusBar::render(f, main_areas[1], self.store.search_filter(), self.store.warning());

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
