use uuid::Uuid;

/// Intents emitted by components and applied to the store by the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    SelectList(usize),
    NextItem,
    PreviousItem,

    // List operations
    CreateList(String),
    DeleteList(String),
    MoveListToFront(String),
    MoveListToIndex { from_index: usize, to_index: usize },

    // Item operations
    AddItem { list_name: String, text: String },
    RemoveItem { list_name: String, item_id: Uuid },

    // Filtering
    SetSearchFilter(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    ListCreation,
    ItemCreation {
        list_name: String,
    },
    MoveToIndex {
        list_name: String,
        from_index: usize,
    },
    DeleteConfirmation {
        list_name: String,
    },
    Help,
    Logs,
}
