use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use listkeeper::ui::components::DialogComponent;
use listkeeper::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn open(dialog: &mut DialogComponent, dialog_type: DialogType) {
    dialog.update(Action::ShowDialog(dialog_type));
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_show_dialog_resets_input_buffer() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());

    open(&mut dialog, DialogType::ListCreation);
    assert!(dialog.is_visible());
    assert_eq!(dialog.input_buffer, "");
}

#[test]
fn test_input_editing() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::ListCreation);

    type_text(&mut dialog, "abc");
    assert_eq!(dialog.input_buffer, "abc");

    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "ab");

    // Backspace on empty input is harmless
    dialog.handle_key_events(key(KeyCode::Backspace));
    dialog.handle_key_events(key(KeyCode::Backspace));
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "");
}

#[test]
fn test_list_creation_submits_even_when_empty() {
    // The store owns name validation, so an empty submit goes through
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::ListCreation);

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::CreateList(String::new()));
    // Dialog stays open until the app confirms the creation
    assert!(dialog.is_visible());
}

#[test]
fn test_item_creation_rejects_empty_input() {
    let mut dialog = DialogComponent::new();
    open(
        &mut dialog,
        DialogType::ItemCreation {
            list_name: "groceries".to_string(),
        },
    );

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::None);
    assert!(dialog.is_visible());

    type_text(&mut dialog, "milk");
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::AddItem {
            list_name: "groceries".to_string(),
            text: "milk".to_string(),
        }
    );
    assert!(!dialog.is_visible());
}

#[test]
fn test_move_to_index_parses_one_based_positions() {
    let mut dialog = DialogComponent::new();
    open(
        &mut dialog,
        DialogType::MoveToIndex {
            list_name: "todo".to_string(),
            from_index: 2,
        },
    );

    type_text(&mut dialog, "1");
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::MoveListToIndex {
            from_index: 2,
            to_index: 0,
        }
    );
    assert!(!dialog.is_visible());
}

#[test]
fn test_move_to_index_rejects_bad_positions() {
    for input in ["0", "abc", ""] {
        let mut dialog = DialogComponent::new();
        open(
            &mut dialog,
            DialogType::MoveToIndex {
                list_name: "todo".to_string(),
                from_index: 0,
            },
        );

        type_text(&mut dialog, input);
        let action = dialog.handle_key_events(key(KeyCode::Enter));
        assert_eq!(action, Action::None);
        assert!(!dialog.is_visible());
    }
}

#[test]
fn test_escape_cancels_input_dialogs() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::ListCreation);
    type_text(&mut dialog, "partial");

    let action = dialog.handle_key_events(key(KeyCode::Esc));
    assert_eq!(action, Action::HideDialog);
    assert!(!dialog.is_visible());
    assert_eq!(dialog.input_buffer, "");
}

#[test]
fn test_delete_confirmation_submit() {
    let mut dialog = DialogComponent::new();
    open(
        &mut dialog,
        DialogType::DeleteConfirmation {
            list_name: "doomed".to_string(),
        },
    );

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::DeleteList("doomed".to_string()));
    assert!(!dialog.is_visible());
}

#[test]
fn test_help_and_logs_close_keys() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Help);
    dialog.handle_key_events(key(KeyCode::Char('?')));
    assert!(!dialog.is_visible());

    open(&mut dialog, DialogType::Logs);
    dialog.handle_key_events(key(KeyCode::Char('G')));
    assert!(!dialog.is_visible());
}
