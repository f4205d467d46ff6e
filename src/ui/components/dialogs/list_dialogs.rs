//! List creation and reordering dialogs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::ui::layout::LayoutManager;

/// Render the list creation dialog. A warning from a rejected submission is
/// shown inside the dialog until the input is accepted.
pub fn render_list_creation_dialog(f: &mut Frame, area: Rect, input_buffer: &str, warning: Option<&str>) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block("New List", Color::Green);
    f.render_widget(block, dialog_area);

    let input_rect = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        3,
    );
    f.render_widget(create_input_paragraph(input_buffer, "List name"), input_rect);

    let warning_rect = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 4,
        dialog_area.width.saturating_sub(4),
        2,
    );
    if let Some(warning) = warning {
        let warning_paragraph = Paragraph::new(warning)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true });
        f.render_widget(warning_paragraph, warning_rect);
    }

    let instructions_rect = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 6,
        dialog_area.width.saturating_sub(4),
        1,
    );
    let instructions = [
        ("Enter", Color::Green, " Create"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];
    f.render_widget(create_instructions_paragraph(&instructions), instructions_rect);
}

/// Render the move-to-index dialog with a numeric position input (1-based,
/// matching the position shown in the sidebar).
pub fn render_move_to_index_dialog(f: &mut Frame, area: Rect, list_name: &str, input_buffer: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 8, area);
    f.render_widget(Clear, dialog_area);

    let title = format!("Move '{}'", list_name);
    let block = create_dialog_block(&title, Color::Cyan);
    f.render_widget(block, dialog_area);

    let input_rect = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        3,
    );
    f.render_widget(create_input_paragraph(input_buffer, "New position"), input_rect);

    let instructions_rect = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 5,
        dialog_area.width.saturating_sub(4),
        1,
    );
    let instructions = [
        ("Enter", Color::Green, " Move"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];
    f.render_widget(create_instructions_paragraph(&instructions), instructions_rect);
}
