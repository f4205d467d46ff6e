//! Item creation dialog

use ratatui::{layout::Rect, style::Color, widgets::Clear, Frame};

use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::ui::layout::LayoutManager;

pub fn render_item_creation_dialog(f: &mut Frame, area: Rect, list_name: &str, input_buffer: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 8, area);
    f.render_widget(Clear, dialog_area);

    let title = format!("Add item to '{}'", list_name);
    let block = create_dialog_block(&title, Color::Green);
    f.render_widget(block, dialog_area);

    let input_rect = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        3,
    );
    f.render_widget(create_input_paragraph(input_buffer, "Item text"), input_rect);

    let instructions_rect = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 5,
        dialog_area.width.saturating_sub(4),
        1,
    );
    let instructions = [
        ("Enter", Color::Green, " Add"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];
    f.render_widget(create_instructions_paragraph(&instructions), instructions_rect);
}
