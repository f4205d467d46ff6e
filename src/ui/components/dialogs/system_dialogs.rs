//! Confirmation, help and logs dialogs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::DIALOG_TITLE_LOGS;
use crate::ui::layout::LayoutManager;

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, list_name: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
    f.render_widget(Clear, dialog_area);

    let message = format!("Are you sure you want to delete the list '{}'?", list_name);
    let instructions = "Press Enter to confirm, Esc to cancel";

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Confirm Delete")
        .style(Style::default().fg(Color::Red));

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);

    let message_rect = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        2,
    );
    let instructions_rect = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 4,
        dialog_area.width.saturating_sub(4),
        1,
    );
    f.render_widget(message_paragraph, message_rect);
    f.render_widget(instructions_paragraph, instructions_rect);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect) {
    let dialog_area = LayoutManager::centered_rect(70, 70, area);
    f.render_widget(Clear, dialog_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  Shift+J / Shift+K   select next / previous list"),
        Line::from("  j / k               select next / previous item"),
        Line::from(""),
        Line::from("Lists"),
        Line::from("  A                   create a new list"),
        Line::from("  D                   delete the selected list"),
        Line::from("  t                   move the selected list to the top"),
        Line::from("  m                   move the selected list to a position"),
        Line::from(""),
        Line::from("Items"),
        Line::from("  a                   add an item to the selected list"),
        Line::from("  d                   remove the selected item"),
        Line::from(""),
        Line::from("Other"),
        Line::from("  /                   filter lists by name or content"),
        Line::from("  G                   show logs"),
        Line::from("  q / Esc             quit"),
    ];

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help - Press 'Esc', '?' or 'q' to close")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help, dialog_area);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String]) {
    let dialog_area = LayoutManager::centered_rect(80, 80, area);
    f.render_widget(Clear, dialog_area);

    let visible_lines = dialog_area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = logs.iter().take(visible_lines).map(|entry| Line::from(entry.as_str())).collect();

    let logs_paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(DIALOG_TITLE_LOGS)
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(logs_paragraph, dialog_area);
}
