//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::STATUS_SHORTCUTS;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar. The active search filter and the current
    /// warning take precedence over the shortcut hints.
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, search_filter: &str, warning: Option<&str>) {
        let (status_text, status_color) = if let Some(warning) = warning {
            (warning.to_string(), Color::Red)
        } else if !search_filter.is_empty() {
            (format!("Filter: {}", search_filter), Color::Yellow)
        } else {
            (STATUS_SHORTCUTS.to_string(), Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
