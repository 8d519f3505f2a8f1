/// UI module - panels and rendering components
pub mod action_panel;
pub mod admin_panel;
pub mod feedback_panel;
pub mod layout;
pub mod logs_panel;

pub use action_panel::ActionPanel;
pub use admin_panel::AdminPanel;
pub use feedback_panel::FeedbackPanel;
pub use layout::render_layout;
pub use logs_panel::LogsPanel;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

/// One line error banner used by every panel
fn render_error(error: Option<&str>, area: Rect, buf: &mut Buffer) {
    if let Some(error) = error {
        Paragraph::new(format!(" {}", error))
            .style(Style::default().fg(Color::Red))
            .render(area, buf);
    }
}

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
