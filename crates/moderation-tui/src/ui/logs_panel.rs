/// Logs view showing the application's captured log lines
use crate::stores::app_logs_store::AppLogsState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct LogsPanel {
    pub logs: Vec<String>,
    pub scroll_offset: usize,
}

impl LogsPanel {
    pub fn from_state(app_logs_state: &AppLogsState) -> Self {
        Self {
            logs: app_logs_state.logs.clone(),
            scroll_offset: app_logs_state.scroll_offset,
        }
    }

    /// Window of lines to show: the most recent ones, moved back by the scroll offset
    fn window(&self, height: usize) -> (usize, usize) {
        let total = self.logs.len();
        let end = total.saturating_sub(self.scroll_offset).max(height.min(total));
        let start = end.saturating_sub(height);
        (start, end)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if self.logs.is_empty() {
            Paragraph::new("No logs yet...")
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Application Logs ")
                        .border_style(Style::default().fg(Color::Cyan)),
                )
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize; // Subtract borders
        let total_logs = self.logs.len();
        let (start, end) = self.window(inner_height);

        let visible_logs: Vec<Line> = self.logs[start..end]
            .iter()
            .map(|log| Line::from(log.clone()))
            .collect();

        let title = if total_logs > inner_height {
            format!(" Application Logs [{}/{}] ", end, total_logs)
        } else {
            " Application Logs ".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan));

        Paragraph::new(visible_logs)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
