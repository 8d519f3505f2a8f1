/// Layout manager for the dashboard shell
use crate::actions::PanelId;
use crate::stores::{ActionsStore, AdminsStore, AppLogsStore, FeedbackStore, UIStore};
use crate::ui::{ActionPanel, AdminPanel, FeedbackPanel, LogsPanel};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};

const TABS: [PanelId; 4] = [
    PanelId::Admins,
    PanelId::Feedback,
    PanelId::Actions,
    PanelId::Logs,
];

/// Stores the shell renders from
pub struct Views<'a> {
    pub ui_store: &'a UIStore,
    pub admins_store: &'a AdminsStore,
    pub feedback_store: &'a FeedbackStore,
    pub actions_store: &'a ActionsStore,
    pub app_logs_store: &'a AppLogsStore,
}

/// Render the complete application layout
pub fn render_layout(frame: &mut Frame, views: &Views) {
    let area = frame.area();
    if let Some(cursor) = render_shell(area, frame.buffer_mut(), views) {
        frame.set_cursor_position(cursor);
    }
}

/// Draw into a buffer and return where the terminal cursor belongs, if an input is focused
pub fn render_shell(area: Rect, buf: &mut Buffer, views: &Views) -> Option<Position> {
    // Header | Tabs | Content | Footer
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let ui_state = views.ui_store.get_state();

    render_header(vertical_chunks[0], buf);
    render_tabs(vertical_chunks[1], buf, ui_state.active_panel);

    let cursor = match ui_state.active_panel {
        None => {
            render_welcome(vertical_chunks[2], buf);
            None
        }
        Some(PanelId::Admins) => {
            AdminPanel::from_state(&views.admins_store.get_state()).render(vertical_chunks[2], buf)
        }
        Some(PanelId::Feedback) => FeedbackPanel::from_state(&views.feedback_store.get_state())
            .render(vertical_chunks[2], buf),
        Some(PanelId::Actions) => ActionPanel::from_state(&views.actions_store.get_state())
            .render(vertical_chunks[2], buf),
        Some(PanelId::Logs) => {
            LogsPanel::from_state(&views.app_logs_store.get_state())
                .render(vertical_chunks[2], buf);
            None
        }
    };

    render_footer(vertical_chunks[3], buf, ui_state.active_panel, ui_state.show_help);
    cursor
}

fn render_header(area: Rect, buf: &mut Buffer) {
    let header_text = Line::from(vec![Span::styled(
        " Site Management Dashboard ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]);

    Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

fn tab_label(panel: PanelId) -> String {
    let key = match panel {
        PanelId::Admins => 1,
        PanelId::Feedback => 2,
        PanelId::Actions => 3,
        PanelId::Logs => 0,
    };
    format!("{}: {}", key, panel.title())
}

fn render_tabs(area: Rect, buf: &mut Buffer, active_panel: Option<PanelId>) {
    let tab_titles: Vec<String> = TABS.iter().map(|p| tab_label(*p)).collect();
    let selected_index = active_panel.and_then(|active| TABS.iter().position(|p| *p == active));

    let mut tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    if let Some(index) = selected_index {
        tabs = tabs.select(index);
    }

    tabs.render(area, buf);
}

fn render_welcome(area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(""),
        Line::from("Welcome. Choose what to manage:"),
        Line::from(""),
        Line::from("1: Admins    2: Feedbacks    3: Actions"),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

fn footer_hint(active_panel: Option<PanelId>) -> &'static str {
    match active_panel {
        None => "q:Quit | 1/2/3:Open Panel | 0:Logs | ?:Help",
        Some(PanelId::Admins) => {
            "q:Quit | Tab:Focus | j/k:Navigate | r:Refresh | d:Deactivate | u:Update Email | a:Add | /:Search"
        }
        Some(PanelId::Feedback) => {
            "q:Quit | Tab:Focus | j/k:Navigate | r:Refresh | n:New Feedback | /:Search"
        }
        Some(PanelId::Actions) => {
            "q:Quit | Tab:Focus | j/k:Navigate | r:Refresh | n:New | e:Edit | d:Delete | /:Search"
        }
        Some(PanelId::Logs) => "q:Quit | 1/2/3:Open Panel | j/k:Scroll | ?:Help",
    }
}

fn render_footer(area: Rect, buf: &mut Buffer, active_panel: Option<PanelId>, show_help: bool) {
    let help_text = if show_help {
        "Enter:Submit | Esc:Back to list | Shift-Tab:Previous field | Ctrl-C:Quit anywhere | ?:Hide help"
    } else {
        footer_hint(active_panel)
    };

    let footer_text = Line::from(vec![Span::raw(" "), Span::raw(help_text)]);

    Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}
