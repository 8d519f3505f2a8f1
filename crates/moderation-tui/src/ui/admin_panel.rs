/// Administrator panel: search, add/reactivate, list with per-row actions
use crate::actions::FieldId;
use crate::common::{TextInput, render_input};
use crate::stores::admins_store::AdminsState;
use moderation_api::models::Administrator;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, StatefulWidget, Widget},
};

/// Text of one list row, e.g. `1. a@x.com - Active`
pub fn admin_row_text(admin: &Administrator) -> String {
    format!(
        "{}. {} - {}",
        admin.admin_id,
        admin.email,
        admin.status_label()
    )
}

pub struct AdminPanel {
    pub visible: Vec<Administrator>,
    pub selected: usize,
    pub search: TextInput,
    pub add_email: TextInput,
    pub update_email: TextInput,
    pub focus: FieldId,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AdminPanel {
    pub fn from_state(state: &AdminsState) -> Self {
        let update_email = state
            .selected_admin()
            .map(|admin| TextInput::with_value(state.update_email_for(admin.admin_id)))
            .unwrap_or_default();
        Self {
            visible: state.visible().into_iter().cloned().collect(),
            selected: state.selected,
            search: state.search.clone(),
            add_email: state.add_form.email.clone(),
            update_email,
            focus: state.focus,
            is_loading: state.is_loading,
            error: state.error.clone(),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Option<Position> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search + Add
                Constraint::Length(1), // Error
                Constraint::Min(3),    // List
                Constraint::Length(3), // Update email for selected row
            ])
            .split(area);

        let inputs = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[0]);

        let mut cursor = render_input(
            &self.search,
            FieldId::Search.label(),
            self.focus == FieldId::Search,
            inputs[0],
            buf,
        );
        cursor = cursor.or(render_input(
            &self.add_email,
            FieldId::AddEmail.label(),
            self.focus == FieldId::AddEmail,
            inputs[1],
            buf,
        ));

        super::render_error(self.error.as_deref(), chunks[1], buf);
        self.render_list(chunks[2], buf);

        let update_title = match self.visible.get(self.selected) {
            Some(admin) => format!("{} for #{}", FieldId::UpdateEmail.label(), admin.admin_id),
            None => FieldId::UpdateEmail.label().to_string(),
        };
        cursor.or(render_input(
            &self.update_email,
            &update_title,
            self.focus == FieldId::UpdateEmail,
            chunks[3],
            buf,
        ))
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focus == FieldId::List {
            Color::Cyan
        } else {
            Color::White
        };
        let title = if self.is_loading {
            " Administrators (Loading...) "
        } else {
            " Administrators "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color));

        if self.visible.is_empty() {
            block.render(area, buf);
            return;
        }

        let items: Vec<Line> = self
            .visible
            .iter()
            .map(|admin| {
                let status_color = if admin.is_active() {
                    Color::Green
                } else {
                    Color::DarkGray
                };
                let mut spans = vec![Span::styled(
                    admin_row_text(admin),
                    Style::default().fg(status_color),
                )];
                if admin.is_active() {
                    spans.push(Span::styled(
                        "  [d] Deactivate",
                        Style::default().fg(Color::Red),
                    ));
                }
                spans.push(Span::styled(
                    "  [u] Update Email",
                    Style::default().fg(Color::Yellow),
                ));
                Line::from(spans)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));

        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, PanelId};
    use crate::stores::AdminsStore;
    use crate::ui::buffer_lines;

    fn render(state: &AdminsState) -> Vec<String> {
        let area = Rect::new(0, 0, 80, 14);
        let mut buf = Buffer::empty(area);
        AdminPanel::from_state(state).render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn test_active_row_has_both_affordances() {
        let store = AdminsStore::new();
        store.reduce(&Action::AdminsLoaded(vec![Administrator::new(
            1, "a@x.com", false,
        )]));

        let lines = render(&store.get_state());
        let row = lines
            .iter()
            .find(|l| l.contains("1. a@x.com - Active"))
            .expect("row rendered");
        assert!(row.contains("[d] Deactivate"));
        assert!(row.contains("[u] Update Email"));
    }

    #[test]
    fn test_deactivated_row_has_no_deactivate() {
        let store = AdminsStore::new();
        store.reduce(&Action::AdminsLoaded(vec![Administrator::new(
            2, "b@x.com", true,
        )]));
        store.reduce(&Action::FocusField(PanelId::Admins, FieldId::Search));
        store.reduce(&Action::InputChar(PanelId::Admins, '2'));

        let lines = render(&store.get_state());
        let row = lines
            .iter()
            .find(|l| l.contains("2. b@x.com - Deactivated"))
            .expect("row rendered");
        assert!(!row.contains("[d] Deactivate"));
        assert!(row.contains("[u] Update Email"));
    }

    #[test]
    fn test_error_is_shown() {
        let store = AdminsStore::new();
        store.reduce(&Action::AdminsLoadFailed("Error fetching data".to_string()));
        let lines = render(&store.get_state());
        assert!(lines.iter().any(|l| l.contains("Error fetching data")));
    }
}
