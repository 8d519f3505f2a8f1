/// Action panel: moderation actions table with create and update forms
use crate::actions::FieldId;
use crate::common::{NewActionForm, TextInput, UpdateActionForm, render_input};
use crate::stores::actions_store::ActionsState;
use moderation_api::models::ModerationAction;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState},
};

pub struct ActionPanel {
    pub visible: Vec<ModerationAction>,
    pub total: usize,
    pub selected: usize,
    pub search: TextInput,
    pub new_form: NewActionForm,
    pub update_form: UpdateActionForm,
    pub focus: FieldId,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ActionPanel {
    pub fn from_state(state: &ActionsState) -> Self {
        Self {
            visible: state.visible().into_iter().cloned().collect(),
            total: state.actions.len(),
            selected: state.selected,
            search: state.search.clone(),
            new_form: state.new_form.clone(),
            update_form: state.update_form.clone(),
            focus: state.focus,
            is_loading: state.is_loading,
            error: state.error.clone(),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Option<Position> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search
                Constraint::Min(4),    // Table
                Constraint::Length(1), // Error
                Constraint::Length(3), // Create + Update forms
            ])
            .split(area);

        let search_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[0]);

        let mut cursor = render_input(
            &self.search,
            FieldId::Search.label(),
            self.focus == FieldId::Search,
            search_area[0],
            buf,
        );

        self.render_table(chunks[1], buf);
        super::render_error(self.error.as_deref(), chunks[2], buf);

        let form_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(12),
                Constraint::Percentage(12),
                Constraint::Percentage(26),
                Constraint::Percentage(12),
                Constraint::Percentage(38),
            ])
            .split(chunks[3]);

        let fields = [
            (&self.new_form.admin_id, FieldId::NewAdminId),
            (&self.new_form.feedback_id, FieldId::NewFeedbackId),
            (&self.new_form.comment, FieldId::NewComment),
            (&self.update_form.action_id, FieldId::UpdateActionId),
            (&self.update_form.comment, FieldId::UpdateComment),
        ];
        for ((input, field), area) in fields.into_iter().zip(form_area.iter()) {
            let pos = render_input(input, field.label(), self.focus == field, *area, buf);
            cursor = cursor.or(pos);
        }
        cursor
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focus == FieldId::List {
            Color::Cyan
        } else {
            Color::White
        };
        let loading = if self.is_loading { " (Loading...)" } else { "" };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Actions ({}/{}){} ",
                self.visible.len(),
                self.total,
                loading
            ))
            .border_style(Style::default().fg(border_color));

        let header = Row::new(vec![
            "Action ID",
            "Admin ID",
            "Feedback ID",
            "Comment",
            "Action Date",
            "",
        ])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .visible
            .iter()
            .map(|action| {
                Row::new(vec![
                    Cell::from(action.action_id.to_string()),
                    Cell::from(action.admin_id.to_string()),
                    Cell::from(action.feedback_id.to_string()),
                    Cell::from(action.action_comment.clone()),
                    Cell::from(action.action_date.clone().unwrap_or_default()),
                    Cell::from("[e] Edit [d] Delete").style(Style::default().fg(Color::Red)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Length(9),
                Constraint::Length(12),
                Constraint::Min(10),
                Constraint::Length(20),
                Constraint::Length(20),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray));

        let mut table_state = TableState::default();
        if !self.visible.is_empty() {
            table_state.select(Some(self.selected));
        }
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}
