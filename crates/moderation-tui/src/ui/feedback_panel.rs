/// Feedback panel: searchable table with moderation metadata and a submission form
use crate::actions::FieldId;
use crate::common::{FeedbackForm, TextInput, render_input};
use crate::stores::feedback_store::{FeedbackState, first_row_number, row_number};
use moderation_api::models::Feedback;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState},
};

const MISSING: &str = "N/A";

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

/// Display cells of one row after its number:
/// name, email, text, submitted, actioned by, action date, action comment
pub fn feedback_cells(feedback: &Feedback) -> [&str; 7] {
    [
        or_missing(feedback.name.as_deref()),
        or_missing(feedback.email.as_deref()),
        feedback.text.as_str(),
        or_missing(feedback.submission_date.as_deref()),
        or_missing(feedback.actioned_by.as_deref()),
        or_missing(feedback.action_date.as_deref()),
        or_missing(feedback.action_comment.as_deref()),
    ]
}

pub struct FeedbackPanel {
    pub visible: Vec<Feedback>,
    pub first_number: i64,
    pub selected: usize,
    pub search: TextInput,
    pub form: FeedbackForm,
    pub focus: FieldId,
    pub is_loading: bool,
    pub form_error: Option<String>,
}

impl FeedbackPanel {
    pub fn from_state(state: &FeedbackState) -> Self {
        let visible = state.visible();
        Self {
            first_number: first_row_number(&visible),
            visible: visible.into_iter().cloned().collect(),
            selected: state.selected,
            search: state.search.clone(),
            form: state.form.clone(),
            focus: state.focus,
            is_loading: state.is_loading,
            form_error: state.form_error.clone(),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Option<Position> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search
                Constraint::Min(4),    // Table
                Constraint::Length(1), // Form error
                Constraint::Length(3), // Form
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
        super::render_error(self.form_error.as_deref(), chunks[2], buf);

        let form_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(30),
                Constraint::Percentage(45),
            ])
            .split(chunks[3]);

        let fields = [
            (&self.form.name, FieldId::Name),
            (&self.form.email, FieldId::Email),
            (&self.form.text, FieldId::Text),
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
        let title = if self.is_loading {
            format!(" Feedbacks ({}) (Loading...) ", self.visible.len())
        } else {
            format!(" Feedbacks ({}) ", self.visible.len())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color));

        let header = Row::new(vec![
            "#",
            "Name",
            "Email",
            "Text",
            "Submitted",
            "Actioned By",
            "Action Date",
            "Action Comment",
        ])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .visible
            .iter()
            .enumerate()
            .map(|(i, feedback)| {
                let number = row_number(self.first_number, i);
                let actioned_style = if feedback.is_actioned() {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let mut cells = vec![Cell::from(number.to_string())];
                for (col, value) in feedback_cells(feedback).into_iter().enumerate() {
                    let cell = Cell::from(value.to_string());
                    // moderation metadata columns
                    cells.push(if col >= 4 { cell.style(actioned_style) } else { cell });
                }
                Row::new(cells)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Percentage(10),
                Constraint::Percentage(15),
                Constraint::Percentage(25),
                Constraint::Percentage(12),
                Constraint::Percentage(10),
                Constraint::Percentage(12),
                Constraint::Percentage(16),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, PanelId};
    use crate::stores::FeedbackStore;
    use crate::ui::buffer_lines;

    fn render(state: &FeedbackState) -> Vec<String> {
        let area = Rect::new(0, 0, 160, 14);
        let mut buf = Buffer::empty(area);
        FeedbackPanel::from_state(state).render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn test_missing_metadata_is_na() {
        let fb = Feedback::new(3, "Ann", "ann@x.com", "hello");
        assert_eq!(
            feedback_cells(&fb),
            ["Ann", "ann@x.com", "hello", "N/A", "N/A", "N/A", "N/A"]
        );
    }

    #[test]
    fn test_rows_numbered_from_first_visible_id() {
        let store = FeedbackStore::new();
        store.reduce(&Action::FeedbackLoaded(vec![
            Feedback::new(4, "Ann", "ann@x.com", "great"),
            Feedback::new(9, "Bob", "bob@x.com", "meh"),
        ]));

        let lines = render(&store.get_state());
        let ann = lines.iter().find(|l| l.contains("Ann")).expect("row");
        let bob = lines.iter().find(|l| l.contains("Bob")).expect("row");
        assert!(ann.trim_start_matches('│').trim_start().starts_with('4'));
        assert!(bob.trim_start_matches('│').trim_start().starts_with('5'));
    }

    #[test]
    fn test_submit_error_is_shown_and_list_kept() {
        let store = FeedbackStore::new();
        store.reduce(&Action::FeedbackLoaded(vec![Feedback::new(
            1, "Ann", "ann@x.com", "great",
        )]));
        store.reduce(&Action::SubmitFeedbackFailed(
            "Error occurred while adding feedback: Request failed with status code 500"
                .to_string(),
        ));

        let lines = render(&store.get_state());
        assert!(lines.iter().any(|l| l.contains(
            "Error occurred while adding feedback: Request failed with status code 500"
        )));
        assert!(lines.iter().any(|l| l.contains("Ann")));
    }

    #[test]
    fn test_focused_form_field_gets_cursor() {
        let store = FeedbackStore::new();
        store.reduce(&Action::FocusField(PanelId::Feedback, FieldId::Email));
        let area = Rect::new(0, 0, 160, 14);
        let mut buf = Buffer::empty(area);
        let cursor = FeedbackPanel::from_state(&store.get_state()).render(area, &mut buf);
        // form row is the last three lines
        assert_eq!(cursor.map(|p| p.y), Some(12));
    }
}
