/// FeedbackStore manages the Feedback panel
use crate::actions::{Action, FieldId, PanelId, cycle_focus};
use crate::common::{FeedbackForm, TextInput};
use moderation_api::models::{Feedback, Identified};
use std::sync::{Arc, RwLock};

pub const FEEDBACK_FOCUS_ORDER: [FieldId; 5] = [
    FieldId::List,
    FieldId::Name,
    FieldId::Email,
    FieldId::Text,
    FieldId::Search,
];

/// Feedback shown for a search id. The input is trimmed before matching and an
/// empty search shows everything; feedback has no soft-delete.
pub fn visible_feedback<'a>(feedback: &'a [Feedback], search_id: &str) -> Vec<&'a Feedback> {
    let needle = search_id.trim();
    if needle.is_empty() {
        feedback.iter().collect()
    } else {
        feedback.iter().filter(|f| f.id_matches(needle)).collect()
    }
}

/// Row numbers start at the first visible item's own id, or 1 for an empty list.
pub fn first_row_number(visible: &[&Feedback]) -> i64 {
    visible.first().map(|f| f.feedback_id).unwrap_or(1)
}

/// Number shown for the row at `index`; ids near `i64::MAX` saturate.
pub fn row_number(first: i64, index: usize) -> i64 {
    first.saturating_add(index as i64)
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackState {
    pub feedback: Vec<Feedback>,

    pub search: TextInput,

    pub form: FeedbackForm,

    pub selected: usize,

    pub focus: FieldId,

    pub is_loading: bool,

    /// Shown above the submission form; covers fetch and submit failures
    pub form_error: Option<String>,
}

impl FeedbackState {
    pub fn visible(&self) -> Vec<&Feedback> {
        visible_feedback(&self.feedback, self.search.value())
    }

    pub fn submit_request(&self) -> Action {
        match self.form.validate() {
            Ok(new_feedback) => Action::SubmitFeedback(new_feedback),
            Err(e) => Action::InvalidForm(PanelId::Feedback, e.to_string()),
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) {
        match self.focus {
            FieldId::Search => {
                edit(&mut self.search);
                self.selected = 0;
            }
            field => {
                if let Some(input) = self.form.field_mut(field) {
                    edit(input);
                }
            }
        }
    }
}

/// Store that holds Feedback panel state
#[derive(Clone)]
pub struct FeedbackStore {
    state: Arc<RwLock<FeedbackState>>,
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(FeedbackState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> FeedbackState {
        self.state.read().unwrap().clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap();

        match action {
            Action::SelectPanel(PanelId::Feedback) => {
                *state = FeedbackState::default();
            }

            Action::RefreshFeedback => {
                state.is_loading = true;
            }

            Action::FeedbackLoaded(feedback) => {
                state.feedback = feedback.clone();
                state.is_loading = false;
                let len = state.visible().len();
                state.selected = state.selected.min(len.saturating_sub(1));
            }

            Action::FeedbackLoadFailed(error) => {
                state.is_loading = false;
                state.form_error = Some(error.clone());
            }

            Action::SubmitFeedback(_) => {
                state.form_error = None;
            }

            Action::FeedbackSubmitted => {
                state.form = FeedbackForm::default();
            }

            Action::SubmitFeedbackFailed(error) | Action::InvalidForm(PanelId::Feedback, error) => {
                state.form_error = Some(error.clone());
            }

            Action::FocusNext(PanelId::Feedback) => {
                state.focus = cycle_focus(&FEEDBACK_FOCUS_ORDER, state.focus, true);
            }
            Action::FocusPrev(PanelId::Feedback) => {
                state.focus = cycle_focus(&FEEDBACK_FOCUS_ORDER, state.focus, false);
            }
            Action::FocusList(PanelId::Feedback) => {
                state.focus = FieldId::List;
            }
            Action::FocusField(PanelId::Feedback, field) => {
                state.focus = *field;
            }

            Action::InputChar(PanelId::Feedback, c) => state.edit_focused(|i| i.enter_char(*c)),
            Action::InputBackspace(PanelId::Feedback) => state.edit_focused(|i| i.delete_char()),
            Action::CursorLeft(PanelId::Feedback) => {
                state.edit_focused(|i| i.move_cursor_left())
            }
            Action::CursorRight(PanelId::Feedback) => {
                state.edit_focused(|i| i.move_cursor_right())
            }

            Action::SelectNext(PanelId::Feedback) => {
                let len = state.visible().len();
                if len > 0 {
                    state.selected = (state.selected + 1) % len;
                }
            }
            Action::SelectPrev(PanelId::Feedback) => {
                let len = state.visible().len();
                if len > 0 {
                    state.selected = (state.selected + len - 1) % len;
                }
            }

            _ => {}
        }
    }
}
