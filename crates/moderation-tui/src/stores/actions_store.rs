/// ActionsStore manages the moderation Action panel
use crate::actions::{Action, FieldId, PanelId, cycle_focus};
use crate::common::{NewActionForm, TextInput, UpdateActionForm};
use moderation_api::models::{Identified, ModerationAction};
use std::sync::{Arc, RwLock};

pub const ACTION_FOCUS_ORDER: [FieldId; 7] = [
    FieldId::List,
    FieldId::NewAdminId,
    FieldId::NewFeedbackId,
    FieldId::NewComment,
    FieldId::UpdateActionId,
    FieldId::UpdateComment,
    FieldId::Search,
];

/// Actions shown for a search id: exact id match, or all of them when the search is empty.
/// The fetched list is left untouched so clearing the search needs no refetch.
pub fn visible_actions<'a>(
    actions: &'a [ModerationAction],
    search_id: &str,
) -> Vec<&'a ModerationAction> {
    if search_id.is_empty() {
        actions.iter().collect()
    } else {
        actions.iter().filter(|a| a.id_matches(search_id)).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActionsState {
    /// Actions as last fetched
    pub actions: Vec<ModerationAction>,

    pub search: TextInput,

    pub new_form: NewActionForm,

    pub update_form: UpdateActionForm,

    pub selected: usize,

    pub focus: FieldId,

    pub is_loading: bool,

    pub error: Option<String>,
}

impl ActionsState {
    pub fn visible(&self) -> Vec<&ModerationAction> {
        visible_actions(&self.actions, self.search.value())
    }

    pub fn selected_action(&self) -> Option<&ModerationAction> {
        self.visible().get(self.selected).copied()
    }

    pub fn create_request(&self) -> Action {
        match self.new_form.validate() {
            Ok(new_action) => Action::CreateAction(new_action),
            Err(e) => Action::InvalidForm(PanelId::Actions, e.to_string()),
        }
    }

    pub fn update_request(&self) -> Action {
        match self.update_form.validate() {
            Ok((action_id, comment)) => Action::UpdateAction { action_id, comment },
            Err(e) => Action::InvalidForm(PanelId::Actions, e.to_string()),
        }
    }

    /// Request for the form that owns the focused input
    pub fn submit_request(&self) -> Option<Action> {
        match self.focus {
            FieldId::NewAdminId | FieldId::NewFeedbackId | FieldId::NewComment => {
                Some(self.create_request())
            }
            FieldId::UpdateActionId | FieldId::UpdateComment => Some(self.update_request()),
            _ => None,
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let field = self.focus;
        if field == FieldId::Search {
            edit(&mut self.search);
            self.selected = 0;
        } else if let Some(input) = self.new_form.field_mut(field) {
            edit(input);
        } else if let Some(input) = self.update_form.field_mut(field) {
            edit(input);
        }
    }
}

/// Store that holds Action panel state
#[derive(Clone)]
pub struct ActionsStore {
    state: Arc<RwLock<ActionsState>>,
}

impl ActionsStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ActionsState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> ActionsState {
        self.state.read().unwrap().clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap();

        match action {
            Action::SelectPanel(PanelId::Actions) => {
                *state = ActionsState::default();
            }

            Action::RefreshActions => {
                state.is_loading = true;
            }

            Action::ActionsLoaded(actions) => {
                state.actions = actions.clone();
                state.is_loading = false;
                state.error = None;
                let len = state.visible().len();
                state.selected = state.selected.min(len.saturating_sub(1));
            }

            Action::ActionsLoadFailed(error) => {
                state.is_loading = false;
                state.error = Some(error.clone());
            }

            Action::ActionCreated => {
                state.new_form = NewActionForm::default();
            }

            Action::EditAction { action_id, comment } => {
                state.update_form = UpdateActionForm {
                    action_id: TextInput::with_value(action_id.to_string()),
                    comment: TextInput::with_value(comment.clone()),
                };
                state.focus = FieldId::UpdateComment;
            }

            Action::ActionUpdated(_) => {
                state.update_form = UpdateActionForm::default();
            }

            Action::CreateActionFailed(error)
            | Action::UpdateActionFailed(error)
            | Action::DeleteActionFailed(error)
            | Action::InvalidForm(PanelId::Actions, error) => {
                state.error = Some(error.clone());
            }

            Action::FocusNext(PanelId::Actions) => {
                state.focus = cycle_focus(&ACTION_FOCUS_ORDER, state.focus, true);
            }
            Action::FocusPrev(PanelId::Actions) => {
                state.focus = cycle_focus(&ACTION_FOCUS_ORDER, state.focus, false);
            }
            Action::FocusList(PanelId::Actions) => {
                state.focus = FieldId::List;
            }
            Action::FocusField(PanelId::Actions, field) => {
                state.focus = *field;
            }

            Action::InputChar(PanelId::Actions, c) => state.edit_focused(|i| i.enter_char(*c)),
            Action::InputBackspace(PanelId::Actions) => state.edit_focused(|i| i.delete_char()),
            Action::CursorLeft(PanelId::Actions) => state.edit_focused(|i| i.move_cursor_left()),
            Action::CursorRight(PanelId::Actions) => {
                state.edit_focused(|i| i.move_cursor_right())
            }

            Action::SelectNext(PanelId::Actions) => {
                let len = state.visible().len();
                if len > 0 {
                    state.selected = (state.selected + 1) % len;
                }
            }
            Action::SelectPrev(PanelId::Actions) => {
                let len = state.visible().len();
                if len > 0 {
                    state.selected = (state.selected + len - 1) % len;
                }
            }

            _ => {}
        }
    }
}
