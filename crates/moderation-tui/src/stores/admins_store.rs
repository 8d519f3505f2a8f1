/// AdminsStore manages the Administrator panel
use crate::actions::{Action, FieldId, PanelId, cycle_focus};
use crate::common::{AddAdminForm, TextInput};
use moderation_api::models::{Administrator, Identified};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub const ADMIN_FOCUS_ORDER: [FieldId; 4] = [
    FieldId::List,
    FieldId::UpdateEmail,
    FieldId::AddEmail,
    FieldId::Search,
];

/// Administrators shown for a search id: the one exact id match when searching,
/// otherwise every admin that is not deactivated.
pub fn visible_admins<'a>(admins: &'a [Administrator], search_id: &str) -> Vec<&'a Administrator> {
    if search_id.is_empty() {
        admins.iter().filter(|a| a.is_active()).collect()
    } else {
        admins.iter().find(|a| a.id_matches(search_id)).into_iter().collect()
    }
}

/// Internal state for the Administrator panel
#[derive(Debug, Clone, Default)]
pub struct AdminsState {
    /// Administrators as last fetched. Never filtered in place.
    pub admins: Vec<Administrator>,

    pub search: TextInput,

    pub add_form: AddAdminForm,

    /// Per-row "new email" inputs keyed by admin id
    pub update_emails: HashMap<i64, TextInput>,

    /// Selected row in the visible list
    pub selected: usize,

    pub focus: FieldId,

    pub is_loading: bool,

    pub error: Option<String>,
}

impl AdminsState {
    pub fn visible(&self) -> Vec<&Administrator> {
        visible_admins(&self.admins, self.search.value())
    }

    pub fn selected_admin(&self) -> Option<&Administrator> {
        self.visible().get(self.selected).copied()
    }

    /// Current "new email" value typed for a row
    pub fn update_email_for(&self, admin_id: i64) -> &str {
        self.update_emails
            .get(&admin_id)
            .map(|input| input.value())
            .unwrap_or("")
    }

    /// The validated add/reactivate request, or the reason it cannot be sent
    pub fn add_admin_request(&self) -> Action {
        match self.add_form.validate() {
            Ok(email) => Action::AddAdmin(email),
            Err(e) => Action::InvalidForm(PanelId::Admins, e.to_string()),
        }
    }

    /// The validated email update for the selected row
    pub fn update_email_request(&self) -> Option<Action> {
        let admin = self.selected_admin()?;
        let email = self.update_email_for(admin.admin_id).trim();
        if email.is_empty() {
            return Some(Action::InvalidForm(
                PanelId::Admins,
                "New Email is required".to_string(),
            ));
        }
        Some(Action::UpdateAdminEmail {
            admin_id: admin.admin_id,
            email: email.to_string(),
        })
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FieldId::Search => Some(&mut self.search),
            FieldId::AddEmail => Some(&mut self.add_form.email),
            FieldId::UpdateEmail => {
                let admin_id = self.selected_admin()?.admin_id;
                Some(self.update_emails.entry(admin_id).or_default())
            }
            _ => None,
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let editing_search = self.focus == FieldId::Search;
        if let Some(input) = self.focused_input_mut() {
            edit(input);
        }
        if editing_search {
            self.selected = 0;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Store that holds Administrator panel state
#[derive(Clone)]
pub struct AdminsStore {
    state: Arc<RwLock<AdminsState>>,
}

impl AdminsStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(AdminsState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> AdminsState {
        self.state.read().unwrap().clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap();

        match action {
            // opening the panel starts from a clean slate, like a fresh mount
            Action::SelectPanel(PanelId::Admins) => {
                *state = AdminsState::default();
            }

            Action::RefreshAdmins => {
                state.is_loading = true;
            }

            Action::AdminsLoaded(admins) => {
                state.admins = admins.clone();
                state.is_loading = false;
                state.error = None;
                state.clamp_selection();
            }

            Action::AdminsLoadFailed(error) => {
                state.is_loading = false;
                state.error = Some(error.clone());
            }

            Action::AdminAdded(_) => {
                state.add_form.email.clear();
            }

            Action::AdminEmailUpdated(admin_id) => {
                state.update_emails.remove(admin_id);
            }

            Action::AddAdminFailed(error)
            | Action::DeactivateAdminFailed(error)
            | Action::UpdateAdminEmailFailed(error)
            | Action::InvalidForm(PanelId::Admins, error) => {
                state.error = Some(error.clone());
            }

            Action::FocusNext(PanelId::Admins) => {
                state.focus = cycle_focus(&ADMIN_FOCUS_ORDER, state.focus, true);
            }
            Action::FocusPrev(PanelId::Admins) => {
                state.focus = cycle_focus(&ADMIN_FOCUS_ORDER, state.focus, false);
            }
            Action::FocusList(PanelId::Admins) => {
                state.focus = FieldId::List;
            }
            Action::FocusField(PanelId::Admins, field) => {
                state.focus = *field;
            }

            Action::InputChar(PanelId::Admins, c) => state.edit_focused(|i| i.enter_char(*c)),
            Action::InputBackspace(PanelId::Admins) => state.edit_focused(|i| i.delete_char()),
            Action::CursorLeft(PanelId::Admins) => state.edit_focused(|i| i.move_cursor_left()),
            Action::CursorRight(PanelId::Admins) => {
                state.edit_focused(|i| i.move_cursor_right())
            }

            Action::SelectNext(PanelId::Admins) => {
                let len = state.visible().len();
                if len > 0 {
                    state.selected = (state.selected + 1) % len;
                }
            }
            Action::SelectPrev(PanelId::Admins) => {
                let len = state.visible().len();
                if len > 0 {
                    state.selected = (state.selected + len - 1) % len;
                }
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }
}
