/// Keyboard input handling and key mapping
use crate::actions::{Action, FieldId, PanelId};
use crate::stores::{ActionsStore, AdminsStore, FeedbackStore, UIStore};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::crossterm;

/// Read-only handles on the stores the key map needs
pub struct KeyContext<'a> {
    pub ui_store: &'a UIStore,
    pub admins_store: &'a AdminsStore,
    pub feedback_store: &'a FeedbackStore,
    pub actions_store: &'a ActionsStore,
}

impl KeyContext<'_> {
    fn focus(&self, panel: PanelId) -> FieldId {
        match panel {
            PanelId::Admins => self.admins_store.get_state().focus,
            PanelId::Feedback => self.feedback_store.get_state().focus,
            PanelId::Actions => self.actions_store.get_state().focus,
            PanelId::Logs => FieldId::List,
        }
    }
}

/// Handle keyboard input and return the appropriate Action
pub fn handle_key_event(key_event: KeyEvent, ctx: &KeyContext) -> Option<Action> {
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(Action::Quit);
    }

    let active_panel = ctx.ui_store.get_state().active_panel;

    if let Some(panel) = active_panel {
        let focus = ctx.focus(panel);
        if focus.is_input() {
            return handle_input_keys(key_event, panel, focus, ctx);
        }
    }

    match key_event.code {
        // Global keys
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),

        // Panel switching
        KeyCode::Char('1') => select_panel(PanelId::Admins, active_panel),
        KeyCode::Char('2') => select_panel(PanelId::Feedback, active_panel),
        KeyCode::Char('3') => select_panel(PanelId::Actions, active_panel),
        KeyCode::Char('0') => select_panel(PanelId::Logs, active_panel),

        _ => match active_panel {
            Some(PanelId::Logs) => handle_logs_keys(key_event),
            Some(panel) => handle_list_keys(key_event, panel, ctx),
            None => None,
        },
    }
}

/// Re-selecting the panel already shown is a no-op; anything else remounts it
fn select_panel(panel: PanelId, active_panel: Option<PanelId>) -> Option<Action> {
    if active_panel == Some(panel) {
        None
    } else {
        Some(Action::SelectPanel(panel))
    }
}

fn handle_logs_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext(PanelId::Logs)),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev(PanelId::Logs)),
        _ => None,
    }
}

/// Keys while a panel's record list has focus
fn handle_list_keys(key_event: KeyEvent, panel: PanelId, ctx: &KeyContext) -> Option<Action> {
    match key_event.code {
        KeyCode::Tab => Some(Action::FocusNext(panel)),
        KeyCode::BackTab => Some(Action::FocusPrev(panel)),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext(panel)),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev(panel)),
        KeyCode::Char('/') => Some(Action::FocusField(panel, FieldId::Search)),
        KeyCode::Char('r') | KeyCode::Char('R') => refresh(panel),
        KeyCode::Char(c) => match panel {
            PanelId::Admins => handle_admin_list_key(c, ctx),
            PanelId::Feedback => handle_feedback_list_key(c),
            PanelId::Actions => handle_action_list_key(c, ctx),
            PanelId::Logs => None,
        },
        _ => None,
    }
}

fn refresh(panel: PanelId) -> Option<Action> {
    match panel {
        PanelId::Admins => Some(Action::RefreshAdmins),
        PanelId::Feedback => Some(Action::RefreshFeedback),
        PanelId::Actions => Some(Action::RefreshActions),
        PanelId::Logs => None,
    }
}

fn handle_admin_list_key(c: char, ctx: &KeyContext) -> Option<Action> {
    let state = ctx.admins_store.get_state();
    let selected = state.selected_admin();
    match c {
        'a' => Some(Action::FocusField(PanelId::Admins, FieldId::AddEmail)),
        // deactivated rows have no deactivate affordance
        'd' => selected
            .filter(|admin| admin.is_active())
            .map(|admin| Action::DeactivateAdmin(admin.admin_id)),
        'u' => selected.map(|_| Action::FocusField(PanelId::Admins, FieldId::UpdateEmail)),
        _ => None,
    }
}

fn handle_feedback_list_key(c: char) -> Option<Action> {
    match c {
        'n' => Some(Action::FocusField(PanelId::Feedback, FieldId::Name)),
        _ => None,
    }
}

fn handle_action_list_key(c: char, ctx: &KeyContext) -> Option<Action> {
    let state = ctx.actions_store.get_state();
    let selected = state.selected_action();
    match c {
        'n' => Some(Action::FocusField(PanelId::Actions, FieldId::NewAdminId)),
        'd' => selected.map(|action| Action::DeleteAction(action.action_id)),
        'e' => selected.map(|action| Action::EditAction {
            action_id: action.action_id,
            comment: action.action_comment.clone(),
        }),
        _ => None,
    }
}

/// Keys while a text input has focus. Printable characters always go to the input,
/// so `q` and the digits do not quit or switch panels here.
fn handle_input_keys(
    key_event: KeyEvent,
    panel: PanelId,
    focus: FieldId,
    ctx: &KeyContext,
) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc => Some(Action::FocusList(panel)),
        KeyCode::Tab => Some(Action::FocusNext(panel)),
        KeyCode::BackTab => Some(Action::FocusPrev(panel)),
        KeyCode::Backspace => Some(Action::InputBackspace(panel)),
        KeyCode::Left => Some(Action::CursorLeft(panel)),
        KeyCode::Right => Some(Action::CursorRight(panel)),
        KeyCode::Enter => submit(panel, focus, ctx),
        KeyCode::Char(c) if !c.is_control() => Some(Action::InputChar(panel, c)),
        _ => None,
    }
}

/// Enter submits the form owning the focused input. Search applies as it is typed,
/// so Enter there just returns to the list.
fn submit(panel: PanelId, focus: FieldId, ctx: &KeyContext) -> Option<Action> {
    if focus == FieldId::Search {
        return Some(Action::FocusList(panel));
    }
    match panel {
        PanelId::Admins => {
            let state = ctx.admins_store.get_state();
            match focus {
                FieldId::AddEmail => Some(state.add_admin_request()),
                FieldId::UpdateEmail => state.update_email_request(),
                _ => None,
            }
        }
        PanelId::Feedback => Some(ctx.feedback_store.get_state().submit_request()),
        PanelId::Actions => ctx.actions_store.get_state().submit_request(),
        PanelId::Logs => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moderation_api::models::{Administrator, ModerationAction};

    struct Stores {
        ui: UIStore,
        admins: AdminsStore,
        feedback: FeedbackStore,
        actions: ActionsStore,
    }

    impl Stores {
        fn new() -> Self {
            Self {
                ui: UIStore::new(),
                admins: AdminsStore::new(),
                feedback: FeedbackStore::new(),
                actions: ActionsStore::new(),
            }
        }

        fn reduce(&self, action: Action) {
            self.ui.reduce(&action);
            self.admins.reduce(&action);
            self.feedback.reduce(&action);
            self.actions.reduce(&action);
        }

        fn press(&self, code: KeyCode) -> Option<Action> {
            let ctx = KeyContext {
                ui_store: &self.ui,
                admins_store: &self.admins,
                feedback_store: &self.feedback,
                actions_store: &self.actions,
            };
            handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), &ctx)
        }
    }

    #[test]
    fn test_panel_selection_ignores_current_panel() {
        let stores = Stores::new();
        assert_eq!(
            stores.press(KeyCode::Char('1')),
            Some(Action::SelectPanel(PanelId::Admins))
        );
        stores.reduce(Action::SelectPanel(PanelId::Admins));
        assert_eq!(stores.press(KeyCode::Char('1')), None);
        assert_eq!(
            stores.press(KeyCode::Char('3')),
            Some(Action::SelectPanel(PanelId::Actions))
        );
    }

    #[test]
    fn test_no_panel_selected_only_global_keys() {
        let stores = Stores::new();
        assert_eq!(stores.press(KeyCode::Char('j')), None);
        assert_eq!(stores.press(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(stores.press(KeyCode::Char('?')), Some(Action::ToggleHelp));
    }

    #[test]
    fn test_typing_in_input_does_not_quit() {
        let stores = Stores::new();
        stores.reduce(Action::SelectPanel(PanelId::Feedback));
        stores.reduce(Action::FocusField(PanelId::Feedback, FieldId::Name));

        assert_eq!(
            stores.press(KeyCode::Char('q')),
            Some(Action::InputChar(PanelId::Feedback, 'q'))
        );
        assert_eq!(
            stores.press(KeyCode::Char('2')),
            Some(Action::InputChar(PanelId::Feedback, '2'))
        );
        assert_eq!(
            stores.press(KeyCode::Esc),
            Some(Action::FocusList(PanelId::Feedback))
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let stores = Stores::new();
        stores.reduce(Action::SelectPanel(PanelId::Admins));
        stores.reduce(Action::FocusField(PanelId::Admins, FieldId::Search));
        let ctx = KeyContext {
            ui_store: &stores.ui,
            admins_store: &stores.admins,
            feedback_store: &stores.feedback,
            actions_store: &stores.actions,
        };
        assert_eq!(
            handle_key_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &ctx
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_deactivate_only_for_active_rows() {
        let stores = Stores::new();
        stores.reduce(Action::SelectPanel(PanelId::Admins));
        stores.reduce(Action::AdminsLoaded(vec![
            Administrator::new(1, "a@x.com", false),
            Administrator::new(2, "b@x.com", true),
        ]));
        assert_eq!(
            stores.press(KeyCode::Char('d')),
            Some(Action::DeactivateAdmin(1))
        );

        stores.reduce(Action::FocusField(PanelId::Admins, FieldId::Search));
        stores.reduce(Action::InputChar(PanelId::Admins, '2'));
        stores.reduce(Action::FocusList(PanelId::Admins));
        assert_eq!(stores.press(KeyCode::Char('d')), None);
        assert_eq!(
            stores.press(KeyCode::Char('u')),
            Some(Action::FocusField(PanelId::Admins, FieldId::UpdateEmail))
        );
    }

    #[test]
    fn test_enter_submits_owning_form() {
        let stores = Stores::new();
        stores.reduce(Action::SelectPanel(PanelId::Admins));
        stores.reduce(Action::FocusField(PanelId::Admins, FieldId::AddEmail));
        for c in "n@x.com".chars() {
            stores.reduce(Action::InputChar(PanelId::Admins, c));
        }
        assert_eq!(
            stores.press(KeyCode::Enter),
            Some(Action::AddAdmin("n@x.com".to_string()))
        );

        stores.reduce(Action::FocusField(PanelId::Admins, FieldId::Search));
        assert_eq!(
            stores.press(KeyCode::Enter),
            Some(Action::FocusList(PanelId::Admins))
        );
    }

    #[test]
    fn test_action_list_keys() {
        let stores = Stores::new();
        stores.reduce(Action::SelectPanel(PanelId::Actions));
        stores.reduce(Action::ActionsLoaded(vec![ModerationAction::new(
            7, 1, 2, "spam",
        )]));

        assert_eq!(
            stores.press(KeyCode::Char('d')),
            Some(Action::DeleteAction(7))
        );
        assert_eq!(
            stores.press(KeyCode::Char('e')),
            Some(Action::EditAction {
                action_id: 7,
                comment: "spam".to_string()
            })
        );
        assert_eq!(stores.press(KeyCode::Char('r')), Some(Action::RefreshActions));
    }

    #[test]
    fn test_logs_scroll() {
        let stores = Stores::new();
        stores.reduce(Action::SelectPanel(PanelId::Logs));
        assert_eq!(
            stores.press(KeyCode::Char('k')),
            Some(Action::SelectPrev(PanelId::Logs))
        );
        assert_eq!(stores.press(KeyCode::Char('d')), None);
    }
}
