/// Core Action types for the flux architecture.
/// All state mutations flow through Actions dispatched to the Dispatcher.
use moderation_api::models::{Administrator, Feedback, ModerationAction, NewAction, NewFeedback};

/// Represents all possible user intents and system events in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ===== Shell (user-initiated) =====
    /// User opened one of the panels
    SelectPanel(PanelId),

    /// User toggled the help line
    ToggleHelp,

    /// Application should exit
    Quit,

    // ===== Panel input (user-initiated) =====
    FocusNext(PanelId),
    FocusPrev(PanelId),
    /// Leave any input and go back to the record list
    FocusList(PanelId),
    FocusField(PanelId, FieldId),
    InputChar(PanelId, char),
    InputBackspace(PanelId),
    CursorLeft(PanelId),
    CursorRight(PanelId),
    SelectNext(PanelId),
    SelectPrev(PanelId),

    /// A form failed validation before anything was sent
    InvalidForm(PanelId, String),

    // ===== Administrators =====
    RefreshAdmins,
    AdminsLoaded(Vec<Administrator>),
    AdminsLoadFailed(String),

    /// Add a new admin or reactivate a deactivated one
    AddAdmin(String),
    /// Carries the email that was added
    AdminAdded(String),
    AddAdminFailed(String),

    DeactivateAdmin(i64),
    AdminDeactivated(i64),
    DeactivateAdminFailed(String),

    UpdateAdminEmail { admin_id: i64, email: String },
    AdminEmailUpdated(i64),
    UpdateAdminEmailFailed(String),

    // ===== Feedback =====
    RefreshFeedback,
    FeedbackLoaded(Vec<Feedback>),
    FeedbackLoadFailed(String),

    SubmitFeedback(NewFeedback),
    FeedbackSubmitted,
    SubmitFeedbackFailed(String),

    // ===== Moderation actions =====
    RefreshActions,
    ActionsLoaded(Vec<ModerationAction>),
    ActionsLoadFailed(String),

    CreateAction(NewAction),
    ActionCreated,
    CreateActionFailed(String),

    /// Copy an existing action into the update form
    EditAction { action_id: i64, comment: String },
    UpdateAction { action_id: i64, comment: String },
    ActionUpdated(i64),
    UpdateActionFailed(String),

    DeleteAction(i64),
    ActionDeleted(i64),
    DeleteActionFailed(String),
}

/// Identifies the views the shell can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Admins,
    Feedback,
    Actions,
    Logs,
}

impl PanelId {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Admins => "Admins",
            Self::Feedback => "Feedbacks",
            Self::Actions => "Actions",
            Self::Logs => "Logs",
        }
    }
}

/// Focusable parts of the panels. `List` is the record list every panel has;
/// the others are text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldId {
    #[default]
    List,
    Search,
    // admins
    AddEmail,
    UpdateEmail,
    // feedback
    Name,
    Email,
    Text,
    // actions
    NewAdminId,
    NewFeedbackId,
    NewComment,
    UpdateActionId,
    UpdateComment,
}

impl FieldId {
    pub fn is_input(&self) -> bool {
        *self != Self::List
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Search => "Search by ID",
            Self::AddEmail => "Add/Activate Admin: Email",
            Self::UpdateEmail => "New Email",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Text => "Text",
            Self::NewAdminId => "Admin ID",
            Self::NewFeedbackId => "Feedback ID",
            Self::NewComment => "Comment",
            Self::UpdateActionId => "Action ID",
            Self::UpdateComment => "New Comment",
        }
    }
}

/// Next (or previous) entry of a panel's focus order, wrapping around.
pub fn cycle_focus(order: &[FieldId], current: FieldId, forward: bool) -> FieldId {
    let Some(pos) = order.iter().position(|f| *f == current) else {
        return FieldId::List;
    };
    let len = order.len();
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    order.get(next).copied().unwrap_or(FieldId::List)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [FieldId; 3] = [FieldId::List, FieldId::Search, FieldId::AddEmail];

    #[test]
    fn test_cycle_focus_wraps() {
        assert_eq!(cycle_focus(&ORDER, FieldId::AddEmail, true), FieldId::List);
        assert_eq!(cycle_focus(&ORDER, FieldId::List, false), FieldId::AddEmail);
        assert_eq!(cycle_focus(&ORDER, FieldId::List, true), FieldId::Search);
    }

    #[test]
    fn test_unknown_field_goes_to_list() {
        assert_eq!(cycle_focus(&ORDER, FieldId::Name, true), FieldId::List);
    }
}
