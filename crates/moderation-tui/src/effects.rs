/// Effects module handles side effects (network calls against the moderation API)
/// Effects are triggered by Actions and dispatch new Actions with results
use crate::actions::{Action, PanelId};
use crate::dispatcher::Dispatcher;
use moderation_api::models::{Administrator, Feedback, ModerationAction};
use moderation_api::{ApiError, DashboardApi};
use std::future::Future;
use std::sync::Arc;
use tokio::task;

const FETCH_ADMINS_FAILED: &str = "Error fetching data";
const ADD_ADMIN_FAILED: &str = "Error adding admin";
const DEACTIVATE_ADMIN_FAILED: &str = "Error deleting admin";
const UPDATE_ADMIN_EMAIL_FAILED: &str = "Error updating admin email";
const FETCH_FEEDBACK_FAILED: &str = "Error occurred while fetching feedbacks.";
const FEEDBACK_NOT_SUCCESSFUL: &str = "Feedback submission was not successful.";
const FETCH_ACTIONS_FAILED: &str = "Failed to fetch actions";
const CREATE_ACTION_FAILED: &str = "Failed to add action";
const UPDATE_ACTION_FAILED: &str = "Failed to update action";
const DELETE_ACTION_FAILED: &str = "Failed to delete action";

/// The list to reload after `action`: opening a panel and every successful mutation
/// are followed by a full refetch of the owning panel's list.
pub fn refetch_for(action: &Action) -> Option<Action> {
    match action {
        Action::SelectPanel(PanelId::Admins)
        | Action::AdminAdded(_)
        | Action::AdminDeactivated(_)
        | Action::AdminEmailUpdated(_) => Some(Action::RefreshAdmins),

        Action::SelectPanel(PanelId::Feedback) | Action::FeedbackSubmitted => {
            Some(Action::RefreshFeedback)
        }

        Action::SelectPanel(PanelId::Actions)
        | Action::ActionCreated
        | Action::ActionUpdated(_)
        | Action::ActionDeleted(_) => Some(Action::RefreshActions),

        _ => None,
    }
}

/// Message shown in the feedback form when a submission fails
pub fn feedback_submit_error(e: &ApiError) -> String {
    if e.is_unexpected_success() {
        FEEDBACK_NOT_SUCCESSFUL.to_string()
    } else {
        format!("Error occurred while adding feedback: {}", e)
    }
}

/// Effects handler that executes side effects based on actions
pub struct Effects {
    dispatcher: Dispatcher,
    client: Arc<dyn DashboardApi>,
}

impl Effects {
    pub fn new(dispatcher: Dispatcher, client: Arc<dyn DashboardApi>) -> Self {
        Self { dispatcher, client }
    }

    /// Handle an action and execute any necessary side effects
    pub fn handle(&self, action: &Action) {
        if let Some(refetch) = refetch_for(action) {
            self.dispatcher.dispatch(refetch);
        }

        let client = self.client.clone();
        match action {
            // ===== Administrators =====
            Action::RefreshAdmins => self.spawn_call(
                "Fetching admins",
                async move { client.list_admins().await },
                |admins: Vec<Administrator>| {
                    log::info!("Loaded {} admins", admins.len());
                    Action::AdminsLoaded(admins)
                },
                |_| Action::AdminsLoadFailed(FETCH_ADMINS_FAILED.to_string()),
            ),
            Action::AddAdmin(email) => {
                let email = email.clone();
                let added = email.clone();
                self.spawn_call(
                    "Adding admin",
                    async move { client.add_admin(&email).await },
                    move |_| Action::AdminAdded(added),
                    |_| Action::AddAdminFailed(ADD_ADMIN_FAILED.to_string()),
                )
            }
            Action::DeactivateAdmin(admin_id) => {
                let admin_id = *admin_id;
                self.spawn_call(
                    "Deactivating admin",
                    async move { client.deactivate_admin(admin_id).await },
                    move |_| Action::AdminDeactivated(admin_id),
                    |_| Action::DeactivateAdminFailed(DEACTIVATE_ADMIN_FAILED.to_string()),
                )
            }
            Action::UpdateAdminEmail { admin_id, email } => {
                let (admin_id, email) = (*admin_id, email.clone());
                self.spawn_call(
                    "Updating admin email",
                    async move { client.update_admin_email(admin_id, &email).await },
                    move |_| Action::AdminEmailUpdated(admin_id),
                    |_| Action::UpdateAdminEmailFailed(UPDATE_ADMIN_EMAIL_FAILED.to_string()),
                )
            }

            // ===== Feedback =====
            Action::RefreshFeedback => self.spawn_call(
                "Fetching feedback",
                async move { client.list_feedback().await },
                |feedback: Vec<Feedback>| {
                    log::info!("Loaded {} feedback items", feedback.len());
                    Action::FeedbackLoaded(feedback)
                },
                |_| Action::FeedbackLoadFailed(FETCH_FEEDBACK_FAILED.to_string()),
            ),
            Action::SubmitFeedback(feedback) => {
                let feedback = feedback.clone();
                self.spawn_call(
                    "Submitting feedback",
                    async move { client.submit_feedback(&feedback).await },
                    |_| Action::FeedbackSubmitted,
                    |e| Action::SubmitFeedbackFailed(feedback_submit_error(e)),
                )
            }

            // ===== Moderation actions =====
            Action::RefreshActions => self.spawn_call(
                "Fetching actions",
                async move { client.list_actions().await },
                |actions: Vec<ModerationAction>| {
                    log::info!("Loaded {} actions", actions.len());
                    Action::ActionsLoaded(actions)
                },
                |_| Action::ActionsLoadFailed(FETCH_ACTIONS_FAILED.to_string()),
            ),
            Action::CreateAction(new_action) => {
                let new_action = new_action.clone();
                self.spawn_call(
                    "Creating action",
                    async move { client.create_action(&new_action).await },
                    |_| Action::ActionCreated,
                    |_| Action::CreateActionFailed(CREATE_ACTION_FAILED.to_string()),
                )
            }
            Action::UpdateAction { action_id, comment } => {
                let (action_id, comment) = (*action_id, comment.clone());
                self.spawn_call(
                    "Updating action",
                    async move { client.update_action(action_id, &comment).await },
                    move |_| Action::ActionUpdated(action_id),
                    |_| Action::UpdateActionFailed(UPDATE_ACTION_FAILED.to_string()),
                )
            }
            Action::DeleteAction(action_id) => {
                let action_id = *action_id;
                self.spawn_call(
                    "Deleting action",
                    async move { client.delete_action(action_id).await },
                    move |_| Action::ActionDeleted(action_id),
                    |_| Action::DeleteActionFailed(DELETE_ACTION_FAILED.to_string()),
                )
            }

            _ => {
                // Most actions don't require side effects
            }
        }
    }

    /// Run one API call in the background and dispatch the action built from its
    /// outcome. Failures are logged with their full detail before being mapped to
    /// the panel's message.
    fn spawn_call<T, F>(
        &self,
        what: &'static str,
        call: F,
        on_ok: impl FnOnce(T) -> Action + Send + 'static,
        on_err: impl FnOnce(&ApiError) -> Action + Send + 'static,
    ) where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
        T: Send + 'static,
    {
        let dispatcher = self.dispatcher.clone();

        task::spawn(async move {
            log::debug!("{}...", what);
            match call.await {
                Ok(value) => dispatcher.dispatch(on_ok(value)),
                Err(e) => {
                    log::error!("{} failed: {:?}", what, e);
                    dispatcher.dispatch(on_err(&e));
                }
            }
        });
    }
}
