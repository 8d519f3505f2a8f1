use crate::ApiError;
use crate::models::{AdminCheck, Administrator, Feedback, ModerationAction, NewAction, NewFeedback};
use async_trait::async_trait;

/// The DashboardApi trait defines every call the dashboard makes against the moderation
/// REST API. The TUI effects and the CLI only talk to this trait so that they can be
/// driven by an in-memory implementation in tests.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    // ===== Administrators =====
    async fn list_admins(&self) -> Result<Vec<Administrator>, ApiError>;

    /// Add a new admin, or reactivate a deactivated one with the same email. Success
    /// is decided by the status alone; the response body is not a stable record.
    async fn add_admin(&self, email: &str) -> Result<(), ApiError>;

    /// Soft delete. The record stays and is reported with `isDeleted = true`.
    async fn deactivate_admin(&self, admin_id: i64) -> Result<(), ApiError>;

    /// Only an HTTP 200 counts as success for this call.
    async fn update_admin_email(&self, admin_id: i64, email: &str) -> Result<(), ApiError>;

    async fn get_admin(&self, admin_id: i64) -> Result<Administrator, ApiError>;

    /// Look up whether an email belongs to an admin. `Ok(None)` means the server
    /// refused it as an admin email.
    async fn check_admin_email(&self, email: &str) -> Result<Option<AdminCheck>, ApiError>;

    // ===== Feedback =====
    async fn list_feedback(&self) -> Result<Vec<Feedback>, ApiError>;

    /// Public submission endpoint. Success is 200 or 201.
    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<(), ApiError>;

    async fn get_feedback(&self, feedback_id: i64) -> Result<Feedback, ApiError>;

    async fn list_feedback_actions(
        &self,
        feedback_id: i64,
    ) -> Result<Vec<ModerationAction>, ApiError>;

    // ===== Actions =====
    async fn list_actions(&self) -> Result<Vec<ModerationAction>, ApiError>;

    async fn create_action(&self, action: &NewAction) -> Result<(), ApiError>;

    async fn update_action(&self, action_id: i64, comment: &str) -> Result<(), ApiError>;

    async fn delete_action(&self, action_id: i64) -> Result<(), ApiError>;

    async fn get_action(&self, action_id: i64) -> Result<ModerationAction, ApiError>;
}
