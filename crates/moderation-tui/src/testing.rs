//! In-memory DashboardApi used by the effect and app tests.
use async_trait::async_trait;
use moderation_api::models::{
    AdminCheck, Administrator, Feedback, ModerationAction, NewAction, NewFeedback,
};
use moderation_api::{ApiError, DashboardApi};
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeApi {
    pub admins: Mutex<Vec<Administrator>>,
    pub feedback: Mutex<Vec<Feedback>>,
    pub actions: Mutex<Vec<ModerationAction>>,
    /// When set every call fails with this status
    pub fail_with: Mutex<Option<u16>>,
    /// Name of every call made, in order
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_admins(admins: Vec<Administrator>) -> Self {
        let api = Self::default();
        *api.admins.lock().unwrap() = admins;
        api
    }

    pub fn failing(status: u16) -> Self {
        let api = Self::default();
        *api.fail_with.lock().unwrap() = Some(status);
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call.to_string());
        match *self.fail_with.lock().unwrap() {
            Some(status) if (200..300).contains(&status) => Err(ApiError::UnexpectedStatus(status)),
            Some(status) => Err(ApiError::Status {
                status,
                body: String::new(),
            }),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            body: "not found".to_string(),
        }
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn list_admins(&self) -> Result<Vec<Administrator>, ApiError> {
        self.record("list_admins")?;
        Ok(self.admins.lock().unwrap().clone())
    }

    async fn add_admin(&self, email: &str) -> Result<(), ApiError> {
        self.record("add_admin")?;
        let mut admins = self.admins.lock().unwrap();
        if let Some(existing) = admins.iter_mut().find(|a| a.email == email) {
            existing.is_deleted = false;
            return Ok(());
        }
        let admin = Administrator::new(admins.len() as i64 + 1, email, false);
        admins.push(admin);
        Ok(())
    }

    async fn deactivate_admin(&self, admin_id: i64) -> Result<(), ApiError> {
        self.record("deactivate_admin")?;
        let mut admins = self.admins.lock().unwrap();
        let admin = admins
            .iter_mut()
            .find(|a| a.admin_id == admin_id)
            .ok_or_else(Self::not_found)?;
        admin.is_deleted = true;
        Ok(())
    }

    async fn update_admin_email(&self, admin_id: i64, email: &str) -> Result<(), ApiError> {
        self.record("update_admin_email")?;
        let mut admins = self.admins.lock().unwrap();
        let admin = admins
            .iter_mut()
            .find(|a| a.admin_id == admin_id)
            .ok_or_else(Self::not_found)?;
        admin.email = email.to_string();
        Ok(())
    }

    async fn get_admin(&self, admin_id: i64) -> Result<Administrator, ApiError> {
        self.record("get_admin")?;
        self.admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.admin_id == admin_id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn check_admin_email(&self, email: &str) -> Result<Option<AdminCheck>, ApiError> {
        self.record("check_admin_email")?;
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .map(|a| AdminCheck {
                admin_id: a.admin_id,
                email: Some(a.email.clone()),
                is_deleted: a.is_deleted,
            }))
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, ApiError> {
        self.record("list_feedback")?;
        Ok(self.feedback.lock().unwrap().clone())
    }

    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<(), ApiError> {
        self.record("submit_feedback")?;
        let mut all = self.feedback.lock().unwrap();
        let id = all.len() as i64 + 1;
        all.push(Feedback::new(
            id,
            feedback.name.clone(),
            feedback.email.clone(),
            feedback.text.clone(),
        ));
        Ok(())
    }

    async fn get_feedback(&self, feedback_id: i64) -> Result<Feedback, ApiError> {
        self.record("get_feedback")?;
        self.feedback
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.feedback_id == feedback_id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn list_feedback_actions(
        &self,
        feedback_id: i64,
    ) -> Result<Vec<ModerationAction>, ApiError> {
        self.record("list_feedback_actions")?;
        Ok(self
            .actions
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.feedback_id == feedback_id)
            .cloned()
            .collect())
    }

    async fn list_actions(&self) -> Result<Vec<ModerationAction>, ApiError> {
        self.record("list_actions")?;
        Ok(self.actions.lock().unwrap().clone())
    }

    async fn create_action(&self, action: &NewAction) -> Result<(), ApiError> {
        self.record("create_action")?;
        let mut actions = self.actions.lock().unwrap();
        let id = actions.len() as i64 + 1;
        actions.push(ModerationAction::new(
            id,
            action.admin_id,
            action.feedback_id,
            action.comment.clone(),
        ));
        Ok(())
    }

    async fn update_action(&self, action_id: i64, comment: &str) -> Result<(), ApiError> {
        self.record("update_action")?;
        let mut actions = self.actions.lock().unwrap();
        let action = actions
            .iter_mut()
            .find(|a| a.action_id == action_id)
            .ok_or_else(Self::not_found)?;
        action.action_comment = comment.to_string();
        Ok(())
    }

    async fn delete_action(&self, action_id: i64) -> Result<(), ApiError> {
        self.record("delete_action")?;
        let mut actions = self.actions.lock().unwrap();
        let before = actions.len();
        actions.retain(|a| a.action_id != action_id);
        if actions.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn get_action(&self, action_id: i64) -> Result<ModerationAction, ApiError> {
        self.record("get_action")?;
        self.actions
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.action_id == action_id)
            .cloned()
            .ok_or_else(Self::not_found)
    }
}
