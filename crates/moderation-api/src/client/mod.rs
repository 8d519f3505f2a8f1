use crate::models::{
    ActionComment, AdminCheck, AdminEmail, Administrator, Feedback, ModerationAction, NewAction,
    NewFeedback,
};
use crate::{ApiError, DashboardApi};
use async_trait::async_trait;
use log::{debug, trace, warn};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

/// Which HTTP statuses an endpoint treats as success. The API is not uniform: most
/// calls accept any 2xx, the admin email update insists on 200 and the public feedback
/// submission accepts 200 or 201.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessPolicy {
    Any2xx,
    Exactly200,
    OkOrCreated,
}

impl SuccessPolicy {
    pub fn accepts(self, status: u16) -> bool {
        match self {
            Self::Any2xx => (200..300).contains(&status),
            Self::Exactly200 => status == 200,
            Self::OkOrCreated => status == 200 || status == 201,
        }
    }
}

/// Error for a status the endpoint's policy refused. `body` is only kept for
/// non-2xx answers where it usually carries the server's complaint.
fn rejection(status: u16, body: String) -> ApiError {
    if (200..300).contains(&status) {
        ApiError::UnexpectedStatus(status)
    } else {
        ApiError::Status { status, body }
    }
}

/// reqwest backed implementation of [`DashboardApi`]. No authentication headers are
/// sent and no request timeout is configured; redirects are followed so the gateway
/// can normalise trailing slashes.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed =
            Url::parse(trimmed).map_err(|e| ApiError::InvalidUrl(format!("{trimmed}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{trimmed}: unsupported scheme {}",
                parsed.scheme()
            )));
        }
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            base_url: trimmed.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        request: RequestBuilder,
        policy: SuccessPolicy,
    ) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        trace!("{} -> {}", response.url(), status);
        if policy.accepts(status) {
            return Ok(response);
        }
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        warn!("Request to {} answered {}: {}", url, status, body);
        Err(rejection(status, body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await?;
        debug!("Got payload from api: {} bytes", bytes.len());
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .send(self.client.get(self.url(path)), SuccessPolicy::Any2xx)
            .await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl DashboardApi for HttpClient {
    async fn list_admins(&self) -> Result<Vec<Administrator>, ApiError> {
        self.get_json("/admin/").await
    }

    async fn add_admin(&self, email: &str) -> Result<(), ApiError> {
        let body = AdminEmail {
            email: email.to_string(),
        };
        self.send(
            self.client.post(self.url("/admin/")).json(&body),
            SuccessPolicy::Any2xx,
        )
        .await?;
        Ok(())
    }

    async fn deactivate_admin(&self, admin_id: i64) -> Result<(), ApiError> {
        self.send(
            self.client.delete(self.url(&format!("/admin/{admin_id}/"))),
            SuccessPolicy::Any2xx,
        )
        .await?;
        Ok(())
    }

    async fn update_admin_email(&self, admin_id: i64, email: &str) -> Result<(), ApiError> {
        let body = AdminEmail {
            email: email.to_string(),
        };
        self.send(
            self.client
                .put(self.url(&format!("/admin/{admin_id}/")))
                .json(&body),
            SuccessPolicy::Exactly200,
        )
        .await?;
        Ok(())
    }

    async fn get_admin(&self, admin_id: i64) -> Result<Administrator, ApiError> {
        self.get_json(&format!("/admin/{admin_id}")).await
    }

    async fn check_admin_email(&self, email: &str) -> Result<Option<AdminCheck>, ApiError> {
        let body = AdminEmail {
            email: email.to_string(),
        };
        let result = self
            .send(
                self.client.post(self.url("/admin/check")).json(&body),
                SuccessPolicy::Exactly200,
            )
            .await;
        match result {
            Ok(response) => Ok(Some(Self::decode(response).await?)),
            Err(ApiError::Status { status, .. }) if (400..500).contains(&status) => Ok(None),
            Err(ApiError::UnexpectedStatus(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, ApiError> {
        self.get_json("/admin/feedback/").await
    }

    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<(), ApiError> {
        self.send(
            self.client.post(self.url("/feedback/")).json(feedback),
            SuccessPolicy::OkOrCreated,
        )
        .await?;
        Ok(())
    }

    async fn get_feedback(&self, feedback_id: i64) -> Result<Feedback, ApiError> {
        self.get_json(&format!("/admin/feedback/{feedback_id}"))
            .await
    }

    async fn list_feedback_actions(
        &self,
        feedback_id: i64,
    ) -> Result<Vec<ModerationAction>, ApiError> {
        self.get_json(&format!("/admin/feedback/{feedback_id}/actions"))
            .await
    }

    async fn list_actions(&self) -> Result<Vec<ModerationAction>, ApiError> {
        self.get_json("/admin/action/").await
    }

    async fn create_action(&self, action: &NewAction) -> Result<(), ApiError> {
        let body = ActionComment {
            comment: action.comment.clone(),
        };
        self.send(
            self.client
                .post(self.url(&format!(
                    "/admin/{}/feedback/{}/",
                    action.admin_id, action.feedback_id
                )))
                .json(&body),
            SuccessPolicy::Any2xx,
        )
        .await?;
        Ok(())
    }

    async fn update_action(&self, action_id: i64, comment: &str) -> Result<(), ApiError> {
        let body = ActionComment {
            comment: comment.to_string(),
        };
        self.send(
            self.client
                .put(self.url(&format!("/admin/action/{action_id}/")))
                .json(&body),
            SuccessPolicy::Any2xx,
        )
        .await?;
        Ok(())
    }

    async fn delete_action(&self, action_id: i64) -> Result<(), ApiError> {
        self.send(
            self.client
                .delete(self.url(&format!("/admin/action/{action_id}/"))),
            SuccessPolicy::Any2xx,
        )
        .await?;
        Ok(())
    }

    async fn get_action(&self, action_id: i64) -> Result<ModerationAction, ApiError> {
        self.get_json(&format!("/admin/action/{action_id}")).await
    }
}
