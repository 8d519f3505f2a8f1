use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Records that carry a server-assigned numeric id. Search boxes in the dashboard
/// match against the id's string form.
pub trait Identified {
    fn id(&self) -> i64;

    /// Exact match of the id's string form against `needle`. No trimming is done here;
    /// callers decide whether the raw input or a trimmed one is compared.
    fn id_matches(&self, needle: &str) -> bool {
        self.id().to_string() == needle
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Administrator {
    pub admin_id: i64,
    pub email: String,
    #[serde(rename = "isDeleted", default)]
    pub is_deleted: bool,
}

impl Administrator {
    pub fn new(admin_id: i64, email: impl Into<String>, is_deleted: bool) -> Self {
        Self {
            admin_id,
            email: email.into(),
            is_deleted,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_deleted { "Deactivated" } else { "Active" }
    }
}

impl Identified for Administrator {
    fn id(&self) -> i64 {
        self.admin_id
    }
}

/// A feedback submission. The moderation fields are filled in by the server once an
/// action references the feedback.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Feedback {
    pub feedback_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub submission_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub actioned_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub action_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub action_comment: Option<String>,
}

impl Feedback {
    pub fn new(
        feedback_id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            feedback_id,
            name: Some(name.into()),
            email: Some(email.into()),
            text: text.into(),
            submission_date: None,
            actioned_by: None,
            action_date: None,
            action_comment: None,
        }
    }

    pub fn is_actioned(&self) -> bool {
        self.actioned_by.is_some()
    }
}

impl Identified for Feedback {
    fn id(&self) -> i64 {
        self.feedback_id
    }
}

/// A moderation action taken by an administrator on a feedback item.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ModerationAction {
    pub action_id: i64,
    pub admin_id: i64,
    pub feedback_id: i64,
    #[serde(default)]
    pub action_comment: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub action_date: Option<String>,
}

impl ModerationAction {
    pub fn new(
        action_id: i64,
        admin_id: i64,
        feedback_id: i64,
        action_comment: impl Into<String>,
    ) -> Self {
        Self {
            action_id,
            admin_id,
            feedback_id,
            action_comment: action_comment.into(),
            action_date: None,
        }
    }
}

impl Identified for ModerationAction {
    fn id(&self) -> i64 {
        self.action_id
    }
}

/// Body for adding/reactivating an admin and for updating an admin's email
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AdminEmail {
    pub email: String,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub text: String,
}

/// Body for creating and updating actions
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ActionComment {
    pub comment: String,
}

/// A validated request to create an action. The ids travel in the url, only the
/// comment goes in the body.
#[derive(Clone, PartialEq, Debug)]
pub struct NewAction {
    pub admin_id: i64,
    pub feedback_id: i64,
    pub comment: String,
}

/// Response of the admin email check endpoint
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AdminCheck {
    #[serde(rename = "adminId")]
    pub admin_id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "isDeleted", default)]
    pub is_deleted: bool,
}

/// Accept null, missing, string or scalar values and normalise them to an optional string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
