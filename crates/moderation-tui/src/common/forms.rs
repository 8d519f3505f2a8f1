//! One value per form, each validated before anything is sent to the API.
use super::TextInput;
use crate::actions::FieldId;
use moderation_api::models::{NewAction, NewFeedback};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be a whole number")]
    NotANumber(&'static str),
}

fn required(input: &TextInput, label: &'static str) -> Result<String, FormError> {
    if input.is_blank() {
        Err(FormError::Missing(label))
    } else {
        Ok(input.value().trim().to_string())
    }
}

fn required_id(input: &TextInput, label: &'static str) -> Result<i64, FormError> {
    required(input, label)?
        .parse::<i64>()
        .map_err(|_| FormError::NotANumber(label))
}

/// Email of an admin to add or reactivate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddAdminForm {
    pub email: TextInput,
}

impl AddAdminForm {
    pub fn validate(&self) -> Result<String, FormError> {
        required(&self.email, "Email")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackForm {
    pub name: TextInput,
    pub email: TextInput,
    pub text: TextInput,
}

impl FeedbackForm {
    pub fn validate(&self) -> Result<NewFeedback, FormError> {
        Ok(NewFeedback {
            name: required(&self.name, "Name")?,
            email: required(&self.email, "Email")?,
            text: required(&self.text, "Text")?,
        })
    }

    pub fn field_mut(&mut self, field: FieldId) -> Option<&mut TextInput> {
        match field {
            FieldId::Name => Some(&mut self.name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Text => Some(&mut self.text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewActionForm {
    pub admin_id: TextInput,
    pub feedback_id: TextInput,
    pub comment: TextInput,
}

impl NewActionForm {
    /// The ids are only checked to be numbers; whether they exist is the server's call.
    pub fn validate(&self) -> Result<NewAction, FormError> {
        Ok(NewAction {
            admin_id: required_id(&self.admin_id, "Admin ID")?,
            feedback_id: required_id(&self.feedback_id, "Feedback ID")?,
            comment: required(&self.comment, "Comment")?,
        })
    }

    pub fn field_mut(&mut self, field: FieldId) -> Option<&mut TextInput> {
        match field {
            FieldId::NewAdminId => Some(&mut self.admin_id),
            FieldId::NewFeedbackId => Some(&mut self.feedback_id),
            FieldId::NewComment => Some(&mut self.comment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateActionForm {
    pub action_id: TextInput,
    pub comment: TextInput,
}

impl UpdateActionForm {
    pub fn validate(&self) -> Result<(i64, String), FormError> {
        Ok((
            required_id(&self.action_id, "Action ID")?,
            required(&self.comment, "New Comment")?,
        ))
    }

    pub fn field_mut(&mut self, field: FieldId) -> Option<&mut TextInput> {
        match field {
            FieldId::UpdateActionId => Some(&mut self.action_id),
            FieldId::UpdateComment => Some(&mut self.comment),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_admin_requires_email() {
        let form = AddAdminForm::default();
        assert_eq!(form.validate(), Err(FormError::Missing("Email")));

        let form = AddAdminForm {
            email: TextInput::with_value("  a@x.com "),
        };
        assert_eq!(form.validate(), Ok("a@x.com".to_string()));
    }

    #[test]
    fn test_feedback_form_reports_first_missing_field() {
        let form = FeedbackForm {
            name: TextInput::with_value("Ann"),
            email: TextInput::new(),
            text: TextInput::with_value("hi"),
        };
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Email is required"
        );
    }

    #[test]
    fn test_new_action_ids_must_be_numbers() {
        let form = NewActionForm {
            admin_id: TextInput::with_value("one"),
            feedback_id: TextInput::with_value("2"),
            comment: TextInput::with_value("spam"),
        };
        assert_eq!(form.validate(), Err(FormError::NotANumber("Admin ID")));

        let form = NewActionForm {
            admin_id: TextInput::with_value("1"),
            ..form
        };
        assert_eq!(
            form.validate(),
            Ok(NewAction {
                admin_id: 1,
                feedback_id: 2,
                comment: "spam".to_string()
            })
        );
    }

    #[test]
    fn test_update_action_form() {
        let mut form = UpdateActionForm::default();
        if let Some(input) = form.field_mut(FieldId::UpdateActionId) {
            input.enter_char('7');
        }
        assert_eq!(form.validate(), Err(FormError::Missing("New Comment")));
        form.comment = TextInput::with_value("reviewed");
        assert_eq!(form.validate(), Ok((7, "reviewed".to_string())));
        assert!(form.field_mut(FieldId::Name).is_none());
    }
}
