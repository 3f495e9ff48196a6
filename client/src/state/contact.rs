//! Contact form draft and validation.
//!
//! The form never leaves the browser: a valid draft becomes a
//! `ContactSubmission` that the page logs and acknowledges.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("{} is required", .0.label())]
    Missing(ContactField),
    #[error("email address must contain '@'")]
    InvalidEmail,
}

impl ContactFormError {
    /// The field the error should be shown next to.
    #[must_use]
    pub fn field(&self) -> ContactField {
        match self {
            Self::Missing(field) => *field,
            Self::InvalidEmail => ContactField::Email,
        }
    }
}

/// Raw form contents, updated on every keystroke.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated, trimmed message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Check fields in form order and return the first problem.
    ///
    /// # Errors
    ///
    /// `Missing` for a blank name, email or message; `InvalidEmail` when the
    /// email has no `@` with text on both sides.
    pub fn validate(&self) -> Result<ContactSubmission, ContactFormError> {
        let name = required(&self.name, ContactField::Name)?;
        let email = required(&self.email, ContactField::Email)?;
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(ContactFormError::InvalidEmail),
        }
        let message = required(&self.message, ContactField::Message)?;
        let subject = Some(self.subject.trim()).filter(|s| !s.is_empty()).map(str::to_owned);
        Ok(ContactSubmission { name, email, subject, message })
    }
}

fn required(value: &str, field: ContactField) -> Result<String, ContactFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContactFormError::Missing(field));
    }
    Ok(trimmed.to_owned())
}
