//! Contact form message model
//!
//! The form never talks to a network: submission is validated client-side
//! and acknowledged locally, nothing else.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A message drafted in the contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Checks the draft is sendable: every field filled in and a plausibly
    /// shaped email address.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("name is required".to_string()));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(Error::Validation("email is required".to_string()));
        }
        if !is_plausible_email(email) {
            return Err(Error::Validation(format!(
                "not a valid email address: {email}"
            )));
        }
        if self.message.trim().is_empty() {
            return Err(Error::Validation("message is required".to_string()));
        }
        Ok(())
    }

    /// JSON form of the draft, used for the console acknowledgement log.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Single `@`, non-empty local part, dotted domain. Deliberately loose:
/// real validation belongs to whatever would actually deliver the message.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactMessage {
        ContactMessage {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_valid_message_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut message = draft();
        message.name = "   ".to_string();
        let error = message.validate().unwrap_err();
        assert!(matches!(error, Error::Validation(ref s) if s.contains("name")));
    }

    #[test]
    fn test_blank_email_rejected() {
        let mut message = draft();
        message.email = String::new();
        let error = message.validate().unwrap_err();
        assert!(matches!(error, Error::Validation(ref s) if s.contains("email")));
    }

    #[test]
    fn test_malformed_email_rejected() {
        for bad in ["jane", "@example.com", "jane@com", "jane@a@b.com", "jane@.com"] {
            let mut message = draft();
            message.email = bad.to_string();
            assert!(message.validate().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_blank_message_rejected() {
        let mut message = draft();
        message.message = "\n".to_string();
        let error = message.validate().unwrap_err();
        assert!(matches!(error, Error::Validation(ref s) if s.contains("message")));
    }

    #[test]
    fn test_to_json_camel_case() {
        let json = draft().to_json().expect("serialize failed");
        assert!(json.contains("\"name\":\"Jane Doe\""));
        assert!(json.contains("\"email\":\"jane@example.com\""));
        assert!(json.contains("\"message\":\"Hello there\""));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let json = r#"{"name": "Jane Doe"}"#;
        let message: ContactMessage = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(message.name, "Jane Doe");
        assert_eq!(message.email, "");
    }
}
