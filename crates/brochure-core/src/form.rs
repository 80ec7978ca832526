//! Contact form validation and panel state.

use std::sync::LazyLock;

use regex_lite::Regex;
use thiserror::Error;

/// Permissive email shape: something@something.something, no whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Why a submission was rejected. The UI maps every case to a silent no-op;
/// the reason only surfaces in debug logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormRejection {
    #[error("a required field is empty")]
    EmptyField,
    #[error("email failed validation")]
    InvalidEmail,
}

/// A validated, trimmed submission. Never actually transmitted anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Trim all three fields and validate them.
pub fn validate(name: &str, phone: &str, email: &str) -> Result<ContactSubmission, FormRejection> {
    let name = name.trim();
    let phone = phone.trim();
    let email = email.trim();

    if name.is_empty() || phone.is_empty() || email.is_empty() {
        return Err(FormRejection::EmptyField);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FormRejection::InvalidEmail);
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
    })
}

/// Which contact panel is visible. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

impl FormPhase {
    pub fn form_hidden(&self) -> bool {
        *self == FormPhase::Submitted
    }

    pub fn success_hidden(&self) -> bool {
        *self == FormPhase::Editing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission_is_trimmed() {
        let submission = validate("  Asha Rao ", " 98200 00000 ", " asha@example.co.in ").unwrap();
        assert_eq!(submission.name, "Asha Rao");
        assert_eq!(submission.phone, "98200 00000");
        assert_eq!(submission.email, "asha@example.co.in");
    }

    #[test]
    fn test_minimal_valid_submission() {
        assert!(validate("A", "1", "a@b.co").is_ok());
    }

    #[test]
    fn test_empty_fields_reject() {
        assert_eq!(
            validate("", "123", "a@b.co"),
            Err(FormRejection::EmptyField)
        );
        assert_eq!(validate("A", "", "a@b.co"), Err(FormRejection::EmptyField));
        assert_eq!(validate("A", "123", ""), Err(FormRejection::EmptyField));
        // Whitespace-only counts as empty after trimming.
        assert_eq!(
            validate("A", "   ", "a@b.co"),
            Err(FormRejection::EmptyField)
        );
    }

    #[test]
    fn test_bad_emails_reject() {
        for email in ["a@b", "@b.co", "a@.co", "a b@c.de", "plainaddress", "a@b c.de"] {
            assert_eq!(
                validate("A", "1", email),
                Err(FormRejection::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn test_permissive_emails_pass() {
        // The pattern is deliberately loose; these are all accepted.
        for email in ["a@b.co", "first.last@sub.domain.org", "x+tag@y.z"] {
            assert!(validate("A", "1", email).is_ok(), "{email}");
        }
    }

    #[test]
    fn test_exactly_one_panel_visible() {
        for phase in [FormPhase::Editing, FormPhase::Submitted] {
            assert_ne!(phase.form_hidden(), phase.success_hidden());
        }
        assert!(!FormPhase::Editing.form_hidden());
        assert!(FormPhase::Submitted.form_hidden());
    }
}
