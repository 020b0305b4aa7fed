//! Field-level checks shared by the contact form, the newsletter signup and the
//! link generators.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Why a single field was rejected. The display text is a developer-facing
/// fallback; pages show the localized label from the content tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
pub enum FieldError {
    #[error("field is required")]
    Required,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("phone number needs at least 7 digits")]
    InvalidPhone,
}

/// `local@domain.tld` shape: one `@`, no whitespace, a dot somewhere after the `@`.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Trims `value` and rejects it when nothing is left.
pub fn validate_required(value: &str) -> Result<&str, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(trimmed)
    }
}

/// Required email: blank is `Required`, malformed is `InvalidEmail`.
pub fn check_email(value: &str) -> Result<&str, FieldError> {
    let trimmed = validate_required(value)?;
    if validate_email(trimmed) {
        Ok(trimmed)
    } else {
        Err(FieldError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("roy.r+site@royrai.co.il"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn required_trims() {
        assert_eq!(validate_required("  Dana "), Ok("Dana"));
        assert_eq!(validate_required(" \t\n"), Err(FieldError::Required));
    }

    #[test]
    fn email_check_distinguishes_blank_from_malformed() {
        assert_eq!(check_email("   "), Err(FieldError::Required));
        assert_eq!(check_email("nope"), Err(FieldError::InvalidEmail));
        assert_eq!(check_email(" a@b.com "), Ok("a@b.com"));
    }
}
