//! Form validation.
//!
//! Checks run in a fixed order (required fields, email, phone) and stop at the
//! first failure, so the user sees one notice at a time.

use crate::error::ValidationError;
use crate::model::{UserDraft, ValidUser};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid phone pattern"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Trim the text fields of `draft` and check them.
pub fn validate(draft: &UserDraft) -> Result<ValidUser, ValidationError> {
    let name = draft.name.trim();
    let email = draft.email.trim();
    let phone = draft.phone.trim();

    if name.is_empty() || email.is_empty() || phone.is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone(phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(ValidUser {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        role: draft.role,
        status: draft.status,
    })
}
