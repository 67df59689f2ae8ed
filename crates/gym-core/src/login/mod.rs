//! Login form validation.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email is required")]
    Required,
    #[error("Please enter a valid email address")]
    Invalid,
}

pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.trim().is_empty() {
        return Err(EmailError::Required);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(EmailError::Invalid);
    }
    Ok(())
}

/// The login form may be submitted once the email is valid and a password is present.
pub fn is_login_form_valid(email: &str, password: &str) -> bool {
    validate_email(email).is_ok() && !password.trim().is_empty()
}
