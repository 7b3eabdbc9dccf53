//! Submit-time validation.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. both fields present
//! 2. email matches [`EMAIL_PATTERN`]

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

// One or more chars that are neither `@` nor ECMAScript whitespace. That
// set includes U+FEFF and leaves out U+0085, unlike the Unicode `\s`.
macro_rules! email_part {
    () => {
        r"[^\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+"
    };
}

/// Email shape accepted by the form: `local@domain.tld` with no
/// whitespace and exactly one `@`. Same acceptance set as the
/// browser-side `/^[^\s@]+@[^\s@]+\.[^\s@]+$/`.
pub const EMAIL_PATTERN: &str = concat!(
    "^",
    email_part!(),
    "@",
    email_part!(),
    r"\.",
    email_part!(),
    "$"
);

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Client-side validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email or password (or both) is empty.
    #[error("email and password are required")]
    MissingField,
    /// Email is present but does not match [`EMAIL_PATTERN`].
    #[error("email address is not valid")]
    InvalidEmail,
}

/// Returns true if `email` matches [`EMAIL_PATTERN`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates a login attempt.
///
/// No trimming happens: `" a@b.c"` is rejected because of the space.
///
/// # Errors
/// Returns the first failing check.
pub fn validate(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
