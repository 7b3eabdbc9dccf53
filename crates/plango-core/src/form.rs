//! Login form state.
//!
//! Three values, owned by the screen and dropped with it: the email, the
//! password and whether the password is shown in plain text.

use crate::notice::Notice;
use crate::validation::{self, ValidationError};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; carries the email exactly as entered.
    Success { email: String },
    /// A validation check failed.
    Rejected(ValidationError),
}

impl SubmitOutcome {
    /// The notice the placeholder flow shows for this outcome.
    pub fn notice(&self) -> Notice {
        match self {
            SubmitOutcome::Success { email } => Notice::login_success(email),
            SubmitOutcome::Rejected(err) => Notice::from(*err),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    email: String,
    password: String,
    password_visible: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Flips password visibility and returns the new value.
    pub fn toggle_password_visibility(&mut self) -> bool {
        self.password_visible = !self.password_visible;
        self.password_visible
    }

    /// Password as it should be displayed: one `mask` per char while
    /// hidden, plain text otherwise.
    pub fn display_password(&self, mask: char) -> String {
        if self.password_visible {
            self.password.clone()
        } else {
            std::iter::repeat_n(mask, self.password.chars().count()).collect()
        }
    }

    /// Runs the submit checks against the current values.
    pub fn submit(&self) -> SubmitOutcome {
        match validation::validate(&self.email, &self.password) {
            Ok(()) => SubmitOutcome::Success {
                email: self.email.clone(),
            },
            Err(err) => SubmitOutcome::Rejected(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeKind;

    fn form(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        form.set_email(email);
        form.set_password(password);
        form
    }

    #[test]
    fn starts_empty_and_masked() {
        let form = LoginForm::new();
        assert_eq!(form.email(), "");
        assert_eq!(form.password(), "");
        assert!(!form.is_password_visible());
    }

    #[test]
    fn empty_email_reports_field_required() {
        let outcome = form("", "x").submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(ValidationError::MissingField)
        );
        assert_eq!(outcome.notice().kind, NoticeKind::FieldRequired);
    }

    #[test]
    fn email_without_dot_reports_invalid_email() {
        let outcome = form("a@b", "x").submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(ValidationError::InvalidEmail)
        );
        assert_eq!(outcome.notice().kind, NoticeKind::InvalidEmail);
    }

    #[test]
    fn valid_submit_carries_exact_email() {
        let outcome = form("user@example.com", "secret").submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Success {
                email: "user@example.com".to_string()
            }
        );
        assert_eq!(
            outcome.notice().message,
            "Iniciando sesión con: user@example.com"
        );
    }

    #[test]
    fn mixed_case_email_is_not_normalized() {
        let outcome = form("User@Example.COM", "pw").submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Success {
                email: "User@Example.COM".to_string()
            }
        );
    }

    #[test]
    fn toggle_twice_restores_visibility() {
        let mut form = form("a@b.c", "secret");
        let before = form.is_password_visible();
        form.toggle_password_visibility();
        form.toggle_password_visibility();
        assert_eq!(form.is_password_visible(), before);
    }

    #[test]
    fn toggle_unmasks_password() {
        let mut form = form("a@b.c", "sëcret");
        assert_eq!(form.display_password('•'), "••••••");
        assert!(form.toggle_password_visibility());
        assert_eq!(form.display_password('•'), "sëcret");
    }

    #[test]
    fn toggle_does_not_touch_fields() {
        let mut form = form("a@b.c", "pw");
        form.toggle_password_visibility();
        assert_eq!(form.email(), "a@b.c");
        assert_eq!(form.password(), "pw");
    }
}
