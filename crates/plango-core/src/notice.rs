//! User-facing notices.
//!
//! A notice is a modal message with a title and a body. The copy is the
//! product's own (Spanish) and is not localized.

use serde::Serialize;

use crate::validation::ValidationError;

/// Which outcome a notice reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    FieldRequired,
    InvalidEmail,
    LoginSuccess,
    ForgotPassword,
    Register,
}

impl NoticeKind {
    /// Returns true for the two validation failures.
    pub fn is_error(self) -> bool {
        matches!(self, NoticeKind::FieldRequired | NoticeKind::InvalidEmail)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn field_required() -> Self {
        Self::new(
            NoticeKind::FieldRequired,
            "Error",
            "Por favor completa todos los campos",
        )
    }

    pub fn invalid_email() -> Self {
        Self::new(
            NoticeKind::InvalidEmail,
            "Error",
            "Por favor ingresa un email válido",
        )
    }

    pub fn login_success(email: &str) -> Self {
        Self::new(
            NoticeKind::LoginSuccess,
            "Éxito",
            format!("Iniciando sesión con: {email}"),
        )
    }

    pub fn forgot_password() -> Self {
        Self::new(
            NoticeKind::ForgotPassword,
            "Recuperar contraseña",
            "Funcionalidad en desarrollo",
        )
    }

    pub fn register() -> Self {
        Self::new(
            NoticeKind::Register,
            "Registro",
            "Funcionalidad en desarrollo",
        )
    }
}

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingField => Notice::field_required(),
            ValidationError::InvalidEmail => Notice::invalid_email(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_email() {
        let notice = Notice::login_success("user@example.com");
        assert_eq!(notice.kind, NoticeKind::LoginSuccess);
        assert_eq!(notice.message, "Iniciando sesión con: user@example.com");
    }

    #[test]
    fn validation_errors_map_to_error_notices() {
        let missing = Notice::from(ValidationError::MissingField);
        let invalid = Notice::from(ValidationError::InvalidEmail);
        assert_eq!(missing.kind, NoticeKind::FieldRequired);
        assert_eq!(invalid.kind, NoticeKind::InvalidEmail);
        assert!(missing.kind.is_error() && invalid.kind.is_error());
        assert!(!NoticeKind::LoginSuccess.is_error());
    }
}
