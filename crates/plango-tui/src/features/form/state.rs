//! Form feature state.

use plango_core::LoginForm;

use crate::input::LineBuffer;

/// Controls that can hold keyboard focus, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    EyeToggle,
    ForgotPassword,
    Login,
    Register,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Email,
        Focus::Password,
        Focus::EyeToggle,
        Focus::ForgotPassword,
        Focus::Login,
        Focus::Register,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next control, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Previous control, wrapping to the last.
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// Form slice of the TUI state.
///
/// `form` holds the values validation runs on; the two buffers hold the
/// editing cursor for each field and are copied into `form` after every
/// edit, so `form` always reflects the latest keystroke.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub form: LoginForm,
    pub email_input: LineBuffer,
    pub password_input: LineBuffer,
    pub focus: Focus,
}

impl FormState {
    /// Buffer of the focused text field, if any.
    pub fn focused_input_mut(&mut self) -> Option<&mut LineBuffer> {
        match self.focus {
            Focus::Email => Some(&mut self.email_input),
            Focus::Password => Some(&mut self.password_input),
            _ => None,
        }
    }

    /// Copies the buffer contents into the form values.
    pub fn sync(&mut self) {
        self.form.set_email(self.email_input.text());
        self.form.set_password(self.password_input.text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_forward_and_back() {
        let mut focus = Focus::Email;
        for _ in 0..Focus::ORDER.len() {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Email);
        assert_eq!(Focus::Email.prev(), Focus::Register);
        assert_eq!(Focus::Register.next(), Focus::Email);
        assert_eq!(Focus::Password.prev(), Focus::Email);
    }

    #[test]
    fn only_fields_take_text() {
        let mut state = FormState::default();
        assert!(state.focused_input_mut().is_some());
        state.focus = Focus::Login;
        assert!(state.focused_input_mut().is_none());
    }

    #[test]
    fn sync_copies_buffers() {
        let mut state = FormState::default();
        state.email_input.insert_str("a@b.c");
        state.password_input.insert_str("pw");
        state.sync();
        assert_eq!(state.form.email(), "a@b.c");
        assert_eq!(state.form.password(), "pw");
    }
}
