//! Form feature reducer.
//!
//! Key handling for the form. State-only changes (editing, focus, the
//! visibility toggle) happen in place; anything that needs the rest of the
//! app comes back as a [`FormIntent`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{Focus, FormState};

/// What the form asks the app to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIntent {
    None,
    Submit,
    ForgotPassword,
    Register,
    Quit,
}

pub fn handle_key(state: &mut FormState, key: KeyEvent) -> FormIntent {
    if matches!(key.kind, KeyEventKind::Release) {
        return FormIntent::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return FormIntent::Quit,
        KeyCode::Char('c') if ctrl => return FormIntent::Quit,
        KeyCode::Char('t') if ctrl => {
            toggle_password_visibility(state);
            return FormIntent::None;
        }
        KeyCode::Char('l') if ctrl => return FormIntent::Submit,
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
            return FormIntent::None;
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.prev();
            return FormIntent::None;
        }
        _ => {}
    }

    match (state.focus, key.code) {
        (Focus::Email, KeyCode::Enter) => {
            state.focus = Focus::Password;
            FormIntent::None
        }
        (Focus::Password | Focus::Login, KeyCode::Enter)
        | (Focus::Login, KeyCode::Char(' ')) => FormIntent::Submit,
        (Focus::EyeToggle, KeyCode::Enter | KeyCode::Char(' ')) => {
            toggle_password_visibility(state);
            FormIntent::None
        }
        (Focus::ForgotPassword, KeyCode::Enter | KeyCode::Char(' ')) => FormIntent::ForgotPassword,
        (Focus::Register, KeyCode::Enter | KeyCode::Char(' ')) => FormIntent::Register,
        _ => {
            if let Some(input) = state.focused_input_mut()
                && input.input(key)
            {
                state.sync();
            }
            FormIntent::None
        }
    }
}

/// Inserts pasted text into the focused field. Ignored elsewhere.
pub fn handle_paste(state: &mut FormState, text: &str) {
    if let Some(input) = state.focused_input_mut() {
        input.insert_str(text);
        state.sync();
    }
}

pub fn toggle_password_visibility(state: &mut FormState) {
    let visible = state.form.toggle_password_visibility();
    tracing::debug!(visible, "password visibility toggled");
}
