//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use plango_core::{CallbackAction, Notice, SubmitOutcome};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::form::{self, FormIntent};
use crate::overlays::{self, Overlay};
use crate::state::{AppState, ScreenExit};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Callback(action) => {
            handle_callback_action(app, action);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            // Pasting into a field behind an open notice would be invisible.
            if app.overlay.is_none() {
                form::handle_paste(&mut app.form, &text);
            }
            vec![]
        }
        // Resize only needs a redraw, which the runtime does after every event.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if matches!(key.kind, KeyEventKind::Release) {
        return vec![];
    }

    if overlays::handle_overlay_key(&mut app.overlay, key) {
        return vec![];
    }

    match form::handle_key(&mut app.form, key) {
        FormIntent::None => vec![],
        FormIntent::Submit => submit(app),
        FormIntent::ForgotPassword => vec![UiEffect::ForgotPassword],
        FormIntent::Register => vec![UiEffect::Register],
        FormIntent::Quit => {
            app.exit = Some(ScreenExit::Cancelled);
            vec![]
        }
    }
}

/// Runs the submit checks. Failures open their notice here and never reach
/// the collaborator; success becomes an effect carrying the email.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    match app.form.form.submit() {
        SubmitOutcome::Success { email } => vec![UiEffect::LoginSucceeded { email }],
        SubmitOutcome::Rejected(err) => {
            app.overlay = Some(Overlay::notice(Notice::from(err)));
            vec![]
        }
    }
}

fn handle_callback_action(app: &mut AppState, action: CallbackAction) {
    match action {
        CallbackAction::None => {}
        CallbackAction::ShowNotice(notice) => app.overlay = Some(Overlay::notice(notice)),
        CallbackAction::Exit => app.exit = Some(ScreenExit::Completed),
    }
}
