//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! The reducer stays pure and produces effects; this module is where the
//! injected `LoginCallbacks` collaborator actually gets called.

use std::io::Stderr;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use plango_core::{CallbackAction, LoginCallbacks};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, ScreenExit};
use crate::{render, terminal, update};

/// Poll timeout while waiting for input.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen runtime for the login form.
///
/// Terminal state is restored on drop, so an early `?` return from the loop
/// still leaves the shell usable.
pub struct TuiRuntime<'a> {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    pub state: AppState,
    callbacks: &'a mut dyn LoginCallbacks,
}

impl<'a> TuiRuntime<'a> {
    /// Enters the alternate screen and prepares the state.
    ///
    /// # Errors
    /// Fails if the terminal cannot be put into raw mode.
    pub fn new(state: AppState, callbacks: &'a mut dyn LoginCallbacks) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state,
            callbacks,
        })
    }

    /// Runs the event loop until the screen closes.
    ///
    /// # Errors
    /// Fails on terminal I/O errors.
    pub fn run(&mut self) -> Result<ScreenExit> {
        let mut dirty = true;

        loop {
            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }

            if let Some(exit) = self.state.exit {
                return Ok(exit);
            }

            if event::poll(IDLE_POLL_DURATION)? {
                let term_event = event::read()?;
                dispatch(&mut self.state, self.callbacks, UiEvent::Terminal(term_event));
                // Drain buffered input (fast typing, paste) before redrawing.
                while self.state.exit.is_none() && event::poll(Duration::ZERO)? {
                    let term_event = event::read()?;
                    dispatch(&mut self.state, self.callbacks, UiEvent::Terminal(term_event));
                }
                dirty = true;
            }
        }
    }
}

impl Drop for TuiRuntime<'_> {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}

/// Feeds one event through the reducer and executes the resulting effects,
/// including the follow-up events the collaborator's answers produce.
pub fn dispatch(state: &mut AppState, callbacks: &mut dyn LoginCallbacks, event: UiEvent) {
    let effects = update::update(state, event);
    for effect in effects {
        let action = execute_effect(callbacks, effect);
        dispatch(state, callbacks, UiEvent::Callback(action));
    }
}

fn execute_effect(callbacks: &mut dyn LoginCallbacks, effect: UiEffect) -> CallbackAction {
    match effect {
        UiEffect::LoginSucceeded { email } => {
            tracing::info!("login submitted; invoking login collaborator");
            callbacks.on_login_success(&email)
        }
        UiEffect::ForgotPassword => {
            tracing::info!("forgot-password requested");
            callbacks.on_forgot_password()
        }
        UiEffect::Register => {
            tracing::info!("registration requested");
            callbacks.on_register()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use plango_core::{LoginOptions, NoticeKind, PlaceholderCallbacks};

    use super::*;
    use crate::form::Focus;
    use crate::overlays::Overlay;

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn fill_and_submit(state: &mut AppState, callbacks: &mut dyn LoginCallbacks, email: &str) {
        for ch in email.chars() {
            dispatch(state, callbacks, key(KeyCode::Char(ch)));
        }
        dispatch(state, callbacks, key(KeyCode::Enter));
        for ch in "secret".chars() {
            dispatch(state, callbacks, key(KeyCode::Char(ch)));
        }
        dispatch(state, callbacks, key(KeyCode::Enter));
    }

    fn notice(state: &AppState) -> Option<(NoticeKind, String)> {
        match &state.overlay {
            Some(Overlay::Notice(n)) => Some((n.notice.kind, n.notice.message.clone())),
            None => None,
        }
    }

    #[test]
    fn placeholder_success_shows_email_notice() {
        let mut state = AppState::default();
        let mut callbacks = PlaceholderCallbacks;
        fill_and_submit(&mut state, &mut callbacks, "user@example.com");

        assert_eq!(
            notice(&state),
            Some((
                NoticeKind::LoginSuccess,
                "Iniciando sesión con: user@example.com".to_string()
            ))
        );
        assert!(!state.should_quit());
    }

    #[test]
    fn success_collaborator_receives_email_and_exits() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let mut options = LoginOptions::new().with_login_success(move |email| {
            *sink.borrow_mut() = Some(email.to_string());
            CallbackAction::Exit
        });

        let mut state = AppState::default();
        fill_and_submit(&mut state, &mut options, "user@example.com");

        assert_eq!(seen.borrow().as_deref(), Some("user@example.com"));
        assert_eq!(state.exit, Some(ScreenExit::Completed));
        assert!(state.overlay.is_none());
    }

    #[test]
    fn invalid_email_never_reaches_collaborator() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut options = LoginOptions::new().with_login_success(move |_| {
            *counter.borrow_mut() += 1;
            CallbackAction::None
        });

        let mut state = AppState::default();
        fill_and_submit(&mut state, &mut options, "a@@b.c");

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(notice(&state).map(|(kind, _)| kind), Some(NoticeKind::InvalidEmail));
    }

    #[test]
    fn links_reach_their_collaborators() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let forgot_log = Rc::clone(&log);
        let register_log = Rc::clone(&log);
        let mut options = LoginOptions::new()
            .with_forgot_password(move || {
                forgot_log.borrow_mut().push("forgot");
                CallbackAction::None
            })
            .with_register(move || {
                register_log.borrow_mut().push("register");
                CallbackAction::None
            });

        let mut state = AppState::default();
        state.form.focus = Focus::ForgotPassword;
        dispatch(&mut state, &mut options, key(KeyCode::Enter));
        state.form.focus = Focus::Register;
        dispatch(&mut state, &mut options, key(KeyCode::Char(' ')));

        assert_eq!(*log.borrow(), vec!["forgot", "register"]);
        assert!(state.overlay.is_none());
    }

    #[test]
    fn placeholder_links_show_not_implemented() {
        let mut state = AppState::default();
        let mut callbacks = PlaceholderCallbacks;
        state.form.focus = Focus::Register;
        dispatch(&mut state, &mut callbacks, key(KeyCode::Enter));
        assert_eq!(
            notice(&state),
            Some((
                NoticeKind::Register,
                "Funcionalidad en desarrollo".to_string()
            ))
        );
    }
}
