//! Collaborators that receive the form's user intents.
//!
//! The form validates on its own; only the three intents that would lead
//! somewhere else (a successful login, "forgot password", "register") are
//! handed to a [`LoginCallbacks`] implementation. What happens next is up to
//! the collaborator: show a notice, leave the screen, or nothing at all.

use std::fmt;

use crate::notice::Notice;

/// What the screen should do after a collaborator ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    /// Keep the screen as is.
    None,
    /// Open a notice.
    ShowNotice(Notice),
    /// Close the screen.
    Exit,
}

/// Receives user intents from the login form.
pub trait LoginCallbacks {
    /// Called after a submit passed validation.
    fn on_login_success(&mut self, email: &str) -> CallbackAction;

    fn on_forgot_password(&mut self) -> CallbackAction;

    fn on_register(&mut self) -> CallbackAction;
}

/// The product's current behavior: every intent shows a notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderCallbacks;

impl LoginCallbacks for PlaceholderCallbacks {
    fn on_login_success(&mut self, email: &str) -> CallbackAction {
        CallbackAction::ShowNotice(Notice::login_success(email))
    }

    fn on_forgot_password(&mut self) -> CallbackAction {
        CallbackAction::ShowNotice(Notice::forgot_password())
    }

    fn on_register(&mut self) -> CallbackAction {
        CallbackAction::ShowNotice(Notice::register())
    }
}

type EmailFn = Box<dyn FnMut(&str) -> CallbackAction>;
type IntentFn = Box<dyn FnMut() -> CallbackAction>;

/// Callbacks assembled from closures.
///
/// Recognized options are `on_login_success`, `on_forgot_password` and
/// `on_register`, set with the matching `with_*` builder. Any option left
/// unset behaves like [`PlaceholderCallbacks`].
///
/// ```ignore
/// let options = LoginOptions::new()
///     .with_login_success(|email| {
///         println!("{email}");
///         CallbackAction::Exit
///     });
/// ```
#[derive(Default)]
pub struct LoginOptions {
    on_login_success: Option<EmailFn>,
    on_forgot_password: Option<IntentFn>,
    on_register: Option<IntentFn>,
}

impl LoginOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_login_success(
        mut self,
        f: impl FnMut(&str) -> CallbackAction + 'static,
    ) -> Self {
        self.on_login_success = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_forgot_password(mut self, f: impl FnMut() -> CallbackAction + 'static) -> Self {
        self.on_forgot_password = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_register(mut self, f: impl FnMut() -> CallbackAction + 'static) -> Self {
        self.on_register = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for LoginOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginOptions")
            .field("on_login_success", &self.on_login_success.is_some())
            .field("on_forgot_password", &self.on_forgot_password.is_some())
            .field("on_register", &self.on_register.is_some())
            .finish()
    }
}

impl LoginCallbacks for LoginOptions {
    fn on_login_success(&mut self, email: &str) -> CallbackAction {
        match self.on_login_success.as_mut() {
            Some(f) => f(email),
            None => PlaceholderCallbacks.on_login_success(email),
        }
    }

    fn on_forgot_password(&mut self) -> CallbackAction {
        match self.on_forgot_password.as_mut() {
            Some(f) => f(),
            None => PlaceholderCallbacks.on_forgot_password(),
        }
    }

    fn on_register(&mut self) -> CallbackAction {
        match self.on_register.as_mut() {
            Some(f) => f(),
            None => PlaceholderCallbacks.on_register(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::notice::NoticeKind;

    fn notice_kind(action: &CallbackAction) -> Option<NoticeKind> {
        match action {
            CallbackAction::ShowNotice(notice) => Some(notice.kind),
            _ => None,
        }
    }

    #[test]
    fn placeholder_shows_notices() {
        let mut cb = PlaceholderCallbacks;
        assert_eq!(
            notice_kind(&cb.on_login_success("a@b.c")),
            Some(NoticeKind::LoginSuccess)
        );
        assert_eq!(
            notice_kind(&cb.on_forgot_password()),
            Some(NoticeKind::ForgotPassword)
        );
        assert_eq!(notice_kind(&cb.on_register()), Some(NoticeKind::Register));
    }

    #[test]
    fn options_delegate_to_closures() {
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&seen);
        let mut options = LoginOptions::new()
            .with_login_success(move |email| {
                sink.borrow_mut().push(email.to_string());
                CallbackAction::Exit
            })
            .with_forgot_password(|| CallbackAction::ShowNotice(Notice::register()))
            .with_register(|| CallbackAction::None);

        assert_eq!(options.on_login_success("x@y.z"), CallbackAction::Exit);
        assert_eq!(
            notice_kind(&options.on_forgot_password()),
            Some(NoticeKind::Register)
        );
        assert_eq!(options.on_register(), CallbackAction::None);
        assert_eq!(*seen.borrow(), vec!["x@y.z".to_string()]);
    }

    #[test]
    fn unset_options_fall_back_to_placeholder() {
        let mut options = LoginOptions::new().with_register(|| CallbackAction::None);
        assert_eq!(
            notice_kind(&options.on_forgot_password()),
            Some(NoticeKind::ForgotPassword)
        );
        assert_eq!(
            notice_kind(&options.on_login_success("a@b.c")),
            Some(NoticeKind::LoginSuccess)
        );
    }

    #[test]
    fn options_debug_hides_closures() {
        let options = LoginOptions::new().with_register(|| CallbackAction::None);
        let debug = format!("{options:?}");
        assert!(debug.contains("on_register: true"));
        assert!(debug.contains("on_login_success: false"));
    }
}
