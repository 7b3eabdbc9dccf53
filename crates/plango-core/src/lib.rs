//! Core of the PlanGo sign-in screen.
//!
//! Owns the form state, the validation rules, the notices shown to the
//! user and the collaborators that receive user intents. Nothing here
//! touches the terminal; the view lives in `plango-tui`.

pub mod callbacks;
pub mod config;
pub mod form;
pub mod logging;
pub mod notice;
pub mod validation;

pub use callbacks::{CallbackAction, LoginCallbacks, LoginOptions, PlaceholderCallbacks};
pub use form::{LoginForm, SubmitOutcome};
pub use notice::{Notice, NoticeKind};
pub use validation::ValidationError;
