//! Events consumed by the reducer.

use crossterm::event::Event;
use plango_core::CallbackAction;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Raw terminal input (keys, paste, resize).
    Terminal(Event),
    /// A collaborator finished handling an intent.
    Callback(CallbackAction),
}
