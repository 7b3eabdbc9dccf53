//! Full-screen terminal view of the PlanGo login form.
//!
//! Elm-style split:
//! - `state`: everything the screen shows
//! - `update`: the reducer, turning events into state changes and effects
//! - `runtime`: terminal loop, effect execution against the collaborator
//! - `render`: pure drawing

pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{form, input};
use plango_core::LoginCallbacks;
use plango_core::config::Config;
pub use runtime::TuiRuntime;
pub use state::{AppState, ScreenExit};

/// Shows the login screen until the user leaves or a collaborator closes it.
///
/// # Errors
/// Fails when stderr is not a terminal or on terminal I/O errors.
pub fn run_login_screen(config: &Config, callbacks: &mut dyn LoginCallbacks) -> Result<ScreenExit> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The login screen requires a terminal.\n\
             Use `plango check --email ... --password ...` for non-interactive validation."
        );
    }

    tracing::info!(brand = %config.brand, "opening login screen");
    let mut runtime = TuiRuntime::new(AppState::new(config), callbacks)?;
    let exit = runtime.run()?;
    tracing::info!(?exit, "login screen closed");
    Ok(exit)
}
