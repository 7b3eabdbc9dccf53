//! Runtime execution modes.
//!
//! - `tui`: full-screen login screen (optional feature)

#[cfg(feature = "tui")]
pub use plango_tui::{ScreenExit, run_login_screen};

#[cfg(not(feature = "tui"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenExit {
    Cancelled,
    Completed,
}

#[cfg(not(feature = "tui"))]
pub fn run_login_screen(
    _config: &plango_core::config::Config,
    _callbacks: &mut dyn plango_core::LoginCallbacks,
) -> anyhow::Result<ScreenExit> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
