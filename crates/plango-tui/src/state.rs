//! Application state composition.
//!
//! ```text
//! AppState
//! ├── form: FormState          (login form values, edit buffers, focus)
//! ├── overlay: Option<Overlay> (modal notice)
//! ├── style: ScreenStyle       (brand, mask, palette from config)
//! └── exit: Option<ScreenExit> (set once the screen should close)
//! ```
//!
//! The overlay lives beside the form rather than inside it, so overlay
//! handlers and form handlers never need overlapping borrows.

use plango_core::config::Config;

use crate::form::FormState;
use crate::overlays::Overlay;
use crate::theme::Palette;

/// Why the screen closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenExit {
    /// The user left with Esc or Ctrl+C.
    Cancelled,
    /// A collaborator asked the screen to close.
    Completed,
}

/// Static presentation settings resolved from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenStyle {
    pub brand: String,
    pub mask_char: char,
    pub palette: Palette,
}

impl ScreenStyle {
    pub fn from_config(config: &Config) -> Self {
        Self {
            brand: config.brand.clone(),
            mask_char: config.mask_char,
            palette: Palette::from_theme(&config.theme),
        }
    }
}

impl Default for ScreenStyle {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: FormState,
    pub overlay: Option<Overlay>,
    pub style: ScreenStyle,
    pub exit: Option<ScreenExit>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            style: ScreenStyle::from_config(config),
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.exit.is_some()
    }
}
