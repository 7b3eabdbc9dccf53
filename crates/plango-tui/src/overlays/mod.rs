//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and render function.
//!
//! - `notice.rs`: modal notice (validation errors, collaborator messages)
//! - `render_utils.rs`: shared rendering utilities for overlays

pub mod notice;
pub mod render_utils;

use crossterm::event::KeyEvent;
pub use notice::NoticeState;
use plango_core::Notice;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::theme::Palette;

/// Transition returned by overlay key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
}

impl OverlayUpdate {
    pub fn stay() -> Self {
        Self {
            transition: OverlayTransition::Stay,
        }
    }

    pub fn close() -> Self {
        Self {
            transition: OverlayTransition::Close,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Notice(NoticeState),
}

impl Overlay {
    pub fn notice(notice: Notice) -> Self {
        Overlay::Notice(NoticeState::new(notice))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        match self {
            Overlay::Notice(n) => n.render(frame, area, palette),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Notice(n) => n.handle_key(key),
        }
    }
}

/// Routes a key to the open overlay, closing it when asked.
///
/// Returns false when no overlay is open, so the caller can handle the key.
pub fn handle_overlay_key(overlay: &mut Option<Overlay>, key: KeyEvent) -> bool {
    let Some(active) = overlay.as_mut() else {
        return false;
    };

    let update = active.handle_key(key);
    if update.transition == OverlayTransition::Close {
        *overlay = None;
    }
    true
}
