//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::widgets::Block;

use crate::form;
use crate::state::AppState;

/// Renders the entire screen to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let palette = &app.style.palette;

    frame.render_widget(Block::default().style(palette.base()), area);

    let cursor = form::render_form(frame, area, &app.form, &app.style);

    match &app.overlay {
        Some(overlay) => overlay.render(frame, area, palette),
        None => {
            if let Some(position) = cursor {
                frame.set_cursor_position(position);
            }
        }
    }
}
