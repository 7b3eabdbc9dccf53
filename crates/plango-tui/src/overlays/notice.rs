//! Notice overlay.
//!
//! Modal message box for validation errors and collaborator notices. While
//! open it swallows every key; Enter, Esc or Space closes it.

use crossterm::event::{KeyCode, KeyEvent};
use plango_core::Notice;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::OverlayUpdate;
use super::render_utils::{calculate_overlay_area, render_overlay_container};
use crate::theme::Palette;

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 50;
const OK_LABEL: &str = "[ OK ]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeState {
    pub notice: Notice,
}

impl NoticeState {
    pub fn new(notice: Notice) -> Self {
        Self { notice }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let message_width = u16::try_from(self.notice.message.width()).unwrap_or(u16::MAX);
        let width = message_width.saturating_add(4).clamp(MIN_WIDTH, MAX_WIDTH);
        let inner_width = width.saturating_sub(4).max(1);
        let message_lines = message_width.div_ceil(inner_width).max(1);
        // border + padding + message + gap + button + padding + border
        let height = message_lines.saturating_add(6);

        let popup = calculate_overlay_area(area, width, height);
        let border = if self.notice.kind.is_error() {
            palette.error
        } else {
            palette.accent
        };
        let inner = render_overlay_container(
            frame,
            popup,
            &self.notice.title,
            border,
            palette.base(),
        );
        let inner = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height,
        );

        let [_, body, _, button] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(self.notice.message.as_str())
                .style(palette.base())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            body,
        );
        frame.render_widget(
            Paragraph::new(Line::styled(
                OK_LABEL,
                palette.link().add_modifier(Modifier::REVERSED),
            ))
            .alignment(Alignment::Center),
            button,
        );
    }
}
