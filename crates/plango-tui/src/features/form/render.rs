//! Form feature view.
//!
//! Pure rendering: reads `FormState`, draws, and reports where the terminal
//! cursor belongs. Never mutates state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::{Focus, FormState};
use crate::state::ScreenStyle;
use crate::theme::Palette;

/// Width of the form column.
pub const FORM_WIDTH: u16 = 44;

const WELCOME: &str = "¡Bienvenido!";
const SUBTITLE: &str = "Inicia sesión para continuar";
const EMAIL_LABEL: &str = "Email";
const EMAIL_PLACEHOLDER: &str = "correo@ejemplo.com";
const PASSWORD_LABEL: &str = "Contraseña";
const PASSWORD_PLACEHOLDER: &str = "••••••••";
const SHOW_PASSWORD: &str = "[ver]";
const HIDE_PASSWORD: &str = "[ocultar]";
const FORGOT_PASSWORD: &str = "¿Olvidaste tu contraseña?";
const LOGIN: &str = "Iniciar Sesión";
const NO_ACCOUNT: &str = "¿No tienes una cuenta? ";
const REGISTER: &str = "Regístrate";
const HINTS: &str = "Tab mover · Ctrl+T ver · Esc salir";

/// Width reserved for the eye toggle inside the password box.
const EYE_WIDTH: u16 = 10;

/// Row heights, top to bottom.
const ROWS: [Constraint; 19] = [
    Constraint::Length(3), // logo
    Constraint::Length(1),
    Constraint::Length(1), // welcome
    Constraint::Length(1), // subtitle
    Constraint::Length(1),
    Constraint::Length(1), // email label
    Constraint::Length(3), // email field
    Constraint::Length(1),
    Constraint::Length(1), // password label
    Constraint::Length(3), // password field
    Constraint::Length(1), // forgot password
    Constraint::Length(1),
    Constraint::Length(3), // login button
    Constraint::Length(1),
    Constraint::Length(1), // divider
    Constraint::Length(1),
    Constraint::Length(1), // register
    Constraint::Length(1),
    Constraint::Length(1), // hints
];

/// Renders the form centered in `area`.
///
/// Returns the cursor position when a text field has focus.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    state: &FormState,
    style: &ScreenStyle,
) -> Option<Position> {
    let palette = &style.palette;
    let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let rows: [Rect; 19] = Layout::vertical(ROWS).flex(Flex::Center).areas(column);

    render_logo(frame, rows[0], &style.brand, palette);
    frame.render_widget(
        Paragraph::new(WELCOME)
            .alignment(Alignment::Center)
            .style(palette.label()),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(SUBTITLE)
            .alignment(Alignment::Center)
            .style(palette.muted()),
        rows[3],
    );

    frame.render_widget(
        Paragraph::new(EMAIL_LABEL).style(palette.label()),
        rows[5],
    );
    let email_cursor = render_email_field(frame, rows[6], state, palette);

    frame.render_widget(
        Paragraph::new(PASSWORD_LABEL).style(palette.label()),
        rows[8],
    );
    let password_cursor = render_password_field(frame, rows[9], state, style);

    frame.render_widget(
        Paragraph::new(FORGOT_PASSWORD)
            .alignment(Alignment::Right)
            .style(focusable(palette.link(), state.focus == Focus::ForgotPassword)),
        rows[10],
    );

    render_login_button(frame, rows[12], state.focus == Focus::Login, palette);
    render_divider(frame, rows[14], palette);

    let register = Line::from(vec![
        Span::styled(NO_ACCOUNT, palette.muted()),
        Span::styled(
            REGISTER,
            focusable(palette.link(), state.focus == Focus::Register),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(register).alignment(Alignment::Center),
        rows[16],
    );
    frame.render_widget(
        Paragraph::new(HINTS)
            .alignment(Alignment::Center)
            .style(palette.muted()),
        rows[18],
    );

    match state.focus {
        Focus::Email => email_cursor,
        Focus::Password => password_cursor,
        _ => None,
    }
}

/// Focused controls render in reverse video.
fn focusable(style: Style, focused: bool) -> Style {
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn render_logo(frame: &mut Frame, area: Rect, brand: &str, palette: &Palette) {
    let width = u16::try_from(brand.width())
        .unwrap_or(u16::MAX)
        .saturating_add(6)
        .min(area.width);
    let [badge] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let style = Style::default().fg(palette.on_accent).bg(palette.accent);
    let lines = vec![
        Line::default(),
        Line::styled(brand.to_string(), style.add_modifier(Modifier::BOLD)),
        Line::default(),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(style),
        badge,
    );
}

fn field_block(focused: bool, palette: &Palette) -> Block<'static> {
    let border = if focused {
        palette.base().fg(palette.accent)
    } else {
        palette.muted()
    };
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(palette.base())
}

/// Horizontal scroll that keeps `cursor_col` inside a field `width` wide.
fn scroll_for(cursor_col: usize, width: u16) -> usize {
    let width = usize::from(width.max(1));
    cursor_col.saturating_sub(width - 1)
}

/// The part of `text` that starts at display column `scroll`.
fn visible_from(text: &str, scroll: usize) -> &str {
    let mut col = 0;
    for (idx, ch) in text.char_indices() {
        if col >= scroll {
            return &text[idx..];
        }
        col += ch.width().unwrap_or(0);
    }
    ""
}

/// Draws a single-line value (or its placeholder) and returns the cursor.
fn render_field_text(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    placeholder: &str,
    cursor_col: usize,
    palette: &Palette,
) -> Position {
    let scroll = scroll_for(cursor_col, area.width);
    let paragraph = if text.is_empty() {
        Paragraph::new(placeholder).style(palette.muted())
    } else {
        Paragraph::new(visible_from(text, scroll).to_string()).style(palette.base())
    };
    frame.render_widget(paragraph, area);
    let offset = u16::try_from(cursor_col - scroll).unwrap_or(u16::MAX);
    Position::new(area.x.saturating_add(offset), area.y)
}

fn render_email_field(
    frame: &mut Frame,
    area: Rect,
    state: &FormState,
    palette: &Palette,
) -> Option<Position> {
    let block = field_block(state.focus == Focus::Email, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    Some(render_field_text(
        frame,
        inner,
        state.form.email(),
        EMAIL_PLACEHOLDER,
        state.email_input.cursor_width(),
        palette,
    ))
}

fn render_password_field(
    frame: &mut Frame,
    area: Rect,
    state: &FormState,
    style: &ScreenStyle,
) -> Option<Position> {
    let palette = &style.palette;
    let focused = matches!(state.focus, Focus::Password | Focus::EyeToggle);
    let block = field_block(focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let [text_area, eye_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(EYE_WIDTH)]).areas(inner);

    let visible = state.form.is_password_visible();
    let eye_label = if visible { HIDE_PASSWORD } else { SHOW_PASSWORD };
    frame.render_widget(
        Paragraph::new(eye_label)
            .alignment(Alignment::Right)
            .style(focusable(palette.link(), state.focus == Focus::EyeToggle)),
        eye_area,
    );

    let cursor_col = if visible {
        state.password_input.cursor_width()
    } else {
        let mask_width = style.mask_char.width().unwrap_or(1);
        state.password_input.cursor_chars() * mask_width
    };
    let shown = state.form.display_password(style.mask_char);
    Some(render_field_text(
        frame,
        text_area,
        &shown,
        PASSWORD_PLACEHOLDER,
        cursor_col,
        palette,
    ))
}

fn render_login_button(frame: &mut Frame, area: Rect, focused: bool, palette: &Palette) {
    let style = Style::default().fg(palette.on_accent).bg(palette.accent);
    let (label, border_type) = if focused {
        (format!("▸ {LOGIN} ◂"), BorderType::Thick)
    } else {
        (LOGIN.to_string(), BorderType::Rounded)
    };
    let block = Block::bordered()
        .border_type(border_type)
        .border_style(style)
        .style(style);
    frame.render_widget(
        Paragraph::new(Line::styled(label, style.add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_divider(frame: &mut Frame, area: Rect, palette: &Palette) {
    let side = usize::from(area.width.saturating_sub(3) / 2);
    let rule = "─".repeat(side);
    frame.render_widget(
        Paragraph::new(format!("{rule} O {rule}"))
            .alignment(Alignment::Center)
            .style(palette.muted()),
        area,
    );
}
