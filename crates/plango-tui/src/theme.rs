//! Screen palette resolved from the config theme.

use std::str::FromStr;

use plango_core::config::Theme;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
    pub background: Color,
    /// Text drawn on top of `accent` (logo, login button).
    pub on_accent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

impl Palette {
    /// Resolves every color; a value ratatui cannot parse falls back to the
    /// default theme's value for that slot.
    pub fn from_theme(theme: &Theme) -> Self {
        let defaults = Theme::default();
        Self {
            accent: parse_color(&theme.accent, &defaults.accent),
            text: parse_color(&theme.text, &defaults.text),
            muted: parse_color(&theme.muted, &defaults.muted),
            error: parse_color(&theme.error, &defaults.error),
            background: parse_color(&theme.background, &defaults.background),
            on_accent: Color::White,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn link(&self) -> Style {
        self.base().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }
}

fn parse_color(value: &str, fallback: &str) -> Color {
    Color::from_str(value)
        .or_else(|_| Color::from_str(fallback))
        .unwrap_or(Color::Reset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_resolves_to_rgb() {
        let palette = Palette::default();
        assert_eq!(palette.accent, Color::Rgb(0x4c, 0x6e, 0xf5));
        assert_eq!(palette.background, Color::Rgb(0xf8, 0xf9, 0xfa));
    }

    #[test]
    fn invalid_color_falls_back_per_slot() {
        let theme = Theme {
            accent: "not-a-color".to_string(),
            error: "#00ff00".to_string(),
            ..Theme::default()
        };
        let palette = Palette::from_theme(&theme);
        assert_eq!(palette.accent, Color::Rgb(0x4c, 0x6e, 0xf5));
        assert_eq!(palette.error, Color::Rgb(0, 0xff, 0));
    }
}
