//! Theme system for TUI colors and styles
//!
//! Colors match the CLI output in `commands/` (green success, red errors,
//! yellow prompts).

use iocraft::prelude::Color;

use crate::notify::NoticeLevel;

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Note status
    pub active: Color,
    pub archived: Color,

    // Notices
    pub success: Color,
    pub error: Color,
    pub warning: Color,

    // UI colors
    pub app_bar: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub date: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            active: Color::Green,
            archived: GRAY,

            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            app_bar: Color::Blue,
            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            date: Color::Cyan,
        }
    }
}

impl Theme {
    pub fn notice_color(&self, level: NoticeLevel) -> Color {
        match level {
            NoticeLevel::Success => self.success,
            NoticeLevel::Error => self.error,
        }
    }

    pub fn status_color(&self, archived: bool) -> Color {
        if archived { self.archived } else { self.active }
    }

    pub fn border_color(&self, focused: bool) -> Color {
        if focused {
            self.border_focused
        } else {
            self.border
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
