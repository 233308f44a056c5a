//! Built-in palettes: Dracula for truecolor terminals and an indexed
//! approximation of it for terminals limited to 256 colors.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Dracula palette (https://draculatheme.com/contribute)
const DRACULA_BG: Color = Color::Rgb(0x28, 0x2A, 0x36);
const DRACULA_CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A);
const DRACULA_FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2);
const DRACULA_COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4);
const DRACULA_CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD);
const DRACULA_GREEN: Color = Color::Rgb(0x50, 0xFA, 0x7B);
const DRACULA_PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6);
const DRACULA_RED: Color = Color::Rgb(0xFF, 0x55, 0x55);
const DRACULA_OVERLAY: Color = Color::Rgb(0x1D, 0x1F, 0x27);

#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl DraculaTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: DRACULA_BG,
                surface: DRACULA_BG,
                border: DRACULA_CURRENT_LINE,

                text: DRACULA_FOREGROUND,
                text_secondary: DRACULA_COMMENT,
                text_muted: DRACULA_COMMENT,

                // Pink for interactive elements, cyan for focus
                accent_primary: DRACULA_PINK,

                success: DRACULA_GREEN,
                error: DRACULA_RED,

                selection_bg: DRACULA_CURRENT_LINE,
                focus: DRACULA_CYAN,
                modal_bg: DRACULA_OVERLAY,
            },
        }
    }
}

impl Default for DraculaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(236),
                surface: Color::Indexed(236),
                border: Color::Indexed(239),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(250),
                text_muted: Color::Indexed(247),

                accent_primary: Color::Indexed(212),

                success: Color::Indexed(84),
                error: Color::Indexed(203),

                selection_bg: Color::Indexed(239),
                focus: Color::Indexed(117),
                modal_bg: Color::Indexed(232),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
