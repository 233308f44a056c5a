//! Theme styling module for the TUI UI layer.
//!
//! Two palettes are available: Dracula for truecolor terminals and an
//! ANSI 256-color fallback. Prefer the helpers in [`theme_helpers`] over
//! hard-coding colors so the dialog and the document view stay consistent.

use std::env;

use tracing::debug;

pub mod palettes;
pub mod roles;
pub mod theme_helpers;

pub use palettes::{Ansi256Theme, DraculaTheme};
pub use roles::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Environment snapshot used to pick a palette.
#[derive(Debug, Default, Clone)]
struct ThemeEnv {
    theme: Option<String>,
    color_mode: Option<String>,
    color_term: String,
    term: String,
}

impl ThemeEnv {
    fn from_process() -> Self {
        Self {
            theme: env::var("TUI_THEME").ok(),
            color_mode: env::var("TUI_COLOR_MODE").ok(),
            color_term: env::var("COLORTERM").unwrap_or_default(),
            term: env::var("TERM").unwrap_or_default(),
        }
    }
}

/// Selects a theme based on `TUI_THEME`, `TUI_COLOR_MODE` and the terminal's
/// advertised color support.
pub fn load_from_env() -> Box<dyn Theme> {
    select(&ThemeEnv::from_process())
}

fn select(theme_env: &ThemeEnv) -> Box<dyn Theme> {
    let capability = detect_color_capability(theme_env);
    if matches!(capability, ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; using the 256-color palette.");
        return Box::new(Ansi256Theme::new());
    }

    match theme_env.theme.as_deref().map(|name| name.trim().to_ascii_lowercase()) {
        Some(name) if name == "ansi256" || name == "ansi" => Box::new(Ansi256Theme::new()),
        _ => Box::new(DraculaTheme::new()),
    }
}

fn detect_color_capability(theme_env: &ThemeEnv) -> ColorCapability {
    if let Some(mode) = theme_env.color_mode.as_deref().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = theme_env.color_term.to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    if theme_env.term.to_ascii_lowercase().contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn truecolor_terminals_default_to_dracula() {
        let theme_env = ThemeEnv {
            color_term: "truecolor".into(),
            ..ThemeEnv::default()
        };
        assert!(matches!(select(&theme_env).roles().background, Color::Rgb(..)));
    }

    #[test]
    fn unknown_terminals_fall_back_to_indexed_palette() {
        let theme_env = ThemeEnv {
            theme: Some("dracula".into()),
            term: "xterm".into(),
            ..ThemeEnv::default()
        };
        assert!(matches!(select(&theme_env).roles().background, Color::Indexed(_)));
    }

    #[test]
    fn color_mode_override_wins() {
        let theme_env = ThemeEnv {
            color_mode: Some("24bit".into()),
            term: "xterm".into(),
            ..ThemeEnv::default()
        };
        assert_eq!(detect_color_capability(&theme_env), ColorCapability::Truecolor);
        assert_eq!(parse_color_mode("bogus"), None);
    }
}
