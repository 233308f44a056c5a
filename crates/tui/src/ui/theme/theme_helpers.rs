use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for input fields; caller sets the block border based on focus.
pub fn input_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    let style = Style::default().bg(surface).fg(text);
    if focused { style.add_modifier(Modifier::BOLD) } else { style }
}

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Filled accent, used for the confirming action.
    Primary,
    /// Error-tinted outline for actions that turn something off.
    Destructive,
}

#[derive(Debug, Clone, Copy)]
pub struct ButtonRenderOptions {
    pub focused: bool,
    pub kind: ButtonKind,
}

impl ButtonRenderOptions {
    pub fn new(focused: bool, kind: ButtonKind) -> Self {
        Self { focused, kind }
    }
}

fn button_style<T: Theme + ?Sized>(theme: &T, options: ButtonRenderOptions) -> Style {
    let roles = theme.roles();
    let style = match options.kind {
        ButtonKind::Primary => Style::default().bg(roles.accent_primary).fg(roles.background).add_modifier(Modifier::BOLD),
        ButtonKind::Destructive => Style::default().fg(roles.error),
    };
    if options.focused && options.kind != ButtonKind::Primary {
        style.bg(roles.selection_bg)
    } else {
        style
    }
}

/// Renders a standard bordered button.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, options: ButtonRenderOptions) {
    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(Block::bordered().border_style(theme.border_style(options.focused)))
            .style(button_style(theme, options)),
        area,
    );
}

/// Builds `key description` hint pairs for the hint bar.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;

    #[test]
    fn focus_highlights_only_the_destructive_button() {
        let theme = DraculaTheme::new();
        let roles = theme.roles().clone();

        let reset = button_style(&theme, ButtonRenderOptions::new(true, ButtonKind::Destructive));
        assert_eq!(reset.fg, Some(roles.error));
        assert_eq!(reset.bg, Some(roles.selection_bg));

        let apply = button_style(&theme, ButtonRenderOptions::new(true, ButtonKind::Primary));
        assert_eq!(apply.bg, Some(roles.accent_primary));
        assert_eq!(button_style(&theme, ButtonRenderOptions::new(false, ButtonKind::Primary)), apply);
    }
}
