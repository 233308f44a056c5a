//! Document view: the host screen behind the unit split dialog.
//!
//! Shows the document's word count and the unit size in effect, and lists
//! the resulting units (or the raw text while splitting is off).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use wordsplit_types::{Effect, Msg};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers::{block, build_hint_spans};

#[derive(Debug, Default)]
pub struct DocumentComponent {
    max_scroll: u16,
    page_height: u16,
}

impl DocumentComponent {
    fn summary_line<'a>(app: &App, theme: &dyn Theme) -> Line<'a> {
        let total_words = app.document.total_words;
        let mut spans = vec![Span::styled(format!("총 {total_words}단어"), theme.text_primary_style())];
        spans.push(Span::styled(" · ", theme.text_muted_style()));
        match (app.applied_unit_size, app.applied_unit_count()) {
            (Some(unit_size), Some(units)) => spans.push(Span::styled(
                format!("단위 크기 {unit_size}단어 ({units}개 단위)"),
                theme.accent_emphasis_style(),
            )),
            _ => spans.push(Span::styled("분할 안 함", theme.text_muted_style())),
        }
        Line::from(spans)
    }

    fn body_lines<'a>(app: &App, theme: &dyn Theme) -> Vec<Line<'a>> {
        let Some(unit_size) = app.applied_unit_size else {
            return app.document.text.lines().map(|line| Line::from(line.to_string())).collect();
        };

        let mut lines = Vec::new();
        for unit in app.document.units(unit_size) {
            let first = unit.first_word + 1;
            let last = unit.first_word + unit.word_count;
            lines.push(Line::from(Span::styled(
                format!("[{}] {first}-{last}번째 단어", unit.index),
                theme.text_secondary_style().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(unit.text));
            lines.push(Line::default());
        }
        lines
    }

    fn scroll(&self, app: &mut App, delta: i32) {
        app.document_view.scroll_by(delta, self.max_scroll);
    }
}

impl Component for DocumentComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let page = i32::from(self.page_height.max(1));
        match key.code {
            KeyCode::Char('s') | KeyCode::Enter => return vec![Effect::SendMsg(Msg::UnitSplitOpenChange(true))],
            KeyCode::Char('q') => return vec![Effect::Quit],
            KeyCode::Up | KeyCode::Char('k') => self.scroll(app, -1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll(app, 1),
            KeyCode::PageUp => self.scroll(app, -page),
            KeyCode::PageDown => self.scroll(app, page),
            KeyCode::Home => app.document_view.scroll_to_top(),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let [header_rect, body_rect] = self.get_preferred_layout(app, rect)[..] else {
            return;
        };

        let mut header_lines = vec![
            Line::from(Span::styled(app.document.name.clone(), theme.accent_emphasis_style())),
            Self::summary_line(app, theme),
        ];
        if let Some(status) = app.status.as_ref() {
            header_lines.push(Line::from(Span::styled(status.clone(), theme.status_success())));
        }
        frame.render_widget(
            Paragraph::new(header_lines).block(block(theme, Some("문서"), false)),
            header_rect,
        );

        let focused = app.document_view.f_body.get();
        let body_block = block(theme, Some("미리보기"), focused);
        let inner = body_block.inner(body_rect);
        let body = Paragraph::new(Self::body_lines(app, theme)).wrap(Wrap { trim: false });

        let line_count = u16::try_from(body.line_count(inner.width)).unwrap_or(u16::MAX);
        self.page_height = inner.height;
        self.max_scroll = line_count.saturating_sub(inner.height);
        let scroll = app.document_view.scroll().min(self.max_scroll);

        frame.render_widget(body.scroll((scroll, 0)).block(body_block), body_rect);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        build_hint_spans(
            &*app.ctx.theme,
            &[("s", " 분할 설정 "), ("↑/↓", " 스크롤 "), ("q", " 종료")],
        )
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(5), // Header
            Constraint::Min(3),    // Body
        ])
        .split(area)
        .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::build_app;
    use crossterm::event::KeyModifiers;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn s_and_enter_request_the_dialog() {
        let mut app = build_app(10);
        let mut component = DocumentComponent::default();
        for code in [KeyCode::Char('s'), KeyCode::Enter] {
            assert_eq!(
                component.handle_key_events(&mut app, key_event(code)),
                vec![Effect::SendMsg(Msg::UnitSplitOpenChange(true))]
            );
        }
    }

    #[test]
    fn q_quits() {
        let mut app = build_app(10);
        let mut component = DocumentComponent::default();
        assert_eq!(component.handle_key_events(&mut app, key_event(KeyCode::Char('q'))), vec![Effect::Quit]);
    }

    #[test]
    fn lists_one_heading_per_unit_when_split() {
        let mut app = build_app(7);
        app.applied_unit_size = Some(3);
        let lines = DocumentComponent::body_lines(&app, &*app.ctx.theme);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0].to_string(), "[1] 1-3번째 단어");
        assert_eq!(lines[6].to_string(), "[3] 7-7번째 단어");
    }

    #[test]
    fn summary_reports_splitting_state() {
        let mut app = build_app(237);
        assert!(DocumentComponent::summary_line(&app, &*app.ctx.theme).to_string().contains("분할 안 함"));
        app.applied_unit_size = Some(50);
        assert!(DocumentComponent::summary_line(&app, &*app.ctx.theme).to_string().contains("(5개 단위)"));
    }
}
