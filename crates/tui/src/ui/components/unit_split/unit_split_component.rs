//! Unit split configuration dialog.
//!
//! The dialog shows one numeric field and two buttons. It reports back to
//! the host only through messages:
//!
//! - `Msg::UnitSizeApplied(n)` when Apply is pressed with a positive integer,
//! - `Msg::UnitSplitReset` when the reset button is pressed,
//! - `Msg::UnitSplitOpenChange(false)` when Esc is pressed or the user clicks
//!   outside the dialog.
//!
//! Apply with invalid input is a silent no-op, and neither button closes the
//! dialog; the host decides what to do with the message.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tracing::debug;
use wordsplit_types::{Effect, Msg};

use super::state::UnitSplitTarget;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{ButtonKind, ButtonRenderOptions, block, build_hint_spans, input_style, render_button};

const TITLE: &str = "단위 분할 설정";
const FIELD_LABEL: &str = "단위당 단어 수";
const PLACEHOLDER: &str = "예: 50";
const RESET_LABEL: &str = "분할 해제";
const APPLY_LABEL: &str = "적용";

const RESET_BUTTON_WIDTH: u16 = 14;
const APPLY_BUTTON_WIDTH: u16 = 10;
const BUTTON_SPACER: u16 = 2;

fn description(total_words: usize) -> String {
    format!("총 {total_words}단어를 몇 단어씩 나눌지 설정합니다.")
}

fn preview(unit_count: usize) -> String {
    format!("{unit_count}개 단위로 분할됩니다.")
}

#[derive(Debug, Default, Clone)]
pub struct UnitSplitComponent {
    dialog_area: Rect,
    input_area: Rect,
    reset_area: Rect,
    apply_area: Rect,
}

impl UnitSplitComponent {
    /// Preview line for the current field contents, if one should be shown.
    pub fn preview_text(app: &App) -> Option<String> {
        app.unit_split.preview_unit_count(app.document.total_words).map(preview)
    }

    fn apply(&self, app: &App) -> Vec<Effect> {
        match app.unit_split.parsed_unit_size() {
            Some(unit_size) => vec![Effect::SendMsg(Msg::UnitSizeApplied(unit_size))],
            None => {
                debug!(input = app.unit_split.input_value(), "Ignoring apply with a non-positive unit size");
                Vec::new()
            }
        }
    }

    fn reset(&self, app: &mut App) -> Vec<Effect> {
        app.unit_split.reset();
        vec![Effect::SendMsg(Msg::UnitSplitReset)]
    }

    fn activate(&self, app: &mut App, target: UnitSplitTarget) -> Vec<Effect> {
        match target {
            UnitSplitTarget::Input | UnitSplitTarget::ApplyButton => self.apply(app),
            UnitSplitTarget::ResetButton => self.reset(app),
        }
    }

    fn target_at(&self, position: Position) -> Option<UnitSplitTarget> {
        [
            (self.input_area, UnitSplitTarget::Input),
            (self.reset_area, UnitSplitTarget::ResetButton),
            (self.apply_area, UnitSplitTarget::ApplyButton),
        ]
        .into_iter()
        .find_map(|(area, target)| area.contains(position).then_some(target))
    }

    fn request_close() -> Vec<Effect> {
        vec![Effect::SendMsg(Msg::UnitSplitOpenChange(false))]
    }

    fn handle_input_key(&self, app: &mut App, key: KeyEvent) {
        let input = app.unit_split.input_mut();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => input.insert_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let focused = app.unit_split.focused_target() == UnitSplitTarget::Input;
        let input_block = block(theme, None, focused);
        let inner = input_block.inner(area);

        let state = app.unit_split.input();
        let content = if state.is_empty() {
            Span::styled(PLACEHOLDER, theme.text_muted_style())
        } else {
            Span::styled(state.input().to_string(), input_style(theme, focused))
        };
        frame.render_widget(Paragraph::new(Line::from(content)).block(input_block), area);

        if focused {
            let x = inner.x.saturating_add(state.cursor_column()).min(inner.right().saturating_sub(1));
            frame.set_cursor_position((x, inner.y));
        }
    }

    fn render_buttons(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let focused = app.unit_split.focused_target();
        let [_, reset_rect, _, apply_rect] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(RESET_BUTTON_WIDTH),
            Constraint::Length(BUTTON_SPACER),
            Constraint::Length(APPLY_BUTTON_WIDTH),
        ])
        .areas(area);

        render_button(
            frame,
            reset_rect,
            RESET_LABEL,
            theme,
            ButtonRenderOptions::new(focused == UnitSplitTarget::ResetButton, ButtonKind::Destructive),
        );
        render_button(
            frame,
            apply_rect,
            APPLY_LABEL,
            theme,
            ButtonRenderOptions::new(focused == UnitSplitTarget::ApplyButton, ButtonKind::Primary),
        );

        self.reset_area = reset_rect;
        self.apply_area = apply_rect;
    }
}

impl Component for UnitSplitComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => Self::request_close(),
            KeyCode::Tab => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab => {
                app.focus.prev();
                Vec::new()
            }
            KeyCode::Enter => {
                let target = app.unit_split.focused_target();
                self.activate(app, target)
            }
            _ => {
                if app.unit_split.focused_target() == UnitSplitTarget::Input {
                    self.handle_input_key(app, key);
                }
                Vec::new()
            }
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let MouseEvent { kind, column, row, .. } = mouse;
        if kind != MouseEventKind::Down(MouseButton::Left) || self.dialog_area.is_empty() {
            return Vec::new();
        }

        let position = Position::new(column, row);
        if !self.dialog_area.contains(position) {
            return Self::request_close();
        }
        let Some(target) = self.target_at(position) else {
            return Vec::new();
        };
        app.focus.focus(app.unit_split.flag_for(target));
        match target {
            UnitSplitTarget::Input => Vec::new(),
            UnitSplitTarget::ResetButton | UnitSplitTarget::ApplyButton => self.activate(app, target),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let dialog_block = block(theme, Some(TITLE), true);
        let inner = dialog_block.inner(rect);
        frame.render_widget(dialog_block, rect);
        self.dialog_area = rect;

        let [description_rect, _, label_rect, input_rect, preview_rect, _, button_rect] = self.get_preferred_layout(app, inner)[..] else {
            return;
        };

        let total_words = app.document.total_words;
        frame.render_widget(
            Paragraph::new(description(total_words))
                .style(theme.text_primary_style())
                .wrap(Wrap { trim: true }),
            description_rect,
        );

        let label = Line::from(vec![
            Span::styled(FIELD_LABEL, theme.text_secondary_style()),
            Span::styled(format!(" (최대 {total_words})"), theme.text_muted_style()),
        ]);
        frame.render_widget(Paragraph::new(label), label_rect);

        self.render_input(frame, input_rect, app);
        self.input_area = input_rect;

        if let Some(text) = Self::preview_text(app) {
            frame.render_widget(Paragraph::new(text).style(theme.status_success()), preview_rect);
        }

        self.render_buttons(frame, button_rect, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        build_hint_spans(
            &*app.ctx.theme,
            &[("Tab/Shift+Tab", " 이동 "), ("Enter", " 실행 "), ("Esc", " 닫기")],
        )
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(2), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Label
            Constraint::Length(3), // Input
            Constraint::Length(1), // Preview
            Constraint::Min(0),    // Spacer
            Constraint::Length(3), // Buttons
        ])
        .split(area)
        .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::build_app;
    use ratatui::{Terminal, backend::TestBackend};
    use wordsplit_types::Modal;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn open_dialog(total_words: usize) -> (App, UnitSplitComponent) {
        let mut app = build_app(total_words);
        app.set_open_modal_kind(Some(Modal::UnitSplit));
        (app, UnitSplitComponent::default())
    }

    fn type_value(app: &mut App, component: &mut UnitSplitComponent, value: &str) {
        app.unit_split.input_mut().set_input("");
        for c in value.chars() {
            component.handle_key_events(app, key_event(KeyCode::Char(c)));
        }
    }

    fn apply(app: &mut App, component: &mut UnitSplitComponent) -> Vec<Effect> {
        app.focus.focus(&app.unit_split.f_apply);
        component.handle_key_events(app, key_event(KeyCode::Enter))
    }

    fn reset(app: &mut App, component: &mut UnitSplitComponent) -> Vec<Effect> {
        app.focus.focus(&app.unit_split.f_reset);
        component.handle_key_events(app, key_event(KeyCode::Enter))
    }

    #[test]
    fn applies_positive_size_and_previews_unit_count() {
        let (mut app, mut component) = open_dialog(237);
        type_value(&mut app, &mut component, "50");
        assert_eq!(UnitSplitComponent::preview_text(&app).as_deref(), Some("5개 단위로 분할됩니다."));

        let effects = apply(&mut app, &mut component);
        assert_eq!(effects, vec![Effect::SendMsg(Msg::UnitSizeApplied(50))]);
    }

    #[test]
    fn zero_shows_no_preview_and_apply_is_a_no_op() {
        let (mut app, mut component) = open_dialog(100);
        type_value(&mut app, &mut component, "0");
        assert_eq!(UnitSplitComponent::preview_text(&app), None);
        assert!(apply(&mut app, &mut component).is_empty());
        assert!(app.is_unit_split_open());
    }

    #[test]
    fn empty_field_shows_no_preview_and_apply_is_a_no_op() {
        let (mut app, mut component) = open_dialog(100);
        for _ in 0..2 {
            component.handle_key_events(&mut app, key_event(KeyCode::Backspace));
        }
        assert_eq!(app.unit_split.input_value(), "");
        assert_eq!(UnitSplitComponent::preview_text(&app), None);
        assert!(apply(&mut app, &mut component).is_empty());
    }

    #[test]
    fn non_numeric_input_is_ignored_on_apply() {
        let (mut app, mut component) = open_dialog(100);
        type_value(&mut app, &mut component, "abc");
        assert_eq!(app.unit_split.input_value(), "abc");
        assert!(apply(&mut app, &mut component).is_empty());
    }

    #[test]
    fn reset_restores_default_and_emits_reset_once() {
        let (mut app, mut component) = open_dialog(100);
        type_value(&mut app, &mut component, "30");

        let effects = reset(&mut app, &mut component);
        assert_eq!(effects, vec![Effect::SendMsg(Msg::UnitSplitReset)]);
        assert_eq!(app.unit_split.input_value(), "50");
    }

    #[test]
    fn reset_ignores_invalid_content() {
        let (mut app, mut component) = open_dialog(100);
        type_value(&mut app, &mut component, "-12x");
        assert_eq!(reset(&mut app, &mut component), vec![Effect::SendMsg(Msg::UnitSplitReset)]);
        assert_eq!(app.unit_split.input_value(), "50");
    }

    #[test]
    fn empty_document_previews_zero_units() {
        let (mut app, mut component) = open_dialog(0);
        type_value(&mut app, &mut component, "10");
        assert_eq!(UnitSplitComponent::preview_text(&app).as_deref(), Some("0개 단위로 분할됩니다."));
        assert_eq!(apply(&mut app, &mut component), vec![Effect::SendMsg(Msg::UnitSizeApplied(10))]);
    }

    #[test]
    fn enter_in_the_input_applies() {
        let (mut app, mut component) = open_dialog(20);
        type_value(&mut app, &mut component, "7");
        let effects = component.handle_key_events(&mut app, key_event(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::SendMsg(Msg::UnitSizeApplied(7))]);
    }

    #[test]
    fn esc_requests_close_without_closing() {
        let (mut app, mut component) = open_dialog(20);
        let effects = component.handle_key_events(&mut app, key_event(KeyCode::Esc));
        assert_eq!(effects, vec![Effect::SendMsg(Msg::UnitSplitOpenChange(false))]);
        assert!(app.is_unit_split_open());
    }

    #[test]
    fn typing_only_reaches_the_input_when_it_has_focus() {
        let (mut app, mut component) = open_dialog(20);
        app.focus.focus(&app.unit_split.f_reset);
        component.handle_key_events(&mut app, key_event(KeyCode::Char('9')));
        assert_eq!(app.unit_split.input_value(), "50");

        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        app.focus.focus(&app.unit_split.f_input);
        component.handle_key_events(&mut app, ctrl_u);
        assert_eq!(app.unit_split.input_value(), "50");
    }

    #[test]
    fn tab_cycles_through_input_and_buttons() {
        let (mut app, mut component) = open_dialog(20);
        assert_eq!(app.unit_split.focused_target(), UnitSplitTarget::Input);
        component.handle_key_events(&mut app, key_event(KeyCode::Tab));
        assert_eq!(app.unit_split.focused_target(), UnitSplitTarget::ResetButton);
        component.handle_key_events(&mut app, key_event(KeyCode::Tab));
        assert_eq!(app.unit_split.focused_target(), UnitSplitTarget::ApplyButton);
        component.handle_key_events(&mut app, key_event(KeyCode::BackTab));
        assert_eq!(app.unit_split.focused_target(), UnitSplitTarget::ResetButton);
    }

    #[test]
    fn renders_description_and_records_button_areas() {
        let (mut app, mut component) = open_dialog(237);
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).expect("terminal");
        terminal
            .draw(|frame| {
                let area = frame.area();
                component.render(frame, area, &mut app);
            })
            .expect("draw");

        let rendered: String = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();
        assert!(rendered.contains("237"));
        assert!(!component.apply_area.is_empty());
        assert!(!component.reset_area.is_empty());

        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        let apply_click = click(component.apply_area.x + 1, component.apply_area.y + 1);
        assert_eq!(
            component.handle_mouse_events(&mut app, apply_click),
            vec![Effect::SendMsg(Msg::UnitSizeApplied(50))]
        );

        let mut wide = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        wide.draw(|frame| component.render(frame, Rect::new(10, 5, 60, 16), &mut app)).expect("draw");
        assert_eq!(
            component.handle_mouse_events(&mut app, click(0, 0)),
            vec![Effect::SendMsg(Msg::UnitSplitOpenChange(false))]
        );
    }
}
