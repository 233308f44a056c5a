use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::widgets::Clear;
use ratatui::{
    prelude::*,
    style::Style,
    widgets::{Block, Paragraph},
};
use wordsplit_types::{Effect, Modal, Msg};

use super::components::{Component, DocumentComponent, UnitSplitComponent};
use super::utils::centered_min_max;
use crate::app::App;

pub struct ModalLayout(Box<dyn Fn(Rect) -> Rect>);

impl std::fmt::Debug for ModalLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ModalLayout")
    }
}

type ModalView = (Box<dyn Component>, ModalLayout);

/// Root view: the document screen, the hint bar and an optional modal.
pub struct MainView {
    /// Main content component
    pub content_view: Box<dyn Component>,
    /// Currently open modal component
    pub modal_view: Option<ModalView>,
    /// Hint row rendered under the open modal; part of the modal for hit tests
    modal_hints_area: Rect,
}

impl Default for MainView {
    fn default() -> Self {
        Self::new()
    }
}

impl MainView {
    pub fn new() -> Self {
        Self {
            content_view: Box::new(DocumentComponent::default()),
            modal_view: None,
            modal_hints_area: Rect::default(),
        }
    }

    /// Update the open modal kind (use `None` to clear).
    ///
    /// Not intended to be called directly; use `Effect::ShowModal` and
    /// `Effect::CloseModal`. The modal component is recreated on every open,
    /// while its durable state stays on `App`.
    pub fn set_open_modal_kind(&mut self, app: &mut App, modal: Option<Modal>) {
        self.modal_view = modal.map(|modal_kind| -> ModalView {
            match modal_kind {
                Modal::UnitSplit => (
                    Box::new(UnitSplitComponent::default()),
                    ModalLayout(Box::new(|rect| {
                        centered_min_max(50, 50, Rect::new(0, 0, 52, 17), Rect::new(0, 0, 72, 19), rect)
                    })),
                ),
            }
        });
        self.modal_hints_area = Rect::default();
        app.set_open_modal_kind(modal);
    }
}

fn render_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.ctx.theme.modal_background_style()), area);
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        match self.modal_view.as_mut() {
            Some((modal, _)) => effects.extend(modal.handle_message(app, msg)),
            None => effects.extend(self.content_view.handle_message(app, msg)),
        }
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if let Some((modal, _)) = self.modal_view.as_mut() {
            return modal.handle_key_events(app, key);
        }
        self.content_view.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if let Some((modal, _)) = self.modal_view.as_mut() {
            if self.modal_hints_area.contains(Position::new(mouse.column, mouse.row)) {
                return Vec::new();
            }
            return modal.handle_mouse_events(app, mouse);
        }
        self.content_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the entire background with the theme's background color for consistency
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let [content_rect, hints_rect] = self.get_preferred_layout(app, area)[..] else {
            return;
        };
        self.content_view.render(frame, content_rect, app);

        let hints_widget = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, hints_rect);

        if let Some((modal, position)) = self.modal_view.as_mut() {
            render_overlay(frame, app);
            let modal_area = (position.0)(area);
            frame.render_widget(Clear, modal_area);

            let modal_hints = modal.get_hint_spans(app);
            self.modal_hints_area = Rect::default();
            if modal_hints.is_empty() {
                modal.render(frame, modal_area, app);
                return;
            }
            let [dialog_rect, modal_hints_rect] = Layout::vertical([
                Constraint::Percentage(100), // Modal
                Constraint::Length(1),       // Modal hints bar
            ])
            .areas(modal_area);
            let hints_widget = Paragraph::new(Line::from(modal_hints))
                .style(app.ctx.theme.text_muted_style())
                .bg(app.ctx.theme.roles().background);
            frame.render_widget(hints_widget, modal_hints_rect);
            self.modal_hints_area = modal_hints_rect;
            modal.render(frame, dialog_rect, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];
        hint_spans.extend(self.content_view.get_hint_spans(app));
        hint_spans
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Hints bar
        ])
        .split(area)
        .to_vec()
    }
}
