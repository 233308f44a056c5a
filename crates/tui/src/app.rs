//! Application state for the Wordsplit TUI.
//!
//! `App` is the parent of the unit split dialog: it decides whether the
//! dialog is open, supplies the document's word count, and receives the
//! dialog's apply/reset messages. Closing the dialog after either message is
//! the parent's job; the dialog never closes itself.

use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::info;
use wordsplit_types::{Effect, Modal, Msg};
use wordsplit_util::Document;

use crate::ui::components::document::DocumentViewState;
use crate::ui::components::unit_split::UnitSplitState;
use crate::ui::theme::Theme;

/// Cross-cutting shared context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active UI theme
    pub theme: Box<dyn Theme>,
}

pub struct App {
    /// Shared, cross-cutting context (theme)
    pub ctx: SharedCtx,
    /// Document being prepared for export
    pub document: Document,
    /// Unit size currently in effect; `None` means splitting is off
    pub applied_unit_size: Option<usize>,
    /// Dialog state; lives here so the typed value survives close/reopen
    pub unit_split: UnitSplitState,
    /// Document body scroll state
    pub document_view: DocumentViewState,
    /// Currently open modal, if any
    pub open_modal_kind: Option<Modal>,
    /// Focus tree rebuilt whenever the open modal changes
    pub focus: Focus,
    /// Last status line shown in the header
    pub status: Option<String>,
}

impl App {
    pub fn new(document: Document, theme: Box<dyn Theme>) -> Self {
        let mut app = Self {
            ctx: SharedCtx { theme },
            document,
            applied_unit_size: None,
            unit_split: UnitSplitState::default(),
            document_view: DocumentViewState::default(),
            open_modal_kind: None,
            focus: Focus::default(),
            status: None,
        };
        app.rebuild_focus();
        app
    }

    /// The `open` flag handed to the unit split dialog.
    pub fn is_unit_split_open(&self) -> bool {
        self.open_modal_kind == Some(Modal::UnitSplit)
    }

    /// Number of units the applied unit size produces, if splitting is on.
    pub fn applied_unit_count(&self) -> Option<usize> {
        self.applied_unit_size.map(|unit_size| self.document.unit_count(unit_size))
    }

    /// Update the open modal kind (use `None` to clear) and move focus into
    /// the modal or back to the document.
    ///
    /// Not intended to be called directly; use `Effect::ShowModal` and
    /// `Effect::CloseModal`.
    pub fn set_open_modal_kind(&mut self, modal: Option<Modal>) {
        self.open_modal_kind = modal;
        self.rebuild_focus();
    }

    pub fn rebuild_focus(&mut self) {
        self.focus = FocusBuilder::build_for(self);
        match self.open_modal_kind {
            Some(Modal::UnitSplit) => self.focus.focus(&self.unit_split.f_input),
            None => self.focus.focus(&self.document_view.f_body),
        }
    }

    /// Applies a message to application state, returning follow-up effects.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::UnitSplitOpenChange(true) => vec![Effect::ShowModal(Modal::UnitSplit)],
            Msg::UnitSplitOpenChange(false) => vec![Effect::CloseModal],
            Msg::UnitSizeApplied(unit_size) => {
                let unit_size = *unit_size;
                self.applied_unit_size = Some(unit_size);
                self.document_view.scroll_to_top();
                let units = self.document.unit_count(unit_size);
                info!(unit_size, units, document = %self.document.name, "Applied unit size");
                self.status = Some(format!("{unit_size}단어 단위로 {units}개로 분할했습니다."));
                vec![Effect::CloseModal]
            }
            Msg::UnitSplitReset => {
                self.applied_unit_size = None;
                self.document_view.scroll_to_top();
                info!(document = %self.document.name, "Unit splitting disabled");
                self.status = Some("분할을 해제했습니다.".to_string());
                vec![Effect::CloseModal]
            }
            Msg::Resize(..) => Vec::new(),
        }
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        // An open modal traps focus.
        if self.is_unit_split_open() {
            self.unit_split.build(builder);
        } else {
            self.document_view.build(builder);
        }
    }

    fn focus(&self) -> FocusFlag {
        if self.is_unit_split_open() {
            self.unit_split.focus()
        } else {
            self.document_view.focus()
        }
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;

    pub(crate) fn build_app(total_words: usize) -> App {
        let text = vec!["단어"; total_words].join(" ");
        App::new(Document::from_text("sample.txt", text), Box::new(DraculaTheme::new()))
    }

    #[test]
    fn open_change_maps_to_modal_navigation() {
        let mut app = build_app(10);
        assert_eq!(app.update(&Msg::UnitSplitOpenChange(true)), vec![Effect::ShowModal(Modal::UnitSplit)]);
        assert_eq!(app.update(&Msg::UnitSplitOpenChange(false)), vec![Effect::CloseModal]);
    }

    #[test]
    fn applying_stores_size_and_closes() {
        let mut app = build_app(237);
        let effects = app.update(&Msg::UnitSizeApplied(50));
        assert_eq!(effects, vec![Effect::CloseModal]);
        assert_eq!(app.applied_unit_size, Some(50));
        assert_eq!(app.applied_unit_count(), Some(5));
    }

    #[test]
    fn reset_turns_splitting_off_and_closes() {
        let mut app = build_app(100);
        app.update(&Msg::UnitSizeApplied(30));
        let effects = app.update(&Msg::UnitSplitReset);
        assert_eq!(effects, vec![Effect::CloseModal]);
        assert_eq!(app.applied_unit_size, None);
        assert_eq!(app.applied_unit_count(), None);
    }

    #[test]
    fn opening_the_modal_focuses_the_input() {
        let mut app = build_app(5);
        app.set_open_modal_kind(Some(Modal::UnitSplit));
        assert!(app.is_unit_split_open());
        assert!(app.unit_split.f_input.get());

        app.set_open_modal_kind(None);
        assert!(!app.is_unit_split_open());
        assert!(app.document_view.f_body.get());
    }
}
