use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// Scroll position of the document body.
#[derive(Debug, Clone)]
pub struct DocumentViewState {
    scroll: u16,
    container_focus: FocusFlag,
    pub f_body: FocusFlag,
}

impl Default for DocumentViewState {
    fn default() -> Self {
        Self {
            scroll: 0,
            container_focus: FocusFlag::new().with_name("document"),
            f_body: FocusFlag::new().with_name("document.body"),
        }
    }
}

impl DocumentViewState {
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scrolls by `delta` lines, clamped to `0..=max_scroll`.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(max_scroll));
        self.scroll = u16::try_from(next).unwrap_or(max_scroll);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }
}

impl HasFocus for DocumentViewState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_body);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_is_clamped() {
        let mut state = DocumentViewState::default();
        state.scroll_by(-3, 10);
        assert_eq!(state.scroll(), 0);
        state.scroll_by(25, 10);
        assert_eq!(state.scroll(), 10);
        state.scroll_by(-4, 10);
        assert_eq!(state.scroll(), 6);
        state.scroll_to_top();
        assert_eq!(state.scroll(), 0);
    }
}
