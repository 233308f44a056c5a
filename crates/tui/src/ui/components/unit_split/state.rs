//! State for the unit split configuration dialog.
//!
//! The dialog owns exactly one piece of data: the raw text of the unit size
//! field. It starts at `"50"`, is never validated on edit, and survives the
//! dialog being closed and reopened. Only [`UnitSplitState::reset`] puts it
//! back to the default.

use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use wordsplit_util::{DEFAULT_UNIT_SIZE_INPUT, parse_unit_size, unit_count};

use crate::ui::components::common::TextInputState;

/// Focusable elements inside the dialog, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSplitTarget {
    Input,
    ResetButton,
    ApplyButton,
}

#[derive(Debug, Clone)]
pub struct UnitSplitState {
    input: TextInputState,

    container_focus: FocusFlag,
    pub f_input: FocusFlag,
    pub f_reset: FocusFlag,
    pub f_apply: FocusFlag,
}

impl Default for UnitSplitState {
    fn default() -> Self {
        Self {
            input: TextInputState::with_value(DEFAULT_UNIT_SIZE_INPUT),
            container_focus: FocusFlag::new().with_name("unit_split"),
            f_input: FocusFlag::new().with_name("unit_split.input"),
            f_reset: FocusFlag::new().with_name("unit_split.reset"),
            f_apply: FocusFlag::new().with_name("unit_split.apply"),
        }
    }
}

impl UnitSplitState {
    pub fn input(&self) -> &TextInputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInputState {
        &mut self.input
    }

    /// Raw, unvalidated field contents.
    pub fn input_value(&self) -> &str {
        self.input.input()
    }

    /// The field parsed as a positive unit size, if it is one.
    pub fn parsed_unit_size(&self) -> Option<usize> {
        parse_unit_size(self.input.input())
    }

    /// Number of units the document would split into, shown as a preview.
    ///
    /// `None` whenever the field is empty or does not hold a positive
    /// integer; the dialog then shows no preview and no error.
    pub fn preview_unit_count(&self, total_words: usize) -> Option<usize> {
        if self.input.is_empty() {
            return None;
        }
        self.parsed_unit_size().map(|unit_size| unit_count(total_words, unit_size))
    }

    /// Puts the field back to the default text.
    pub fn reset(&mut self) {
        self.input.set_input(DEFAULT_UNIT_SIZE_INPUT);
    }

    /// The element that currently holds focus, defaulting to the input.
    pub fn focused_target(&self) -> UnitSplitTarget {
        if self.f_reset.get() {
            UnitSplitTarget::ResetButton
        } else if self.f_apply.get() {
            UnitSplitTarget::ApplyButton
        } else {
            UnitSplitTarget::Input
        }
    }

    pub fn flag_for(&self, target: UnitSplitTarget) -> &FocusFlag {
        match target {
            UnitSplitTarget::Input => &self.f_input,
            UnitSplitTarget::ResetButton => &self.f_reset,
            UnitSplitTarget::ApplyButton => &self.f_apply,
        }
    }
}

impl HasFocus for UnitSplitState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_input);
        builder.leaf_widget(&self.f_reset);
        builder.leaf_widget(&self.f_apply);
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

    fn state_with(value: &str) -> UnitSplitState {
        let mut state = UnitSplitState::default();
        state.input_mut().set_input(value);
        state
    }

    #[test]
    fn starts_with_default_unit_size() {
        let state = UnitSplitState::default();
        assert_eq!(state.input_value(), "50");
        assert_eq!(state.parsed_unit_size(), Some(50));
        assert_eq!(state.focused_target(), UnitSplitTarget::Input);
    }

    #[test]
    fn preview_is_ceiling_of_total_over_size() {
        assert_eq!(state_with("50").preview_unit_count(237), Some(5));
        assert_eq!(state_with("10").preview_unit_count(0), Some(0));
        assert_eq!(state_with("100").preview_unit_count(100), Some(1));
    }

    #[test]
    fn preview_hidden_for_non_positive_or_empty_input() {
        assert_eq!(state_with("0").preview_unit_count(100), None);
        assert_eq!(state_with("").preview_unit_count(100), None);
        assert_eq!(state_with("-4").preview_unit_count(100), None);
        assert_eq!(state_with("abc").preview_unit_count(100), None);
    }

    #[test]
    fn reset_restores_default_from_any_content() {
        for value in ["30", "", "garbage", "-1"] {
            let mut state = state_with(value);
            state.reset();
            assert_eq!(state.input_value(), "50");
        }
    }
}
