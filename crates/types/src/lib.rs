//! Shared message and effect definitions for the Wordsplit TUI.
//!
//! Components never mutate host state directly. Key and mouse handlers
//! return [`Effect`]s, and anything the host needs to react to travels as a
//! [`Msg`] wrapped in [`Effect::SendMsg`]. The unit split dialog's three
//! outbound callbacks (apply, reset, visibility requests) are modelled as
//! `Msg` variants so the host event loop decides what happens next.

use serde::{Deserialize, Serialize};

/// Modal overlays the host can display on top of the document view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modal {
    /// Unit size configuration dialog.
    UnitSplit,
}

/// Messages delivered to the application state and components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Terminal resized
    Resize(u16, u16),
    /// The modal primitive requests a visibility change for the unit split
    /// dialog (Esc, click outside, or an explicit open request).
    UnitSplitOpenChange(bool),
    /// The user confirmed a positive unit size.
    UnitSizeApplied(usize),
    /// The user asked to turn unit splitting off.
    UnitSplitReset,
}

/// Side effects returned by components and processed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the given modal on top of the current view
    ShowModal(Modal),
    /// Close whichever modal is open
    CloseModal,
    /// Deliver a message back through `App::update` and the component tree
    SendMsg(Msg),
    /// Leave the event loop and restore the terminal
    Quit,
}

impl Effect {
    /// Returns `true` for effects that change which view or modal is shown.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Effect::ShowModal(_) | Effect::CloseModal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_effects_are_classified() {
        assert!(Effect::ShowModal(Modal::UnitSplit).is_navigation());
        assert!(Effect::CloseModal.is_navigation());
        assert!(!Effect::SendMsg(Msg::UnitSplitReset).is_navigation());
        assert!(!Effect::Quit.is_navigation());
    }

    #[test]
    fn modal_kind_serializes_by_name() {
        let json = serde_json::to_string(&Modal::UnitSplit).expect("serialize modal");
        assert_eq!(json, "\"UnitSplit\"");
    }
}
