//! Component system for the Wordsplit TUI.
//!
//! Components are self-contained UI elements that handle their own events
//! and rendering while integrating with the application through a consistent
//! interface. Durable state lives on [`App`] so it survives the component
//! being dropped (for example when a modal closes); the component itself
//! only keeps render-time bookkeeping such as hit-test areas.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use wordsplit_types::{Effect, Msg};

use crate::app::App;

/// A trait representing a UI component with its own state and behavior.
///
/// Components react to application messages and user input and report any
/// side effects back to the runtime as [`Effect`]s instead of mutating global
/// state directly.
pub(crate) trait Component {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing,
    /// cursor placement and recording hit-test areas.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while the component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Splits `area` into the regions the component renders into.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        vec![area]
    }
}
