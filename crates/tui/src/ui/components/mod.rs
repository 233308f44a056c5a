//! UI components: document view, unit split dialog and shared widgets.

pub mod common;
pub mod component;
pub mod document;
pub mod unit_split;

pub use component::*;
pub use document::DocumentComponent;
pub use unit_split::UnitSplitComponent;
