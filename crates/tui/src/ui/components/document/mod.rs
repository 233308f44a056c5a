mod document_component;
pub mod state;

pub use document_component::DocumentComponent;
pub use state::DocumentViewState;
