pub mod state;
mod unit_split_component;

pub use state::{UnitSplitState, UnitSplitTarget};
pub use unit_split_component::UnitSplitComponent;
