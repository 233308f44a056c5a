//! Document loading, word counting and unit arithmetic shared by the
//! Wordsplit CLI and TUI.

pub mod document;
pub mod paths;
pub mod unit_split;

pub use document::{Document, DocumentError};
pub use paths::{default_log_path, expand_tilde};
pub use unit_split::{DEFAULT_UNIT_SIZE, DEFAULT_UNIT_SIZE_INPUT, Unit, count_words, parse_unit_size, split_into_units, unit_count};
