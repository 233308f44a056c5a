//! # Wordsplit TUI Library
//!
//! Terminal user interface for configuring how a document is split into
//! units of words before export. The host screen shows the document and the
//! unit size in effect; the unit split dialog edits that size.
//!
//! ## Architecture
//!
//! The TUI follows a component-based architecture: each UI element (document
//! view, unit split dialog) implements a `Component` that handles events and
//! renders itself, reporting side effects back to the runtime as `Effect`s.

mod app;
mod ui;

use anyhow::Result;
use wordsplit_util::Document;

/// Runs the TUI on `document` until the user quits.
///
/// # Errors
///
/// Returns terminal setup or event loop failures.
pub async fn run(document: Document) -> Result<()> {
    ui::runtime::run_app(document).await
}
