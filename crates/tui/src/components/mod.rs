//! UI building blocks shared by the panel renderers.

/// Title bars and key hints.
pub mod bars;
/// Numbered, scrollable snippet text.
pub mod content;
/// List rows for folders and snippets.
pub mod rows;
/// Scrollbar for the content viewport.
pub mod scrollbar;

pub use bars::{hint_line, render_title};
pub use content::render_content;
pub use rows::{ListEntry, RowState, truncate};
