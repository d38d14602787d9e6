//! Interactive terminal session for `snp`.
//!
//! The session shows three panels (folders, snippets, content) and drives
//! them from a single-threaded event loop. State lives in [`App`]; key
//! presses become [`Intent`]s through the [`keymap`], and panel state is
//! kept apart from rendering in [`panels`].

mod app;
pub mod clipboard;
pub mod components;
pub mod highlight;
pub mod input;
pub mod keymap;
pub mod panels;
mod runtime;
pub mod style;

pub use app::{App, Flash, FormStep, Mode};
pub use clipboard::{Clipboard, SystemClipboard};
pub use highlight::Highlighter;
pub use keymap::Intent;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::Theme;
