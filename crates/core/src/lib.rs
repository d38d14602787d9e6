//! Core snippet model, storage and matching for `snp`.
//!
//! Everything here is independent of the terminal: the interactive session in
//! `snp-tui` and the command line workflows both build on these types.

mod error;
pub mod matcher;
mod settings;
mod snippet;
pub mod store;

pub use error::StoreError;
pub use settings::{DEFAULT_THEME, Palette, Settings};
pub use snippet::{
	DEFAULT_FOLDER, DEFAULT_LANGUAGE, DEFAULT_NAME, Snippet, UNKNOWN_LANGUAGE, parse_reference,
};
pub use store::{SnippetStore, read_snippets};
