//! State behind the three navigator panels.
//!
//! Panels own selection and scroll state only; they never touch the terminal
//! or the filesystem. The session in [`crate::app`] decides when they change.

mod content;
mod folders;
mod snippets;

pub use content::ContentView;
pub use folders::FolderList;
pub use snippets::{SnippetList, SnippetLists};

/// One of the three panels that can hold input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	Folders,
	#[default]
	Snippets,
	Content,
}

impl Focus {
	/// Next panel, left to right, wrapping around.
	#[must_use]
	pub fn next(self) -> Self {
		match self {
			Self::Folders => Self::Snippets,
			Self::Snippets => Self::Content,
			Self::Content => Self::Folders,
		}
	}

	#[must_use]
	pub fn prev(self) -> Self {
		match self {
			Self::Folders => Self::Content,
			Self::Snippets => Self::Folders,
			Self::Content => Self::Snippets,
		}
	}
}
