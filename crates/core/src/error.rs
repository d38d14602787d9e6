use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by [`SnippetStore`](crate::SnippetStore) write operations.
#[derive(Debug, Error)]
pub enum StoreError {
	/// The underlying filesystem call failed.
	#[error("failed to access {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// Another snippet already resolves to the requested path.
	#[error("a snippet already exists at {path}")]
	AlreadyExists { path: PathBuf },

	/// An identity field cannot be used as a path component.
	#[error("invalid snippet {field} '{value}'")]
	InvalidIdentity { field: &'static str, value: String },
}

impl StoreError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		let path = path.into();
		if source.kind() == io::ErrorKind::AlreadyExists {
			return Self::AlreadyExists { path };
		}
		Self::Io { path, source }
	}
}
