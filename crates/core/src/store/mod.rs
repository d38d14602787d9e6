//! Filesystem-backed snippet storage.
//!
//! The store root holds one file per snippet. Files directly beneath the root
//! belong to [`DEFAULT_FOLDER`](crate::DEFAULT_FOLDER); each immediate
//! subdirectory is a folder whose immediate files are its snippets. Nothing
//! deeper than one level is considered.

mod scan;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

pub use scan::read_snippets;

use crate::error::StoreError;
use crate::snippet::Snippet;

/// Stateless handle over the store root directory.
///
/// The store keeps no in-memory view of the snippets; every call goes
/// straight to the filesystem.
#[derive(Debug, Clone)]
pub struct SnippetStore {
	root: PathBuf,
}

impl SnippetStore {
	#[must_use]
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Directory the store reads from and writes to.
	#[must_use]
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Enumerate the snippets currently on disk.
	///
	/// A missing or unreadable root yields an empty list.
	#[must_use]
	pub fn load(&self) -> Vec<Snippet> {
		read_snippets(&self.root)
	}

	/// Absolute path of the file backing `snippet`.
	#[must_use]
	pub fn path_of(&self, snippet: &Snippet) -> PathBuf {
		snippet.path_in(&self.root)
	}

	/// Read a snippet's raw content.
	///
	/// Invalid UTF-8 sequences are replaced rather than rejected.
	///
	/// # Errors
	///
	/// Returns [`StoreError::Io`] when the file cannot be read.
	pub fn read_content(&self, snippet: &Snippet) -> Result<String, StoreError> {
		let path = self.path_of(snippet);
		let bytes = fs::read(&path).map_err(|err| StoreError::io(&path, err))?;
		Ok(String::from_utf8_lossy(&bytes).into_owned())
	}

	/// Write a brand new snippet, refusing to replace an existing file.
	///
	/// The folder directory is created when missing.
	///
	/// # Errors
	///
	/// Returns [`StoreError::AlreadyExists`] when the target path is taken,
	/// [`StoreError::InvalidIdentity`] for unusable identity fields, and
	/// [`StoreError::Io`] for any other filesystem failure.
	pub fn create(&self, snippet: &Snippet, content: &str) -> Result<(), StoreError> {
		validate(snippet)?;
		let path = self.prepare_parent(snippet)?;
		let mut file = OpenOptions::new()
			.write(true)
			.create_new(true)
			.open(&path)
			.map_err(|err| StoreError::io(&path, err))?;
		file.write_all(content.as_bytes())
			.map_err(|err| StoreError::io(&path, err))?;
		debug!("created snippet {snippet} at {}", path.display());
		Ok(())
	}

	/// Write a snippet, replacing any existing content.
	///
	/// # Errors
	///
	/// Returns [`StoreError::InvalidIdentity`] for unusable identity fields
	/// and [`StoreError::Io`] when the write fails.
	pub fn write(&self, snippet: &Snippet, content: &str) -> Result<(), StoreError> {
		validate(snippet)?;
		let path = self.prepare_parent(snippet)?;
		fs::write(&path, content).map_err(|err| StoreError::Io {
			path: path.clone(),
			source: err,
		})?;
		debug!("wrote snippet {snippet} to {}", path.display());
		Ok(())
	}

	/// Remove the file backing `snippet`.
	///
	/// # Errors
	///
	/// Returns [`StoreError::Io`] when the file cannot be removed.
	pub fn delete(&self, snippet: &Snippet) -> Result<(), StoreError> {
		let path = self.path_of(snippet);
		fs::remove_file(&path).map_err(|err| StoreError::io(&path, err))?;
		debug!("deleted snippet {snippet}");
		Ok(())
	}

	/// Move the file backing `from` so that it backs `to` instead.
	///
	/// # Errors
	///
	/// Returns [`StoreError::AlreadyExists`] when `to` resolves to another
	/// existing file, [`StoreError::InvalidIdentity`] for unusable identity
	/// fields, and [`StoreError::Io`] when the move fails.
	pub fn rename(&self, from: &Snippet, to: &Snippet) -> Result<(), StoreError> {
		validate(to)?;
		let source = self.path_of(from);
		let target = self.path_of(to);
		if source == target {
			return Ok(());
		}
		if target.exists() {
			return Err(StoreError::AlreadyExists { path: target });
		}

		self.prepare_parent(to)?;
		fs::rename(&source, &target).map_err(|err| {
			warn!("failed to rename {} to {}", source.display(), target.display());
			StoreError::io(&source, err)
		})?;
		debug!("renamed snippet {from} to {to}");
		Ok(())
	}

	fn prepare_parent(&self, snippet: &Snippet) -> Result<PathBuf, StoreError> {
		let path = self.path_of(snippet);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
		}
		Ok(path)
	}
}

/// Reject identity fields that would escape or alias the store layout.
///
/// Folder and name values may not start with `.`: hidden entries are never
/// discovered by a reload, so such a snippet would vanish.
fn validate(snippet: &Snippet) -> Result<(), StoreError> {
	let fields = [
		("folder", snippet.folder.as_str()),
		("name", snippet.name.as_str()),
		("language", snippet.language.as_str()),
	];
	for (field, value) in fields {
		let unusable = value.is_empty()
			|| (field != "language" && value.starts_with('.'))
			|| value.contains(['/', '\\'])
			|| value.chars().any(char::is_control);
		if unusable {
			return Err(StoreError::InvalidIdentity {
				field,
				value: value.to_string(),
			});
		}
	}
	if snippet.language.contains('.') {
		return Err(StoreError::InvalidIdentity {
			field: "language",
			value: snippet.language.clone(),
		});
	}
	Ok(())
}
