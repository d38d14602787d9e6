//! The snippet identity model.
//!
//! A snippet is addressed by the `(folder, name, language)` triple, which maps
//! onto exactly one file beneath the store root:
//! `<root>/<folder>/<name>.<language>`.

use std::fmt;
use std::path::{Path, PathBuf};

/// Folder used for files stored directly beneath the root and for snippets
/// created without an explicit folder.
pub const DEFAULT_FOLDER: &str = "misc";
/// Name given to snippets created without an explicit name.
pub const DEFAULT_NAME: &str = "Untitled";
/// Language assigned to files without any extension.
pub const UNKNOWN_LANGUAGE: &str = "txt";
/// Fallback language used when configuration does not provide one.
pub const DEFAULT_LANGUAGE: &str = "go";

/// A single stored text unit backed by one file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snippet {
	/// Folder (subdirectory) the snippet lives in.
	pub folder: String,
	/// File stem, which may itself contain dots.
	pub name: String,
	/// Language tag, taken from the final extension.
	pub language: String,
	/// Backing file, relative to the store root.
	///
	/// This is usually `folder/name.language`, except for files discovered
	/// directly beneath the root, which belong to [`DEFAULT_FOLDER`] without
	/// living inside it.
	pub file: PathBuf,
}

impl Snippet {
	/// Construct a snippet, substituting defaults for empty fields.
	#[must_use]
	pub fn new(
		folder: impl Into<String>,
		name: impl Into<String>,
		language: impl Into<String>,
	) -> Self {
		let folder = non_empty_or(folder.into(), DEFAULT_FOLDER);
		let name = non_empty_or(name.into(), DEFAULT_NAME);
		let language = non_empty_or(language.into(), UNKNOWN_LANGUAGE);
		let file = Path::new(&folder).join(format!("{name}.{language}"));
		Self {
			folder,
			name,
			language,
			file,
		}
	}

	/// Split a file name into `(name, language)`.
	///
	/// The final dot-separated segment is the language; everything before it
	/// is the name. Names without a dot get the [`UNKNOWN_LANGUAGE`] tag.
	#[must_use]
	pub fn split_file_name(file_name: &str) -> (String, String) {
		match file_name.rsplit_once('.') {
			Some((name, language)) => (name.to_string(), language.to_string()),
			None => (file_name.to_string(), UNKNOWN_LANGUAGE.to_string()),
		}
	}

	/// Build a snippet from a file discovered inside `folder`.
	#[must_use]
	pub fn from_file_name(folder: impl Into<String>, file_name: &str) -> Self {
		let folder = folder.into();
		let (name, language) = Self::split_file_name(file_name);
		let file = Path::new(&folder).join(file_name);
		Self {
			folder,
			name,
			language,
			file,
		}
	}

	/// Build a snippet from a file stored directly beneath the root.
	#[must_use]
	pub fn from_root_file(file_name: &str) -> Self {
		let (name, language) = Self::split_file_name(file_name);
		Self {
			folder: DEFAULT_FOLDER.to_string(),
			name,
			language,
			file: PathBuf::from(file_name),
		}
	}

	/// Whether two snippets share the same `(folder, name, language)` triple.
	#[must_use]
	pub fn same_identity(&self, other: &Snippet) -> bool {
		self.folder == other.folder && self.name == other.name && self.language == other.language
	}

	/// The `name.language` file name backing this snippet.
	#[must_use]
	pub fn file_name(&self) -> String {
		format!("{}.{}", self.name, self.language)
	}

	/// Absolute location of the backing file for the given store root.
	#[must_use]
	pub fn path_in(&self, root: &Path) -> PathBuf {
		root.join(&self.file)
	}

	/// The `folder/name.language` identity string.
	///
	/// This is what the fuzzy matcher compares against and what `list`
	/// prints.
	#[must_use]
	pub fn identity(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Snippet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}.{}", self.folder, self.name, self.language)
	}
}

fn non_empty_or(value: String, fallback: &str) -> String {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		fallback.to_string()
	} else {
		trimmed.to_string()
	}
}

/// Parse a user supplied `folder/name.language` reference.
///
/// Missing parts are filled from the defaults, so every spelling resolves to
/// a complete identity:
///
/// | input              | folder  | name       | language   |
/// |--------------------|---------|------------|------------|
/// | `Notes/Hello.go`   | `Notes` | `Hello`    | `go`       |
/// | `Hello.go`         | `misc`  | `Hello`    | `go`       |
/// | `Notes/Hello`      | `Notes` | `Hello`    | *default*  |
/// | `a.b.rs`           | `misc`  | `a.b`      | `rs`       |
#[must_use]
pub fn parse_reference(input: &str, default_language: &str) -> Snippet {
	let input = input.trim();
	let (folder, remaining) = match input.split_once('/') {
		Some((folder, rest)) => (folder, rest),
		None => (DEFAULT_FOLDER, input),
	};

	let (name, language) = match remaining.rsplit_once('.') {
		Some((name, language)) => (name, language),
		None => (remaining, default_language),
	};

	let language = if language.trim().is_empty() {
		non_empty_or(default_language.to_string(), DEFAULT_LANGUAGE)
	} else {
		language.to_string()
	};

	Snippet::new(folder, name, language)
}
