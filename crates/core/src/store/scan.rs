use std::collections::HashSet;
use std::fs::{self, DirEntry};
use std::path::Path;

use log::{debug, warn};

use crate::snippet::Snippet;

/// Enumerate the snippets stored beneath `root`.
///
/// Top-level files come first, followed by each subdirectory's files, with
/// entries visited in file name order so discovery order is stable across
/// platforms. Hidden entries (leading `.`) are skipped. Unreadable roots and
/// folders degrade to an empty contribution instead of failing.
///
/// A top-level file and a file in `misc/` with the same name share one
/// identity. Both are returned and the later one is logged as a duplicate.
#[must_use]
pub fn read_snippets(root: &Path) -> Vec<Snippet> {
	let Some(entries) = sorted_entries(root) else {
		debug!("snippet root {} is unavailable", root.display());
		return Vec::new();
	};

	let mut snippets = Vec::new();
	let mut folders = Vec::new();
	for entry in entries {
		let Some(name) = visible_name(&entry) else {
			continue;
		};
		match entry.file_type() {
			Ok(kind) if kind.is_dir() => folders.push((name, entry.path())),
			Ok(kind) if kind.is_file() => snippets.push(Snippet::from_root_file(&name)),
			Ok(_) => {}
			Err(err) => warn!("skipping {}: {err}", entry.path().display()),
		}
	}

	for (folder, path) in folders {
		let Some(children) = sorted_entries(&path) else {
			warn!("skipping unreadable folder {}", path.display());
			continue;
		};
		for child in children {
			let Some(name) = visible_name(&child) else {
				continue;
			};
			if child.file_type().is_ok_and(|kind| kind.is_file()) {
				snippets.push(Snippet::from_file_name(folder.as_str(), &name));
			}
		}
	}

	warn_duplicates(&snippets);
	debug!("discovered {} snippets in {}", snippets.len(), root.display());
	snippets
}

fn warn_duplicates(snippets: &[Snippet]) {
	let mut seen = HashSet::new();
	for snippet in snippets {
		let identity = snippet.identity();
		if !seen.insert(identity.clone()) {
			warn!("duplicate snippet identity {identity}; both files are listed");
		}
	}
}

fn sorted_entries(dir: &Path) -> Option<Vec<DirEntry>> {
	let mut entries: Vec<DirEntry> = fs::read_dir(dir).ok()?.filter_map(Result::ok).collect();
	entries.sort_by_key(DirEntry::file_name);
	Some(entries)
}

fn visible_name(entry: &DirEntry) -> Option<String> {
	let name = entry.file_name().into_string().ok()?;
	if name.starts_with('.') {
		None
	} else {
		Some(name)
	}
}
