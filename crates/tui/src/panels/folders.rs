use snp_core::{DEFAULT_FOLDER, Snippet};

/// Sorted, de-duplicated folder names with a clamped selection.
///
/// The list is never empty: when no snippet names a folder the default
/// folder stands in so the session always has somewhere to create into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderList {
	names: Vec<String>,
	selected: usize,
}

impl Default for FolderList {
	fn default() -> Self {
		Self {
			names: vec![DEFAULT_FOLDER.to_string()],
			selected: 0,
		}
	}
}

impl FolderList {
	#[must_use]
	pub fn from_snippets(snippets: &[Snippet]) -> Self {
		let mut names: Vec<String> = snippets.iter().map(|snippet| snippet.folder.clone()).collect();
		names.sort();
		names.dedup();
		if names.is_empty() {
			return Self::default();
		}
		Self { names, selected: 0 }
	}

	#[must_use]
	pub fn names(&self) -> &[String] {
		&self.names
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.names.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	#[must_use]
	pub fn selected_index(&self) -> usize {
		self.selected
	}

	/// Name of the selected folder.
	#[must_use]
	pub fn selected(&self) -> &str {
		self.names
			.get(self.selected)
			.map_or(DEFAULT_FOLDER, String::as_str)
	}

	/// Each folder paired with whether it is the selected one.
	pub fn items(&self) -> impl Iterator<Item = (&str, bool)> {
		self.names
			.iter()
			.enumerate()
			.map(|(index, name)| (name.as_str(), index == self.selected))
	}

	/// Move the selection up. Returns `true` when it changed.
	pub fn move_up(&mut self) -> bool {
		if self.selected == 0 {
			return false;
		}
		self.selected -= 1;
		true
	}

	/// Move the selection down. Returns `true` when it changed.
	pub fn move_down(&mut self) -> bool {
		if self.selected + 1 >= self.names.len() {
			return false;
		}
		self.selected += 1;
		true
	}

	/// Add `name` if missing. The selection stays on the same folder name.
	pub fn insert(&mut self, name: &str) {
		let current = self.selected().to_string();
		if let Err(position) = self.names.binary_search_by(|existing| existing.as_str().cmp(name)) {
			self.names.insert(position, name.to_string());
		}
		self.select_name(&current);
	}

	/// Select `name`. Returns `false` if no such folder exists.
	pub fn select_name(&mut self, name: &str) -> bool {
		match self.names.iter().position(|candidate| candidate == name) {
			Some(index) => {
				self.selected = index;
				true
			}
			None => false,
		}
	}
}
