use std::collections::BTreeMap;

use snp_core::Snippet;
use snp_core::matcher;

/// One folder's snippets in discovery order, with an optional filter.
///
/// `visible` always holds indices into `items`: every index when no filter is
/// active, the ranked matches otherwise. The selection indexes `visible`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetList {
	items: Vec<Snippet>,
	visible: Vec<usize>,
	query: Option<String>,
	selected: usize,
}

impl SnippetList {
	#[must_use]
	pub fn new(items: Vec<Snippet>) -> Self {
		let visible = (0..items.len()).collect();
		Self {
			items,
			visible,
			query: None,
			selected: 0,
		}
	}

	/// Every snippet in the folder, ignoring the filter.
	#[must_use]
	pub fn items(&self) -> &[Snippet] {
		&self.items
	}

	/// Snippets shown in the panel, in display order.
	pub fn visible(&self) -> impl Iterator<Item = &Snippet> {
		self.visible.iter().filter_map(|&index| self.items.get(index))
	}

	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.visible.len()
	}

	#[must_use]
	pub fn selected_index(&self) -> usize {
		self.selected
	}

	/// The selected snippet, or `None` when the visible list is empty.
	#[must_use]
	pub fn selected(&self) -> Option<&Snippet> {
		self.visible
			.get(self.selected)
			.and_then(|&index| self.items.get(index))
	}

	/// Active filter text, if the list is narrowed.
	#[must_use]
	pub fn query(&self) -> Option<&str> {
		self.query.as_deref()
	}

	pub fn select_first(&mut self) {
		self.selected = 0;
	}

	pub fn move_up(&mut self) -> bool {
		if self.selected == 0 {
			return false;
		}
		self.selected -= 1;
		true
	}

	pub fn move_down(&mut self) -> bool {
		if self.selected + 1 >= self.visible.len() {
			return false;
		}
		self.selected += 1;
		true
	}

	/// Narrow the list to snippets whose identity matches `query`.
	///
	/// An empty query restores the full list. The selection returns to the
	/// first visible entry either way.
	pub fn set_filter(&mut self, query: &str) {
		if query.trim().is_empty() {
			self.query = None;
		} else {
			self.query = Some(query.to_string());
		}
		self.refresh_visible();
		self.selected = 0;
	}

	pub fn clear_filter(&mut self) {
		self.set_filter("");
	}

	/// Remove the selected snippet, clamping the selection to what remains.
	pub fn remove_selected(&mut self) -> Option<Snippet> {
		let index = *self.visible.get(self.selected)?;
		let removed = self.items.remove(index);
		self.refresh_visible();
		self.selected = self.selected.min(self.visible.len().saturating_sub(1));
		Some(removed)
	}

	/// Append `snippet`, clear the filter and select it.
	pub fn push(&mut self, snippet: Snippet) {
		self.items.push(snippet);
		self.query = None;
		self.refresh_visible();
		self.selected = self.visible.len().saturating_sub(1);
	}

	/// Swap the selected snippet for `snippet` in place, then select it with
	/// the filter cleared.
	pub fn replace_selected(&mut self, snippet: Snippet) -> Option<Snippet> {
		let index = *self.visible.get(self.selected)?;
		let previous = std::mem::replace(&mut self.items[index], snippet);
		self.query = None;
		self.refresh_visible();
		self.selected = index;
		Some(previous)
	}

	fn refresh_visible(&mut self) {
		self.visible = match self.query.as_deref() {
			None => (0..self.items.len()).collect(),
			Some(query) => {
				let identities: Vec<String> = self.items.iter().map(Snippet::identity).collect();
				matcher::rank(query, &identities)
					.into_iter()
					.map(|entry| entry.index)
					.collect()
			}
		};
	}
}

/// Snippet lists keyed by folder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetLists {
	lists: BTreeMap<String, SnippetList>,
}

impl SnippetLists {
	/// Group `snippets` by folder, keeping discovery order within each.
	#[must_use]
	pub fn from_snippets(snippets: Vec<Snippet>) -> Self {
		let mut grouped: BTreeMap<String, Vec<Snippet>> = BTreeMap::new();
		for snippet in snippets {
			grouped.entry(snippet.folder.clone()).or_default().push(snippet);
		}
		let lists = grouped
			.into_iter()
			.map(|(folder, items)| (folder, SnippetList::new(items)))
			.collect();
		Self { lists }
	}

	#[must_use]
	pub fn get(&self, folder: &str) -> Option<&SnippetList> {
		self.lists.get(folder)
	}

	/// The list for `folder`, created empty if the folder is new.
	pub fn entry(&mut self, folder: &str) -> &mut SnippetList {
		self.lists.entry(folder.to_string()).or_default()
	}

	/// The selected snippet of `folder`'s list.
	#[must_use]
	pub fn selected(&self, folder: &str) -> Option<&Snippet> {
		self.get(folder).and_then(SnippetList::selected)
	}

	/// Whether any folder holds a snippet with the same identity.
	#[must_use]
	pub fn contains(&self, snippet: &Snippet) -> bool {
		self.lists
			.get(&snippet.folder)
			.is_some_and(|list| list.items().iter().any(|item| item.same_identity(snippet)))
	}
}
