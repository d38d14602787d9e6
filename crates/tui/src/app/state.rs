use log::{debug, warn};
use snp_core::{Settings, Snippet, SnippetStore};

use super::form::{FormStep, SnippetForm};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::highlight::Highlighter;
use crate::input::QueryInput;
use crate::panels::{ContentView, Focus, FolderList, SnippetList, SnippetLists};
use crate::style::Theme;

/// Interaction mode of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
	#[default]
	Navigating,
	/// Typing a filter for the selected folder's snippets.
	Filtering,
	ConfirmingCopy,
	ConfirmingDelete,
	/// Collecting the identity of a new snippet.
	Creating(FormStep),
	/// Collecting a new identity for the selected snippet.
	Renaming(FormStep),
}

impl Mode {
	/// The form step, for the modes that show the form.
	#[must_use]
	pub fn form_step(self) -> Option<FormStep> {
		match self {
			Self::Creating(step) | Self::Renaming(step) => Some(step),
			_ => None,
		}
	}

	/// The same form mode moved to `step`. Other modes are unchanged.
	#[must_use]
	pub fn with_step(self, step: FormStep) -> Self {
		match self {
			Self::Creating(_) => Self::Creating(step),
			Self::Renaming(_) => Self::Renaming(step),
			other => other,
		}
	}
}

/// A one-shot indicator shown by the next render only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
	/// The snippet's content was placed on the clipboard.
	Copied(Snippet),
	/// An action failed; the message is shown in the status line.
	Error(String),
}

/// Aggregate state of one interactive session.
pub struct App<'a> {
	pub(crate) store: SnippetStore,
	pub(crate) default_language: String,
	pub(crate) folders: FolderList,
	pub(crate) snippets: SnippetLists,
	pub(crate) content: ContentView,
	pub(crate) focus: Focus,
	pub(crate) mode: Mode,
	pub(crate) filter_input: QueryInput<'a>,
	pub(crate) form: SnippetForm<'a>,
	pub(crate) flash: Option<Flash>,
	pub(crate) theme: Theme,
	pub(crate) highlighter: Highlighter,
	pub(crate) clipboard: Box<dyn Clipboard>,
}

impl<'a> App<'a> {
	/// Load the store named by `settings` and build a session over it.
	#[must_use]
	pub fn new(settings: &Settings) -> Self {
		Self::with_clipboard(settings, SystemClipboard)
	}

	/// Like [`App::new`], copying through `clipboard`.
	#[must_use]
	pub fn with_clipboard(settings: &Settings, clipboard: impl Clipboard + 'static) -> Self {
		let store = SnippetStore::new(&settings.root);
		let snippets = store.load();
		debug!(
			"starting session over {} with {} snippets",
			store.root().display(),
			snippets.len()
		);

		let theme = Theme::from_palette(&settings.palette);
		let mut filter_input = QueryInput::default();
		filter_input.set_style(theme.filter_prompt);

		let mut app = Self {
			folders: FolderList::from_snippets(&snippets),
			snippets: SnippetLists::from_snippets(snippets),
			store,
			default_language: settings.default_language.clone(),
			content: ContentView::default(),
			focus: Focus::default(),
			mode: Mode::default(),
			filter_input,
			form: SnippetForm::default(),
			flash: None,
			theme,
			highlighter: Highlighter::new(settings.theme.as_str()),
			clipboard: Box::new(clipboard),
		};
		app.refresh_content();
		app
	}

	#[must_use]
	pub fn mode(&self) -> Mode {
		self.mode
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Indicator waiting for the next render.
	#[must_use]
	pub fn flash(&self) -> Option<&Flash> {
		self.flash.as_ref()
	}

	#[must_use]
	pub fn folders(&self) -> &FolderList {
		&self.folders
	}

	#[must_use]
	pub fn content(&self) -> &ContentView {
		&self.content
	}

	#[must_use]
	pub fn store(&self) -> &SnippetStore {
		&self.store
	}

	/// The selected folder's list, if it holds any snippets yet.
	#[must_use]
	pub fn active_list(&self) -> Option<&SnippetList> {
		self.snippets.get(self.folders.selected())
	}

	pub(crate) fn active_list_mut(&mut self) -> &mut SnippetList {
		let folder = self.folders.selected().to_string();
		self.snippets.entry(&folder)
	}

	/// Snippets currently shown in the snippet panel.
	#[must_use]
	pub fn visible_snippets(&self) -> Vec<&Snippet> {
		self.active_list()
			.map(|list| list.visible().collect())
			.unwrap_or_default()
	}

	/// The snippet actions apply to, if the panel shows a real one.
	#[must_use]
	pub fn selected_snippet(&self) -> Option<&Snippet> {
		self.snippets.selected(self.folders.selected())
	}

	/// Re-read the selected snippet into the content panel.
	///
	/// Unreadable files show as empty content.
	pub(crate) fn refresh_content(&mut self) {
		let Some(snippet) = self.selected_snippet().cloned() else {
			self.content.clear();
			return;
		};
		let text = self.store.read_content(&snippet).unwrap_or_else(|err| {
			warn!("showing {snippet} as empty: {err}");
			String::new()
		});
		self.content.load(snippet, text);
		self.highlight_content();
	}

	/// Compute highlighted lines if the content panel wants them.
	///
	/// On failure the panel keeps showing plain text.
	pub(crate) fn highlight_content(&mut self) {
		if !self.content.wants_highlighting() {
			return;
		}
		let Some(language) = self.content.snippet().map(|snippet| snippet.language.clone()) else {
			return;
		};
		if let Some(lines) = self.highlighter.highlight_lines(self.content.text(), &language) {
			self.content.set_highlighted(lines);
		}
	}
}
