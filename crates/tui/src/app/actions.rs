use std::ops::ControlFlow;

use log::{debug, info, warn};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use snp_core::{DEFAULT_NAME, Snippet, StoreError};

use super::form::{FormStep, SnippetForm};
use super::state::{App, Flash, Mode};
use crate::keymap::{Intent, PAGE_LINES, intent_for};
use crate::panels::Focus;

impl App<'_> {
	/// Process a key press. Breaks when the session should end.
	pub fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
		match intent_for(self.mode, key) {
			Some(intent) => self.apply(intent),
			None => ControlFlow::Continue(()),
		}
	}

	/// Run the transition for `intent` in the current mode.
	pub fn apply(&mut self, intent: Intent) -> ControlFlow<()> {
		match self.mode {
			Mode::Navigating => return self.navigate(intent),
			Mode::Filtering => self.filter(intent),
			Mode::ConfirmingCopy => self.confirm_copy(intent),
			Mode::ConfirmingDelete => self.confirm_delete(intent),
			Mode::Creating(step) | Mode::Renaming(step) => self.edit_form(step, intent),
		}
		ControlFlow::Continue(())
	}

	fn set_mode(&mut self, mode: Mode) {
		if self.mode != mode {
			debug!("mode {:?} -> {mode:?}", self.mode);
			self.mode = mode;
		}
	}

	fn navigate(&mut self, intent: Intent) -> ControlFlow<()> {
		match intent {
			Intent::Quit => return ControlFlow::Break(()),
			Intent::FocusNext => self.focus = self.focus.next(),
			Intent::FocusPrev => self.focus = self.focus.prev(),
			Intent::MoveUp => self.move_selection(false),
			Intent::MoveDown => self.move_selection(true),
			Intent::PageUp => self.content.scroll_up(PAGE_LINES),
			Intent::PageDown => self.content.scroll_down(PAGE_LINES),
			Intent::StartFilter if self.focus == Focus::Snippets => {
				let query = self
					.active_list()
					.and_then(|list| list.query())
					.unwrap_or_default()
					.to_string();
				self.filter_input.set_text(query);
				self.set_mode(Mode::Filtering);
			}
			Intent::StartCopy if self.selected_snippet().is_some() => {
				self.set_mode(Mode::ConfirmingCopy);
			}
			Intent::StartDelete if self.selected_snippet().is_some() => {
				self.set_mode(Mode::ConfirmingDelete);
			}
			Intent::StartCreate => {
				let defaults = Snippet::new(
					self.folders.selected(),
					DEFAULT_NAME,
					self.default_language.as_str(),
				);
				self.form = SnippetForm::blank(&defaults, &self.theme);
				self.set_mode(Mode::Creating(FormStep::Folder));
			}
			Intent::StartRename => {
				if let Some(current) = self.selected_snippet().cloned() {
					self.form = SnippetForm::prefilled(&current, &self.theme);
					self.set_mode(Mode::Renaming(FormStep::Folder));
				}
			}
			Intent::ToggleHighlight => {
				let enabled = self.content.toggle_highlight();
				debug!("content highlighting {}", if enabled { "on" } else { "off" });
				self.highlight_content();
			}
			Intent::Cancel => {
				if self.active_list().and_then(|list| list.query()).is_some() {
					self.active_list_mut().clear_filter();
					self.refresh_content();
				}
			}
			_ => {}
		}
		ControlFlow::Continue(())
	}

	/// Move within the focused panel. Selection changes refresh the content.
	fn move_selection(&mut self, down: bool) {
		match self.focus {
			Focus::Folders => {
				let moved = if down {
					self.folders.move_down()
				} else {
					self.folders.move_up()
				};
				if moved {
					self.active_list_mut().select_first();
					self.refresh_content();
				}
			}
			Focus::Snippets => {
				let list = self.active_list_mut();
				let moved = if down { list.move_down() } else { list.move_up() };
				if moved {
					self.refresh_content();
				}
			}
			Focus::Content => {
				if down {
					self.content.scroll_down(1);
				} else {
					self.content.scroll_up(1);
				}
			}
		}
	}

	fn filter(&mut self, intent: Intent) {
		match intent {
			Intent::Input(key) => {
				if self.filter_input.input(key) {
					let query = self.filter_input.text().to_string();
					self.active_list_mut().set_filter(&query);
					self.refresh_content();
				}
			}
			Intent::MoveUp => {
				if self.active_list_mut().move_up() {
					self.refresh_content();
				}
			}
			Intent::MoveDown => {
				if self.active_list_mut().move_down() {
					self.refresh_content();
				}
			}
			Intent::Confirm => self.set_mode(Mode::Navigating),
			Intent::Cancel => {
				self.filter_input.clear();
				self.active_list_mut().clear_filter();
				self.refresh_content();
				self.set_mode(Mode::Navigating);
			}
			_ => {}
		}
	}

	fn confirm_copy(&mut self, intent: Intent) {
		match intent {
			Intent::Confirm => {
				if let Some(snippet) = self.selected_snippet().cloned() {
					self.flash = Some(self.copy_snippet(snippet));
				}
				self.set_mode(Mode::Navigating);
			}
			Intent::Cancel => self.set_mode(Mode::Navigating),
			_ => {}
		}
	}

	fn copy_snippet(&mut self, snippet: Snippet) -> Flash {
		let text = match self.store.read_content(&snippet) {
			Ok(text) => text,
			Err(err) => return Flash::Error(err.to_string()),
		};
		match self.clipboard.copy(&text) {
			Ok(()) => {
				info!("copied {snippet} to the clipboard");
				Flash::Copied(snippet)
			}
			Err(reason) => {
				warn!("copying {snippet} failed: {reason}");
				Flash::Error(format!("copy failed: {reason}"))
			}
		}
	}

	fn confirm_delete(&mut self, intent: Intent) {
		match intent {
			Intent::Confirm => {
				if let Some(snippet) = self.selected_snippet().cloned() {
					match self.store.delete(&snippet) {
						Ok(()) => {
							info!("deleted {snippet}");
							self.active_list_mut().remove_selected();
							self.refresh_content();
						}
						Err(err) => self.fail(err),
					}
				}
				self.set_mode(Mode::Navigating);
			}
			Intent::Cancel => self.set_mode(Mode::Navigating),
			_ => {}
		}
	}

	fn edit_form(&mut self, step: FormStep, intent: Intent) {
		match intent {
			Intent::Input(key)
				if key.code == KeyCode::Backspace && self.form.input(step).is_empty() =>
			{
				if let Some(prev) = step.prev() {
					self.set_mode(self.mode.with_step(prev));
				}
			}
			Intent::Input(key) => {
				self.form.input_mut(step).input(key);
			}
			Intent::Confirm => match step.next() {
				Some(next) => self.set_mode(self.mode.with_step(next)),
				None => {
					if matches!(self.mode, Mode::Renaming(_)) {
						self.commit_rename();
					} else {
						self.commit_create();
					}
					self.set_mode(Mode::Navigating);
				}
			},
			Intent::Cancel => {
				self.form = SnippetForm::default();
				self.set_mode(Mode::Navigating);
			}
			_ => {}
		}
	}

	fn commit_create(&mut self) {
		let snippet = self.form.snippet();
		if let Err(err) = self.ensure_unused(&snippet) {
			self.fail(err);
			return;
		}
		if let Err(err) = self.store.create(&snippet, "") {
			self.fail(err);
			return;
		}
		info!("created {snippet}");
		self.show_in_folder(snippet);
	}

	fn commit_rename(&mut self) {
		let Some(current) = self.selected_snippet().cloned() else {
			return;
		};
		let renamed = self.form.snippet();
		if renamed.same_identity(&current) {
			return;
		}
		if let Err(err) = self.ensure_unused(&renamed) {
			self.fail(err);
			return;
		}
		if let Err(err) = self.store.rename(&current, &renamed) {
			self.fail(err);
			return;
		}
		info!("renamed {current} to {renamed}");

		if renamed.folder == current.folder {
			self.active_list_mut().replace_selected(renamed);
			self.refresh_content();
		} else {
			self.active_list_mut().remove_selected();
			self.show_in_folder(renamed);
		}
	}

	/// Reject identities already present in the session, including ones whose
	/// file sits at a different path.
	fn ensure_unused(&self, snippet: &Snippet) -> Result<(), StoreError> {
		if self.snippets.contains(snippet) {
			return Err(StoreError::AlreadyExists {
				path: self.store.path_of(snippet),
			});
		}
		Ok(())
	}

	/// Append `snippet` to its folder and select both.
	fn show_in_folder(&mut self, snippet: Snippet) {
		let folder = snippet.folder.clone();
		self.folders.insert(&folder);
		self.folders.select_name(&folder);
		self.snippets.entry(&folder).push(snippet);
		self.focus = Focus::Snippets;
		self.refresh_content();
	}

	fn fail(&mut self, err: StoreError) {
		warn!("{err}");
		self.flash = Some(Flash::Error(err.to_string()));
	}
}
