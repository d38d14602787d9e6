use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListState, Paragraph};

use super::form::FormStep;
use super::state::{App, Flash, Mode};
use crate::components::{ListEntry, RowState, hint_line, render_content, render_title, truncate};
use crate::panels::Focus;

const FOLDER_WIDTH: u16 = 20;
const SNIPPET_WIDTH: u16 = 32;

impl App<'_> {
	/// Draw the whole session. Any pending [`Flash`] is shown once and
	/// discarded.
	pub fn draw(&mut self, frame: &mut Frame) {
		let flash = self.flash.take();

		let [main, status] =
			Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
		let [folders, snippets, content] = Layout::horizontal([
			Constraint::Length(FOLDER_WIDTH),
			Constraint::Length(SNIPPET_WIDTH),
			Constraint::Min(0),
		])
		.spacing(1)
		.areas(main);

		self.render_folders(frame, folders);
		self.render_snippets(frame, snippets, flash.as_ref());
		match self.mode.form_step() {
			Some(step) => self.render_form(frame, content, step),
			None => self.render_content_panel(frame, content),
		}
		self.render_status(frame, status, flash.as_ref());
	}

	fn title_style(&self, panel: Focus) -> Style {
		if self.focus == panel {
			self.theme.title_focused
		} else {
			self.theme.title_blurred
		}
	}

	fn render_folders(&self, frame: &mut Frame, area: Rect) {
		let [title, body] = panel_areas(area);
		render_title(frame, title, "Folders", self.title_style(Focus::Folders));

		let items: Vec<_> = self
			.folders
			.items()
			.map(|(name, selected)| {
				let state = if selected {
					RowState::Selected
				} else {
					RowState::Unselected
				};
				ListEntry::Folder(name).render_row(state, body.width, &self.theme)
			})
			.collect();
		let mut state = ListState::default().with_selected(Some(self.folders.selected_index()));
		frame.render_stateful_widget(List::new(items), body, &mut state);
	}

	fn render_snippets(&self, frame: &mut Frame, area: Rect, flash: Option<&Flash>) {
		let [title, body] = panel_areas(area);
		let list = self.active_list();
		let selected = self.selected_snippet();
		let copied = matches!(flash, Some(Flash::Copied(snippet)) if Some(snippet) == selected);

		match (self.mode, selected) {
			(Mode::Filtering, _) => {
				let [prompt, input] =
					Layout::horizontal([Constraint::Length(3), Constraint::Min(0)]).areas(title);
				frame.render_widget(
					Paragraph::new(" / ").style(self.theme.filter_prompt),
					prompt,
				);
				self.filter_input.render(frame, input);
			}
			(Mode::ConfirmingCopy, Some(snippet)) => {
				let text = format!("Copy {}? (y/N)", snippet.file_name());
				render_title(frame, title, &text, self.theme.copied_bar);
			}
			(Mode::ConfirmingDelete, Some(snippet)) => {
				let text = format!("Delete {}? (y/N)", snippet.file_name());
				render_title(frame, title, &text, self.theme.deleting_bar);
			}
			(_, Some(snippet)) if copied => {
				let text = format!("Copied {}!", snippet.file_name());
				render_title(frame, title, &text, self.theme.copied_bar);
			}
			_ => {
				let text = match list.and_then(|list| list.query()) {
					Some(query) => format!("Snippets /{query}"),
					None => "Snippets".to_string(),
				};
				render_title(frame, title, &text, self.title_style(Focus::Snippets));
			}
		}

		let Some(list) = list.filter(|list| list.visible_len() > 0) else {
			let placeholder =
				ListEntry::Placeholder.render_row(RowState::Selected, body.width, &self.theme);
			frame.render_widget(List::new([placeholder]), body);
			return;
		};

		let query = list.query();
		let items: Vec<_> = list
			.visible()
			.enumerate()
			.map(|(index, snippet)| {
				let state = if index != list.selected_index() {
					RowState::Unselected
				} else if copied {
					RowState::Copied
				} else if self.mode == Mode::ConfirmingDelete {
					RowState::Deleting
				} else {
					RowState::Selected
				};
				ListEntry::Snippet { snippet, query }.render_row(state, body.width, &self.theme)
			})
			.collect();
		let mut state = ListState::default().with_selected(Some(list.selected_index()));
		frame.render_stateful_widget(List::new(items), body, &mut state);
	}

	fn render_content_panel(&self, frame: &mut Frame, area: Rect) {
		let [title, body] = panel_areas(area);
		let label = self
			.content
			.snippet()
			.map_or_else(|| "Content".to_string(), ToString::to_string);
		render_title(frame, title, &label, self.title_style(Focus::Content));
		render_content(frame, body, &self.content, &self.theme);
	}

	fn render_form(&self, frame: &mut Frame, area: Rect, active: FormStep) {
		let [title, body] = panel_areas(area);
		let heading = match self.mode {
			Mode::Renaming(_) => "Rename snippet",
			_ => "New snippet",
		};
		render_title(frame, title, heading, self.theme.title_focused);

		let rows: [Rect; 3] = Layout::vertical([Constraint::Length(3); 3]).areas(body);
		for (step, row) in FormStep::ALL.into_iter().zip(rows) {
			let [label, input, _] = Layout::vertical([Constraint::Length(1); 3]).areas(row);
			let label_style = if step == active {
				self.theme.form_label_active
			} else {
				self.theme.form_label
			};
			frame.render_widget(Paragraph::new(step.label()).style(label_style), label);

			if step == active {
				self.form.input(step).render(frame, input);
			} else {
				let value = truncate(self.form.value(step), usize::from(input.width));
				frame.render_widget(Paragraph::new(value).style(self.theme.form_input), input);
			}
		}
	}

	fn render_status(&self, frame: &mut Frame, area: Rect, flash: Option<&Flash>) {
		if let Some(Flash::Error(message)) = flash {
			let line = Line::from(Span::styled(
				truncate(message, usize::from(area.width)),
				self.theme.error,
			));
			frame.render_widget(Paragraph::new(line), area);
			return;
		}

		let hints: &[(&str, &str)] = match self.mode {
			Mode::Navigating => &[
				("tab", "focus"),
				("j/k", "move"),
				("/", "filter"),
				("c", "copy"),
				("x", "delete"),
				("n", "new"),
				("r", "rename"),
				("s", "highlight"),
				("q", "quit"),
			],
			Mode::Filtering => &[("enter", "keep"), ("esc", "clear")],
			Mode::ConfirmingCopy | Mode::ConfirmingDelete => &[("y", "confirm"), ("n", "cancel")],
			Mode::Creating(FormStep::Language) | Mode::Renaming(FormStep::Language) => {
				&[("enter", "save"), ("esc", "cancel"), ("backspace", "back")]
			}
			Mode::Creating(_) | Mode::Renaming(_) => {
				&[("enter", "next"), ("esc", "cancel"), ("backspace", "back")]
			}
		};
		frame.render_widget(Paragraph::new(hint_line(hints, &self.theme)), area);
	}
}

/// Split a panel into its title row and body, with a blank row between.
fn panel_areas(area: Rect) -> [Rect; 2] {
	let [title, _, body] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Min(0),
	])
	.areas(area);
	[title, body]
}
