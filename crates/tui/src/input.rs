//! Single-line text input built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// A one-line editable field.
///
/// Newline insertion is filtered out, so the field never grows past one
/// line regardless of which keys the caller forwards.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> QueryInput<'a> {
	/// Create an input holding `initial` with the cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	/// Current text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text().is_empty()
	}

	/// Replace the contents, keeping styling and placeholder.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let placeholder = self.textarea.placeholder_text().to_string();
		let placeholder_style = self.textarea.placeholder_style();
		let style = self.textarea.style();
		*self = Self::new(text);
		self.textarea.set_style(style);
		self.textarea.set_placeholder_text(placeholder);
		if let Some(placeholder_style) = placeholder_style {
			self.textarea.set_placeholder_style(placeholder_style);
		}
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	/// Text shown while the field is empty.
	pub fn set_placeholder(&mut self, placeholder: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(placeholder);
		self.textarea.set_placeholder_style(style);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Forward a key to the field. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(key.code, KeyCode::Enter) {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
