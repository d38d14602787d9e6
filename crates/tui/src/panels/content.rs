use ratatui::text::Line;
use snp_core::Snippet;

/// Read-only view of the selected snippet's text.
///
/// Content is handed in by the session each time the selection changes; the
/// view never reads files itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentView {
	snippet: Option<Snippet>,
	text: String,
	highlighted: Option<Vec<Line<'static>>>,
	highlight: bool,
	scroll: usize,
}

impl Default for ContentView {
	fn default() -> Self {
		Self::new(true)
	}
}

impl ContentView {
	#[must_use]
	pub fn new(highlight: bool) -> Self {
		Self {
			snippet: None,
			text: String::new(),
			highlighted: None,
			highlight,
			scroll: 0,
		}
	}

	/// Show `text` for `snippet`, resetting the scroll offset.
	pub fn load(&mut self, snippet: Snippet, text: String) {
		self.snippet = Some(snippet);
		self.text = text;
		self.highlighted = None;
		self.scroll = 0;
	}

	pub fn clear(&mut self) {
		self.snippet = None;
		self.text.clear();
		self.highlighted = None;
		self.scroll = 0;
	}

	#[must_use]
	pub fn snippet(&self) -> Option<&Snippet> {
		self.snippet.as_ref()
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	#[must_use]
	pub fn line_count(&self) -> usize {
		self.text.lines().count()
	}

	#[must_use]
	pub fn scroll(&self) -> usize {
		self.scroll
	}

	pub fn scroll_up(&mut self, lines: usize) {
		self.scroll = self.scroll.saturating_sub(lines);
	}

	/// Scroll down, never past the last line.
	pub fn scroll_down(&mut self, lines: usize) {
		let max = self.line_count().saturating_sub(1);
		self.scroll = self.scroll.saturating_add(lines).min(max);
	}

	#[must_use]
	pub fn highlight_enabled(&self) -> bool {
		self.highlight
	}

	/// Flip between highlighted and plain rendering. Returns the new mode.
	pub fn toggle_highlight(&mut self) -> bool {
		self.highlight = !self.highlight;
		self.highlight
	}

	/// Whether highlighted lines are wanted but not computed yet.
	#[must_use]
	pub fn wants_highlighting(&self) -> bool {
		self.highlight && self.highlighted.is_none() && !self.text.is_empty()
	}

	pub fn set_highlighted(&mut self, lines: Vec<Line<'static>>) {
		self.highlighted = Some(lines);
	}

	/// Lines to draw, highlighted when enabled and available.
	#[must_use]
	pub fn lines(&self) -> Vec<Line<'static>> {
		match (&self.highlighted, self.highlight) {
			(Some(lines), true) => lines.clone(),
			_ => self
				.text
				.lines()
				.map(|line| Line::raw(line.to_string()))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn loaded(text: &str) -> ContentView {
		let mut view = ContentView::new(false);
		view.load(Snippet::new("misc", "a", "go"), text.to_string());
		view
	}

	#[test]
	fn scrolling_is_clamped_to_content() {
		let mut view = loaded("one\ntwo\nthree");
		view.scroll_down(10);
		assert_eq!(view.scroll(), 2);
		view.scroll_up(1);
		assert_eq!(view.scroll(), 1);
		view.scroll_up(10);
		assert_eq!(view.scroll(), 0);
	}

	#[test]
	fn loading_resets_scroll() {
		let mut view = loaded("one\ntwo\nthree");
		view.scroll_down(2);
		view.load(Snippet::new("misc", "b", "py"), "x".to_string());
		assert_eq!(view.scroll(), 0);
		assert_eq!(view.line_count(), 1);
	}

	#[test]
	fn highlighted_lines_are_used_only_when_enabled() {
		let mut view = loaded("plain");
		assert!(!view.wants_highlighting());
		assert!(view.toggle_highlight());
		assert!(view.wants_highlighting());

		view.set_highlighted(vec![Line::raw("styled")]);
		assert_eq!(view.lines(), vec![Line::raw("styled")]);

		view.toggle_highlight();
		assert_eq!(view.lines(), vec![Line::raw("plain")]);
	}

	#[test]
	fn empty_view_has_no_lines() {
		let mut view = loaded("text");
		view.clear();
		assert!(view.snippet().is_none());
		assert!(view.lines().is_empty());
		assert!(!view.wants_highlighting());
	}
}
