use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::panels::ContentView;
use crate::style::Theme;

/// Width of the line-number column for `line_count` lines.
#[must_use]
pub fn gutter_width(line_count: usize) -> usize {
	line_count.max(1).to_string().len().max(2)
}

/// Prefix each line with its right-aligned number and a separator.
#[must_use]
pub fn with_gutter(
	lines: Vec<Line<'static>>,
	first: usize,
	width: usize,
	theme: &Theme,
) -> Vec<Line<'static>> {
	lines
		.into_iter()
		.enumerate()
		.map(|(offset, line)| {
			let mut spans = vec![
				Span::styled(format!("{:>width$}", first + offset + 1), theme.line_number),
				Span::styled(" │ ", theme.separator),
			];
			spans.extend(line.spans);
			Line::from(spans).style(theme.content)
		})
		.collect()
}

/// Draw the visible window of `view` into `area`.
pub fn render_content(frame: &mut Frame, area: Rect, view: &ContentView, theme: &Theme) {
	let lines = view.lines();
	let metrics = ScrollMetrics::compute(lines.len(), usize::from(area.height));
	let area = render_scrollbar(frame, area, metrics, view.scroll().min(metrics.max_scroll), theme);

	let width = gutter_width(lines.len());
	let visible: Vec<Line<'static>> = lines
		.into_iter()
		.skip(view.scroll())
		.take(usize::from(area.height))
		.collect();
	let numbered = with_gutter(visible, view.scroll(), width, theme);
	frame.render_widget(Paragraph::new(numbered), area);
}
