use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::rows::truncate;
use crate::style::Theme;

/// Draw a one-line panel title filling `area` with `style`.
pub fn render_title(frame: &mut Frame, area: Rect, text: &str, style: Style) {
	let text = truncate(&format!(" {text} "), usize::from(area.width));
	frame.render_widget(Paragraph::new(Line::from(text)).style(style), area);
}

/// Key hints such as `[("/", "filter"), ("q", "quit")]` as one line.
#[must_use]
pub fn hint_line(hints: &[(&str, &str)], theme: &Theme) -> Line<'static> {
	let mut spans = Vec::with_capacity(hints.len() * 3);
	for (index, (key, action)) in hints.iter().enumerate() {
		if index > 0 {
			spans.push(Span::styled(" • ", theme.hint));
		}
		spans.push(Span::styled((*key).to_string(), theme.hint_key));
		spans.push(Span::styled(format!(" {action}"), theme.hint));
	}
	Line::from(spans)
}
