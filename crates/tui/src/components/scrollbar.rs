//! Scrollbar for the content viewport.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Scrolling metrics for a viewport over `content_length` lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	pub content_length: usize,
	pub viewport_len: usize,
	pub max_scroll: usize,
	/// Whether content overflows the viewport.
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Returns empty metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length);
		Self {
			content_length,
			viewport_len,
			max_scroll: content_length - viewport_len,
			needs_scrollbar: content_length > viewport_len,
		}
	}
}

/// Draw a scrollbar on the right edge of `area` and return the area left
/// for content.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	metrics: ScrollMetrics,
	scroll: usize,
	theme: &Theme,
) -> Rect {
	if !metrics.needs_scrollbar || area.width == 0 {
		return area;
	}

	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.separator);
	let mut state = ScrollbarState::new(metrics.max_scroll + 1).position(scroll);

	let bar = Rect {
		x: area.x + area.width - 1,
		width: 1,
		..area
	};
	frame.render_stateful_widget(scrollbar, bar, &mut state);

	Rect {
		width: area.width - 1,
		..area
	}
}
