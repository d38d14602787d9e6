use std::mem;

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::ListItem;
use snp_core::{DEFAULT_NAME, Snippet, matcher};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::style::Theme;

const ELLIPSIS: char = '…';

/// How a row is drawn relative to the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
	Unselected,
	Selected,
	/// The row was just copied to the clipboard.
	Copied,
	/// The row is awaiting delete confirmation.
	Deleting,
}

/// An entry in either list panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEntry<'a> {
	Folder(&'a str),
	Snippet {
		snippet: &'a Snippet,
		/// Active filter, used to underline matched characters.
		query: Option<&'a str>,
	},
	/// Stand-in shown when a folder has no visible snippets.
	Placeholder,
}

impl ListEntry<'_> {
	/// Render the entry into a list item no wider than `width` cells.
	#[must_use]
	pub fn render_row(&self, state: RowState, width: u16, theme: &Theme) -> ListItem<'static> {
		let width = usize::from(width);
		match *self {
			Self::Folder(name) => {
				let (marker, style) = if state == RowState::Unselected {
					("  ", theme.folder_unselected)
				} else {
					("• ", theme.folder_selected)
				};
				ListItem::new(Line::from(vec![
					Span::styled(marker, style),
					Span::styled(truncate(name, width.saturating_sub(2)), style),
				]))
			}
			Self::Snippet { snippet, query } => {
				let (title_style, subtitle_style) = snippet_styles(state, theme);
				let marker = if state == RowState::Unselected { "  " } else { "│ " };
				let inner = width.saturating_sub(2);

				let mut title = vec![Span::styled(marker, subtitle_style)];
				title.extend(highlighted_spans(
					&truncate(&snippet.name, inner),
					name_matches(snippet, query),
					title_style,
					title_style.patch(theme.matched),
				));
				let subtitle = format!("{} • {}", snippet.folder, snippet.language);

				ListItem::new(Text::from(vec![
					Line::from(title),
					Line::from(vec![
						Span::styled(marker, subtitle_style),
						Span::styled(truncate(&subtitle, inner), subtitle_style),
					]),
					Line::default(),
				]))
			}
			Self::Placeholder => ListItem::new(Text::from(vec![
				Line::styled(format!("  {DEFAULT_NAME}"), theme.placeholder),
				Line::styled(truncate("  press n to create", width), theme.placeholder),
			])),
		}
	}
}

fn snippet_styles(state: RowState, theme: &Theme) -> (Style, Style) {
	match state {
		RowState::Unselected => (theme.unselected_title, theme.unselected_subtitle),
		RowState::Selected => (theme.selected_title, theme.selected_subtitle),
		RowState::Copied => (theme.copied_title, theme.copied_subtitle),
		RowState::Deleting => (theme.deleting_title, theme.deleting_subtitle),
	}
}

/// Character positions within the snippet name matched by `query`.
///
/// Matching runs against the full identity, so positions are shifted past
/// the `folder/` prefix and anything beyond the name is dropped.
fn name_matches(snippet: &Snippet, query: Option<&str>) -> Vec<usize> {
	let identity = snippet.identity();
	let Some(positions) =
		query.and_then(|query| matcher::highlight_positions(query, &identity))
	else {
		return Vec::new();
	};
	let offset = snippet.folder.chars().count() + 1;
	let name_len = snippet.name.chars().count();
	positions
		.into_iter()
		.filter_map(|position| position.checked_sub(offset))
		.filter(|position| *position < name_len)
		.collect()
}

/// Split `text` into spans, styling the characters at `positions` with
/// `matched` and everything else with `base`.
fn highlighted_spans(
	text: &str,
	mut positions: Vec<usize>,
	base: Style,
	matched: Style,
) -> Vec<Span<'static>> {
	positions.sort_unstable();
	let mut next = positions.into_iter().peekable();
	let mut spans = Vec::new();
	let mut buffer = String::new();
	let mut highlighted = false;

	for (index, ch) in text.chars().enumerate() {
		let hit = next.next_if_eq(&index).is_some();
		if hit != highlighted && !buffer.is_empty() {
			let style = if highlighted { matched } else { base };
			spans.push(Span::styled(mem::take(&mut buffer), style));
		}
		highlighted = hit;
		buffer.push(ch);
	}
	if !buffer.is_empty() {
		spans.push(Span::styled(buffer, if highlighted { matched } else { base }));
	}
	spans
}

/// Cut `text` to at most `width` cells, ending with an ellipsis when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}

	let budget = width - 1;
	let mut used = 0;
	let mut out = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > budget {
			break;
		}
		used += ch_width;
		out.push(ch);
	}
	out.push(ELLIPSIS);
	out
}
