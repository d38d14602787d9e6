//! Syntax highlighting through bat.
//!
//! bat renders into an ANSI string. The command line prints that string
//! as-is; the interface parses it back into ratatui spans.

use std::cell::OnceCell;
use std::io::Cursor;

use bat::assets::HighlightingAssets;
use bat::config::{Config, VisibleLines};
use bat::controller::Controller;
use bat::input::Input;
use bat::line_range::LineRanges;
use bat::style::StyleComponents;
use log::{debug, warn};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Theme used when the configured one is not bundled with bat.
pub const FALLBACK_THEME: &str = "Monokai Extended";

/// Highlights snippet text with a fixed theme.
///
/// bat's syntax and theme sets are deserialized on first use only, so
/// sessions that never highlight never pay for them.
pub struct Highlighter {
	theme: String,
	assets: OnceCell<HighlightingAssets>,
}

impl Highlighter {
	#[must_use]
	pub fn new(theme: impl Into<String>) -> Self {
		Self {
			theme: theme.into(),
			assets: OnceCell::new(),
		}
	}

	fn assets(&self) -> &HighlightingAssets {
		self.assets.get_or_init(HighlightingAssets::from_binary)
	}

	/// The configured theme if bat knows it, otherwise [`FALLBACK_THEME`].
	#[must_use]
	pub fn theme(&self) -> &str {
		if self.assets().themes().any(|name| name == self.theme) {
			&self.theme
		} else {
			FALLBACK_THEME
		}
	}

	/// Render `content` as ANSI-colored text for a terminal.
	///
	/// The language picks the syntax through a synthetic file name; unknown
	/// languages come back as plain text. Returns `None` if bat fails.
	#[must_use]
	pub fn highlight_ansi(&self, content: &str, language: &str) -> Option<String> {
		let theme = self.theme();
		if theme != self.theme {
			warn!("unknown syntax theme {:?}, using {theme}", self.theme);
		}

		let config = Config {
			colored_output: true,
			true_color: true,
			style_components: StyleComponents::default(),
			theme: theme.to_string(),
			visible_lines: VisibleLines::Ranges(LineRanges::all()),
			term_width: 120,
			tab_width: 4,
			..Default::default()
		};

		let controller = Controller::new(&config, self.assets());
		let input = Input::from_reader(Box::new(Cursor::new(content.to_string())))
			.with_name(Some(format!("snippet.{language}")));

		let mut buffer = String::new();
		match controller.run(vec![input], Some(&mut buffer)) {
			Ok(true) => Some(buffer),
			Ok(false) => {
				debug!("bat reported no output for .{language} content");
				None
			}
			Err(err) => {
				warn!("highlighting .{language} content failed: {err}");
				None
			}
		}
	}

	/// Highlight `content` into styled lines for the content panel.
	#[must_use]
	pub fn highlight_lines(&self, content: &str, language: &str) -> Option<Vec<Line<'static>>> {
		self.highlight_ansi(content, language)
			.map(|ansi| ansi.lines().map(parse_ansi_line).collect())
	}
}

/// Convert one line of SGR-escaped text into a styled [`Line`].
///
/// Escape sequences other than SGR are dropped.
#[must_use]
pub fn parse_ansi_line(line: &str) -> Line<'static> {
	let mut spans = Vec::new();
	let mut text = String::new();
	let mut style = Style::default();
	let mut chars = line.chars().peekable();

	while let Some(ch) = chars.next() {
		if ch != '\x1b' {
			text.push(ch);
			continue;
		}
		if !text.is_empty() {
			spans.push(Span::styled(std::mem::take(&mut text), style));
		}
		if chars.next_if_eq(&'[').is_none() {
			continue;
		}
		let mut params = String::new();
		while let Some(c) = chars.next_if(|c| c.is_ascii_digit() || *c == ';') {
			params.push(c);
		}
		if chars.next() == Some('m') {
			style = apply_sgr(&params, style);
		}
	}

	if !text.is_empty() {
		spans.push(Span::styled(text, style));
	}
	Line::from(spans)
}

fn apply_sgr(params: &str, mut style: Style) -> Style {
	let mut codes = params.split(';').map(|code| code.parse::<u8>().unwrap_or(0));

	while let Some(code) = codes.next() {
		style = match code {
			0 => Style::default(),
			1 => style.add_modifier(Modifier::BOLD),
			2 => style.add_modifier(Modifier::DIM),
			3 => style.add_modifier(Modifier::ITALIC),
			4 => style.add_modifier(Modifier::UNDERLINED),
			7 => style.add_modifier(Modifier::REVERSED),
			22 => style.remove_modifier(Modifier::BOLD | Modifier::DIM),
			23 => style.remove_modifier(Modifier::ITALIC),
			24 => style.remove_modifier(Modifier::UNDERLINED),
			27 => style.remove_modifier(Modifier::REVERSED),
			30..=37 => style.fg(base_color(code - 30)),
			39 => style.fg(Color::Reset),
			40..=47 => style.bg(base_color(code - 40)),
			49 => style.bg(Color::Reset),
			90..=97 => style.fg(bright_color(code - 90)),
			100..=107 => style.bg(bright_color(code - 100)),
			38 => match extended_color(&mut codes) {
				Some(color) => style.fg(color),
				None => style,
			},
			48 => match extended_color(&mut codes) {
				Some(color) => style.bg(color),
				None => style,
			},
			_ => style,
		};
	}
	style
}

/// Read the `5;n` or `2;r;g;b` tail of an extended color code.
fn extended_color(codes: &mut impl Iterator<Item = u8>) -> Option<Color> {
	match codes.next()? {
		5 => codes.next().map(Color::Indexed),
		2 => {
			let (r, g, b) = (codes.next()?, codes.next()?, codes.next()?);
			Some(Color::Rgb(r, g, b))
		}
		_ => None,
	}
}

fn base_color(offset: u8) -> Color {
	match offset {
		0 => Color::Black,
		1 => Color::Red,
		2 => Color::Green,
		3 => Color::Yellow,
		4 => Color::Blue,
		5 => Color::Magenta,
		6 => Color::Cyan,
		_ => Color::Gray,
	}
}

fn bright_color(offset: u8) -> Color {
	match offset {
		0 => Color::DarkGray,
		1 => Color::LightRed,
		2 => Color::LightGreen,
		3 => Color::LightYellow,
		4 => Color::LightBlue,
		5 => Color::LightMagenta,
		6 => Color::LightCyan,
		_ => Color::White,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_text_is_a_single_span() {
		let line = parse_ansi_line("fn main() {}");
		assert_eq!(line, Line::from(vec![Span::raw("fn main() {}")]));
	}

	#[test]
	fn sgr_sequences_become_styles() {
		let line = parse_ansi_line("\x1b[1;31mfn\x1b[0m main\x1b[38;2;1;2;3m()");
		assert_eq!(
			line.spans,
			vec![
				Span::styled("fn", Style::new().fg(Color::Red).add_modifier(Modifier::BOLD)),
				Span::raw(" main"),
				Span::styled("()", Style::new().fg(Color::Rgb(1, 2, 3))),
			]
		);
	}

	#[test]
	fn indexed_and_bright_colors_are_understood() {
		let style = apply_sgr("38;5;208;104", Style::default());
		assert_eq!(style.fg, Some(Color::Indexed(208)));
		assert_eq!(style.bg, Some(Color::LightBlue));
	}

	#[test]
	fn unknown_theme_falls_back() {
		let highlighter = Highlighter::new("No Such Theme");
		assert_eq!(highlighter.theme(), FALLBACK_THEME);
		assert_eq!(Highlighter::new("Dracula").theme(), "Dracula");
	}

	#[test]
	fn highlighted_lines_keep_the_text() {
		let highlighter = Highlighter::new("Dracula");
		let lines = highlighter
			.highlight_lines("package main\n\nfunc main() {}\n", "go")
			.expect("highlighted");
		let text: Vec<String> = lines.iter().map(ToString::to_string).collect();
		assert_eq!(text, vec!["package main", "", "func main() {}"]);
	}
}
