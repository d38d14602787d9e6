use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};
use snp_core::Palette;

/// Parse a palette value: an ANSI index, a `#rrggbb` triplet or a color name.
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
	Color::from_str(value.trim()).ok()
}

/// Styles for every element of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Panel title bar while the panel has focus.
	pub title_focused: Style,
	/// Panel title bar while another panel has focus.
	pub title_blurred: Style,
	pub folder_selected: Style,
	pub folder_unselected: Style,
	/// Snippet name of the selected row.
	pub selected_title: Style,
	/// Folder and language line of the selected row.
	pub selected_subtitle: Style,
	pub unselected_title: Style,
	pub unselected_subtitle: Style,
	pub copied_bar: Style,
	pub copied_title: Style,
	pub copied_subtitle: Style,
	pub deleting_bar: Style,
	pub deleting_title: Style,
	pub deleting_subtitle: Style,
	/// Characters of a row that matched the filter.
	pub matched: Style,
	pub placeholder: Style,
	pub filter_prompt: Style,
	pub line_number: Style,
	pub separator: Style,
	pub content: Style,
	pub form_label: Style,
	pub form_label_active: Style,
	pub form_input: Style,
	pub hint_key: Style,
	pub hint: Style,
	pub error: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self::from_palette(&Palette::default())
	}
}

impl Theme {
	/// Build the theme from palette strings.
	///
	/// Values that do not parse fall back to the terminal default color.
	#[must_use]
	pub fn from_palette(palette: &Palette) -> Self {
		let color = |slot: &str, value: &str| {
			parse_color(value).unwrap_or_else(|| {
				warn!("palette slot {slot} has unrecognised color {value:?}");
				Color::Reset
			})
		};

		let foreground = color("foreground", &palette.foreground);
		let background = color("background", &palette.background);
		let red = color("red", &palette.red);
		let green = color("green", &palette.green);
		let yellow = color("yellow", &palette.yellow);
		let blue = color("blue", &palette.blue);
		let magenta = color("magenta", &palette.magenta);
		let cyan = color("cyan", &palette.cyan);
		let bright_red = color("bright_red", &palette.bright_red);
		let bright_green = color("bright_green", &palette.bright_green);
		let bright_yellow = color("bright_yellow", &palette.bright_yellow);
		let bright_blue = color("bright_blue", &palette.bright_blue);
		let bright_magenta = color("bright_magenta", &palette.bright_magenta);
		let bright_cyan = color("bright_cyan", &palette.bright_cyan);
		let gray = color("gray", &palette.gray);

		Self {
			title_focused: Style::new()
				.fg(foreground)
				.bg(blue)
				.add_modifier(Modifier::BOLD),
			title_blurred: Style::new().fg(gray),
			folder_selected: Style::new().fg(bright_blue).add_modifier(Modifier::BOLD),
			folder_unselected: Style::new().fg(gray),
			selected_title: Style::new().fg(bright_blue).add_modifier(Modifier::BOLD),
			selected_subtitle: Style::new().fg(blue),
			unselected_title: Style::new().fg(foreground),
			unselected_subtitle: Style::new().fg(gray),
			copied_bar: Style::new()
				.fg(background)
				.bg(green)
				.add_modifier(Modifier::BOLD),
			copied_title: Style::new().fg(bright_green).add_modifier(Modifier::BOLD),
			copied_subtitle: Style::new().fg(green),
			deleting_bar: Style::new()
				.fg(background)
				.bg(red)
				.add_modifier(Modifier::BOLD),
			deleting_title: Style::new().fg(bright_red).add_modifier(Modifier::BOLD),
			deleting_subtitle: Style::new().fg(red),
			matched: Style::new()
				.fg(bright_yellow)
				.add_modifier(Modifier::UNDERLINED),
			placeholder: Style::new().fg(gray).add_modifier(Modifier::ITALIC),
			filter_prompt: Style::new().fg(yellow).add_modifier(Modifier::BOLD),
			line_number: Style::new().fg(gray),
			separator: Style::new().fg(gray),
			content: Style::new().fg(foreground),
			form_label: Style::new().fg(magenta),
			form_label_active: Style::new().fg(bright_magenta).add_modifier(Modifier::BOLD),
			form_input: Style::new().fg(bright_cyan),
			hint_key: Style::new().fg(cyan),
			hint: Style::new().fg(gray),
			error: Style::new().fg(bright_red).add_modifier(Modifier::BOLD),
		}
	}
}
