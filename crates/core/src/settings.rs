use std::path::PathBuf;

use crate::snippet::DEFAULT_LANGUAGE;

/// Syntax theme used when configuration does not name one.
pub const DEFAULT_THEME: &str = "Dracula";

/// Named color slots, each holding a terminal color string.
///
/// Values may be ANSI indices (`"12"`), hex triplets (`"#ff00aa"`) or color
/// names understood by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	pub foreground: String,
	pub background: String,
	pub red: String,
	pub green: String,
	pub yellow: String,
	pub blue: String,
	pub magenta: String,
	pub cyan: String,
	pub bright_red: String,
	pub bright_green: String,
	pub bright_yellow: String,
	pub bright_blue: String,
	pub bright_magenta: String,
	pub bright_cyan: String,
	pub gray: String,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			foreground: "15".into(),
			background: "0".into(),
			red: "1".into(),
			green: "2".into(),
			yellow: "3".into(),
			blue: "4".into(),
			magenta: "5".into(),
			cyan: "6".into(),
			bright_red: "9".into(),
			bright_green: "10".into(),
			bright_yellow: "11".into(),
			bright_blue: "12".into(),
			bright_magenta: "13".into(),
			bright_cyan: "14".into(),
			gray: "7".into(),
		}
	}
}

impl Palette {
	/// Slot names paired with their values, in declaration order.
	#[must_use]
	pub fn slots(&self) -> [(&'static str, &str); 15] {
		[
			("foreground", self.foreground.as_str()),
			("background", self.background.as_str()),
			("red", self.red.as_str()),
			("green", self.green.as_str()),
			("yellow", self.yellow.as_str()),
			("blue", self.blue.as_str()),
			("magenta", self.magenta.as_str()),
			("cyan", self.cyan.as_str()),
			("bright_red", self.bright_red.as_str()),
			("bright_green", self.bright_green.as_str()),
			("bright_yellow", self.bright_yellow.as_str()),
			("bright_blue", self.bright_blue.as_str()),
			("bright_magenta", self.bright_magenta.as_str()),
			("bright_cyan", self.bright_cyan.as_str()),
			("gray", self.gray.as_str()),
		]
	}
}

/// Session-wide settings, resolved once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Directory holding the snippets.
	pub root: PathBuf,
	/// Language given to new snippets when none is entered.
	pub default_language: String,
	/// Name of the syntax highlighting theme.
	pub theme: String,
	/// Colors used by the interface.
	pub palette: Palette,
}

impl Settings {
	/// Settings rooted at `root` with every other value defaulted.
	#[must_use]
	pub fn with_root(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			default_language: DEFAULT_LANGUAGE.to_string(),
			theme: DEFAULT_THEME.to_string(),
			palette: Palette::default(),
		}
	}
}
