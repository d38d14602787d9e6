//! Translation from key presses to session intents.
//!
//! Bindings depend on the mode: the same key can move the selection while
//! navigating and type a character while filtering.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;

/// Number of lines a page key scrolls the content panel.
pub const PAGE_LINES: usize = 10;

/// An abstract request made by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
	FocusNext,
	FocusPrev,
	MoveUp,
	MoveDown,
	PageUp,
	PageDown,
	StartFilter,
	StartCopy,
	StartDelete,
	StartCreate,
	StartRename,
	ToggleHighlight,
	Confirm,
	Cancel,
	Quit,
	/// Text editing for the active input field.
	Input(KeyEvent),
}

/// Map `key` to an intent for `mode`, or `None` if the key is unbound.
#[must_use]
pub fn intent_for(mode: Mode, key: KeyEvent) -> Option<Intent> {
	let ctrl_c =
		key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'));

	match mode {
		Mode::Navigating => {
			if ctrl_c {
				return Some(Intent::Quit);
			}
			navigating(key)
		}
		Mode::Filtering => Some(match key.code {
			_ if ctrl_c => Intent::Cancel,
			KeyCode::Enter => Intent::Confirm,
			KeyCode::Esc => Intent::Cancel,
			KeyCode::Up => Intent::MoveUp,
			KeyCode::Down => Intent::MoveDown,
			_ => Intent::Input(key),
		}),
		Mode::ConfirmingCopy | Mode::ConfirmingDelete => match key.code {
			_ if ctrl_c => Some(Intent::Cancel),
			KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Intent::Confirm),
			KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Intent::Cancel),
			_ => None,
		},
		Mode::Creating(_) | Mode::Renaming(_) => Some(match key.code {
			_ if ctrl_c => Intent::Cancel,
			KeyCode::Enter | KeyCode::Tab => Intent::Confirm,
			KeyCode::Esc => Intent::Cancel,
			_ => Intent::Input(key),
		}),
	}
}

fn navigating(key: KeyEvent) -> Option<Intent> {
	let intent = match key.code {
		KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Intent::FocusNext,
		KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Intent::FocusPrev,
		KeyCode::Up | KeyCode::Char('k') => Intent::MoveUp,
		KeyCode::Down | KeyCode::Char('j') => Intent::MoveDown,
		KeyCode::PageUp => Intent::PageUp,
		KeyCode::PageDown => Intent::PageDown,
		KeyCode::Char('/') => Intent::StartFilter,
		KeyCode::Char('c') => Intent::StartCopy,
		KeyCode::Char('x') => Intent::StartDelete,
		KeyCode::Char('n') => Intent::StartCreate,
		KeyCode::Char('r') => Intent::StartRename,
		KeyCode::Char('s') => Intent::ToggleHighlight,
		KeyCode::Char('q') => Intent::Quit,
		KeyCode::Esc => Intent::Cancel,
		_ => return None,
	};
	Some(intent)
}
