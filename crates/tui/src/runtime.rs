//! Terminal setup and the event loop.

use anyhow::{Context, Result};
use log::info;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use snp_core::Settings;

use crate::App;

/// Build a session for `settings` and run it until the user quits.
///
/// # Errors
///
/// Fails only when the terminal cannot be drawn to or read from.
pub fn run(settings: &Settings) -> Result<()> {
	let mut app = App::new(settings);
	app.run()
}

impl App<'_> {
	/// Take over the terminal and process events until quit.
	///
	/// The terminal is restored before returning, whether or not the loop
	/// failed.
	///
	/// # Errors
	///
	/// Returns terminal I/O failures.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		let result = self.event_loop(&mut terminal);
		ratatui::restore();
		info!("session ended");
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
		terminal.clear().context("failed to clear the terminal")?;
		loop {
			terminal
				.draw(|frame| self.draw(frame))
				.context("failed to draw the session")?;

			match event::read().context("failed to read a terminal event")? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if self.handle_key(key).is_break() {
						return Ok(());
					}
				}
				// Anything else, including resizes, just redraws.
				_ => {}
			}
		}
	}
}
