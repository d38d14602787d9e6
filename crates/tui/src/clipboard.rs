//! Clipboard access.
//!
//! OSC 52 is tried first since it reaches the local clipboard through tmux
//! and ssh. Native tools are the fallback.

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;

/// Something text can be copied into.
pub trait Clipboard {
	/// Place `text` on the clipboard.
	///
	/// # Errors
	///
	/// Returns a human readable reason when no mechanism accepted the text.
	fn copy(&mut self, text: &str) -> Result<(), String>;
}

/// The terminal's clipboard: OSC 52, then `wl-copy`, `xclip`, `xsel` or
/// `pbcopy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
	fn copy(&mut self, text: &str) -> Result<(), String> {
		if write_osc52(text).is_ok() {
			return Ok(());
		}
		copy_with_native_tool(text)
	}
}

/// Build the OSC 52 sequence for `text`, wrapped for tmux when requested.
#[must_use]
pub fn osc52_sequence(text: &str, tmux: bool) -> String {
	let encoded = STANDARD.encode(text);
	if tmux {
		format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\")
	} else {
		format!("\x1b]52;c;{encoded}\x07")
	}
}

fn write_osc52(text: &str) -> io::Result<()> {
	let sequence = osc52_sequence(text, env::var_os("TMUX").is_some());
	let mut stdout = io::stdout().lock();
	stdout.write_all(sequence.as_bytes())?;
	stdout.flush()
}

fn copy_with_native_tool(text: &str) -> Result<(), String> {
	let mut tools: Vec<(&str, &[&str])> = Vec::new();
	if env::var_os("WAYLAND_DISPLAY").is_some() {
		tools.push(("wl-copy", &[]));
	}
	tools.push(("xclip", &["-selection", "clipboard"]));
	tools.push(("xsel", &["--clipboard", "--input"]));
	tools.push(("pbcopy", &[]));

	for (program, args) in tools {
		match pipe_into(program, args, text) {
			Ok(()) => return Ok(()),
			Err(err) => debug!("{program} unavailable: {err}"),
		}
	}
	Err("no clipboard tool available".to_string())
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> io::Result<()> {
	let mut child = Command::new(program)
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()?;
	if let Some(mut stdin) = child.stdin.take() {
		stdin.write_all(text.as_bytes())?;
	}
	let status = child.wait()?;
	if status.success() {
		Ok(())
	} else {
		Err(io::Error::other(format!("exited with {status}")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn osc52_encodes_text_as_base64() {
		assert_eq!(osc52_sequence("hi", false), "\x1b]52;c;aGk=\x07");
	}

	#[test]
	fn osc52_passthrough_for_tmux() {
		let sequence = osc52_sequence("hi", true);
		assert!(sequence.starts_with("\x1bPtmux;\x1b\x1b]52;c;aGk="));
		assert!(sequence.ends_with("\x07\x1b\\"));
	}
}
