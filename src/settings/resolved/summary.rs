use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let settings = &config.settings;
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Root: {}", settings.root.display());
	let _ = writeln!(out, "  Default language: {}", settings.default_language);
	let _ = writeln!(out, "  Theme: {}", settings.theme);
	if !config.files.is_empty() {
		let files: Vec<_> = config
			.files
			.iter()
			.map(|path| path.display().to_string())
			.collect();
		let _ = writeln!(out, "  Extra files: {}", files.join(", "));
	}
	let _ = writeln!(out, "  Colors:");
	for (name, value) in settings.palette.slots() {
		let _ = writeln!(out, "    {name}: {value}");
	}
	out
}
