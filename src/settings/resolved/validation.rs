use snp_core::Settings;
use snp_tui::style::parse_color;

use super::ConfigError;

pub(super) fn validate(settings: &Settings) -> Result<(), ConfigError> {
	if settings.root.is_file() {
		return Err(ConfigError::invalid(
			"root",
			settings.root.display().to_string(),
			"must be a directory",
		));
	}

	if settings.default_language.contains(['/', '.']) {
		return Err(ConfigError::invalid(
			"default_language",
			settings.default_language.as_str(),
			"must not contain `/` or `.`",
		));
	}

	for (key, value) in settings.palette.slots() {
		if parse_color(value).is_none() {
			return Err(ConfigError::invalid(
				key,
				value,
				"expected an ANSI index, a #rrggbb triplet or a color name",
			));
		}
	}

	Ok(())
}
