use std::path::PathBuf;

use snp_core::Settings;

mod errors;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) settings: Settings,
	/// Extra configuration files merged from the command line.
	pub(crate) files: Vec<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self) -> Result<(), ConfigError> {
		validation::validate(&self.settings)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
