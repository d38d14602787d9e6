use std::env;
use std::path::PathBuf;

use anyhow::{Context, Error, Result};
use serde::Deserialize;
use snp_core::{DEFAULT_LANGUAGE, DEFAULT_THEME, Palette, Settings};

use super::resolved::ResolvedConfig;
use crate::app_dirs;
use crate::cli::CliArgs;

/// Mirror of the configuration file before CLI overrides and validation.
///
/// Colors sit at the top level, matching the `SNP_RED` and `SNP_GRAY` style
/// environment variables. Bright slots also accept the short `brred` form
/// (`SNP_BRRED`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) root: Option<PathBuf>,
	pub(super) default_language: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) foreground: Option<String>,
	pub(super) background: Option<String>,
	pub(super) red: Option<String>,
	pub(super) green: Option<String>,
	pub(super) yellow: Option<String>,
	pub(super) blue: Option<String>,
	pub(super) magenta: Option<String>,
	pub(super) cyan: Option<String>,
	#[serde(alias = "brred")]
	pub(super) bright_red: Option<String>,
	#[serde(alias = "brgreen")]
	pub(super) bright_green: Option<String>,
	#[serde(alias = "bryellow")]
	pub(super) bright_yellow: Option<String>,
	#[serde(alias = "brblue")]
	pub(super) bright_blue: Option<String>,
	#[serde(alias = "brmagenta")]
	pub(super) bright_magenta: Option<String>,
	#[serde(alias = "brcyan")]
	pub(super) bright_cyan: Option<String>,
	pub(super) gray: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(root) = cli.root.clone() {
			self.root = Some(root);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(language) = cli.default_language.clone() {
			self.default_language = Some(language);
		}
	}

	/// Fill defaults and validate. `files` are the extra configuration files
	/// that were merged, kept for the summary.
	pub(super) fn resolve(self, files: Vec<PathBuf>) -> Result<ResolvedConfig> {
		let root = match self.root.clone() {
			Some(root) => root,
			None => app_dirs::default_root()?,
		};
		let root = if root.is_relative() {
			env::current_dir()
				.context("failed to resolve current directory for root")?
				.join(root)
		} else {
			root
		};

		let palette = self.palette();
		let settings = Settings {
			root,
			default_language: trimmed_or(self.default_language, DEFAULT_LANGUAGE),
			theme: trimmed_or(self.theme, DEFAULT_THEME),
			palette,
		};

		let config = ResolvedConfig { settings, files };
		config.validate().map_err(Error::new)?;
		Ok(config)
	}

	fn palette(&self) -> Palette {
		let defaults = Palette::default();
		let pick = |value: &Option<String>, fallback: String| trimmed_or(value.clone(), &fallback);
		Palette {
			foreground: pick(&self.foreground, defaults.foreground),
			background: pick(&self.background, defaults.background),
			red: pick(&self.red, defaults.red),
			green: pick(&self.green, defaults.green),
			yellow: pick(&self.yellow, defaults.yellow),
			blue: pick(&self.blue, defaults.blue),
			magenta: pick(&self.magenta, defaults.magenta),
			cyan: pick(&self.cyan, defaults.cyan),
			bright_red: pick(&self.bright_red, defaults.bright_red),
			bright_green: pick(&self.bright_green, defaults.bright_green),
			bright_yellow: pick(&self.bright_yellow, defaults.bright_yellow),
			bright_blue: pick(&self.bright_blue, defaults.bright_blue),
			bright_magenta: pick(&self.bright_magenta, defaults.bright_magenta),
			bright_cyan: pick(&self.bright_cyan, defaults.bright_cyan),
			gray: pick(&self.gray, defaults.gray),
		}
	}
}

/// `value` trimmed, or `fallback` when it is missing or blank.
fn trimmed_or(value: Option<String>, fallback: &str) -> String {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
		.unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests;
