use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File, Map};

use crate::app_dirs;
use crate::cli::CliArgs;

/// Build a [`Config`] from `defaults` (unless disabled), the files named on the
/// command line and the `SNP_*` environment.
///
/// File formats follow the extension. `env` replaces the process environment
/// when given.
pub(super) fn build_config(
	cli: &CliArgs,
	defaults: Vec<PathBuf>,
	env: Option<Map<String, String>>,
) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in defaults {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	// Values stay strings, so colors such as `SNP_RED=9` are not parsed as
	// numbers.
	builder = builder.add_source(
		Environment::with_prefix("snp")
			.prefix_separator("_")
			.separator("__")
			.source(env),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Default configuration file locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	app_dirs::get_config_dir()
		.map(|dir| vec![dir.join("config.yaml"), dir.join("config.toml")])
		.unwrap_or_default()
}
