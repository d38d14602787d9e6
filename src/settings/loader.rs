use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::Map;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{build_config, default_config_files};
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	load_with(cli, default_config_files(), None)
}

/// Like [`load`], consulting `defaults` instead of the usual file locations
/// and `env` instead of the process environment when it is given.
pub(super) fn load_with(
	cli: &CliArgs,
	defaults: Vec<PathBuf>,
	env: Option<Map<String, String>>,
) -> Result<ResolvedConfig> {
	let builder = build_config(cli, defaults, env)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	let files = cli.config.clone();
	raw.resolve(files)
}
