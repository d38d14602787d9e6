//! Resolve configuration and data directories for `snp`.
//!
//! Environment overrides win; otherwise the platform locations reported by
//! the `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "snp";

const CONFIG_DIR_ENV: &str = "SNP_CONFIG_DIR";
const DATA_DIR_ENV: &str = "SNP_DATA_DIR";

/// Name of the snippet directory inside the data directory.
const SNIPPETS_DIR: &str = "snp";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for snp"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.yaml` or `config.toml`.
pub(crate) fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding the log file and, by default, the snippet store.
pub(crate) fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Snippet root used when configuration does not name one.
pub(crate) fn default_root() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(SNIPPETS_DIR))
}
