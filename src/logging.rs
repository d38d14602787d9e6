//! File logging.
//!
//! The terminal belongs to the interactive session, so records go to
//! `snp.log` in the data directory instead of stderr.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::app_dirs;

const LOG_FILE: &str = "snp.log";
const LEVEL_ENV: &str = "SNP_LOG";

/// Level named by `value`, or `Info` when it is missing or unrecognised.
fn level_from(value: Option<&str>) -> LevelFilter {
	value
		.and_then(|value| LevelFilter::from_str(value.trim()).ok())
		.unwrap_or(LevelFilter::Info)
}

fn log_path(dir: &Path) -> PathBuf {
	dir.join(LOG_FILE)
}

/// Install the file logger. Failing to set it up is not fatal to the caller,
/// which should carry on without logs.
pub(crate) fn initialize() -> Result<()> {
	let level = level_from(env::var(LEVEL_ENV).ok().as_deref());
	let dir = app_dirs::get_data_dir()?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create {}", dir.display()))?;

	let path = log_path(&dir);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open {}", path.display()))?;

	let config = ConfigBuilder::new().set_time_format_rfc3339().build();
	WriteLogger::init(level, config, file).context("logger already installed")?;
	log::debug!("logging to {} at {level}", path.display());
	Ok(())
}
