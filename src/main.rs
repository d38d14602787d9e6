mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::parse_cli;
use workflow::{Workflow, read_piped_stdin};

fn main() -> Result<ExitCode> {
	let cli = parse_cli();

	if let Err(err) = logging::initialize() {
		eprintln!("snp: continuing without a log file: {err:#}");
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let piped = if cli.command.is_none() {
		read_piped_stdin()?
	} else {
		None
	};
	let workflow = Workflow::select(&cli, piped);
	log::debug!("running {workflow:?}");
	workflow.run(&resolved.settings)
}
