use std::path::PathBuf;

use clap::Parser;
use snp_core::Palette;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"snp",
		"--root",
		"/tmp/snippets",
		"--theme",
		"Nord",
		"--default-language",
		"py",
	]);

	let mut config = RawConfig {
		root: Some(PathBuf::from("/from/file")),
		theme: Some("GitHub".into()),
		..RawConfig::default()
	};
	config.apply_cli_overrides(&cli);

	assert_eq!(config.root, cli.root);
	assert_eq!(config.theme, cli.theme);
	assert_eq!(config.default_language.as_deref(), Some("py"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
	let config = RawConfig {
		root: Some(PathBuf::from("/srv/snippets")),
		default_language: Some("  ".into()),
		theme: Some(String::new()),
		red: Some(" #aa0000 ".into()),
		..RawConfig::default()
	};

	let resolved = config.resolve(Vec::new()).unwrap();
	assert_eq!(resolved.settings.default_language, "go");
	assert_eq!(resolved.settings.theme, "Dracula");
	assert_eq!(resolved.settings.palette.red, "#aa0000");
	assert_eq!(resolved.settings.palette.gray, Palette::default().gray);
}

#[test]
fn relative_roots_resolve_against_the_working_directory() {
	let config = RawConfig {
		root: Some(PathBuf::from("snippets")),
		..RawConfig::default()
	};

	let resolved = config.resolve(Vec::new()).unwrap();
	assert!(resolved.settings.root.is_absolute());
	assert!(resolved.settings.root.ends_with("snippets"));
}
