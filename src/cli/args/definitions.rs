use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `snp` binary.
///
/// With no query and nothing piped in, `snp` opens the interactive session.
#[derive(Parser, Debug)]
#[command(
    name = "snp",
    version,
    long_version = long_version(),
    about = "Terminal snippet manager",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
    #[arg(
        value_name = "QUERY",
        help = "Print the best matching snippet, or name the snippet read from stdin"
    )]
    pub(crate) query: Vec<String>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "SNP_CONFIG",
        action = ArgAction::Append,
        global = true,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        global = true,
        help = "Skip loading the default configuration file (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'r',
        long,
        value_name = "PATH",
        global = true,
        help = "Directory holding the snippets (default: <data dir>/snp)"
    )]
    pub(crate) root: Option<PathBuf>,
    #[arg(
        short = 't',
        long,
        value_name = "THEME",
        global = true,
        help = "Syntax highlighting theme (default: Dracula)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'l',
        long = "default-language",
        value_name = "LANG",
        global = true,
        help = "Language given to snippets saved without one (default: go)"
    )]
    pub(crate) default_language: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        global = true,
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
}

impl CliArgs {
    /// The positional words joined with spaces, if any were given.
    pub(crate) fn query_text(&self) -> Option<String> {
        let text = self.query.join(" ");
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Subcommands accepted by `snp`.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    /// Print every snippet identity, one per line
    List,
}
