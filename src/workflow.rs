//! What a single `snp` invocation does, decided from its arguments and stdin.

use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{info, warn};
use snp_core::{DEFAULT_NAME, Settings, Snippet, SnippetStore, matcher, parse_reference};
use snp_tui::Highlighter;

use crate::cli::{CliArgs, Command};

/// One of the things `snp` can be asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Workflow {
	/// Print every identity.
	List,
	/// Print the content of the best match for the query.
	Lookup(String),
	/// Store piped input under the given reference.
	Save { reference: String, content: String },
	/// Open the three-panel session.
	Interactive,
}

impl Workflow {
	/// Pick the workflow. `list` wins, then piped input, then a query.
	pub(crate) fn select(cli: &CliArgs, piped: Option<String>) -> Self {
		if cli.command == Some(Command::List) {
			return Self::List;
		}
		let query = cli.query_text();
		if let Some(content) = piped {
			return Self::Save {
				reference: query.unwrap_or_else(|| DEFAULT_NAME.to_string()),
				content,
			};
		}
		match query {
			Some(query) => Self::Lookup(query),
			None => Self::Interactive,
		}
	}

	pub(crate) fn run(self, settings: &Settings) -> Result<ExitCode> {
		let store = SnippetStore::new(&settings.root);
		let mut stdout = io::stdout().lock();
		match self {
			Self::List => {
				print_list(&store, &mut stdout)?;
				Ok(ExitCode::SUCCESS)
			}
			Self::Lookup(query) => {
				let highlighter = stdout
					.is_terminal()
					.then(|| Highlighter::new(settings.theme.as_str()));
				if print_best_match(&store, &query, highlighter.as_ref(), &mut stdout)? {
					Ok(ExitCode::SUCCESS)
				} else {
					Ok(ExitCode::FAILURE)
				}
			}
			Self::Save { reference, content } => {
				save_piped(&store, &reference, &content, &settings.default_language)?;
				Ok(ExitCode::SUCCESS)
			}
			Self::Interactive => {
				drop(stdout);
				snp_tui::run(settings)?;
				Ok(ExitCode::SUCCESS)
			}
		}
	}
}

/// Read stdin when it is piped. Empty input counts as nothing piped.
pub(crate) fn read_piped_stdin() -> Result<Option<String>> {
	let mut stdin = io::stdin();
	if stdin.is_terminal() {
		return Ok(None);
	}
	let mut content = String::new();
	stdin
		.read_to_string(&mut content)
		.context("failed to read piped input")?;
	Ok((!content.is_empty()).then_some(content))
}

fn print_list(store: &SnippetStore, out: &mut impl Write) -> Result<()> {
	for snippet in store.load() {
		writeln!(out, "{snippet}")?;
	}
	Ok(())
}

/// Print the content of the snippet best matching `query`.
///
/// Returns `false`, printing nothing, when no snippet matches.
fn print_best_match(
	store: &SnippetStore,
	query: &str,
	highlighter: Option<&Highlighter>,
	out: &mut impl Write,
) -> Result<bool> {
	let snippets = store.load();
	let identities: Vec<String> = snippets.iter().map(Snippet::identity).collect();
	let Some(index) = matcher::best_match(query, &identities) else {
		info!("no snippet matches {query:?}");
		return Ok(false);
	};

	let snippet = &snippets[index];
	let content = store
		.read_content(snippet)
		.with_context(|| format!("failed to read {snippet}"))?;
	let rendered = highlighter
		.and_then(|highlighter| highlighter.highlight_ansi(&content, &snippet.language))
		.unwrap_or(content);
	out.write_all(rendered.as_bytes())?;
	out.flush()?;
	Ok(true)
}

/// Write `content` to the snippet named by `reference`, replacing it if it
/// already exists.
fn save_piped(
	store: &SnippetStore,
	reference: &str,
	content: &str,
	default_language: &str,
) -> Result<Snippet> {
	let parsed = parse_reference(reference, default_language);
	// Reuse the existing file when the identity is already taken, which may be
	// a file directly beneath the root.
	let target = match store.load().into_iter().find(|s| s.same_identity(&parsed)) {
		Some(existing) => {
			warn!("replacing the content of {existing}");
			existing
		}
		None => parsed,
	};
	store
		.write(&target, content)
		.with_context(|| format!("unable to save {target}"))?;
	info!("saved piped input as {target}");
	Ok(target)
}
