use snp_core::Snippet;

use crate::input::QueryInput;
use crate::style::Theme;

/// One field of the create and rename flows, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
	Folder,
	Name,
	Language,
}

impl FormStep {
	pub const ALL: [FormStep; 3] = [Self::Folder, Self::Name, Self::Language];

	#[must_use]
	pub fn next(self) -> Option<Self> {
		match self {
			Self::Folder => Some(Self::Name),
			Self::Name => Some(Self::Language),
			Self::Language => None,
		}
	}

	#[must_use]
	pub fn prev(self) -> Option<Self> {
		match self {
			Self::Folder => None,
			Self::Name => Some(Self::Folder),
			Self::Language => Some(Self::Name),
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Folder => "Folder",
			Self::Name => "Name",
			Self::Language => "Language",
		}
	}

	fn index(self) -> usize {
		match self {
			Self::Folder => 0,
			Self::Name => 1,
			Self::Language => 2,
		}
	}
}

#[derive(Debug, Clone, Default)]
struct Field<'a> {
	input: QueryInput<'a>,
	default: String,
}

/// Input buffers for a snippet identity.
///
/// Each field falls back to its default when left empty.
#[derive(Debug, Clone, Default)]
pub(crate) struct SnippetForm<'a> {
	fields: [Field<'a>; 3],
}

impl<'a> SnippetForm<'a> {
	/// Empty fields showing `defaults` as placeholders.
	pub(crate) fn blank(defaults: &Snippet, theme: &Theme) -> Self {
		Self::build(defaults, false, theme)
	}

	/// Fields prefilled with `current`, which is also the fallback.
	pub(crate) fn prefilled(current: &Snippet, theme: &Theme) -> Self {
		Self::build(current, true, theme)
	}

	fn build(values: &Snippet, prefill: bool, theme: &Theme) -> Self {
		let field = |value: &str| {
			let mut input = QueryInput::new(if prefill { value } else { "" });
			input.set_style(theme.form_input);
			input.set_placeholder(value, theme.placeholder);
			Field {
				input,
				default: value.to_string(),
			}
		};
		Self {
			fields: [
				field(&values.folder),
				field(&values.name),
				field(&values.language),
			],
		}
	}

	pub(crate) fn input(&self, step: FormStep) -> &QueryInput<'a> {
		&self.fields[step.index()].input
	}

	pub(crate) fn input_mut(&mut self, step: FormStep) -> &mut QueryInput<'a> {
		&mut self.fields[step.index()].input
	}

	/// The entered text for `step`, or its default when nothing was typed.
	pub(crate) fn value(&self, step: FormStep) -> &str {
		let field = &self.fields[step.index()];
		let text = field.input.text().trim();
		if text.is_empty() { field.default.as_str() } else { text }
	}

	/// The identity described by the form.
	pub(crate) fn snippet(&self) -> Snippet {
		Snippet::new(
			self.value(FormStep::Folder),
			self.value(FormStep::Name),
			self.value(FormStep::Language),
		)
	}
}
