use std::cell::RefCell;
use std::fs;
use std::ops::ControlFlow;
use std::path::Path;
use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use snp_core::{Settings, Snippet, read_snippets};
use tempfile::TempDir;

use super::{App, Flash, FormStep, Mode};
use crate::clipboard::Clipboard;
use crate::panels::Focus;

#[derive(Clone, Default)]
struct RecordingClipboard {
	copied: Rc<RefCell<Vec<String>>>,
}

impl Clipboard for RecordingClipboard {
	fn copy(&mut self, text: &str) -> Result<(), String> {
		self.copied.borrow_mut().push(text.to_string());
		Ok(())
	}
}

struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
	fn copy(&mut self, _text: &str) -> Result<(), String> {
		Err("no clipboard tool available".to_string())
	}
}

fn store(files: &[(&str, &str)]) -> TempDir {
	let dir = TempDir::new().expect("tempdir");
	for (relative, content) in files {
		let path = dir.path().join(relative);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).expect("create folder");
		}
		fs::write(path, content).expect("write snippet");
	}
	dir
}

fn sample_store() -> TempDir {
	store(&[
		("misc/a.go", "package a\n"),
		("misc/b.py", "print('b')\n"),
		("notes/c.md", "# c\n"),
	])
}

fn settings(root: &Path) -> Settings {
	Settings::with_root(root)
}

fn app(root: &Path) -> App<'static> {
	App::with_clipboard(&settings(root), RecordingClipboard::default())
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App<'_>, code: KeyCode) -> ControlFlow<()> {
	app.handle_key(key(code))
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn visible(app: &App<'_>) -> Vec<String> {
	app.visible_snippets()
		.into_iter()
		.map(Snippet::file_name)
		.collect()
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(100, 16)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}

#[test]
fn folders_are_sorted_and_first_folder_shows_its_snippets() {
	let dir = sample_store();
	let app = app(dir.path());

	assert_eq!(app.folders().names(), ["misc", "notes"]);
	assert_eq!(visible(&app), vec!["a.go", "b.py"]);
	assert_eq!(app.mode(), Mode::Navigating);
	assert_eq!(app.focus(), Focus::Snippets);
	assert_eq!(app.content().text(), "package a\n");
}

#[test]
fn empty_root_shows_default_folder_and_placeholder() {
	let dir = TempDir::new().expect("tempdir");
	let mut app = app(&dir.path().join("missing"));

	assert_eq!(app.folders().names(), ["misc"]);
	assert!(app.visible_snippets().is_empty());
	assert!(app.selected_snippet().is_none());
	assert!(app.content().snippet().is_none());
	assert!(render(&mut app).contains("Untitled"));
}

#[test]
fn placeholder_is_not_a_copy_or_delete_target() {
	let dir = TempDir::new().expect("tempdir");
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('c'));
	assert_eq!(app.mode(), Mode::Navigating);
	press(&mut app, KeyCode::Char('x'));
	assert_eq!(app.mode(), Mode::Navigating);
	press(&mut app, KeyCode::Char('r'));
	assert_eq!(app.mode(), Mode::Navigating);
}

#[test]
fn switching_folders_selects_first_snippet_of_that_folder() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::BackTab);
	assert_eq!(app.focus(), Focus::Folders);
	press(&mut app, KeyCode::Char('j'));

	assert_eq!(app.folders().selected(), "notes");
	assert_eq!(visible(&app), vec!["c.md"]);
	assert!(app.visible_snippets().iter().all(|snippet| snippet.folder == "notes"));
	assert_eq!(
		app.selected_snippet().map(Snippet::identity).as_deref(),
		Some("notes/c.md")
	);
	assert_eq!(app.content().text(), "# c\n");
}

#[test]
fn movement_past_either_end_is_a_no_op() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('k'));
	assert_eq!(app.selected_snippet().map(Snippet::file_name).as_deref(), Some("a.go"));

	for _ in 0..5 {
		press(&mut app, KeyCode::Char('j'));
	}
	assert_eq!(app.selected_snippet().map(Snippet::file_name).as_deref(), Some("b.py"));
	assert_eq!(app.content().text(), "print('b')\n");
}

#[test]
fn filtering_narrows_live_and_confirm_keeps_the_view() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('/'));
	assert_eq!(app.mode(), Mode::Filtering);
	type_text(&mut app, "py");
	assert_eq!(visible(&app), vec!["b.py"]);
	assert_eq!(app.content().text(), "print('b')\n");

	press(&mut app, KeyCode::Enter);
	assert_eq!(app.mode(), Mode::Navigating);
	assert_eq!(visible(&app), vec!["b.py"]);

	press(&mut app, KeyCode::Esc);
	assert_eq!(visible(&app), vec!["a.go", "b.py"]);
}

#[test]
fn cancelling_a_filter_restores_the_list() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "zzz");
	assert!(app.visible_snippets().is_empty());
	assert!(app.content().snippet().is_none());

	press(&mut app, KeyCode::Esc);
	assert_eq!(app.mode(), Mode::Navigating);
	assert_eq!(visible(&app), vec!["a.go", "b.py"]);
	assert_eq!(app.content().text(), "package a\n");
}

#[test]
fn filtering_requires_snippet_focus() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Tab);
	assert_eq!(app.focus(), Focus::Content);
	press(&mut app, KeyCode::Char('/'));
	assert_eq!(app.mode(), Mode::Navigating);
}

#[test]
fn each_folder_keeps_its_own_filter() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "py");
	press(&mut app, KeyCode::Enter);

	press(&mut app, KeyCode::BackTab);
	press(&mut app, KeyCode::Char('j'));
	assert_eq!(visible(&app), vec!["c.md"]);

	press(&mut app, KeyCode::Char('k'));
	assert_eq!(visible(&app), vec!["b.py"]);
}

#[test]
fn confirmed_delete_removes_entry_and_file() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('j'));
	press(&mut app, KeyCode::Char('x'));
	assert_eq!(app.mode(), Mode::ConfirmingDelete);
	assert!(render(&mut app).contains("Delete b.py? (y/N)"));

	press(&mut app, KeyCode::Char('y'));
	assert_eq!(app.mode(), Mode::Navigating);
	assert_eq!(visible(&app), vec!["a.go"]);
	assert_eq!(app.selected_snippet().map(Snippet::file_name).as_deref(), Some("a.go"));
	assert!(!dir.path().join("misc/b.py").exists());
	assert!(
		read_snippets(dir.path())
			.iter()
			.all(|snippet| snippet.identity() != "misc/b.py")
	);
}

#[test]
fn cancelled_delete_keeps_everything() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('x'));
	press(&mut app, KeyCode::Char('n'));
	assert_eq!(app.mode(), Mode::Navigating);
	assert_eq!(visible(&app), vec!["a.go", "b.py"]);
	assert!(dir.path().join("misc/a.go").exists());
}

#[test]
fn deleting_the_last_snippet_leaves_the_placeholder() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::BackTab);
	press(&mut app, KeyCode::Char('j'));
	press(&mut app, KeyCode::Char('x'));
	press(&mut app, KeyCode::Enter);

	assert!(app.visible_snippets().is_empty());
	assert!(app.content().snippet().is_none());
	assert_eq!(app.folders().selected(), "notes");
}

#[test]
fn copy_flash_lasts_exactly_one_render() {
	let dir = sample_store();
	let clipboard = RecordingClipboard::default();
	let copied = Rc::clone(&clipboard.copied);
	let mut app = App::with_clipboard(&settings(dir.path()), clipboard);

	press(&mut app, KeyCode::Char('c'));
	assert_eq!(app.mode(), Mode::ConfirmingCopy);
	press(&mut app, KeyCode::Char('y'));

	assert_eq!(app.mode(), Mode::Navigating);
	assert_eq!(copied.borrow().as_slice(), ["package a\n"]);
	assert!(matches!(app.flash(), Some(Flash::Copied(snippet)) if snippet.file_name() == "a.go"));

	assert!(render(&mut app).contains("Copied a.go!"));
	assert!(app.flash().is_none());
	assert!(!render(&mut app).contains("Copied a.go!"));
}

#[test]
fn cancelled_copy_touches_nothing() {
	let dir = sample_store();
	let clipboard = RecordingClipboard::default();
	let copied = Rc::clone(&clipboard.copied);
	let mut app = App::with_clipboard(&settings(dir.path()), clipboard);

	press(&mut app, KeyCode::Char('c'));
	press(&mut app, KeyCode::Esc);
	assert_eq!(app.mode(), Mode::Navigating);
	assert!(copied.borrow().is_empty());
	assert!(app.flash().is_none());
}

#[test]
fn clipboard_failure_flashes_an_error() {
	let dir = sample_store();
	let mut app = App::with_clipboard(&settings(dir.path()), BrokenClipboard);

	press(&mut app, KeyCode::Char('c'));
	press(&mut app, KeyCode::Enter);

	assert!(matches!(app.flash(), Some(Flash::Error(message)) if message.contains("copy failed")));
	assert!(render(&mut app).contains("copy failed: no clipboard tool available"));
	assert!(app.flash().is_none());
}

#[test]
fn quit_is_only_honoured_while_navigating() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('/'));
	assert_eq!(press(&mut app, KeyCode::Char('q')), ControlFlow::Continue(()));
	assert_eq!(app.mode(), Mode::Filtering);
	press(&mut app, KeyCode::Esc);

	press(&mut app, KeyCode::Char('x'));
	assert_eq!(press(&mut app, KeyCode::Char('q')), ControlFlow::Continue(()));
	assert_eq!(app.mode(), Mode::ConfirmingDelete);
	press(&mut app, KeyCode::Esc);

	press(&mut app, KeyCode::Char('n'));
	assert_eq!(press(&mut app, KeyCode::Char('q')), ControlFlow::Continue(()));
	assert_eq!(app.mode(), Mode::Creating(FormStep::Folder));
	press(&mut app, KeyCode::Esc);

	assert_eq!(press(&mut app, KeyCode::Char('q')), ControlFlow::Break(()));
}

#[test]
fn create_flow_adds_new_folder_and_file() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('n'));
	assert_eq!(app.mode(), Mode::Creating(FormStep::Folder));
	assert!(render(&mut app).contains("New snippet"));
	type_text(&mut app, "todo");
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.mode(), Mode::Creating(FormStep::Name));
	type_text(&mut app, "Ideas");
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.mode(), Mode::Creating(FormStep::Language));
	type_text(&mut app, "txt");
	press(&mut app, KeyCode::Enter);

	assert_eq!(app.mode(), Mode::Navigating);
	assert_eq!(app.folders().names(), ["misc", "notes", "todo"]);
	assert_eq!(app.folders().selected(), "todo");
	assert_eq!(app.focus(), Focus::Snippets);
	assert_eq!(
		app.selected_snippet().map(Snippet::identity).as_deref(),
		Some("todo/Ideas.txt")
	);

	let path = dir.path().join("todo/Ideas.txt");
	assert_eq!(fs::read_to_string(path).expect("created file"), "");
	let reloaded: Vec<String> = read_snippets(dir.path())
		.iter()
		.map(Snippet::identity)
		.filter(|identity| identity == "todo/Ideas.txt")
		.collect();
	assert_eq!(reloaded.len(), 1);
}

#[test]
fn create_with_empty_fields_uses_defaults() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('n'));
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);

	assert_eq!(
		app.selected_snippet().map(Snippet::identity).as_deref(),
		Some("misc/Untitled.go")
	);
	assert_eq!(visible(&app), vec!["a.go", "b.py", "Untitled.go"]);
	assert!(dir.path().join("misc/Untitled.go").exists());
}

#[test]
fn create_clears_the_folder_filter() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "py");
	press(&mut app, KeyCode::Enter);

	press(&mut app, KeyCode::Char('n'));
	press(&mut app, KeyCode::Enter);
	type_text(&mut app, "fresh");
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);

	assert_eq!(visible(&app), vec!["a.go", "b.py", "fresh.go"]);
	assert_eq!(app.active_list().and_then(|list| list.query()), None);
}

#[test]
fn backspace_on_empty_field_steps_back() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('n'));
	press(&mut app, KeyCode::Enter);
	type_text(&mut app, "ab");
	press(&mut app, KeyCode::Backspace);
	press(&mut app, KeyCode::Backspace);
	assert_eq!(app.mode(), Mode::Creating(FormStep::Name));

	press(&mut app, KeyCode::Backspace);
	assert_eq!(app.mode(), Mode::Creating(FormStep::Folder));
	press(&mut app, KeyCode::Backspace);
	assert_eq!(app.mode(), Mode::Creating(FormStep::Folder));
}

#[test]
fn cancelling_create_writes_nothing() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('n'));
	type_text(&mut app, "todo");
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Esc);

	assert_eq!(app.mode(), Mode::Navigating);
	assert!(!dir.path().join("todo").exists());
	assert_eq!(app.folders().names(), ["misc", "notes"]);
}

#[test]
fn creating_a_duplicate_flashes_an_error() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('n'));
	press(&mut app, KeyCode::Enter);
	type_text(&mut app, "a");
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);

	assert_eq!(app.mode(), Mode::Navigating);
	assert!(matches!(app.flash(), Some(Flash::Error(_))));
	assert_eq!(visible(&app), vec!["a.go", "b.py"]);
	assert_eq!(
		fs::read_to_string(dir.path().join("misc/a.go")).expect("kept"),
		"package a\n"
	);
}

#[test]
fn creating_with_a_path_separator_is_refused() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('n'));
	type_text(&mut app, "x/y");
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);

	assert!(matches!(app.flash(), Some(Flash::Error(_))));
	assert!(!dir.path().join("x").exists());
	assert_eq!(app.folders().names(), ["misc", "notes"]);
	assert_eq!(app.selected_snippet().map(Snippet::file_name).as_deref(), Some("a.go"));
}

#[test]
fn rename_within_a_folder_keeps_position() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('r'));
	assert_eq!(app.mode(), Mode::Renaming(FormStep::Folder));
	assert!(render(&mut app).contains("Rename snippet"));
	press(&mut app, KeyCode::Enter);
	type_text(&mut app, "2");
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);

	assert_eq!(visible(&app), vec!["a2.go", "b.py"]);
	assert!(dir.path().join("misc/a2.go").exists());
	assert!(!dir.path().join("misc/a.go").exists());
	assert_eq!(app.content().text(), "package a\n");
}

#[test]
fn rename_into_another_folder_moves_file_and_entry() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('r'));
	for _ in 0.."misc".len() {
		press(&mut app, KeyCode::Backspace);
	}
	type_text(&mut app, "notes");
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);

	assert_eq!(app.folders().selected(), "notes");
	assert_eq!(visible(&app), vec!["c.md", "a.go"]);
	assert_eq!(
		app.selected_snippet().map(Snippet::identity).as_deref(),
		Some("notes/a.go")
	);
	assert!(dir.path().join("notes/a.go").exists());
	assert!(!dir.path().join("misc/a.go").exists());

	press(&mut app, KeyCode::BackTab);
	press(&mut app, KeyCode::Char('k'));
	assert_eq!(visible(&app), vec!["b.py"]);
}

#[test]
fn rename_onto_an_existing_snippet_is_refused() {
	let dir = sample_store();
	let mut app = app(dir.path());

	press(&mut app, KeyCode::Char('r'));
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Backspace);
	type_text(&mut app, "b");
	press(&mut app, KeyCode::Enter);
	for _ in 0.."go".len() {
		press(&mut app, KeyCode::Backspace);
	}
	type_text(&mut app, "py");
	press(&mut app, KeyCode::Enter);

	assert!(matches!(app.flash(), Some(Flash::Error(_))));
	assert_eq!(visible(&app), vec!["a.go", "b.py"]);
	assert_eq!(
		fs::read_to_string(dir.path().join("misc/b.py")).expect("kept"),
		"print('b')\n"
	);
}

#[test]
fn content_panel_scrolls_and_toggles_highlighting() {
	let body: String = (1..=30).map(|line| format!("line {line}\n")).collect();
	let dir = store(&[("misc/long.txt", body.as_str())]);
	let mut app = app(dir.path());

	assert!(app.content().highlight_enabled());
	press(&mut app, KeyCode::Char('s'));
	assert!(!app.content().highlight_enabled());

	press(&mut app, KeyCode::PageDown);
	assert_eq!(app.content().scroll(), 10);
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Char('j'));
	assert_eq!(app.content().scroll(), 11);
	for _ in 0..5 {
		press(&mut app, KeyCode::PageDown);
	}
	assert_eq!(app.content().scroll(), 29);

	let screen = render(&mut app);
	assert!(screen.contains("30 │ line 30"));
	assert!(screen.contains("misc/long.txt"));
}

#[test]
fn navigating_screen_lists_panels_and_hints() {
	let dir = sample_store();
	let mut app = app(dir.path());
	press(&mut app, KeyCode::Char('s'));

	let screen = render(&mut app);
	assert!(screen.contains("Folders"));
	assert!(screen.contains("• misc"));
	assert!(screen.contains("│ a"));
	assert!(screen.contains("misc • py"));
	assert!(screen.contains(" 1 │ package a"));
	assert!(screen.contains("q quit"));
}
