//! Suggestion source over the configured notes and todos.

use quill_config::{Config, NoteEntry, TodoEntry};
use quill_mention::{ItemInfo, SuggestionItem, SuggestionSource};


pub const NOTE_KIND: &str = "note";
pub const TODO_LIST_KIND: &str = "todo-list";
pub const TODO_KIND: &str = "todo";

const DONE_ICON: &str = "[x]";
const OPEN_ICON: &str = "[ ]";

/// Mentionable notes and todo lists.
///
/// Notes are listed first as leaves, then one group per todo list in the
/// order lists first appear.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	notes: Vec<NoteEntry>,
	lists: Vec<(String, Vec<TodoEntry>)>,
}

impl Catalog {
	pub fn new(notes: Vec<NoteEntry>, todos: Vec<TodoEntry>) -> Self {
		let mut lists: Vec<(String, Vec<TodoEntry>)> = Vec::new();
		for todo in todos {
			match lists.iter_mut().find(|(name, _)| *name == todo.list) {
				Some((_, items)) => items.push(todo),
				None => lists.push((todo.list.clone(), vec![todo])),
			}
		}
		Self { notes, lists }
	}

	pub fn from_config(config: &Config) -> Self {
		Self::new(config.notes.clone(), config.todos.clone())
	}

	pub fn is_empty(&self) -> bool {
		self.notes.is_empty() && self.lists.is_empty()
	}
}

impl SuggestionSource for Catalog {
	/// Case-insensitive substring match on titles. A todo list whose name
	/// matches offers all of its todos.
	fn suggestions(&self, query: &str) -> Vec<SuggestionItem> {
		let needle = query.to_lowercase();
		let matches = |text: &str| needle.is_empty() || text.to_lowercase().contains(&needle);

		let notes = self.notes.iter().filter(|note| matches(&note.title)).map(note_item);

		let lists = self.lists.iter().filter_map(|(name, todos)| {
			let whole_list = matches(name);
			let children: Vec<ItemInfo> = todos
				.iter()
				.filter(|todo| whole_list || matches(&todo.title))
				.map(todo_info)
				.collect();
			let info = ItemInfo::new(format!("{TODO_LIST_KIND}:{name}"), name.as_str()).with_kind(TODO_LIST_KIND);
			(!children.is_empty()).then(|| SuggestionItem::group(info, children))
		});

		notes.chain(lists).collect()
	}
}

fn note_item(note: &NoteEntry) -> SuggestionItem {
	let mut info = ItemInfo::new(note.id.as_str(), note.title.as_str()).with_kind(NOTE_KIND);
	if let Some(folder) = &note.folder {
		info = info.with_hint(folder.as_str());
	}
	SuggestionItem::Leaf(info)
}

fn todo_info(todo: &TodoEntry) -> ItemInfo {
	let icon = if todo.done { DONE_ICON } else { OPEN_ICON };
	ItemInfo::new(todo.id.as_str(), todo.title.as_str()).with_kind(TODO_KIND).with_icon(icon)
}
