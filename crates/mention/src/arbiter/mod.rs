//! Keyboard and pointer arbitration between the menu and the host editor.
//!
//! While the menu is active it claims navigation keys: arrows move the
//! highlight, Right/Enter/Tab open a group's submenu, Enter/Tab commit a leaf,
//! Left/Escape back out. Everything else flows through to the host so typing
//! keeps refining the query. A consumed key must not also reach the host.
//!
//! Pointer input is mapped onto the same [`MenuAction`]s and [`Commit`]s, so
//! the state machine has a single set of transitions.

use quill_primitives::{Key, KeyCode};

use crate::commit::Commit;
use crate::item::{ItemInfo, SuggestionItem};
use crate::source::SuggestionList;
use crate::state::{MenuAction, MenuState};


/// Result of offering an input event to the menu.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuOutcome {
	/// The menu handled the event; the host must skip its default handling.
	pub consumed: bool,
	/// Transition to fold into the state through the reducer.
	pub action: Option<MenuAction>,
	/// Item to write into the document before the menu closes.
	pub commit: Option<Commit>,
}

impl MenuOutcome {
	/// The event belongs to the host.
	pub fn ignored() -> Self {
		Self::default()
	}

	fn consumed(action: MenuAction) -> Self {
		Self {
			consumed: true,
			action: Some(action),
			commit: None,
		}
	}

	fn commit(state: &MenuState, item: &ItemInfo) -> Self {
		Self {
			consumed: true,
			action: Some(MenuAction::Close),
			commit: Some(Commit {
				range: state.range(),
				item: item.clone(),
			}),
		}
	}
}

/// Where a pointer event landed on the rendered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuHit {
	/// A row of the flat list.
	Item(usize),
	/// A row of the open submenu.
	Child(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
	Hover,
	Click,
}

/// Decides what a key press does to the menu.
///
/// Only unmodified keys are claimed; chords always reach the host.
pub fn handle_key(key: &Key, state: &MenuState, suggestions: &SuggestionList) -> MenuOutcome {
	if !state.active {
		return MenuOutcome::ignored();
	}
	let Some(code) = key.plain() else {
		return MenuOutcome::ignored();
	};

	if state.submenu_open
		&& let Some(SuggestionItem::Group { children, .. }) = suggestions.get(state.selected_index)
		&& let Some(outcome) = handle_submenu_key(code, state, children)
	{
		return outcome;
	}

	let index = state.selected_index;
	let len = suggestions.len().max(1);
	match code {
		KeyCode::Down => MenuOutcome::consumed(MenuAction::select((index + 1) % len)),
		KeyCode::Up => MenuOutcome::consumed(MenuAction::select((index % len + len - 1) % len)),
		KeyCode::Right if suggestions.is_group(index) => MenuOutcome::consumed(MenuAction::open_submenu(index)),
		KeyCode::Enter | KeyCode::Tab => {
			if suggestions.is_empty() {
				return MenuOutcome::ignored();
			}
			if suggestions.is_group(index) {
				return MenuOutcome::consumed(MenuAction::open_submenu(index));
			}
			match suggestions.get(index).or_else(|| suggestions.get(0)) {
				Some(item) => MenuOutcome::commit(state, item.info()),
				None => MenuOutcome::ignored(),
			}
		}
		KeyCode::Esc => MenuOutcome::consumed(MenuAction::Close),
		_ => MenuOutcome::ignored(),
	}
}

/// Keys handled while a group's submenu is open. `None` falls back to list handling.
fn handle_submenu_key(code: KeyCode, state: &MenuState, children: &[ItemInfo]) -> Option<MenuOutcome> {
	let child = state.selected_child_index;
	let len = children.len().max(1);
	let outcome = match code {
		KeyCode::Down => MenuOutcome::consumed(MenuAction::select_child((child + 1) % len)),
		KeyCode::Up => MenuOutcome::consumed(MenuAction::select_child((child % len + len - 1) % len)),
		KeyCode::Left | KeyCode::Esc => MenuOutcome::consumed(MenuAction::close_submenu()),
		KeyCode::Enter | KeyCode::Tab => {
			let item = children.get(child).or_else(|| children.first())?;
			MenuOutcome::commit(state, item)
		}
		_ => return None,
	};
	Some(outcome)
}

/// Maps a pointer event on the rendered menu to the keyboard primitives.
///
/// Hovering a row highlights it (opening a group's submenu); clicking a leaf
/// commits it. Hits outside the live lists are ignored.
pub fn handle_pointer(hit: MenuHit, kind: PointerKind, state: &MenuState, suggestions: &SuggestionList) -> MenuOutcome {
	if !state.active {
		return MenuOutcome::ignored();
	}

	match hit {
		MenuHit::Item(index) => {
			let Some(item) = suggestions.get(index) else {
				return MenuOutcome::ignored();
			};
			match (kind, item.is_group()) {
				(_, true) => MenuOutcome::consumed(MenuAction::open_submenu(index)),
				(PointerKind::Hover, false) => MenuOutcome::consumed(MenuAction::select(index)),
				(PointerKind::Click, false) => MenuOutcome::commit(state, item.info()),
			}
		}
		MenuHit::Child(child) => {
			if !state.submenu_open {
				return MenuOutcome::ignored();
			}
			let Some(item) = suggestions.children(state.selected_index).get(child) else {
				return MenuOutcome::ignored();
			};
			match kind {
				PointerKind::Hover => MenuOutcome::consumed(MenuAction::select_child(child)),
				PointerKind::Click => MenuOutcome::commit(state, item),
			}
		}
	}
}
