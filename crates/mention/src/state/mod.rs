//! Menu state and its reducer.
//!
//! [`MenuState`] is derived: every document or selection change produces a new
//! scan, and [`reduce`] folds that scan, plus an optional explicit
//! [`MenuAction`] from the keyboard or pointer, into the next state. Nothing
//! else mutates it.

use quill_primitives::{CharIdx, TextRange};

use crate::scanner::TriggerMatch;
use crate::source::SuggestionList;

#[cfg(test)]
mod tests;

/// Interaction state of the mention menu.
///
/// When `active` is false every other field holds its default; see
/// [`MenuState::inactive`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuState {
	pub active: bool,
	pub from: CharIdx,
	pub to: CharIdx,
	pub query: String,
	/// Highlighted row in the flat list.
	pub selected_index: usize,
	/// Whether the highlighted group's submenu is expanded.
	pub submenu_open: bool,
	/// Highlighted row in the submenu.
	pub selected_child_index: usize,
}

impl MenuState {
	/// The canonical inactive state.
	pub fn inactive() -> Self {
		Self::default()
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Span replaced when an item is committed.
	pub fn range(&self) -> TextRange {
		TextRange::new(self.from, self.to)
	}

	/// Clamps selection fields to the live list.
	///
	/// Guarantees `selected_index < N` (or 0), that `submenu_open` implies the
	/// selected row is a group, and `selected_child_index < M` (or 0).
	pub fn fit_to(mut self, list: &SuggestionList) -> Self {
		if !self.active {
			return Self::inactive();
		}

		self.selected_index = clamp_index(self.selected_index, list.len());
		if !list.is_group(self.selected_index) {
			self.submenu_open = false;
		}
		self.selected_child_index = clamp_index(self.selected_child_index, list.children(self.selected_index).len());
		self
	}
}

fn clamp_index(index: usize, len: usize) -> usize {
	index.min(len.saturating_sub(1))
}

/// Field overrides carried by an explicit action.
///
/// `None` fields carry over from the previous state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionUpdate {
	pub selected_index: Option<usize>,
	pub submenu_open: Option<bool>,
	pub selected_child_index: Option<usize>,
}

/// An explicit request layered on top of the latest scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
	/// Dismiss the menu regardless of the scan.
	Close,
	/// Override selection fields.
	Update(SelectionUpdate),
}

impl MenuAction {
	/// Highlights a list row and collapses any submenu.
	pub fn select(index: usize) -> Self {
		Self::Update(SelectionUpdate {
			selected_index: Some(index),
			submenu_open: Some(false),
			selected_child_index: None,
		})
	}

	/// Highlights a list row and expands its submenu at the first child.
	pub fn open_submenu(index: usize) -> Self {
		Self::Update(SelectionUpdate {
			selected_index: Some(index),
			submenu_open: Some(true),
			selected_child_index: Some(0),
		})
	}

	/// Collapses the submenu, keeping the list row.
	pub fn close_submenu() -> Self {
		Self::Update(SelectionUpdate {
			submenu_open: Some(false),
			..SelectionUpdate::default()
		})
	}

	/// Highlights a submenu row.
	pub fn select_child(index: usize) -> Self {
		Self::Update(SelectionUpdate {
			selected_child_index: Some(index),
			..SelectionUpdate::default()
		})
	}
}

/// Computes the next menu state.
///
/// `Close` or a missing scan yields the inactive state. A query that differs
/// from `prev.query` resets the selection and ignores any overrides in
/// `action`; otherwise overrides apply field by field over `prev`.
pub fn reduce(prev: &MenuState, scan: Option<&TriggerMatch>, action: Option<&MenuAction>) -> MenuState {
	let Some(scan) = scan else {
		return MenuState::inactive();
	};
	if matches!(action, Some(MenuAction::Close)) {
		return MenuState::inactive();
	}

	let mut next = MenuState {
		active: true,
		from: scan.from,
		to: scan.to,
		query: scan.query.clone(),
		..MenuState::default()
	};

	// A fresh query invalidates any selection context, including one the
	// action asks for in this same step.
	if scan.query == prev.query {
		let update = match action {
			Some(MenuAction::Update(update)) => *update,
			_ => SelectionUpdate::default(),
		};
		next.selected_index = update.selected_index.unwrap_or(prev.selected_index);
		next.submenu_open = update.submenu_open.unwrap_or(prev.submenu_open);
		next.selected_child_index = update.selected_child_index.unwrap_or(prev.selected_child_index);
	}

	next
}
