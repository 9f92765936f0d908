//! Render projection of the menu.
//!
//! Renderers receive a [`MenuView`]: the state, the rows to draw, and where to
//! draw them. They hold no menu state of their own and only talk back through
//! pointer hits resolved by [`MenuLayout::hit_test`].

use quill_primitives::{Rect, ScreenPos};
use unicode_width::UnicodeWidthStr;

use crate::arbiter::MenuHit;
use crate::item::{ItemInfo, SuggestionItem};
use crate::source::SuggestionList;
use crate::state::MenuState;

mod placement;
#[cfg(test)]
mod tests;
mod viewport;

pub use placement::{place_menu, place_submenu};
pub use viewport::{Subscription, ViewportEvent, ViewportEvents};

/// Text shown in place of rows when the query matches nothing.
pub const EMPTY_PLACEHOLDER: &str = "No matches";

/// Marker appended to rows that open a submenu.
pub const GROUP_MARKER: &str = "›";

/// One drawable menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
	pub label: String,
	pub icon: Option<String>,
	pub hint: Option<String>,
	pub selected: bool,
	pub is_group: bool,
}

impl MenuRow {
	fn from_info(info: &ItemInfo, selected: bool, is_group: bool) -> Self {
		Self {
			label: info.label.clone(),
			icon: info.icon.clone(),
			hint: info.hint.clone(),
			selected,
			is_group,
		}
	}

	/// Row content without padding: `icon label  hint ›`.
	pub fn text(&self) -> String {
		let mut text = String::new();
		if let Some(icon) = &self.icon {
			text.push_str(icon);
			text.push(' ');
		}
		text.push_str(&self.label);
		if let Some(hint) = &self.hint {
			text.push_str("  ");
			text.push_str(hint);
		}
		if self.is_group {
			text.push(' ');
			text.push_str(GROUP_MARKER);
		}
		text
	}

	/// Display width in cells, excluding panel padding.
	pub fn width(&self) -> u16 {
		self.text().width().min(u16::MAX as usize) as u16
	}
}

/// Screen rectangles of the rendered panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuLayout {
	pub list: Rect,
	pub submenu: Option<Rect>,
}

impl MenuLayout {
	/// Resolves a screen cell to a menu row. Panels have one row per line and no border.
	pub fn hit_test(&self, pos: ScreenPos, rows: usize, children: usize) -> Option<MenuHit> {
		if let Some(submenu) = self.submenu
			&& submenu.contains(pos)
		{
			let row = usize::from(pos.y - submenu.y);
			return (row < children).then_some(MenuHit::Child(row));
		}
		if self.list.contains(pos) {
			let row = usize::from(pos.y - self.list.y);
			return (row < rows).then_some(MenuHit::Item(row));
		}
		None
	}
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
	pub state: MenuState,
	pub rows: Vec<MenuRow>,
	/// Rows of the expanded submenu, when open.
	pub submenu: Option<Vec<MenuRow>>,
	pub layout: MenuLayout,
}

impl MenuView {
	/// Projects `state` for drawing. Returns `None` while the menu is inactive.
	///
	/// `anchor` is the screen cell of the caret; `viewport` bounds placement.
	pub fn build(state: &MenuState, list: &SuggestionList, anchor: ScreenPos, viewport: Rect) -> Option<Self> {
		if !state.active {
			return None;
		}

		let rows: Vec<MenuRow> = list
			.items()
			.iter()
			.enumerate()
			.map(|(i, item)| MenuRow::from_info(item.info(), i == state.selected_index, item.is_group()))
			.collect();

		let submenu = match list.get(state.selected_index) {
			Some(SuggestionItem::Group { children, .. }) if state.submenu_open => Some(
				children
					.iter()
					.enumerate()
					.map(|(i, child)| MenuRow::from_info(child, i == state.selected_child_index, false))
					.collect::<Vec<_>>(),
			),
			_ => None,
		};

		let list_rect = {
			let (width, height) = if rows.is_empty() {
				(EMPTY_PLACEHOLDER.width() as u16, 1)
			} else {
				(max_width(&rows), rows.len() as u16)
			};
			place_menu(anchor, width.saturating_add(2), height, viewport)
		};
		let submenu_rect = submenu.as_ref().map(|children| {
			place_submenu(list_rect, state.selected_index as u16, max_width(children).saturating_add(2), children.len() as u16, viewport)
		});

		Some(Self {
			state: state.clone(),
			rows,
			submenu,
			layout: MenuLayout {
				list: list_rect,
				submenu: submenu_rect,
			},
		})
	}

	/// Resolves a pointer position against this frame.
	pub fn hit_test(&self, pos: ScreenPos) -> Option<MenuHit> {
		let children = self.submenu.as_ref().map_or(0, Vec::len);
		self.layout.hit_test(pos, self.rows.len(), children)
	}
}

fn max_width(rows: &[MenuRow]) -> u16 {
	rows.iter().map(MenuRow::width).max().unwrap_or(0)
}

/// A frontend that draws the menu.
///
/// Called after every state change and every viewport change; `None` means
/// the menu is hidden. Rendering must be idempotent.
pub trait MenuRenderer {
	fn render(&mut self, view: Option<&MenuView>);
}
