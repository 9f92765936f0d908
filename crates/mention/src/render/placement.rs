//! Popup placement relative to the caret.

use quill_primitives::{Rect, ScreenPos};

/// Places a `width`×`height` panel under the caret cell at `anchor`.
///
/// The panel opens below the caret line when it fits, above it otherwise, and
/// on whichever side has more room when neither fits (height is then clamped
/// to that room). Horizontally it starts at the caret column and is shifted
/// left to stay inside `viewport`. A caret outside the viewport is treated as
/// sitting on the nearest edge line.
pub fn place_menu(anchor: ScreenPos, width: u16, height: u16, viewport: Rect) -> Rect {
	let width = width.min(viewport.width);
	let x = clamp_x(anchor.x, width, viewport);

	let last_line = viewport.bottom().saturating_sub(1).max(viewport.top());
	let anchor_y = anchor.y.clamp(viewport.top(), last_line);

	let below_top = anchor_y.saturating_add(1);
	let room_below = viewport.bottom().saturating_sub(below_top);
	let room_above = anchor_y - viewport.top();

	if height <= room_below {
		Rect::new(x, below_top, width, height)
	} else if height <= room_above {
		Rect::new(x, anchor_y - height, width, height)
	} else if room_below >= room_above {
		Rect::new(x, below_top, width, room_below)
	} else {
		Rect::new(x, viewport.top(), width, room_above)
	}
}

/// Places a submenu panel beside `list`, level with the highlighted row.
///
/// Opens to the right of the list, or to the left when the right side lacks
/// room. The panel is shifted up as needed to stay inside `viewport`.
pub fn place_submenu(list: Rect, row: u16, width: u16, height: u16, viewport: Rect) -> Rect {
	let width = width.min(viewport.width);
	let height = height.min(viewport.height);

	let x = if list.right().saturating_add(width) <= viewport.right() {
		list.right()
	} else if list.left().saturating_sub(viewport.left()) >= width {
		list.left() - width
	} else {
		clamp_x(list.right(), width, viewport)
	};

	let top = list.top().saturating_add(row);
	let y = top.min(viewport.bottom().saturating_sub(height)).max(viewport.top());
	Rect::new(x, y, width, height)
}

fn clamp_x(x: u16, width: u16, viewport: Rect) -> u16 {
	x.min(viewport.right().saturating_sub(width)).max(viewport.left())
}
