//! Abstract geometry types for menu placement.
//!
//! Units are renderer cells. No terminal or UI library is assumed; frontends
//! convert at their boundary.

use serde::{Deserialize, Serialize};

/// A rectangle with position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
	pub x: u16,
	pub y: u16,
	pub width: u16,
	pub height: u16,
}

impl Rect {
	/// Creates a new rectangle, saturating the size so the far edges stay in range.
	pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
		let max_w = u16::MAX - x;
		let max_h = u16::MAX - y;
		Self {
			x,
			y,
			width: if width > max_w { max_w } else { width },
			height: if height > max_h { max_h } else { height },
		}
	}

	/// Returns true if the rectangle has zero area.
	pub const fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Returns the left edge x coordinate.
	pub const fn left(&self) -> u16 {
		self.x
	}

	/// Returns the right edge x coordinate (exclusive).
	pub const fn right(&self) -> u16 {
		self.x.saturating_add(self.width)
	}

	/// Returns the top edge y coordinate.
	pub const fn top(&self) -> u16 {
		self.y
	}

	/// Returns the bottom edge y coordinate (exclusive).
	pub const fn bottom(&self) -> u16 {
		self.y.saturating_add(self.height)
	}

	/// Returns true if `pos` is inside, origin inclusive and far edges exclusive.
	pub const fn contains(&self, pos: ScreenPos) -> bool {
		pos.x >= self.x && pos.x < self.right() && pos.y >= self.y && pos.y < self.bottom()
	}
}

/// A screen cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScreenPos {
	pub x: u16,
	pub y: u16,
}

impl ScreenPos {
	pub const fn new(x: u16, y: u16) -> Self {
		Self { x, y }
	}
}
