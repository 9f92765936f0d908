//! Mouse event types.

use super::Modifiers;
use crate::geometry::ScreenPos;

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
	Left,
	Right,
	Middle,
}

/// Mouse event types, in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
	Press {
		button: MouseButton,
		pos: ScreenPos,
		modifiers: Modifiers,
	},
	Release {
		pos: ScreenPos,
	},
	Move {
		pos: ScreenPos,
	},
}

impl MouseEvent {
	/// Screen position the event occurred at.
	pub fn pos(&self) -> ScreenPos {
		match self {
			MouseEvent::Press { pos, .. } | MouseEvent::Release { pos } | MouseEvent::Move { pos } => *pos,
		}
	}

	pub fn modifiers(&self) -> Modifiers {
		match self {
			MouseEvent::Press { modifiers, .. } => *modifiers,
			MouseEvent::Release { .. } | MouseEvent::Move { .. } => Modifiers::NONE,
		}
	}
}
