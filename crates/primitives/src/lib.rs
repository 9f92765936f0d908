//! Core value types shared across quill: keys, text ranges, screen geometry and rope helpers.

/// Screen-space rectangles and positions.
pub mod geometry;
/// Key and mouse event types.
pub mod key;
/// Text range types measured in characters.
pub mod range;
/// Rope utilities for reading text around the caret.
pub mod rope;

pub use geometry::{Rect, ScreenPos};
pub use key::{Key, KeyCode, KeyParseError, Modifiers, MouseButton, MouseEvent, parse_keys};
pub use range::{CharIdx, CharLen, Range, TextRange};
pub use rope::{block_start, text_before};
pub use ropey::{Rope, RopeSlice};
