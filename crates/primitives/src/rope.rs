//! Rope utilities for reading text around the caret.

use ropey::RopeSlice;

use crate::range::{CharIdx, CharLen};

/// Returns the first character index of the block (line) containing `pos`.
///
/// `pos` is clamped to the end of the text.
pub fn block_start(text: RopeSlice, pos: CharIdx) -> CharIdx {
	let pos = pos.min(text.len_chars());
	text.line_to_char(text.char_to_line(pos))
}

/// Returns the text immediately before `caret`, at most `max_chars` long and
/// never crossing the start of the caret's block.
pub fn text_before(text: RopeSlice, caret: CharIdx, max_chars: CharLen) -> String {
	let caret = caret.min(text.len_chars());
	let start = block_start(text, caret).max(caret.saturating_sub(max_chars));
	text.slice(start..caret).to_string()
}

#[cfg(test)]
mod tests {
	use ropey::Rope;

	use super::*;

	#[test]
	fn block_start_finds_line_start() {
		let text = Rope::from("first\nsecond line\nthird");
		let slice = text.slice(..);
		assert_eq!(block_start(slice, 0), 0);
		assert_eq!(block_start(slice, 5), 0);
		assert_eq!(block_start(slice, 6), 6);
		assert_eq!(block_start(slice, 12), 6);
		assert_eq!(block_start(slice, 100), 18);
	}

	#[test]
	fn text_before_stops_at_block_start() {
		let text = Rope::from("one @two\nhello @wor");
		assert_eq!(text_before(text.slice(..), 19, 200), "hello @wor");
	}

	#[test]
	fn text_before_respects_lookback() {
		let text = Rope::from("abcdefghij");
		assert_eq!(text_before(text.slice(..), 10, 3), "hij");
		assert_eq!(text_before(text.slice(..), 2, 3), "ab");
		assert_eq!(text_before(text.slice(..), 0, 3), "");
	}

	#[test]
	fn text_before_counts_chars_not_bytes() {
		let text = Rope::from("héllo @wörld");
		assert_eq!(text_before(text.slice(..), 12, 6), "@wörld");
	}
}
