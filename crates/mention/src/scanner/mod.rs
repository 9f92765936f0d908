//! Mention trigger detection.
//!
//! The scanner looks backward from a collapsed caret for the trigger character
//! and reports the span it covers. It is a pure function of the text before the
//! caret; it never reads the rest of the document.

use quill_primitives::{CharIdx, CharLen, Range, TextRange};


/// Character that opens a mention.
pub const DEFAULT_TRIGGER: char = '@';

/// Maximum number of characters inspected before the caret.
pub const DEFAULT_MAX_LOOKBACK: CharLen = 200;

/// An active mention: the trigger at `from`, the caret at `to`, and the text between.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TriggerMatch {
	/// Offset of the trigger character.
	pub from: CharIdx,
	/// Caret offset at scan time.
	pub to: CharIdx,
	/// Text between the trigger and the caret.
	pub query: String,
}

impl TriggerMatch {
	/// Document span a commit replaces.
	pub fn range(&self) -> TextRange {
		TextRange::new(self.from, self.to)
	}
}

/// Detects an open mention before the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerScanner {
	trigger: char,
	max_lookback: CharLen,
}

impl Default for TriggerScanner {
	fn default() -> Self {
		Self::new(DEFAULT_TRIGGER, DEFAULT_MAX_LOOKBACK)
	}
}

impl TriggerScanner {
	pub fn new(trigger: char, max_lookback: CharLen) -> Self {
		Self { trigger, max_lookback }
	}

	pub fn trigger(&self) -> char {
		self.trigger
	}

	pub fn max_lookback(&self) -> CharLen {
		self.max_lookback
	}

	/// Scans for an open mention.
	///
	/// `text_before_caret` is document text ending exactly at the caret; it may
	/// be longer than the lookback window. `block_start` is the offset where the
	/// caret's block begins. Returns `None` for range selections, when no
	/// trigger is in the window, when the trigger is glued to a preceding word,
	/// path or hyphenated token, or when the query already contains whitespace.
	pub fn scan(&self, text_before_caret: &str, selection: Range, block_start: CharIdx) -> Option<TriggerMatch> {
		if !selection.is_empty() {
			return None;
		}

		let caret = selection.head;
		let available = text_before_caret.chars().count();
		let window_len = available.min(caret.saturating_sub(block_start)).min(self.max_lookback);
		let window = tail_chars(text_before_caret, available - window_len);
		let window_start = caret - window_len;

		let trigger_byte = window.rfind(self.trigger)?;
		let before = &window[..trigger_byte];
		if before.chars().next_back().is_some_and(blocks_trigger) {
			return None;
		}

		let query = &window[trigger_byte + self.trigger.len_utf8()..];
		if query.chars().any(char::is_whitespace) {
			return None;
		}

		Some(TriggerMatch {
			from: window_start + before.chars().count(),
			to: caret,
			query: query.to_string(),
		})
	}
}

/// Returns true for characters that may appear in an identifier.
pub fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

/// A trigger directly after one of these is part of a larger token (`foo@bar`, `a/@b`, `x-@y`).
fn blocks_trigger(c: char) -> bool {
	is_word_char(c) || c == '/' || c == '-'
}

/// `text` without its first `skip` characters.
fn tail_chars(text: &str, skip: usize) -> &str {
	match text.char_indices().nth(skip) {
		Some((byte, _)) => &text[byte..],
		None => "",
	}
}
