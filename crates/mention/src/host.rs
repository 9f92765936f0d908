//! Host editor adapter.
//!
//! The mention core never owns a document. Hosts expose the few reads the
//! scanner needs and a transactional replacement used on commit; they also
//! notify the controller after every document or selection change.

use quill_primitives::{CharIdx, CharLen, Range, TextRange};
use thiserror::Error;

use crate::item::ItemInfo;

/// Errors a host may report when a mutation cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
	#[error("range {from}..{to} is outside the document (length {len})")]
	OutOfBounds { from: CharIdx, to: CharIdx, len: CharLen },
	#[error("document is read-only")]
	ReadOnly,
}

/// Services the mention controller consumes from the hosting editor.
pub trait EditorHost {
	/// Current primary selection. A collapsed range is a caret.
	fn selection(&self) -> Range;

	/// Offset where the block (paragraph) containing the caret begins.
	fn block_start(&self) -> CharIdx;

	/// Text ending at the caret, at most `max_chars` characters and not crossing the block start.
	fn text_before_caret(&self, max_chars: CharLen) -> String;

	/// Replaces `range` with the host's inline representation of `item` in one transaction.
	fn replace_with_reference(&mut self, range: TextRange, item: &ItemInfo) -> Result<(), HostError>;

	/// Returns keyboard focus to the document.
	fn focus_document(&mut self);
}
