//! The edited text and its single selection.
//!
//! A [`Document`] is a rope plus one selection range. Every content change
//! bumps [`Document::version`], which the editor uses to decide whether the
//! mention controller needs a rescan.

use quill_mention::{EditorHost, HostError, ItemInfo};
use quill_primitives::{CharIdx, CharLen, Range, Rope, TextRange, block_start, text_before};
use tracing::trace;
use unicode_width::UnicodeWidthStr;


/// Plain-text document with a single selection.
#[derive(Debug, Clone, Default)]
pub struct Document {
	content: Rope,
	selection: Range,
	version: u64,
	focused: bool,
	read_only: bool,
}

impl Document {
	/// Creates a focused document with the caret at the end of `text`.
	pub fn new(text: &str) -> Self {
		let content = Rope::from(text);
		let end = content.len_chars();
		Self {
			content,
			selection: Range::point(end),
			version: 0,
			focused: true,
			read_only: false,
		}
	}

	pub fn content(&self) -> &Rope {
		&self.content
	}

	pub fn text(&self) -> String {
		self.content.to_string()
	}

	pub fn len_chars(&self) -> CharLen {
		self.content.len_chars()
	}

	pub fn selection(&self) -> Range {
		self.selection
	}

	/// Caret position (selection head).
	pub fn caret(&self) -> CharIdx {
		self.selection.head
	}

	/// Replaces the selection, clamping both ends into the document.
	pub fn set_selection(&mut self, range: Range) {
		let max = self.len_chars();
		self.selection = Range::new(range.anchor.min(max), range.head.min(max));
	}

	/// Content version, bumped on every edit.
	pub fn version(&self) -> u64 {
		self.version
	}

	pub fn is_focused(&self) -> bool {
		self.focused
	}

	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
	}

	pub fn is_read_only(&self) -> bool {
		self.read_only
	}

	pub fn set_read_only(&mut self, read_only: bool) {
		self.read_only = read_only;
	}

	/// Replaces `range` with `text` and puts the caret after the inserted text.
	pub fn replace(&mut self, range: TextRange, text: &str) -> Result<(), HostError> {
		if self.read_only {
			return Err(HostError::ReadOnly);
		}
		let len = self.len_chars();
		if range.to > len {
			return Err(HostError::OutOfBounds {
				from: range.from,
				to: range.to,
				len,
			});
		}

		self.content.remove(range.from..range.to);
		self.content.insert(range.from, text);
		self.selection = Range::point(range.from + text.chars().count());
		self.version += 1;
		trace!(from = range.from, to = range.to, inserted = text.len(), version = self.version, "document edited");
		Ok(())
	}

	/// Types `text` over the selection.
	pub fn insert(&mut self, text: &str) -> Result<(), HostError> {
		self.replace(self.selection.span(), text)
	}

	/// Deletes the selection, or the character before the caret.
	pub fn delete_backward(&mut self) -> Result<(), HostError> {
		let span = match self.selection.span() {
			span if !span.is_empty() => span,
			_ if self.caret() == 0 => return Ok(()),
			_ => TextRange::new(self.caret() - 1, self.caret()),
		};
		self.replace(span, "")
	}

	/// Deletes the selection, or the character after the caret.
	pub fn delete_forward(&mut self) -> Result<(), HostError> {
		let span = match self.selection.span() {
			span if !span.is_empty() => span,
			_ if self.caret() >= self.len_chars() => return Ok(()),
			_ => TextRange::new(self.caret(), self.caret() + 1),
		};
		self.replace(span, "")
	}

	/// Moves the caret one character left, collapsing any selection to its start.
	pub fn move_left(&mut self) {
		let target = if self.selection.is_empty() {
			self.caret().saturating_sub(1)
		} else {
			self.selection.from()
		};
		self.selection = Range::point(target);
	}

	/// Moves the caret one character right, collapsing any selection to its end.
	pub fn move_right(&mut self) {
		let target = if self.selection.is_empty() {
			(self.caret() + 1).min(self.len_chars())
		} else {
			self.selection.to()
		};
		self.selection = Range::point(target);
	}

	/// Moves the caret to the start of its line.
	pub fn move_line_start(&mut self) {
		self.selection = Range::point(self.line_start());
	}

	/// Moves the caret to the end of its line, before any line break.
	pub fn move_line_end(&mut self) {
		let line = self.content.char_to_line(self.caret());
		let start = self.content.line_to_char(line);
		let text = self.content.line(line);
		let trimmed = text.chars().take_while(|c| *c != '\n' && *c != '\r').count();
		self.selection = Range::point(start + trimmed);
	}

	/// Moves the caret up or down `delta` lines, keeping the column where possible.
	pub fn move_vertically(&mut self, delta: isize) {
		let line = self.content.char_to_line(self.caret());
		let column = self.caret() - self.line_start();
		let last = self.content.len_lines().saturating_sub(1);
		let target = line.saturating_add_signed(delta).min(last);
		if target == line {
			return;
		}
		let start = self.content.line_to_char(target);
		let width = self
			.content
			.line(target)
			.chars()
			.take_while(|c| *c != '\n' && *c != '\r')
			.count();
		self.selection = Range::point(start + column.min(width));
	}

	/// Start of the line containing the caret.
	pub fn line_start(&self) -> CharIdx {
		block_start(self.content.slice(..), self.caret())
	}

	/// Zero-based (line, display column) of the caret.
	pub fn caret_cell(&self) -> (usize, usize) {
		let caret = self.caret();
		let line = self.content.char_to_line(caret);
		let prefix = self.content.slice(self.line_start()..caret).to_string();
		(line, prefix.width())
	}
}

impl EditorHost for Document {
	fn selection(&self) -> Range {
		self.selection
	}

	fn block_start(&self) -> CharIdx {
		self.line_start()
	}

	fn text_before_caret(&self, max_chars: CharLen) -> String {
		text_before(self.content.slice(..), self.caret(), max_chars)
	}

	fn replace_with_reference(&mut self, range: TextRange, item: &ItemInfo) -> Result<(), HostError> {
		self.replace(range, &reference_text(item))
	}

	fn focus_document(&mut self) {
		self.focused = true;
	}
}

/// Inline form of a committed mention: `[[label|id]]` followed by a space.
///
/// The trailing space ends the mention so the next scan finds no open trigger.
pub fn reference_text(item: &ItemInfo) -> String {
	format!("[[{}|{}]] ", item.label, item.id)
}
