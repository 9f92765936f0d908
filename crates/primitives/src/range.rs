/// A position in the text, measured in characters (not bytes).
///
/// This is the canonical coordinate space for documents and trigger matches.
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
pub type CharLen = usize;

/// A selection range defined by anchor and head positions.
///
/// The anchor is the fixed end; the head is where the caret sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
	/// The fixed end of the range.
	pub anchor: CharIdx,
	/// The moving end of the range (caret position).
	pub head: CharIdx,
}

impl Range {
	/// Creates a new range from anchor to head.
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// Creates a zero-width range (caret) at the given position.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Returns the start of the range regardless of direction.
	#[inline]
	pub fn from(&self) -> CharIdx {
		self.anchor.min(self.head)
	}

	/// Returns the end of the range (exclusive) regardless of direction.
	#[inline]
	pub fn to(&self) -> CharIdx {
		self.anchor.max(self.head)
	}

	/// Returns true for a collapsed caret.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	/// Number of characters covered.
	pub fn len(&self) -> CharLen {
		self.to() - self.from()
	}

	/// Collapses to a caret at the head.
	pub fn collapse(self) -> Self {
		Self::point(self.head)
	}

	/// Normalized `[from, to)` span of this selection.
	pub fn span(&self) -> TextRange {
		TextRange::new(self.from(), self.to())
	}
}

/// A directionless `[from, to)` span of document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
	pub from: CharIdx,
	pub to: CharIdx,
}

impl TextRange {
	/// Creates a span, swapping the ends if given backwards.
	pub fn new(from: CharIdx, to: CharIdx) -> Self {
		if from <= to { Self { from, to } } else { Self { from: to, to: from } }
	}

	pub fn len(&self) -> CharLen {
		self.to - self.from
	}

	pub fn is_empty(&self) -> bool {
		self.from == self.to
	}

	/// Returns true if `pos` lies within `[from, to]`.
	pub fn touches(&self, pos: CharIdx) -> bool {
		self.from <= pos && pos <= self.to
	}
}
