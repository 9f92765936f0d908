//! Suggestion sources and the capped, sanitized list the menu navigates.
//!
//! Sources are synchronous and infallible. Callers with asynchronous backends
//! pre-fetch into a cache and expose the cache through [`SuggestionSource`].

use crate::item::{ItemInfo, SuggestionItem};

/// Provides suggestions for a mention query.
///
/// Implementations must be pure with respect to `query`: the controller
/// re-queries on every scan and relies on identical queries yielding identical
/// lists. Children of groups are leaves by type.
pub trait SuggestionSource {
	/// Returns suggestions for `query` in display order.
	fn suggestions(&self, query: &str) -> Vec<SuggestionItem>;
}

impl<F> SuggestionSource for F
where
	F: Fn(&str) -> Vec<SuggestionItem>,
{
	fn suggestions(&self, query: &str) -> Vec<SuggestionItem> {
		self(query)
	}
}

/// The visible suggestion rows for the current query.
///
/// Malformed rows are removed before capping, so they never occupy a
/// navigable slot. Submenu children are not capped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
	items: Vec<SuggestionItem>,
}

impl SuggestionList {
	/// Builds a list from raw items, dropping malformed rows and keeping at most `max_items`.
	pub fn new(items: impl IntoIterator<Item = SuggestionItem>, max_items: usize) -> Self {
		let items = items.into_iter().filter_map(SuggestionItem::sanitized).take(max_items).collect();
		Self { items }
	}

	/// Queries `source` and builds the visible list.
	pub fn query(source: &dyn SuggestionSource, query: &str, max_items: usize) -> Self {
		Self::new(source.suggestions(query), max_items)
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&SuggestionItem> {
		self.items.get(index)
	}

	pub fn items(&self) -> &[SuggestionItem] {
		&self.items
	}

	/// Returns true if the row at `index` exists and opens a submenu.
	pub fn is_group(&self, index: usize) -> bool {
		self.get(index).is_some_and(SuggestionItem::is_group)
	}

	/// Submenu rows of the item at `index`; empty for leaves or out-of-range indices.
	pub fn children(&self, index: usize) -> &[ItemInfo] {
		self.get(index).map(SuggestionItem::children).unwrap_or_default()
	}
}
