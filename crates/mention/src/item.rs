//! Suggestion tree nodes.
//!
//! A suggestion is either a selectable leaf or a group that opens a submenu of
//! leaves. Groups never nest: the child type is [`ItemInfo`], not
//! [`SuggestionItem`], so depth is at most one by construction.

/// Display and identity data carried by every suggestion row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemInfo {
	/// Stable identifier handed to the host on commit.
	pub id: String,
	/// Text shown in the menu.
	pub label: String,
	/// Optional glyph shown before the label.
	pub icon: Option<String>,
	/// Optional secondary text shown after the label.
	pub hint: Option<String>,
	/// Free-form item category (e.g. `note`, `todo`).
	pub kind: Option<String>,
}

impl ItemInfo {
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			..Self::default()
		}
	}

	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
		self.hint = Some(hint.into());
		self
	}

	pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
		self.kind = Some(kind.into());
		self
	}

	/// Rows without a visible label are skipped during navigation and rendering.
	pub fn is_well_formed(&self) -> bool {
		!self.label.trim().is_empty()
	}
}

/// A node in the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionItem {
	/// A selectable row that commits itself.
	Leaf(ItemInfo),
	/// A row that opens a submenu. `children` is never empty.
	Group { info: ItemInfo, children: Vec<ItemInfo> },
}

impl SuggestionItem {
	/// Creates a selectable leaf.
	pub fn leaf(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self::Leaf(ItemInfo::new(id, label))
	}

	/// Creates a group. A group without children is a leaf.
	pub fn group(info: ItemInfo, children: Vec<ItemInfo>) -> Self {
		if children.is_empty() {
			Self::Leaf(info)
		} else {
			Self::Group { info, children }
		}
	}

	pub fn info(&self) -> &ItemInfo {
		match self {
			Self::Leaf(info) | Self::Group { info, .. } => info,
		}
	}

	pub fn id(&self) -> &str {
		&self.info().id
	}

	pub fn label(&self) -> &str {
		&self.info().label
	}

	/// Returns true if this item opens a submenu.
	pub fn is_group(&self) -> bool {
		matches!(self, Self::Group { children, .. } if !children.is_empty())
	}

	/// Submenu rows; empty for leaves.
	pub fn children(&self) -> &[ItemInfo] {
		match self {
			Self::Leaf(_) => &[],
			Self::Group { children, .. } => children,
		}
	}

	/// Drops malformed rows. Returns `None` if the item itself is malformed.
	///
	/// A group left without well-formed children degrades to a leaf.
	pub(crate) fn sanitized(self) -> Option<Self> {
		match self {
			Self::Leaf(info) => info.is_well_formed().then_some(Self::Leaf(info)),
			Self::Group { info, children } => {
				if !info.is_well_formed() {
					return None;
				}
				let children = children.into_iter().filter(ItemInfo::is_well_formed).collect();
				Some(Self::group(info, children))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn group_without_children_is_leaf() {
		let item = SuggestionItem::group(ItemInfo::new("g", "Group"), Vec::new());
		assert!(!item.is_group());
		assert!(matches!(item, SuggestionItem::Leaf(_)));
		assert!(item.children().is_empty());
	}

	#[test]
	fn sanitized_drops_blank_labels() {
		assert_eq!(SuggestionItem::leaf("a", "  ").sanitized(), None);

		let group = SuggestionItem::group(
			ItemInfo::new("g", "Group"),
			vec![ItemInfo::new("c1", ""), ItemInfo::new("c2", "Two")],
		);
		let clean = group.sanitized().unwrap();
		assert_eq!(clean.children(), &[ItemInfo::new("c2", "Two")]);
	}

	#[test]
	fn sanitized_group_with_only_blank_children_degrades_to_leaf() {
		let group = SuggestionItem::group(ItemInfo::new("g", "Group"), vec![ItemInfo::new("c1", "")]);
		let clean = group.sanitized().unwrap();
		assert!(!clean.is_group());
		assert_eq!(clean.label(), "Group");
	}
}
