//! Controller configuration.

use serde::{Deserialize, Serialize};

use crate::commit::CommitProtocol;
use crate::scanner::{DEFAULT_MAX_LOOKBACK, DEFAULT_TRIGGER};
use crate::source::SuggestionSource;

/// Default cap on visible list rows.
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Plain-data tunables, loadable from a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct MentionSettings {
	/// Character that opens a mention.
	pub trigger: char,
	/// Cap on the flat list. Submenus are not capped.
	pub max_items: usize,
	/// Characters inspected before the caret when scanning.
	pub max_lookback: usize,
}

impl Default for MentionSettings {
	fn default() -> Self {
		Self {
			trigger: DEFAULT_TRIGGER,
			max_items: DEFAULT_MAX_ITEMS,
			max_lookback: DEFAULT_MAX_LOOKBACK,
		}
	}
}

/// Everything needed to build a [`MentionController`](crate::MentionController).
pub struct MentionOptions {
	pub source: Box<dyn SuggestionSource>,
	/// Commit handler; `None` inserts a host reference.
	pub on_select: Option<Box<dyn CommitProtocol>>,
	pub settings: MentionSettings,
}

impl MentionOptions {
	pub fn new(source: impl SuggestionSource + 'static) -> Self {
		Self {
			source: Box::new(source),
			on_select: None,
			settings: MentionSettings::default(),
		}
	}

	pub fn with_on_select(mut self, on_select: impl CommitProtocol + 'static) -> Self {
		self.on_select = Some(Box::new(on_select));
		self
	}

	pub fn with_settings(mut self, settings: MentionSettings) -> Self {
		self.settings = settings;
		self
	}

	pub fn with_max_items(mut self, max_items: usize) -> Self {
		self.settings.max_items = max_items;
		self
	}
}

impl std::fmt::Debug for MentionOptions {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MentionOptions")
			.field("on_select", &self.on_select.is_some())
			.field("settings", &self.settings)
			.finish_non_exhaustive()
	}
}
