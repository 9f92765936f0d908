//! Configuration for Quill.
//!
//! Configuration is a single TOML file with three sections:
//!
//! ```toml
//! [mention]
//! trigger = "@"
//! max-items = 10
//! max-lookback = 200
//!
//! [[notes]]
//! id = "n1"
//! title = "Project plan"
//! folder = "work"
//!
//! [[todos]]
//! id = "t1"
//! title = "Draft the roadmap"
//! list = "Today"
//! done = false
//! ```
//!
//! Every section is optional. Quill reads the file given on the command line,
//! or `$XDG_CONFIG_HOME/quill/config.toml` (`~/.config/quill/config.toml`)
//! when present.
//!
//! Syntax errors, unknown keys and out-of-range values fail the load.
//! Duplicate ids, blank titles and blank todo list names only drop the
//! entry; they are collected in [`Config::warnings`] for the caller to display.

pub mod error;

use std::path::{Path, PathBuf};

pub use error::{ConfigError, ConfigWarning, Result};
use quill_mention::MentionSettings;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::debug;


/// A note that can be mentioned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoteEntry {
	pub id: String,
	pub title: String,
	/// Folder shown as the row hint.
	#[serde(default)]
	pub folder: Option<String>,
}

/// A todo that can be mentioned, grouped by list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoEntry {
	pub id: String,
	pub title: String,
	/// Name of the todo list this item belongs to.
	pub list: String,
	#[serde(default)]
	pub done: bool,
}

/// Loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
	pub mention: MentionSettings,
	pub notes: Vec<NoteEntry>,
	pub todos: Vec<TodoEntry>,
	/// Non-fatal warnings encountered while loading.
	pub warnings: Vec<ConfigWarning>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
	mention: MentionSettings,
	notes: Vec<NoteEntry>,
	todos: Vec<TodoEntry>,
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(input)?;
		validate_mention(&raw.mention)?;

		let mut warnings = Vec::new();
		let notes = retain_valid(raw.notes, "notes", |n| (&n.id, &n.title), &mut warnings);
		let todos = retain_valid(raw.todos, "todos", |t| (&t.id, &t.title), &mut warnings)
			.into_iter()
			.filter(|todo| {
				let blank = todo.list.trim().is_empty();
				if blank {
					warnings.push(ConfigWarning::BlankList { id: todo.id.clone() });
				}
				!blank
			})
			.collect();

		Ok(Config {
			mention: raw.mention,
			notes,
			todos,
			warnings,
		})
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let config = Self::parse(&content)?;
		debug!(
			path = %path.display(),
			notes = config.notes.len(),
			todos = config.todos.len(),
			warnings = config.warnings.len(),
			"loaded config"
		);
		Ok(config)
	}

	/// Loads the user config file if it exists, else returns defaults.
	pub fn load_default() -> Result<Self> {
		match default_path() {
			Some(path) if path.is_file() => Self::load(path),
			_ => {
				debug!("no user config found, using defaults");
				Ok(Self::default())
			}
		}
	}
}

/// Location of the user config file: `<config dir>/quill/config.toml`.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("quill").join("config.toml"))
}

fn validate_mention(settings: &MentionSettings) -> Result<()> {
	let trigger = settings.trigger;
	if trigger.is_whitespace() || quill_mention::is_word_char(trigger) {
		return Err(ConfigError::Invalid {
			field: "mention.trigger",
			reason: format!("{trigger:?} cannot start a mention"),
		});
	}
	if settings.max_items == 0 {
		return Err(ConfigError::Invalid {
			field: "mention.max-items",
			reason: "must be at least 1".into(),
		});
	}
	if settings.max_lookback == 0 {
		return Err(ConfigError::Invalid {
			field: "mention.max-lookback",
			reason: "must be at least 1".into(),
		});
	}
	Ok(())
}

/// Drops entries with blank titles or ids seen earlier in the section.
fn retain_valid<T>(
	entries: Vec<T>,
	section: &'static str,
	key: impl Fn(&T) -> (&String, &String),
	warnings: &mut Vec<ConfigWarning>,
) -> Vec<T> {
	let mut seen = FxHashSet::default();
	entries
		.into_iter()
		.filter(|entry| {
			let (id, title) = key(entry);
			if title.trim().is_empty() {
				warnings.push(ConfigWarning::BlankTitle { section, id: id.clone() });
				return false;
			}
			if !seen.insert(id.clone()) {
				warnings.push(ConfigWarning::DuplicateId { section, id: id.clone() });
				return false;
			}
			true
		})
		.collect()
}
