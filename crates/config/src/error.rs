//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent a configuration from loading.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A value parsed but is outside its allowed domain.
	#[error("invalid value for '{field}': {reason}")]
	Invalid {
		/// Dotted key of the offending field, e.g. `mention.max-items`.
		field: &'static str,
		reason: String,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal problem found while loading.
///
/// The offending entry is dropped and the rest of the configuration loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// An id was already used earlier in the same section.
	DuplicateId {
		/// Section the entry belongs to (`notes` or `todos`).
		section: &'static str,
		id: String,
	},
	/// An entry has an empty or whitespace-only title.
	BlankTitle { section: &'static str, id: String },
	/// A todo names an empty or whitespace-only list.
	BlankList { id: String },
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::DuplicateId { section, id } => {
				write!(f, "duplicate id '{id}' in [[{section}]] will be ignored")
			}
			ConfigWarning::BlankTitle { section, id } => {
				write!(f, "entry '{id}' in [[{section}]] has a blank title and will be ignored")
			}
			ConfigWarning::BlankList { id } => {
				write!(f, "todo '{id}' has a blank list name and will be ignored")
			}
		}
	}
}
