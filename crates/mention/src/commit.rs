//! Committing a chosen suggestion into the document.

use quill_primitives::TextRange;
use thiserror::Error;

use crate::host::{EditorHost, HostError};
use crate::item::ItemInfo;

/// A chosen item and the document span it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
	pub range: TextRange,
	pub item: ItemInfo,
}

/// Errors surfaced when a commit cannot be applied.
///
/// The menu closes either way; these exist so the failure can be logged.
#[derive(Debug, Error)]
pub enum CommitError {
	#[error("host rejected reference insertion for {id:?}: {source}")]
	Rejected {
		id: String,
		#[source]
		source: HostError,
	},
	#[error("commit handler failed: {0}")]
	Handler(String),
}

/// Turns a chosen suggestion into a document mutation.
///
/// Implementations own the representation of the committed item. After this
/// returns, successfully or not, the controller closes the menu and asks the
/// host to refocus the document.
pub trait CommitProtocol {
	fn commit(&mut self, host: &mut dyn EditorHost, commit: &Commit) -> Result<(), CommitError>;
}

/// Default protocol: ask the host to replace the mention with an inline reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertReference;

impl CommitProtocol for InsertReference {
	fn commit(&mut self, host: &mut dyn EditorHost, commit: &Commit) -> Result<(), CommitError> {
		host.replace_with_reference(commit.range, &commit.item)
			.map_err(|source| CommitError::Rejected {
				id: commit.item.id.clone(),
				source,
			})
	}
}

impl<F> CommitProtocol for F
where
	F: FnMut(&mut dyn EditorHost, &Commit) -> Result<(), CommitError>,
{
	fn commit(&mut self, host: &mut dyn EditorHost, commit: &Commit) -> Result<(), CommitError> {
		self(host, commit)
	}
}
