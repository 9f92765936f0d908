//! The mention controller: one per editor view.
//!
//! Owns the menu state, the latest scan and the live suggestion list, and
//! wires the scanner, reducer and arbiter together. Hosts drive it with two
//! calls: [`MentionController::on_document_change`] after every edit or caret
//! move, and [`MentionController::handle_key`] before their own key handling.

use quill_primitives::{Key, Rect, ScreenPos};
use tracing::{debug, trace, warn};

use crate::arbiter::{self, MenuHit, MenuOutcome, PointerKind};
use crate::commit::{Commit, CommitProtocol, InsertReference};
use crate::host::EditorHost;
use crate::options::{MentionOptions, MentionSettings};
use crate::render::MenuView;
use crate::scanner::{TriggerMatch, TriggerScanner};
use crate::source::{SuggestionList, SuggestionSource};
use crate::state::{MenuAction, MenuState, reduce};


pub struct MentionController {
	scanner: TriggerScanner,
	source: Box<dyn SuggestionSource>,
	on_select: Box<dyn CommitProtocol>,
	max_items: usize,
	state: MenuState,
	scan: Option<TriggerMatch>,
	suggestions: SuggestionList,
}

impl std::fmt::Debug for MentionController {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MentionController")
			.field("scanner", &self.scanner)
			.field("max_items", &self.max_items)
			.field("state", &self.state)
			.field("suggestions", &self.suggestions.len())
			.finish_non_exhaustive()
	}
}

impl MentionController {
	/// Creates an inactive controller.
	pub fn new(options: MentionOptions) -> Self {
		let MentionOptions {
			source,
			on_select,
			settings: MentionSettings {
				trigger,
				max_items,
				max_lookback,
			},
		} = options;

		Self {
			scanner: TriggerScanner::new(trigger, max_lookback),
			source,
			on_select: on_select.unwrap_or_else(|| Box::new(InsertReference)),
			max_items,
			state: MenuState::inactive(),
			scan: None,
			suggestions: SuggestionList::default(),
		}
	}

	pub fn state(&self) -> &MenuState {
		&self.state
	}

	pub fn is_active(&self) -> bool {
		self.state.active
	}

	/// Visible rows for the current query. Empty while inactive.
	pub fn suggestions(&self) -> &SuggestionList {
		&self.suggestions
	}

	/// Rescans after a document or selection change.
	///
	/// Returns true if the menu state changed.
	pub fn on_document_change(&mut self, host: &dyn EditorHost) -> bool {
		let text = host.text_before_caret(self.scanner.max_lookback());
		let scan = self.scanner.scan(&text, host.selection(), host.block_start());
		trace!(?scan, "mention scan");
		self.apply(scan, None)
	}

	/// Offers a key press to the menu.
	///
	/// Returns true if the menu consumed it; the host must then skip its own
	/// handling of the key.
	pub fn handle_key(&mut self, host: &mut dyn EditorHost, key: &Key) -> bool {
		let outcome = arbiter::handle_key(key, &self.state, &self.suggestions);
		if outcome.consumed {
			debug!(%key, "mention menu consumed key");
		}
		self.resolve(host, outcome)
	}

	/// Offers a pointer event that landed on the rendered menu.
	pub fn handle_pointer(&mut self, host: &mut dyn EditorHost, hit: MenuHit, kind: PointerKind) -> bool {
		let outcome = arbiter::handle_pointer(hit, kind, &self.state, &self.suggestions);
		self.resolve(host, outcome)
	}

	/// Dismisses the menu without committing.
	pub fn close(&mut self) {
		let scan = self.scan.clone();
		self.apply(scan, Some(MenuAction::Close));
	}

	/// Builds the render projection for the current state.
	pub fn view(&self, caret: ScreenPos, viewport: Rect) -> Option<MenuView> {
		MenuView::build(&self.state, &self.suggestions, caret, viewport)
	}

	fn resolve(&mut self, host: &mut dyn EditorHost, outcome: MenuOutcome) -> bool {
		let MenuOutcome { consumed, action, commit } = outcome;
		if let Some(commit) = commit {
			self.commit(host, &commit);
		}
		if let Some(action) = action {
			let scan = self.scan.clone();
			self.apply(scan, Some(action));
		}
		if consumed && !self.state.active {
			host.focus_document();
		}
		consumed
	}

	fn commit(&mut self, host: &mut dyn EditorHost, commit: &Commit) {
		debug!(id = %commit.item.id, from = commit.range.from, to = commit.range.to, "committing mention");
		if let Err(error) = self.on_select.commit(host, commit) {
			warn!(%error, "mention commit failed");
		}
		// The document changed underneath the scan; only a rescan may reopen the menu.
		self.scan = None;
	}

	fn apply(&mut self, scan: Option<TriggerMatch>, action: Option<MenuAction>) -> bool {
		let next = reduce(&self.state, scan.as_ref(), action.as_ref());

		if !next.active {
			self.suggestions = SuggestionList::default();
		} else if !self.state.active || next.query != self.state.query {
			self.suggestions = SuggestionList::query(self.source.as_ref(), &next.query, self.max_items);
			debug!(query = %next.query, count = self.suggestions.len(), "mention suggestions refreshed");
		}

		let next = next.fit_to(&self.suggestions);
		self.scan = scan.filter(|_| next.active);

		if next == self.state {
			return false;
		}
		if next.active != self.state.active {
			debug!(active = next.active, from = next.from, query = %next.query, "mention menu toggled");
		}
		self.state = next;
		true
	}
}
