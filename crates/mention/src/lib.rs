//! Inline mention menus for rich-text editors.
//!
//! Typing a trigger character (`@` by default) at a word boundary opens a
//! suggestion menu anchored at the caret. The text between the trigger and the
//! caret is the query; it refines the suggestions as the user types. Groups
//! expand into a one-level submenu, and choosing an item replaces the trigger
//! span with a reference through a [`CommitProtocol`].
//!
//! The crate is host-agnostic. A host implements [`EditorHost`], forwards every
//! document change to [`MentionController::on_document_change`], and offers
//! each key to [`MentionController::handle_key`] before its own handling.
//! Rendering goes through [`MenuView`], a pure projection of the menu state.
//!
//! # Pipeline
//!
//! 1. [`TriggerScanner::scan`] finds the active trigger before the caret.
//! 2. [`reduce`] folds the scan and any explicit [`MenuAction`] into the next
//!    [`MenuState`].
//! 3. [`arbiter::handle_key`] and [`arbiter::handle_pointer`] decide which
//!    input the menu owns.

pub mod arbiter;
mod commit;
mod controller;
mod host;
mod item;
mod options;
pub mod render;
mod scanner;
mod source;
mod state;

pub use arbiter::{MenuHit, MenuOutcome, PointerKind};
pub use commit::{Commit, CommitError, CommitProtocol, InsertReference};
pub use controller::MentionController;
pub use host::{EditorHost, HostError};
pub use item::{ItemInfo, SuggestionItem};
pub use options::{DEFAULT_MAX_ITEMS, MentionOptions, MentionSettings};
pub use render::{MenuLayout, MenuRenderer, MenuRow, MenuView};
pub use scanner::{DEFAULT_MAX_LOOKBACK, DEFAULT_TRIGGER, TriggerMatch, TriggerScanner, is_word_char};
pub use source::{SuggestionList, SuggestionSource};
pub use state::{MenuAction, MenuState, SelectionUpdate, reduce};
