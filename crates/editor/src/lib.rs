//! Reference host for the mention menu.
//!
//! [`Document`] is a rope-backed text with one selection and implements
//! [`quill_mention::EditorHost`]. [`Editor`] pairs it with a
//! [`quill_mention::MentionController`] and routes input. [`Catalog`] offers
//! configured notes and todos as suggestions, and [`TextMenuRenderer`] draws
//! menu frames as text.

pub mod catalog;
pub mod document;
pub mod editor;
pub mod render;

pub use catalog::Catalog;
pub use document::{Document, reference_text};
pub use editor::Editor;
pub use render::{TextMenuRenderer, render_lines};
