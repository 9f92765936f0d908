//! Key script replay.

use std::fmt;

use quill_config::Config;
use quill_editor::{Catalog, Document, Editor, TextMenuRenderer};
use quill_mention::render::ViewportEvents;
use quill_mention::{MentionController, MentionOptions};
use quill_primitives::{Key, Rect};
use tracing::debug;

/// Menu frames and final document produced by a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
	/// Frames in render order, each tagged with the key that produced it
	/// (`None` for the initial frame).
	pub frames: Vec<(Option<Key>, String)>,
	pub document: String,
}

/// Replays `keys` against a fresh editor holding `text`.
pub fn replay(config: &Config, text: &str, keys: &[Key], viewport: Rect) -> Transcript {
	let options = MentionOptions::new(Catalog::from_config(config)).with_settings(config.mention);
	let events = ViewportEvents::new();
	let mut editor = Editor::new(Document::new(text), MentionController::new(options), &events, viewport);
	let mut renderer = TextMenuRenderer::new();
	let mut frames = Vec::new();

	if editor.render(&mut renderer) {
		frames.extend(renderer.take_frames().into_iter().map(|frame| (None, frame)));
	}
	for &key in keys {
		let changed = editor.handle_key(key);
		debug!(%key, changed, "replayed key");
		if editor.render(&mut renderer) {
			frames.extend(renderer.take_frames().into_iter().map(|frame| (Some(key), frame)));
		}
	}

	Transcript {
		frames,
		document: editor.document().text(),
	}
}

impl fmt::Display for Transcript {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (key, frame) in &self.frames {
			match key {
				Some(key) => writeln!(f, "-- {key}")?,
				None => writeln!(f, "-- start")?,
			}
			writeln!(f, "{frame}")?;
		}
		writeln!(f, "-- document")?;
		write!(f, "{}", self.document)
	}
}
