//! Editor: a document plus its mention menu.
//!
//! Keys go to the mention controller first. Keys it does not consume fall
//! through to default editing, and any resulting document or selection change
//! is reported back to the controller so the menu follows the caret.

use std::cell::Cell;
use std::rc::Rc;

use quill_mention::render::{Subscription, ViewportEvent, ViewportEvents};
use quill_mention::{HostError, MentionController, MenuHit, MenuRenderer, MenuState, MenuView, PointerKind};
use quill_primitives::{Key, KeyCode, MouseButton, MouseEvent, Range, Rect, ScreenPos};
use tracing::{debug, trace};

use crate::document::Document;


/// A single-view editor with an inline mention menu.
pub struct Editor {
	doc: Document,
	mention: MentionController,
	viewport: Rc<Cell<Rect>>,
	needs_redraw: Rc<Cell<bool>>,
	_viewport_listener: Subscription,
}

impl std::fmt::Debug for Editor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Editor")
			.field("doc", &self.doc)
			.field("mention", &self.mention)
			.field("viewport", &self.viewport.get())
			.finish_non_exhaustive()
	}
}

impl Editor {
	/// Creates an editor drawing into `viewport`, listening to `events` for
	/// resizes and scrolls for as long as the editor lives.
	pub fn new(doc: Document, mention: MentionController, events: &ViewportEvents, viewport: Rect) -> Self {
		let viewport = Rc::new(Cell::new(viewport));
		let needs_redraw = Rc::new(Cell::new(true));

		let listener = {
			let viewport = Rc::clone(&viewport);
			let needs_redraw = Rc::clone(&needs_redraw);
			events.subscribe(move |event| {
				if let ViewportEvent::Resized(area) = event {
					viewport.set(area);
				}
				needs_redraw.set(true);
			})
		};

		let mut editor = Self {
			doc,
			mention,
			viewport,
			needs_redraw,
			_viewport_listener: listener,
		};
		editor.mention.on_document_change(&editor.doc);
		editor
	}

	pub fn document(&self) -> &Document {
		&self.doc
	}

	pub fn mention(&self) -> &MentionController {
		&self.mention
	}

	pub fn viewport(&self) -> Rect {
		self.viewport.get()
	}

	/// Processes a key press. Returns true if the document or the menu changed.
	pub fn handle_key(&mut self, key: Key) -> bool {
		let before = self.snapshot();

		if self.mention.handle_key(&mut self.doc, &key) {
			trace!(%key, "key consumed by mention menu");
		} else {
			self.apply_default(key);
		}

		self.sync(before)
	}

	/// Processes a mouse event. Only events landing on the menu are handled.
	pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
		let kind = match event {
			MouseEvent::Press {
				button: MouseButton::Left, ..
			} => PointerKind::Click,
			MouseEvent::Move { .. } => PointerKind::Hover,
			_ => return false,
		};
		let Some(hit) = self.view().and_then(|view| view.hit_test(event.pos())) else {
			return false;
		};

		let before = self.snapshot();
		self.pointer(hit, kind);
		self.sync(before)
	}

	/// Screen cell of the caret inside the viewport.
	pub fn caret_screen_pos(&self) -> ScreenPos {
		let area = self.viewport.get();
		let (line, column) = self.doc.caret_cell();
		let clamp = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
		ScreenPos::new(area.x.saturating_add(clamp(column)), area.y.saturating_add(clamp(line)))
	}

	/// The menu frame for the current state, anchored at the caret.
	pub fn view(&self) -> Option<MenuView> {
		self.mention.view(self.caret_screen_pos(), self.viewport.get())
	}

	/// Returns true when state or viewport changed since the last render.
	pub fn needs_redraw(&self) -> bool {
		self.needs_redraw.get()
	}

	/// Renders the menu if anything changed since the last render.
	pub fn render(&mut self, renderer: &mut dyn MenuRenderer) -> bool {
		if !self.needs_redraw.replace(false) {
			return false;
		}
		renderer.render(self.view().as_ref());
		true
	}

	fn pointer(&mut self, hit: MenuHit, kind: PointerKind) {
		if self.mention.handle_pointer(&mut self.doc, hit, kind) {
			trace!(?hit, ?kind, "pointer consumed by mention menu");
		}
	}

	fn apply_default(&mut self, key: Key) {
		if let Some(c) = key.text_char() {
			self.edit(|doc| doc.insert(c.encode_utf8(&mut [0; 4])));
			return;
		}
		let Some(code) = key.plain() else {
			return;
		};
		match code {
			KeyCode::Enter => self.edit(|doc| doc.insert("\n")),
			KeyCode::Tab => self.edit(|doc| doc.insert("\t")),
			KeyCode::Backspace => self.edit(Document::delete_backward),
			KeyCode::Delete => self.edit(Document::delete_forward),
			KeyCode::Left => self.doc.move_left(),
			KeyCode::Right => self.doc.move_right(),
			KeyCode::Up => self.doc.move_vertically(-1),
			KeyCode::Down => self.doc.move_vertically(1),
			KeyCode::Home => self.doc.move_line_start(),
			KeyCode::End => self.doc.move_line_end(),
			_ => {}
		}
	}

	fn edit(&mut self, f: impl FnOnce(&mut Document) -> Result<(), HostError>) {
		if let Err(error) = f(&mut self.doc) {
			debug!(%error, "edit rejected");
		}
	}

	fn snapshot(&self) -> Snapshot {
		Snapshot {
			version: self.doc.version(),
			selection: self.doc.selection(),
			menu: self.mention.state().clone(),
		}
	}

	/// Rescans after a document or caret change and records whether a redraw is due.
	fn sync(&mut self, before: Snapshot) -> bool {
		if self.doc.version() != before.version || self.doc.selection() != before.selection {
			self.mention.on_document_change(&self.doc);
		}
		let changed = before != self.snapshot();
		if changed {
			self.needs_redraw.set(true);
		}
		changed
	}
}

#[derive(Debug, PartialEq, Eq)]
struct Snapshot {
	version: u64,
	selection: Range,
	menu: MenuState,
}
