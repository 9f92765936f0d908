//! Scoped viewport listeners.
//!
//! Resize and scroll notifications are delivered to explicit subscribers.
//! A [`Subscription`] unregisters its callback when dropped, so a menu
//! overlay's listener lives exactly as long as the overlay.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use quill_primitives::Rect;
use rustc_hash::FxHashMap;
use tracing::trace;

/// A change to the area the menu is positioned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
	/// The visible area changed size or origin.
	Resized(Rect),
	/// Content scrolled; caret screen coordinates are stale.
	Scrolled,
}

type Callback = Box<dyn FnMut(ViewportEvent)>;

#[derive(Default)]
struct Listeners {
	next_id: u64,
	callbacks: FxHashMap<u64, Callback>,
	emitting: bool,
	removed_while_emitting: Vec<u64>,
	/// Events emitted from inside a callback, delivered after the current one.
	queued: VecDeque<ViewportEvent>,
}

/// Registry of viewport listeners for one editor view.
///
/// Single-threaded. Callbacks may subscribe, drop subscriptions or emit while
/// an event is being delivered. A dropped listener receives nothing further,
/// new listeners join from the next event, and nested emits are queued behind
/// the event in flight.
#[derive(Clone, Default)]
pub struct ViewportEvents {
	inner: Rc<RefCell<Listeners>>,
}

impl std::fmt::Debug for ViewportEvents {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ViewportEvents").field("listeners", &self.len()).finish()
	}
}

impl ViewportEvents {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `callback` until the returned guard is dropped.
	#[must_use = "dropping the subscription unregisters the listener"]
	pub fn subscribe(&self, callback: impl FnMut(ViewportEvent) + 'static) -> Subscription {
		let mut inner = self.inner.borrow_mut();
		let id = inner.next_id;
		inner.next_id += 1;
		inner.callbacks.insert(id, Box::new(callback));
		trace!(id, "viewport listener registered");
		Subscription {
			id,
			registry: Rc::downgrade(&self.inner),
		}
	}

	/// Delivers `event` to every listener.
	pub fn emit(&self, mut event: ViewportEvent) {
		let mut delivering = {
			let mut inner = self.inner.borrow_mut();
			if inner.emitting {
				inner.queued.push_back(event);
				return;
			}
			inner.emitting = true;
			std::mem::take(&mut inner.callbacks)
		};

		loop {
			for (id, callback) in &mut delivering {
				if self.inner.borrow().removed_while_emitting.contains(id) {
					continue;
				}
				callback(event);
			}

			let mut inner = self.inner.borrow_mut();
			for id in std::mem::take(&mut inner.removed_while_emitting) {
				delivering.remove(&id);
			}
			let added = std::mem::take(&mut inner.callbacks);
			delivering.extend(added);

			match inner.queued.pop_front() {
				Some(next) => {
					trace!(?next, "delivering queued viewport event");
					event = next;
				}
				None => {
					inner.emitting = false;
					inner.callbacks = delivering;
					return;
				}
			}
		}
	}

	/// Number of live listeners.
	pub fn len(&self) -> usize {
		self.inner.borrow().callbacks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Guard for a registered viewport listener.
#[derive(Debug)]
pub struct Subscription {
	id: u64,
	registry: Weak<RefCell<Listeners>>,
}

impl Drop for Subscription {
	fn drop(&mut self) {
		let Some(registry) = self.registry.upgrade() else {
			return;
		};
		let mut inner = registry.borrow_mut();
		if inner.callbacks.remove(&self.id).is_none() && inner.emitting {
			inner.removed_while_emitting.push(self.id);
		}
		trace!(id = self.id, "viewport listener released");
	}
}
