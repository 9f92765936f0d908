//! Plain-text menu rendering.

use quill_mention::render::EMPTY_PLACEHOLDER;
use quill_mention::{MenuRenderer, MenuRow, MenuView};
use quill_primitives::Rect;
use unicode_width::UnicodeWidthChar;

/// Marker drawn in the left padding cell of the highlighted row.
const SELECTED_MARKER: char = '>';

/// Renders menu frames as text panels, one frame per call.
///
/// Each panel starts with a header line giving its screen rectangle, followed
/// by one line per visible row padded to the panel width.
#[derive(Debug, Default)]
pub struct TextMenuRenderer {
	frames: Vec<String>,
}

impl TextMenuRenderer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Frames rendered so far, oldest first.
	pub fn frames(&self) -> &[String] {
		&self.frames
	}

	pub fn last_frame(&self) -> Option<&str> {
		self.frames.last().map(String::as_str)
	}

	pub fn take_frames(&mut self) -> Vec<String> {
		std::mem::take(&mut self.frames)
	}
}

impl MenuRenderer for TextMenuRenderer {
	fn render(&mut self, view: Option<&MenuView>) {
		let frame = match view {
			Some(view) => render_lines(view).join("\n"),
			None => "(menu closed)".to_string(),
		};
		self.frames.push(frame);
	}
}

/// Lays out `view` as text lines.
pub fn render_lines(view: &MenuView) -> Vec<String> {
	let mut lines = Vec::new();
	let list = view.layout.list;
	lines.push(panel_header("menu", list, &view.state.query));
	if view.rows.is_empty() {
		lines.push(pad_row(' ', EMPTY_PLACEHOLDER, list.width));
	} else {
		lines.extend(panel_rows(&view.rows, list));
	}

	if let (Some(children), Some(rect)) = (&view.submenu, view.layout.submenu) {
		lines.push(panel_header("submenu", rect, ""));
		lines.extend(panel_rows(children, rect));
	}
	lines
}

fn panel_header(name: &str, rect: Rect, query: &str) -> String {
	let mut header = format!("{name} at {},{} {}x{}", rect.x, rect.y, rect.width, rect.height);
	if !query.is_empty() {
		header.push_str(&format!(" query={query:?}"));
	}
	header
}

fn panel_rows(rows: &[MenuRow], rect: Rect) -> impl Iterator<Item = String> + '_ {
	rows.iter().take(usize::from(rect.height)).map(move |row| {
		let marker = if row.selected { SELECTED_MARKER } else { ' ' };
		pad_row(marker, &row.text(), rect.width)
	})
}

/// `marker text` padded with spaces, or truncated, to exactly `width` cells.
fn pad_row(marker: char, text: &str, width: u16) -> String {
	let width = usize::from(width);
	if width < 2 {
		return std::iter::once(marker).take(width).collect();
	}
	let inner = width - 2;
	let mut line = String::with_capacity(width + 4);
	line.push(marker);

	let mut used = 0;
	for c in text.chars() {
		let w = c.width().unwrap_or(0);
		if used + w > inner {
			break;
		}
		line.push(c);
		used += w;
	}
	line.extend(std::iter::repeat_n(' ', inner - used + 1));
	line
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn rows_are_padded_to_panel_width() {
		assert_eq!(pad_row('>', "Alpha", 9), ">Alpha   ");
		assert_eq!(pad_row(' ', "日本", 8), " 日本   ");
	}

	#[test]
	fn narrow_panels_never_overflow() {
		assert_eq!(pad_row('>', "Alpha", 1), ">");
		assert_eq!(pad_row(' ', "Alpha", 0), "");
		assert_eq!(pad_row('>', "Alpha", 2), "> ");
	}

	#[test]
	fn long_rows_are_truncated() {
		assert_eq!(pad_row(' ', "Alphabet", 6), " Alph ");
		assert_eq!(pad_row(' ', "日本語", 5), " 日  ");
	}
}
