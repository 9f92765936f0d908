//! Key representation for editor and menu input.
//!
//! Keys have a compact textual notation used by scripts and tests:
//! a bare character (`a`, `@`), or an angle-bracketed name with optional
//! modifier prefixes (`<down>`, `<esc>`, `<C-a>`, `<A-S-tab>`, `<space>`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

mod mouse;
#[cfg(test)]
mod tests;

pub use mouse::{MouseButton, MouseEvent};

/// Modifier keys held alongside a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	pub ctrl: bool,
	pub alt: bool,
	pub shift: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	/// Only Ctrl pressed.
	pub const CTRL: Self = Self {
		ctrl: true,
		alt: false,
		shift: false,
	};

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}

	/// Returns true if Ctrl or Alt is held. Shift alone does not count as a chord.
	pub fn is_chord(self) -> bool {
		self.ctrl || self.alt
	}
}

/// Physical key identity, independent of modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	Char(char),
	Enter,
	Tab,
	Esc,
	Backspace,
	Delete,
	Home,
	End,
	PageUp,
	PageDown,
	Up,
	Down,
	Left,
	Right,
	F(u8),
}

impl KeyCode {
	fn name(&self) -> Option<&'static str> {
		Some(match self {
			KeyCode::Char(' ') => "space",
			KeyCode::Char('<') => "lt",
			KeyCode::Char('>') => "gt",
			KeyCode::Char(_) | KeyCode::F(_) => return None,
			KeyCode::Enter => "enter",
			KeyCode::Tab => "tab",
			KeyCode::Esc => "esc",
			KeyCode::Backspace => "backspace",
			KeyCode::Delete => "del",
			KeyCode::Home => "home",
			KeyCode::End => "end",
			KeyCode::PageUp => "pageup",
			KeyCode::PageDown => "pagedown",
			KeyCode::Up => "up",
			KeyCode::Down => "down",
			KeyCode::Left => "left",
			KeyCode::Right => "right",
		})
	}

	fn from_name(name: &str) -> Option<Self> {
		let mut chars = name.chars();
		if let (Some(c), None) = (chars.next(), chars.next()) {
			return Some(KeyCode::Char(c));
		}

		let lower = name.to_ascii_lowercase();
		let code = match lower.as_str() {
			"space" => KeyCode::Char(' '),
			"lt" => KeyCode::Char('<'),
			"gt" => KeyCode::Char('>'),
			"enter" | "ret" | "cr" => KeyCode::Enter,
			"tab" => KeyCode::Tab,
			"esc" | "escape" => KeyCode::Esc,
			"backspace" | "bs" => KeyCode::Backspace,
			"del" | "delete" => KeyCode::Delete,
			"home" => KeyCode::Home,
			"end" => KeyCode::End,
			"pageup" | "pgup" => KeyCode::PageUp,
			"pagedown" | "pgdn" => KeyCode::PageDown,
			"up" => KeyCode::Up,
			"down" => KeyCode::Down,
			"left" => KeyCode::Left,
			"right" => KeyCode::Right,
			other => {
				let n = other.strip_prefix('f')?.parse::<u8>().ok()?;
				if !(1..=24).contains(&n) {
					return None;
				}
				KeyCode::F(n)
			}
		};
		Some(code)
	}
}

impl fmt::Display for KeyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self, self.name()) {
			(_, Some(name)) => f.write_str(name),
			(KeyCode::F(n), None) => write!(f, "f{n}"),
			(KeyCode::Char(c), None) => write!(f, "{c}"),
			_ => Ok(()),
		}
	}
}

/// A key with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// Create a key from a character with no modifiers.
	pub const fn char(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::NONE,
		}
	}

	/// Create a key from a key code with no modifiers.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// Create a key with Ctrl modifier.
	pub const fn ctrl(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::CTRL,
		}
	}

	/// Add Shift modifier.
	pub const fn with_shift(self) -> Self {
		Self {
			modifiers: Modifiers {
				shift: true,
				..self.modifiers
			},
			..self
		}
	}

	/// Returns the code if no modifiers are held.
	pub fn plain(&self) -> Option<KeyCode> {
		self.modifiers.is_empty().then_some(self.code)
	}

	/// Character this key would type into a document, if any.
	///
	/// Ctrl/Alt chords never type text.
	pub fn text_char(&self) -> Option<char> {
		match self.code {
			KeyCode::Char(c) if !self.modifiers.is_chord() && !c.is_control() => Some(c),
			_ => None,
		}
	}

	/// Check if this key is escape.
	pub fn is_escape(&self) -> bool {
		matches!(self.plain(), Some(KeyCode::Esc))
	}
}

impl From<KeyCode> for Key {
	fn from(code: KeyCode) -> Self {
		Self::new(code)
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.modifiers.is_empty() && self.code.name().is_none() && !matches!(self.code, KeyCode::F(_)) {
			return write!(f, "{}", self.code);
		}
		f.write_str("<")?;
		if self.modifiers.ctrl {
			f.write_str("C-")?;
		}
		if self.modifiers.alt {
			f.write_str("A-")?;
		}
		if self.modifiers.shift {
			f.write_str("S-")?;
		}
		write!(f, "{}>", self.code)
	}
}

/// Errors produced when parsing key notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
	#[error("empty key notation")]
	Empty,
	#[error("unterminated key notation: {0}")]
	Unterminated(String),
	#[error("unknown key name: {0}")]
	UnknownKey(String),
}

impl FromStr for Key {
	type Err = KeyParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Err(KeyParseError::Empty);
		}

		let Some(body) = s.strip_prefix('<') else {
			let mut chars = s.chars();
			return match (chars.next(), chars.next()) {
				(Some(c), None) => Ok(Key::char(c)),
				_ => Err(KeyParseError::UnknownKey(s.to_string())),
			};
		};
		// A lone "<" is the literal character.
		if body.is_empty() {
			return Ok(Key::char('<'));
		}
		let Some(mut rest) = body.strip_suffix('>') else {
			return Err(KeyParseError::Unterminated(s.to_string()));
		};

		let mut modifiers = Modifiers::NONE;
		while rest.len() > 2 && rest.as_bytes()[1] == b'-' {
			match rest.as_bytes()[0] {
				b'C' | b'c' => modifiers.ctrl = true,
				b'A' | b'a' => modifiers.alt = true,
				b'S' | b's' => modifiers.shift = true,
				_ => break,
			}
			rest = &rest[2..];
		}

		let code = KeyCode::from_name(rest).ok_or_else(|| KeyParseError::UnknownKey(s.to_string()))?;
		Ok(Key { code, modifiers })
	}
}

/// Parses a whitespace-separated key script such as `@ p <down> <enter>`.
pub fn parse_keys(script: &str) -> Result<Vec<Key>, KeyParseError> {
	script.split_whitespace().map(str::parse).collect()
}
