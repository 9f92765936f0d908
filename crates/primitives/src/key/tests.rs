use pretty_assertions::assert_eq;

use super::*;

#[test]
fn bare_characters_parse_without_modifiers() {
	assert_eq!("a".parse::<Key>(), Ok(Key::char('a')));
	assert_eq!("@".parse::<Key>(), Ok(Key::char('@')));
	assert_eq!("<".parse::<Key>(), Ok(Key::char('<')));
}

#[test]
fn named_keys_are_case_insensitive() {
	assert_eq!("<down>".parse::<Key>(), Ok(Key::new(KeyCode::Down)));
	assert_eq!("<Esc>".parse::<Key>(), Ok(Key::new(KeyCode::Esc)));
	assert_eq!("<ESCAPE>".parse::<Key>(), Ok(Key::new(KeyCode::Esc)));
	assert_eq!("<space>".parse::<Key>(), Ok(Key::char(' ')));
	assert_eq!("<f12>".parse::<Key>(), Ok(Key::new(KeyCode::F(12))));
}

#[test]
fn modifier_prefixes_stack() {
	let key: Key = "<C-A-x>".parse().unwrap();
	assert!(key.modifiers.ctrl);
	assert!(key.modifiers.alt);
	assert!(!key.modifiers.shift);
	assert_eq!(key.code, KeyCode::Char('x'));

	let key: Key = "<S-tab>".parse().unwrap();
	assert_eq!(key, Key::new(KeyCode::Tab).with_shift());

	let key: Key = "<C-->".parse().unwrap();
	assert_eq!(key, Key::ctrl('-'));
}

#[test]
fn malformed_notation_is_rejected() {
	assert_eq!("".parse::<Key>(), Err(KeyParseError::Empty));
	assert_eq!("<down".parse::<Key>(), Err(KeyParseError::Unterminated("<down".into())));
	assert_eq!("<bogus>".parse::<Key>(), Err(KeyParseError::UnknownKey("<bogus>".into())));
	assert_eq!("ab".parse::<Key>(), Err(KeyParseError::UnknownKey("ab".into())));
	assert_eq!("<f99>".parse::<Key>(), Err(KeyParseError::UnknownKey("<f99>".into())));
}

#[test]
fn display_uses_parseable_notation() {
	for notation in ["a", "<down>", "<C-a>", "<A-S-enter>", "<space>", "<lt>", "<f3>"] {
		let key: Key = notation.parse().unwrap();
		assert_eq!(key.to_string(), notation);
		assert_eq!(key.to_string().parse::<Key>(), Ok(key));
	}
}

#[test]
fn text_char_ignores_chords() {
	assert_eq!(Key::char('x').text_char(), Some('x'));
	assert_eq!(Key::char('X').with_shift().text_char(), Some('X'));
	assert_eq!(Key::ctrl('x').text_char(), None);
	assert_eq!(Key::new(KeyCode::Enter).text_char(), None);
}

#[test]
fn parse_keys_splits_on_whitespace() {
	let keys = parse_keys("@ p  <down>\n<enter>").unwrap();
	assert_eq!(keys, vec![Key::char('@'), Key::char('p'), Key::new(KeyCode::Down), Key::new(KeyCode::Enter)]);
}
