use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::item::{ItemInfo, SuggestionItem};

fn scan(from: CharIdx, to: CharIdx, query: &str) -> TriggerMatch {
	TriggerMatch {
		from,
		to,
		query: query.to_string(),
	}
}

fn active(query: &str, selected_index: usize, submenu_open: bool, selected_child_index: usize) -> MenuState {
	MenuState {
		active: true,
		from: 0,
		to: query.chars().count() + 1,
		query: query.to_string(),
		selected_index,
		submenu_open,
		selected_child_index,
	}
}

fn sample_list() -> SuggestionList {
	SuggestionList::new(
		vec![
			SuggestionItem::leaf("a", "Alpha"),
			SuggestionItem::group(
				ItemInfo::new("b", "Bravo"),
				vec![ItemInfo::new("b1", "B-One"), ItemInfo::new("b2", "B-Two")],
			),
		],
		10,
	)
}

#[test]
fn first_scan_activates_with_zeroed_selection() {
	let next = reduce(&MenuState::inactive(), Some(&scan(6, 7, "")), None);
	assert_eq!(
		next,
		MenuState {
			active: true,
			from: 6,
			to: 7,
			query: String::new(),
			..MenuState::default()
		}
	);
}

#[test]
fn missing_scan_is_inactive() {
	let prev = active("foo", 3, true, 1);
	assert_eq!(reduce(&prev, None, None), MenuState::inactive());
	assert_eq!(reduce(&prev, None, Some(&MenuAction::select(2))), MenuState::inactive());
}

#[test]
fn close_wins_over_scan() {
	let prev = active("foo", 1, false, 0);
	assert_eq!(reduce(&prev, Some(&scan(0, 4, "foo")), Some(&MenuAction::Close)), MenuState::inactive());
}

#[test]
fn same_query_carries_selection() {
	let prev = active("foo", 2, true, 1);
	let next = reduce(&prev, Some(&scan(0, 4, "foo")), None);
	assert_eq!((next.selected_index, next.submenu_open, next.selected_child_index), (2, true, 1));
}

#[test]
fn same_query_applies_overrides_field_by_field() {
	let prev = active("foo", 2, true, 1);
	let next = reduce(&prev, Some(&scan(0, 4, "foo")), Some(&MenuAction::select_child(0)));
	assert_eq!((next.selected_index, next.submenu_open, next.selected_child_index), (2, true, 0));

	let next = reduce(&prev, Some(&scan(0, 4, "foo")), Some(&MenuAction::select(4)));
	assert_eq!((next.selected_index, next.submenu_open, next.selected_child_index), (4, false, 1));
}

#[test]
fn query_change_resets_even_open_submenu() {
	let prev = active("fo", 1, true, 1);
	let next = reduce(&prev, Some(&scan(0, 4, "foo")), Some(&MenuAction::open_submenu(3)));
	assert_eq!((next.selected_index, next.submenu_open, next.selected_child_index), (0, false, 0));
	assert_eq!(next.query, "foo");
}

#[test]
fn range_follows_scan() {
	let prev = active("foo", 0, false, 0);
	let next = reduce(&prev, Some(&scan(10, 14, "foo")), None);
	assert_eq!(next.range(), TextRange::new(10, 14));
}

#[test]
fn fit_to_clamps_stale_indices() {
	let state = active("x", 9, true, 9).fit_to(&sample_list());
	assert_eq!((state.selected_index, state.submenu_open, state.selected_child_index), (1, true, 1));
}

#[test]
fn fit_to_closes_submenu_on_leaf() {
	let state = active("x", 0, true, 3).fit_to(&sample_list());
	assert_eq!((state.selected_index, state.submenu_open, state.selected_child_index), (0, false, 0));
}

#[test]
fn fit_to_empty_list_zeroes_indices() {
	let state = active("x", 4, true, 2).fit_to(&SuggestionList::default());
	assert!(state.active);
	assert_eq!((state.selected_index, state.submenu_open, state.selected_child_index), (0, false, 0));
}

fn arb_state() -> impl Strategy<Value = MenuState> {
	(any::<bool>(), "[a-z]{0,4}", 0usize..8, any::<bool>(), 0usize..8, 0usize..50).prop_map(
		|(active, query, selected_index, submenu_open, selected_child_index, from)| {
			if !active {
				return MenuState::inactive();
			}
			MenuState {
				active,
				from,
				to: from + query.len() + 1,
				query,
				selected_index,
				submenu_open,
				selected_child_index,
			}
		},
	)
}

fn arb_action() -> impl Strategy<Value = Option<MenuAction>> {
	prop_oneof![
		Just(None),
		Just(Some(MenuAction::Close)),
		(0usize..8).prop_map(|i| Some(MenuAction::select(i))),
		(0usize..8).prop_map(|i| Some(MenuAction::open_submenu(i))),
		(0usize..8).prop_map(|i| Some(MenuAction::select_child(i))),
		Just(Some(MenuAction::close_submenu())),
	]
}

proptest! {
	#[test]
	fn no_scan_is_always_canonical_inactive(prev in arb_state(), action in arb_action()) {
		prop_assert_eq!(reduce(&prev, None, action.as_ref()), MenuState::inactive());
	}

	#[test]
	fn query_change_always_resets_selection(prev in arb_state(), action in arb_action(), query in "[A-Z]{1,4}") {
		// Uppercase queries never equal the lowercase previous query.
		let next = reduce(&prev, Some(&scan(0, query.len() + 1, &query)), action.as_ref());
		if action != Some(MenuAction::Close) {
			prop_assert!(next.active);
			prop_assert_eq!((next.selected_index, next.submenu_open, next.selected_child_index), (0, false, 0));
		}
	}

	#[test]
	fn reduce_is_deterministic(prev in arb_state(), action in arb_action(), query in "[a-z]{0,4}") {
		let m = scan(3, 4 + query.len(), &query);
		prop_assert_eq!(reduce(&prev, Some(&m), action.as_ref()), reduce(&prev, Some(&m), action.as_ref()));
	}

	#[test]
	fn rescanning_without_action_is_a_fixed_point(prev in arb_state(), action in arb_action(), query in "[a-z]{0,4}") {
		let m = scan(3, 4 + query.len(), &query);
		let once = reduce(&prev, Some(&m), action.as_ref());
		if once.active {
			prop_assert_eq!(reduce(&once, Some(&m), None), once);
		}
	}
}
